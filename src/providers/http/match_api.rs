use crate::{
    constants::{MATCHES_BY_TEAM_SCOPED_PATH, MATCHES_PATH},
    errors::{ApiError, ApiResult},
    logging::logger::log_info,
    providers::{
        http::{
            backend::{found, HttpBackend},
            transform::{decode_match, decode_matches},
        },
        match_api::MatchApi,
    },
    shapes::r#match::{MatchEntry, MatchFilter},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct HttpMatchApi(Arc<HttpBackend>);

impl HttpMatchApi {
    pub fn new(backend: Arc<HttpBackend>) -> Self {
        Self(backend)
    }
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[async_trait]
impl MatchApi for HttpMatchApi {
    async fn list(&self, filter: MatchFilter) -> ApiResult<Vec<MatchEntry>> {
        let body = match filter {
            MatchFilter::All => self.0.get(MATCHES_PATH, &[]).await?,
            MatchFilter::Team(team_id) => {
                self.0
                    .get(
                        MATCHES_BY_TEAM_SCOPED_PATH,
                        &[("time_id", team_id.to_string())],
                    )
                    .await?
            }
            MatchFilter::Season(year) => {
                let (start, end) = filter
                    .period()
                    .ok_or_else(|| ApiError::Construction(format!("invalid season {}", year)))?;
                return self.list_by_date(start, end).await;
            }
        };
        decode_matches(&body)
    }

    async fn list_by_date(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<Vec<MatchEntry>> {
        let body = self
            .0
            .get(
                &format!("{}/by-date", MATCHES_PATH),
                &[("data_inicio", iso(start)), ("data_fim", iso(end))],
            )
            .await?;
        decode_matches(&body)
    }

    async fn get(&self, id: u64) -> ApiResult<Option<MatchEntry>> {
        match found(self.0.get(&format!("{}/{}", MATCHES_PATH, id), &[]).await)? {
            Some(body) => decode_match(&body).map(Some),
            None => Ok(None),
        }
    }

    async fn create(&self, draft: &MatchEntry) -> ApiResult<MatchEntry> {
        let body = self.0.post(MATCHES_PATH, &draft.payload()).await?;
        let created = decode_match(&body)?;
        log_info(&format!("created match {:?} on {}", created.id, created.date));
        Ok(created)
    }

    async fn update(&self, entry: &MatchEntry) -> ApiResult<Option<MatchEntry>> {
        let Some(id) = entry.id else {
            return Ok(None);
        };
        let body = self
            .0
            .put(&format!("{}/{}", MATCHES_PATH, id), &entry.payload())
            .await?;
        let updated = decode_match(&body)?;
        log_info(&format!("updated match {}", id));
        Ok(Some(updated))
    }

    async fn delete(&self, id: u64) -> ApiResult<()> {
        self.0.delete(&format!("{}/{}", MATCHES_PATH, id)).await?;
        log_info(&format!("deleted match {}", id));
        Ok(())
    }
}
