use crate::{
    constants::TEAMS_PATH,
    errors::ApiResult,
    logging::logger::log_info,
    providers::{
        http::backend::{decode, found, HttpBackend},
        team_api::TeamApi,
    },
    shapes::team::TeamEntry,
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct HttpTeamApi(Arc<HttpBackend>);

impl HttpTeamApi {
    pub fn new(backend: Arc<HttpBackend>) -> Self {
        Self(backend)
    }
}

#[async_trait]
impl TeamApi for HttpTeamApi {
    async fn list(&self) -> ApiResult<Vec<TeamEntry>> {
        let body = self.0.get(TEAMS_PATH, &[]).await?;
        decode(&body)
    }

    async fn get(&self, id: u64) -> ApiResult<Option<TeamEntry>> {
        match found(self.0.get(&format!("{}/{}", TEAMS_PATH, id), &[]).await)? {
            Some(body) => decode(&body).map(Some),
            None => Ok(None),
        }
    }

    async fn create(&self, draft: &TeamEntry) -> ApiResult<TeamEntry> {
        let body = self.0.post(TEAMS_PATH, &draft.payload()).await?;
        let team: TeamEntry = decode(&body)?;
        log_info(&format!("created team '{}' ({:?})", team.name, team.id));
        Ok(team)
    }

    async fn update(&self, team: &TeamEntry) -> ApiResult<Option<TeamEntry>> {
        let Some(id) = team.id else {
            return Ok(None);
        };
        let body = self
            .0
            .put(&format!("{}/{}", TEAMS_PATH, id), &team.payload())
            .await?;
        let updated: TeamEntry = decode(&body)?;
        log_info(&format!("updated team {}", id));
        Ok(Some(updated))
    }

    async fn delete(&self, id: u64) -> ApiResult<()> {
        self.0.delete(&format!("{}/{}", TEAMS_PATH, id)).await?;
        log_info(&format!("deleted team {}", id));
        Ok(())
    }
}
