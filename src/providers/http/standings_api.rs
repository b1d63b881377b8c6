use crate::{
    constants::STANDINGS_PATH,
    errors::ApiResult,
    providers::{
        http::backend::{decode, HttpBackend},
        standings_api::StandingsApi,
    },
    shapes::standings::StandingsTable,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct HttpStandingsApi(Arc<HttpBackend>);

impl HttpStandingsApi {
    pub fn new(backend: Arc<HttpBackend>) -> Self {
        Self(backend)
    }
}

#[async_trait]
impl StandingsApi for HttpStandingsApi {
    async fn get(&self, year: i32, date: NaiveDate) -> ApiResult<StandingsTable> {
        let body = self
            .0
            .get(
                STANDINGS_PATH,
                &[
                    ("ano", year.to_string()),
                    ("data", date.format("%Y-%m-%d").to_string()),
                ],
            )
            .await?;
        decode(&body)
    }
}
