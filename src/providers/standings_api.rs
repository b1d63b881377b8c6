use crate::{errors::ApiResult, shapes::standings::StandingsTable};
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait StandingsApi {
    async fn get(&self, year: i32, date: NaiveDate) -> ApiResult<StandingsTable>;
}
