use crate::{
    errors::ApiResult,
    shapes::r#match::{MatchEntry, MatchFilter},
};
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait MatchApi {
    async fn list(&self, filter: MatchFilter) -> ApiResult<Vec<MatchEntry>>;
    async fn list_by_date(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<Vec<MatchEntry>>;
    /// `Ok(None)` when the backend does not know the id.
    async fn get(&self, id: u64) -> ApiResult<Option<MatchEntry>>;
    async fn create(&self, draft: &MatchEntry) -> ApiResult<MatchEntry>;
    /// Drafts are never sent: the result is `Ok(None)` without a request.
    async fn update(&self, entry: &MatchEntry) -> ApiResult<Option<MatchEntry>>;
    async fn delete(&self, id: u64) -> ApiResult<()>;
}
