use crate::{errors::ApiResult, shapes::team::TeamEntry};
use async_trait::async_trait;

#[async_trait]
pub trait TeamApi {
    async fn list(&self) -> ApiResult<Vec<TeamEntry>>;
    /// `Ok(None)` when the backend does not know the id.
    async fn get(&self, id: u64) -> ApiResult<Option<TeamEntry>>;
    async fn create(&self, draft: &TeamEntry) -> ApiResult<TeamEntry>;
    /// Drafts are never sent: the result is `Ok(None)` without a request.
    async fn update(&self, team: &TeamEntry) -> ApiResult<Option<TeamEntry>>;
    async fn delete(&self, id: u64) -> ApiResult<()>;
}
