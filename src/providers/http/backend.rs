use crate::{
    errors::{ApiError, ApiResult, AppError},
    logging::logger::log_info,
};
use futures::TryFutureExt;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, RequestBuilder, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// Shared HTTP plumbing for the entity clients.
///
/// Every request carries `Accept: application/json` and the configured
/// timeout. A request succeeds only when the backend answers with the exact
/// status code the operation expects.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(ApiError::from)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> ApiResult<String> {
        let request = self.client.get(self.url(path)).query(query);
        self.send(request, StatusCode::OK).await
    }

    pub async fn post<B: Serialize + Sync + ?Sized>(&self, path: &str, body: &B) -> ApiResult<String> {
        let request = self.client.post(self.url(path)).json(body);
        self.send(request, StatusCode::CREATED).await
    }

    pub async fn put<B: Serialize + Sync + ?Sized>(&self, path: &str, body: &B) -> ApiResult<String> {
        let request = self.client.put(self.url(path)).json(body);
        self.send(request, StatusCode::OK).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let request = self.client.delete(self.url(path));
        self.send(request, StatusCode::NO_CONTENT).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder, expected: StatusCode) -> ApiResult<String> {
        let request = request.build()?;
        let target = format!("{} {}", request.method(), request.url());
        let response = self
            .client
            .execute(request)
            .map_err(ApiError::from)
            .await?;
        let status = response.status();
        if status != expected {
            // the failure itself is reported where it is settled
            let content = response.text().await.unwrap_or_default();
            log_info(&format!("{} answered {} with: {}", target, status, content));
            return Err(ApiError::Status(status.as_u16()));
        }
        response.text().map_err(ApiError::from).await
    }
}

pub fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(ApiError::from)
}

/// Turns a 404 into `Ok(None)`; every other failure is kept.
pub fn found<T>(result: ApiResult<T>) -> ApiResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ApiError::Status(404)) => Ok(None),
        Err(e) => Err(e),
    }
}
