use crate::logging::logger::log_warning;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error("IO error: {0}")]
    IO(#[from] IOError),
}

/// Failure of a single backend call.
///
/// `Network`, `Timeout` and `Status` are transport outcomes; `Construction`
/// means the backend answered but the body could not be turned into a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status code ({0})")]
    Status(u16),
    #[error("malformed response: {0}")]
    Construction(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Construction(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_decode() {
            ApiError::Construction(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Construction(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum IOError {
    #[error("IO error: {0}")]
    Error(#[from] std::io::Error),
    #[error("{0}")]
    Msg(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<toml::de::Error> for IOError {
    fn from(e: toml::de::Error) -> Self {
        IOError::SerializationError(e.to_string())
    }
}

impl From<serde_json::Error> for IOError {
    fn from(e: serde_json::Error) -> Self {
        IOError::SerializationError(e.to_string())
    }
}

/// Collapses transport failures into a fallback value.
///
/// Network errors, timeouts and unexpected status codes are logged and replaced
/// by `fallback`; malformed bodies are returned to the caller untouched.
pub trait Settle<T> {
    fn settle_or(self, fallback: T, context: &str) -> Result<T, ApiError>;
}

impl<T> Settle<T> for ApiResult<T> {
    fn settle_or(self, fallback: T, context: &str) -> Result<T, ApiError> {
        match self {
            Ok(value) => Ok(value),
            Err(e) if e.is_transport() => {
                log_warning(&format!("{}: {}", context, e));
                Ok(fallback)
            }
            Err(e) => Err(e),
        }
    }
}
