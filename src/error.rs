use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single slug refresh. Logged by the service, never handed to
/// consumers as-is.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(StatusCode),
    #[error("could not decode provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error kinds visible to consumers of the statistics service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FetchFailed,
}

impl From<&StatsError> for ErrorKind {
    fn from(_: &StatsError) -> Self {
        ErrorKind::FetchFailed
    }
}
