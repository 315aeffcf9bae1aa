use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShelfError {
    /// Upstream answered without a `data` field, e.g. an auth or quota error body.
    #[error("upstream returned no shelf data (status {status}): {body}")]
    Upstream { status: u16, body: String },
    #[error("upstream request failed: {0}")]
    Transport(String),
    #[error("failed to decode upstream response: {0}")]
    Decode(String),
    #[error("shelf task failed: {0}")]
    TaskFailed(String),
}

impl From<tokio::task::JoinError> for ShelfError {
    fn from(err: tokio::task::JoinError) -> Self {
        ShelfError::TaskFailed(err.to_string())
    }
}
