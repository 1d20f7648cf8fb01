use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status; `message` is the server's `error` field when present.
    #[error("Server responded {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Session data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
