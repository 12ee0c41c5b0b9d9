use thiserror::Error;

/// Failures talking to the disk API or preparing a request.
#[derive(Debug, Error)]
pub enum DiskError {
    #[error("YANDEX_DISK_TOKEN is not set (pass --token or add it to .env)")]
    MissingCredential,

    #[error("storage path must not be empty")]
    InvalidPath,

    #[error("network error: {cause}")]
    Network { cause: String },

    #[error("failed to list folders: {status}\n   Response: {body}")]
    ListingFailed { status: u16, body: String },

    #[error("unexpected listing response: {cause}")]
    InvalidResponse { cause: String },

    #[error("delete failed: {status}\n   Response: {body}")]
    DeletionFailed { status: u16, body: String },
}

impl From<reqwest::Error> for DiskError {
    fn from(err: reqwest::Error) -> Self {
        let cause = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else {
            err.to_string()
        };
        DiskError::Network { cause }
    }
}

impl From<serde_json::Error> for DiskError {
    fn from(err: serde_json::Error) -> Self {
        DiskError::InvalidResponse {
            cause: err.to_string(),
        }
    }
}
