//! Storage error types.

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage client configuration error.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// The storage service could not be reached.
    #[error("storage connection error: {0}")]
    Connection(String),

    /// The storage service answered with a non-success status.
    #[error("storage API error (status {status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, as reported by the service.
        message: String,
    },

    /// The storage service answered with a body the client could not decode.
    #[error("unexpected storage response: {0}")]
    InvalidResponse(String),
}

impl StorageError {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create an API error.
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Api {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Connection(err.to_string())
        }
    }
}
