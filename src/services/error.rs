use reqwest::StatusCode;
use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Storage rejected credentials: {0}")]
    Unauthorized(String),

    #[error("Storage unreachable: {0}")]
    NetworkError(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Storage provider error: {0}")]
    ProviderError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl StorageError {
    /// Classifies a non-success response from an HTTP storage API.
    pub fn from_status(status: StatusCode, detail: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => StorageError::NotFound(detail),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StorageError::Unauthorized(detail),
            _ => StorageError::ProviderError(format!("{} ({})", detail, status)),
        }
    }
}

impl From<StorageError> for ApplicationError {
    fn from(error: StorageError) -> Self {
        ApplicationError::InternalError(error.to_string())
    }
}

/// Transport failures only; status codes are handled by `from_status`.
impl From<reqwest::Error> for StorageError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() || error.is_connect() {
            StorageError::NetworkError(error.to_string())
        } else {
            StorageError::InternalError(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_response_statuses() {
        assert!(matches!(
            StorageError::from_status(StatusCode::NOT_FOUND, "review/1/a.jpg".to_string()),
            StorageError::NotFound(ref key) if key == "review/1/a.jpg"
        ));
        assert!(matches!(
            StorageError::from_status(StatusCode::FORBIDDEN, "denied".to_string()),
            StorageError::Unauthorized(_)
        ));
        assert!(matches!(
            StorageError::from_status(StatusCode::BAD_GATEWAY, "upstream".to_string()),
            StorageError::ProviderError(ref msg) if msg.contains("502")
        ));
    }

    #[test]
    fn storage_errors_surface_as_internal_errors() {
        let err: ApplicationError = StorageError::NetworkError("reset".to_string()).into();
        assert!(matches!(err, ApplicationError::InternalError(ref m) if m.contains("reset")));

        let err: ApplicationError = StorageError::NotFound("review/1/a.jpg".to_string()).into();
        assert!(matches!(err, ApplicationError::InternalError(ref m) if m.contains("review/1/a.jpg")));
    }
}
