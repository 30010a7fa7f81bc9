use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::application::error::ApplicationError;

impl ApplicationError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApplicationError::NotFound => {
                warn!("Review not found");
                (StatusCode::NOT_FOUND, "Review not found".to_string())
            }
            ApplicationError::InvalidStarRating(rating) => {
                warn!("Invalid star rating: {}", rating);
                (
                    StatusCode::BAD_REQUEST,
                    "Star rating must be between 0 and 5".to_string(),
                )
            }
            ApplicationError::InvalidWriteRequest => {
                warn!("Invalid review write request");
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid review write request".to_string(),
                )
            }
            ApplicationError::IntegrityViolation(msg) => {
                warn!("Integrity violation: {}", msg);
                (StatusCode::CONFLICT, "Conflicting write".to_string())
            }
            ApplicationError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "Bad request".to_string())
            }
            ApplicationError::PayloadTooLarge => {
                warn!("Upload too large");
                (StatusCode::PAYLOAD_TOO_LARGE, "File too large".to_string())
            }
            ApplicationError::InternalError(msg) => {
                error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApplicationError::DatabaseError(msg) => {
                error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: ApplicationError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn maps_domain_errors_to_client_statuses() {
        assert_eq!(status_of(ApplicationError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(ApplicationError::InvalidStarRating(5.1)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApplicationError::InvalidWriteRequest),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApplicationError::PayloadTooLarge),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn hides_internal_details() {
        let (status, message) =
            ApplicationError::DatabaseError("connection refused".to_string()).status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Internal server error");
    }
}
