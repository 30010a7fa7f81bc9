use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    http::StatusCode,
};
use tracing::warn;

use crate::application::error::ApplicationError;

/// `Json` whose rejection renders as the usual `{"error": ...}` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApplicationError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApplicationError))]
pub struct AppPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApplicationError))]
pub struct AppQuery<T>(pub T);

impl From<JsonRejection> for ApplicationError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApplicationError::PayloadTooLarge;
        }
        warn!("Invalid JSON body: {}", rejection.body_text());
        ApplicationError::BadRequest("Invalid JSON body".to_string())
    }
}

impl From<PathRejection> for ApplicationError {
    fn from(rejection: PathRejection) -> Self {
        warn!("Invalid path parameter: {}", rejection.body_text());
        ApplicationError::BadRequest("Invalid path parameter".to_string())
    }
}

impl From<QueryRejection> for ApplicationError {
    fn from(rejection: QueryRejection) -> Self {
        warn!("Invalid query string: {}", rejection.body_text());
        ApplicationError::BadRequest("Invalid query string".to_string())
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
        response::IntoResponse,
    };

    use super::*;
    use crate::{
        adapters::dto::review_dto::ListReviewsQuery,
        application::dto::review_dto::ReviewDTO,
        domain::models::page::ReviewSort,
    };

    async fn query(uri: &str) -> Result<AppQuery<ListReviewsQuery>, ApplicationError> {
        let (mut parts, _) = Request::builder()
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts();
        AppQuery::<ListReviewsQuery>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn unknown_sort_key_is_a_bad_request() {
        let err = query("/api/v1/products/1/reviews?sortBy=best").await.err().unwrap();
        assert!(matches!(err, ApplicationError::BadRequest(_)));
    }

    #[tokio::test]
    async fn non_numeric_page_is_a_bad_request() {
        let err = query("/api/v1/products/1/reviews?page=two").await.err().unwrap();
        assert!(matches!(err, ApplicationError::BadRequest(_)));
    }

    #[tokio::test]
    async fn valid_query_passes_through() {
        let AppQuery(q) = query("/api/v1/products/1/reviews?sortBy=rating_low&size=5")
            .await
            .unwrap();
        assert_eq!(q.sort(), ReviewSort::RatingLow);
        assert_eq!(q.size, Some(5));
    }

    #[tokio::test]
    async fn missing_path_params_are_a_bad_request() {
        let (mut parts, _) = Request::builder()
            .uri("/api/v1/reviews/abc")
            .body(())
            .unwrap()
            .into_parts();
        let err = AppPath::<i64>::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ApplicationError::BadRequest(_)));
    }

    #[tokio::test]
    async fn malformed_json_renders_error_body() {
        let request = Request::builder()
            .method("PUT")
            .uri("/api/v1/reviews/1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"productNo\": 1, \"starRating\":"))
            .unwrap();
        let err = AppJson::<ReviewDTO>::from_request(request, &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ApplicationError::BadRequest(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Bad request");
    }

    #[tokio::test]
    async fn json_without_content_type_is_a_bad_request() {
        let request = Request::builder()
            .method("PUT")
            .uri("/api/v1/reviews/1")
            .body(Body::from("{}"))
            .unwrap();
        let err = AppJson::<ReviewDTO>::from_request(request, &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ApplicationError::BadRequest(_)));
    }
}
