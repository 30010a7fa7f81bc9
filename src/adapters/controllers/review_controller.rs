use std::sync::Arc;

use axum::{
    extract::{
        multipart::{Field, MultipartError},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::{
    adapters::{
        dto::review_dto::{ListReviewsQuery, ReviewResponse},
        extract::{AppJson, AppPath, AppQuery},
    },
    application::{dto::review_dto::ReviewDTO, error::ApplicationError, services::ReviewService},
    domain::models::{file::FileData, page::Page},
};

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

pub struct ReviewController;

impl ReviewController {
    /// GET /api/v1/products/{product_no}/reviews?sortBy=&page=&size=
    pub async fn get_reviews_by_product(
        State(review_service): State<Arc<ReviewService>>,
        AppPath(product_no): AppPath<i64>,
        AppQuery(query): AppQuery<ListReviewsQuery>,
    ) -> Result<Json<Page<ReviewResponse>>, ApplicationError> {
        let page = review_service
            .get_reviews_by_product(product_no, query.sort(), query.page_request())
            .await?;

        Ok(Json(page.map(ReviewResponse::from)))
    }

    /// GET /api/v1/reviews/{review_no}
    pub async fn get_review(
        State(review_service): State<Arc<ReviewService>>,
        AppPath(review_no): AppPath<i64>,
    ) -> Result<Json<ReviewResponse>, ApplicationError> {
        let review = review_service.get_review(review_no).await?;
        Ok(Json(ReviewResponse::from(review)))
    }

    /// POST /api/v1/reviews
    /// Multipart body: a `review` part holding the JSON payload and zero or
    /// more `files` parts.
    pub async fn create_review(
        State(review_service): State<Arc<ReviewService>>,
        mut multipart: Multipart,
    ) -> Result<(StatusCode, Json<ReviewResponse>), ApplicationError> {
        let mut review: Option<ReviewDTO> = None;
        let mut files: Vec<FileData> = Vec::new();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "review" => {
                    let text = field.text().await.map_err(multipart_error)?;
                    review = Some(serde_json::from_str(&text).map_err(|e| {
                        warn!("Invalid review payload: {}", e);
                        ApplicationError::BadRequest("Invalid review payload".to_string())
                    })?);
                }
                "files" => {
                    if let Some(file) = read_file(field).await? {
                        files.push(file);
                    }
                }
                _ => {}
            }
        }

        let review = review.ok_or_else(|| {
            warn!("Missing required 'review' part in create request");
            ApplicationError::BadRequest("Missing required field".to_string())
        })?;

        info!(
            "Creating review for product_no {} with {} file(s)",
            review.product_no,
            files.len()
        );

        let created = review_service.create_review(review, files).await?;
        let created = review_service.get_review(created.review_no).await?;

        Ok((StatusCode::CREATED, Json(ReviewResponse::from(created))))
    }

    /// PUT /api/v1/reviews/{review_no}
    pub async fn update_review(
        State(review_service): State<Arc<ReviewService>>,
        AppPath(review_no): AppPath<i64>,
        AppJson(body): AppJson<ReviewDTO>,
    ) -> Result<Json<ReviewResponse>, ApplicationError> {
        review_service.update_review(review_no, body).await?;
        let updated = review_service.get_review(review_no).await?;
        Ok(Json(ReviewResponse::from(updated)))
    }

    /// DELETE /api/v1/reviews/{review_no}
    pub async fn delete_review(
        State(review_service): State<Arc<ReviewService>>,
        AppPath(review_no): AppPath<i64>,
    ) -> Result<StatusCode, ApplicationError> {
        review_service.delete_review(review_no).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}

/// Browsers submit an empty, unnamed part when no file was picked; that part is skipped.
async fn read_file(field: Field<'_>) -> Result<Option<FileData>, ApplicationError> {
    let filename = field.file_name().unwrap_or("").to_string();
    let mime_type = field
        .content_type()
        .unwrap_or(DEFAULT_MIME_TYPE)
        .to_string();
    let content = field.bytes().await.map_err(multipart_error)?.to_vec();

    if filename.is_empty() && content.is_empty() {
        return Ok(None);
    }
    if filename.is_empty() {
        return Err(ApplicationError::BadRequest(
            "File part without a filename".to_string(),
        ));
    }

    Ok(Some(FileData::new(content, filename, mime_type)))
}

fn multipart_error(error: MultipartError) -> ApplicationError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApplicationError::PayloadTooLarge;
    }
    warn!("Invalid multipart data: {}", error);
    ApplicationError::BadRequest("Invalid request format".to_string())
}
