use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};

use crate::{
    adapters::dto::file_dto::FileResponse,
    domain::models::{
        page::{PageRequest, ReviewSort, DEFAULT_PAGE_SIZE},
        review::{Review, ReviewWithFiles},
    },
};

impl FromRow<'_, PgRow> for Review {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Review {
            review_no: row.try_get("review_no")?,
            product_no: row.try_get("product_no")?,
            star_rating: row.try_get("star_rating")?,
            content: row.try_get("content")?,
            author: row.try_get("author")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ListReviewsQuery {
    #[serde(rename = "sortBy")]
    pub sort_by: Option<ReviewSort>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl ListReviewsQuery {
    pub fn sort(&self) -> ReviewSort {
        self.sort_by.unwrap_or_default()
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    #[serde(rename = "reviewNo")]
    pub review_no: i64,
    #[serde(rename = "productNo")]
    pub product_no: i64,
    #[serde(rename = "starRating")]
    pub star_rating: f64,
    pub content: String,
    pub author: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub files: Vec<FileResponse>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            review_no: review.review_no,
            product_no: review.product_no,
            star_rating: review.star_rating,
            content: review.content,
            author: review.author,
            created_at: review.created_at,
            updated_at: review.updated_at,
            files: Vec::new(),
        }
    }
}

impl From<ReviewWithFiles> for ReviewResponse {
    fn from(value: ReviewWithFiles) -> Self {
        let mut response = ReviewResponse::from(value.review);
        response.files = value.files.into_iter().map(FileResponse::from).collect();
        response
    }
}
