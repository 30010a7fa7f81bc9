use async_trait::async_trait;

use crate::{
    application::{
        dto::{file_dto::FileDTO, review_dto::ReviewDTO},
        error::ApplicationError,
    },
    domain::models::{
        file::File,
        page::{Page, PageRequest, ReviewSort},
        review::Review,
    },
};

/// Writes staged here become visible to readers only after `commit`.
/// Dropping the transaction without committing rolls every write back.
#[async_trait]
pub trait ReviewTransaction: Send {
    async fn create_review(&mut self, review: ReviewDTO) -> Result<Review, ApplicationError>;
    async fn create_file(&mut self, file: FileDTO) -> Result<File, ApplicationError>;
    async fn commit(self: Box<Self>) -> Result<(), ApplicationError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn ReviewTransaction>, ApplicationError>;
    async fn get_review(&self, review_no: i64) -> Result<Option<Review>, ApplicationError>;
    async fn get_reviews_by_product(
        &self,
        product_no: i64,
        sort: ReviewSort,
        page: PageRequest,
    ) -> Result<Page<Review>, ApplicationError>;
    /// Replaces every writable field. `Ok(None)` when no review has that id.
    async fn update_review(
        &self,
        review_no: i64,
        review: ReviewDTO,
    ) -> Result<Option<Review>, ApplicationError>;
    /// Removes the review and the file rows referencing it in one transaction
    /// and returns the removed file rows.
    async fn delete_review(&self, review_no: i64) -> Result<Vec<File>, ApplicationError>;
}
