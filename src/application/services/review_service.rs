use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    application::{
        dto::{file_dto::FileDTO, review_dto::ReviewDTO},
        error::ApplicationError,
        repositories::{
            file_repository::FileRepository,
            review_repository::{ReviewRepository, ReviewTransaction},
        },
        services::StorageService,
    },
    domain::models::{
        file::{FileData, FileReferenceType},
        page::{Page, PageRequest, ReviewSort},
        review::{is_valid_star_rating, Review, ReviewWithFiles},
    },
};

const REVIEW_REFERENCE: FileReferenceType = FileReferenceType::Review;

/// Review lifecycle: a review row plus the file rows and stored objects that
/// reference it.
pub struct ReviewService {
    review_repository: Arc<dyn ReviewRepository>,
    file_repository: Arc<dyn FileRepository>,
    storage_service: Arc<dyn StorageService>,
    bucket_url: String,
}

impl ReviewService {
    pub fn new(
        review_repository: Arc<dyn ReviewRepository>,
        file_repository: Arc<dyn FileRepository>,
        storage_service: Arc<dyn StorageService>,
        bucket_url: impl Into<String>,
    ) -> Self {
        Self {
            review_repository,
            file_repository,
            storage_service,
            bucket_url: bucket_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn get_reviews_by_product(
        &self,
        product_no: i64,
        sort: ReviewSort,
        page: PageRequest,
    ) -> Result<Page<ReviewWithFiles>, ApplicationError> {
        info!("Listing reviews for product_no {}", product_no);

        let reviews = self
            .review_repository
            .get_reviews_by_product(product_no, sort, page)
            .await?;

        let mut files_by_review = Vec::with_capacity(reviews.content.len());
        for review in &reviews.content {
            let files = self
                .file_repository
                .get_files_by_reference(REVIEW_REFERENCE, review.review_no)
                .await?;
            files_by_review.push(files);
        }

        let mut files_by_review = files_by_review.into_iter();
        Ok(reviews.map(|review| ReviewWithFiles {
            review,
            files: files_by_review.next().unwrap_or_default(),
        }))
    }

    pub async fn get_review(&self, review_no: i64) -> Result<ReviewWithFiles, ApplicationError> {
        let review = self
            .review_repository
            .get_review(review_no)
            .await?
            .ok_or(ApplicationError::NotFound)?;

        let files = self
            .file_repository
            .get_files_by_reference(REVIEW_REFERENCE, review_no)
            .await?;

        info!("Fetched review_no {}", review_no);
        Ok(ReviewWithFiles { review, files })
    }

    /// Inserts the review and one file row per upload inside a single store
    /// transaction. Nothing is visible to readers until every file is stored;
    /// on failure the transaction rolls back and uploaded objects are removed.
    pub async fn create_review(
        &self,
        review: ReviewDTO,
        files: Vec<FileData>,
    ) -> Result<Review, ApplicationError> {
        validate_star_rating(review.star_rating)?;

        let product_no = review.product_no;
        let mut tx = self.review_repository.begin().await?;
        let created = tx.create_review(review).await.map_err(into_write_error)?;

        let mut uploaded_keys = Vec::with_capacity(files.len());
        let attached = self
            .attach_files(tx.as_mut(), files, product_no, created.review_no, &mut uploaded_keys)
            .await;
        let result = match attached {
            Ok(()) => tx.commit().await,
            Err(e) => {
                drop(tx);
                Err(e)
            }
        };

        if let Err(e) = result {
            warn!(
                "Creating review for product_no {} failed, rolled back: {}",
                product_no, e
            );
            self.delete_objects(&uploaded_keys).await;
            return Err(into_write_error(e));
        }

        info!("Created review_no {}", created.review_no);
        Ok(created)
    }

    async fn attach_files(
        &self,
        tx: &mut dyn ReviewTransaction,
        files: Vec<FileData>,
        product_no: i64,
        review_no: i64,
        uploaded_keys: &mut Vec<String>,
    ) -> Result<(), ApplicationError> {
        let path = upload_path(REVIEW_REFERENCE, product_no);

        for file in files {
            let file_name = file.filename.clone();
            let file_key = self.storage_service.upload(&path, file).await?;
            uploaded_keys.push(file_key.clone());
            let file_url = join_url(&self.bucket_url, &file_key);

            tx.create_file(FileDTO::of(
                file_name,
                file_key,
                file_url,
                REVIEW_REFERENCE,
                review_no,
            ))
            .await?;
        }

        Ok(())
    }

    pub async fn update_review(
        &self,
        review_no: i64,
        review: ReviewDTO,
    ) -> Result<Review, ApplicationError> {
        validate_star_rating(review.star_rating)?;

        let updated = self
            .review_repository
            .update_review(review_no, review)
            .await
            .map_err(into_write_error)?
            .ok_or(ApplicationError::NotFound)?;

        info!("Updated review_no {}", review_no);
        Ok(updated)
    }

    /// Removes the review and its file rows atomically, then deletes the
    /// stored objects best-effort once the rows are gone.
    pub async fn delete_review(&self, review_no: i64) -> Result<(), ApplicationError> {
        let files = self.review_repository.delete_review(review_no).await?;

        let keys: Vec<String> = files.into_iter().map(|f| f.file_key).collect();
        self.delete_objects(&keys).await;

        info!("Deleted review_no {} with {} file(s)", review_no, keys.len());
        Ok(())
    }

    async fn delete_objects(&self, keys: &[String]) {
        for key in keys {
            if let Err(e) = self.storage_service.delete(key).await {
                warn!("Failed to delete stored object {}: {}", key, e);
            }
        }
    }
}

fn validate_star_rating(star_rating: f64) -> Result<(), ApplicationError> {
    if is_valid_star_rating(star_rating) {
        Ok(())
    } else {
        warn!("Rejected star rating {}", star_rating);
        Err(ApplicationError::InvalidStarRating(star_rating))
    }
}

fn into_write_error(error: ApplicationError) -> ApplicationError {
    match error {
        ApplicationError::IntegrityViolation(msg) => {
            warn!("Review write rejected by store: {}", msg);
            ApplicationError::InvalidWriteRequest
        }
        other => other,
    }
}

fn upload_path(reference_type: FileReferenceType, product_no: i64) -> String {
    format!("{}/{}", reference_type.domain(), product_no)
}

fn join_url(base: &str, key: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), key.trim_start_matches('/'))
}
