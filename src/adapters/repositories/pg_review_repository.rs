use async_trait::async_trait;
use sqlx::{query, query_as, query_scalar, Postgres, Transaction};

use crate::{
    application::{
        dto::{file_dto::FileDTO, review_dto::ReviewDTO},
        error::ApplicationError,
        repositories::review_repository::{ReviewRepository, ReviewTransaction},
    },
    domain::models::{
        file::{File, FileReferenceType},
        page::{Page, PageRequest, ReviewSort},
        review::Review,
    },
};

pub struct PgReviewRepository {
    pool: sqlx::PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

/// Rolled back by sqlx when dropped before `commit`.
pub struct PgReviewTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl ReviewTransaction for PgReviewTransaction {
    async fn create_review(&mut self, review: ReviewDTO) -> Result<Review, ApplicationError> {
        let query = r#"
            INSERT INTO review (product_no, star_rating, content, author)
            VALUES ($1, $2, $3, $4)
            RETURNING *
        "#;

        let created: Review = query_as::<_, Review>(query)
            .bind(review.product_no)
            .bind(review.star_rating)
            .bind(&review.content)
            .bind(&review.author)
            .fetch_one(&mut *self.tx)
            .await?;

        Ok(created)
    }

    async fn create_file(&mut self, file: FileDTO) -> Result<File, ApplicationError> {
        let query = r#"
            INSERT INTO file (file_name, file_key, file_url, reference_type, reference_no)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
        "#;

        let created: File = query_as::<_, File>(query)
            .bind(&file.file_name)
            .bind(&file.file_key)
            .bind(&file.file_url)
            .bind(&file.reference_type)
            .bind(file.reference_no)
            .fetch_one(&mut *self.tx)
            .await?;

        Ok(created)
    }

    async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
        let PgReviewTransaction { tx } = *self;
        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn begin(&self) -> Result<Box<dyn ReviewTransaction>, ApplicationError> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgReviewTransaction { tx }))
    }

    async fn get_review(&self, review_no: i64) -> Result<Option<Review>, ApplicationError> {
        let query = "SELECT * FROM review WHERE review_no = $1";

        let fetched = query_as::<_, Review>(query)
            .bind(review_no)
            .fetch_optional(&self.pool)
            .await?;

        Ok(fetched)
    }

    async fn get_reviews_by_product(
        &self,
        product_no: i64,
        sort: ReviewSort,
        page: PageRequest,
    ) -> Result<Page<Review>, ApplicationError> {
        // ORDER BY comes from a closed enum, never from request text.
        let select = format!(
            "SELECT * FROM review WHERE product_no = $1 ORDER BY {} LIMIT $2 OFFSET $3",
            sort.order_by_clause()
        );

        let rows: Vec<Review> = query_as::<_, Review>(&select)
            .bind(product_no)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await?;

        let total = query_scalar::<_, i64>("SELECT COUNT(*) FROM review WHERE product_no = $1")
            .bind(product_no)
            .fetch_one(&self.pool)
            .await?;

        Ok(Page::new(rows, page, total.max(0) as u64))
    }

    async fn update_review(
        &self,
        review_no: i64,
        review: ReviewDTO,
    ) -> Result<Option<Review>, ApplicationError> {
        let query = r#"
            UPDATE review
            SET product_no = $1,
                star_rating = $2,
                content = $3,
                author = $4,
                updated_at = NOW()
            WHERE review_no = $5
            RETURNING *
        "#;

        let updated = query_as::<_, Review>(query)
            .bind(review.product_no)
            .bind(review.star_rating)
            .bind(&review.content)
            .bind(&review.author)
            .bind(review_no)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete_review(&self, review_no: i64) -> Result<Vec<File>, ApplicationError> {
        let mut tx = self.pool.begin().await?;

        let deleted_files: Vec<File> = query_as::<_, File>(
            "DELETE FROM file WHERE reference_type = $1 AND reference_no = $2 RETURNING *",
        )
        .bind(FileReferenceType::Review.code())
        .bind(review_no)
        .fetch_all(&mut *tx)
        .await?;

        query("DELETE FROM review WHERE review_no = $1")
            .bind(review_no)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(deleted_files)
    }
}
