use async_trait::async_trait;
use sqlx::query_as;

use crate::{
    application::{error::ApplicationError, repositories::file_repository::FileRepository},
    domain::models::file::{File, FileReferenceType},
};

pub struct PgFileRepository {
    pool: sqlx::PgPool,
}

impl PgFileRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn get_files_by_reference(
        &self,
        reference_type: FileReferenceType,
        reference_no: i64,
    ) -> Result<Vec<File>, ApplicationError> {
        let query = r#"
            SELECT * FROM file
            WHERE reference_type = $1 AND reference_no = $2
            ORDER BY file_no
        "#;

        let rows: Vec<File> = query_as::<_, File>(query)
            .bind(reference_type.code())
            .bind(reference_no)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
