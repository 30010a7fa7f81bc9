use async_trait::async_trait;

use crate::{
    application::error::ApplicationError,
    domain::models::file::{File, FileReferenceType},
};

#[async_trait]
pub trait FileRepository: Send + Sync {
    async fn get_files_by_reference(
        &self,
        reference_type: FileReferenceType,
        reference_no: i64,
    ) -> Result<Vec<File>, ApplicationError>;
}
