use async_trait::async_trait;

use crate::{application::error::ApplicationError, domain::models::file::FileData};

#[async_trait]
pub trait StorageService: Send + Sync {
    /// Stores the object under `path` and returns its key.
    async fn upload(&self, path: &str, file_data: FileData) -> Result<String, ApplicationError>;
    async fn delete(&self, file_key: &str) -> Result<(), ApplicationError>;
}
