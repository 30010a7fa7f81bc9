use async_trait::async_trait;
use reqwest::{multipart, Client};
use tracing::info;

use crate::{
    application::{error::ApplicationError, services::StorageService},
    domain::{config::storage::SupabaseSecrets, models::file::FileData},
    services::{error::StorageError, generate_file_key},
};

pub struct SupabaseStorageService {
    client: Client,
    storage_url: String,
    api_key: String,
    bucket_name: String,
}

impl SupabaseStorageService {
    pub fn new(secrets: SupabaseSecrets, bucket_name: String) -> Self {
        Self {
            client: Client::new(),
            storage_url: secrets.storage_url.trim_end_matches('/').to_string(),
            api_key: secrets.api_key,
            bucket_name,
        }
    }

    fn object_url(&self, file_key: &str) -> String {
        format!(
            "{}/object/{}/{}",
            self.storage_url, self.bucket_name, file_key
        )
    }
}

#[async_trait]
impl StorageService for SupabaseStorageService {
    async fn upload(&self, path: &str, file_data: FileData) -> Result<String, ApplicationError> {
        let file_key = generate_file_key(path, &file_data.filename);
        let size = file_data.size();

        let file_part = multipart::Part::bytes(file_data.content)
            .file_name(file_data.filename)
            .mime_str(&file_data.mime_type)
            .map_err(|e| StorageError::InternalError(e.to_string()))?;

        let form = multipart::Form::new().part("file", file_part);

        let response = self
            .client
            .post(self.object_url(&file_key))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("apikey", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(StorageError::from)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(
                StorageError::from_status(status, format!("Upload failed: {}", error_text)).into(),
            );
        }

        info!("Uploaded {} ({} bytes) to Supabase", file_key, size);
        Ok(file_key)
    }

    async fn delete(&self, file_key: &str) -> Result<(), ApplicationError> {
        let response = self
            .client
            .delete(self.object_url(file_key))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(StorageError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::from_status(status, file_key.to_string()).into());
        }

        Ok(())
    }
}

