use async_trait::async_trait;
use aws_sdk_s3::{
    config::{BehaviorVersion, Builder, Credentials, Region},
    error::DisplayErrorContext,
    primitives::ByteStream,
    Client,
};
use tracing::info;

use crate::{
    application::{error::ApplicationError, services::StorageService},
    domain::{config::storage::S3Secrets, models::file::FileData},
    services::{error::StorageError, generate_file_key},
};

const CREDENTIALS_PROVIDER_NAME: &str = "review-service";

/// AWS S3 or any S3-compatible endpoint (MinIO, Supabase S3 gateway, R2).
pub struct S3StorageService {
    client: Client,
    bucket_name: String,
}

impl S3StorageService {
    pub fn new(secrets: S3Secrets, bucket_name: String) -> Self {
        let credentials = Credentials::new(
            secrets.access_key_id,
            secrets.secret_access_key,
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let mut builder = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(secrets.region))
            .credentials_provider(credentials);

        // Custom endpoints are addressed path-style.
        if let Some(endpoint) = secrets.endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: Client::from_conf(builder.build()),
            bucket_name,
        }
    }
}

#[async_trait]
impl StorageService for S3StorageService {
    async fn upload(&self, path: &str, file_data: FileData) -> Result<String, ApplicationError> {
        let file_key = generate_file_key(path, &file_data.filename);
        let size = file_data.size();

        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(&file_key)
            .content_type(&file_data.mime_type)
            .body(ByteStream::from(file_data.content))
            .send()
            .await
            .map_err(|e| {
                StorageError::ProviderError(format!(
                    "Upload failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        info!("Uploaded {} ({} bytes) to S3", file_key, size);
        Ok(file_key)
    }

    async fn delete(&self, file_key: &str) -> Result<(), ApplicationError> {
        self.client
            .delete_object()
            .bucket(&self.bucket_name)
            .key(file_key)
            .send()
            .await
            .map_err(|e| {
                StorageError::ProviderError(format!(
                    "Delete failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        Ok(())
    }
}
