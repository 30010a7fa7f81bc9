mod error;
mod s3_storage;
mod supabase_storage;

pub use error::StorageError;
pub use s3_storage::S3StorageService;
pub use supabase_storage::SupabaseStorageService;

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::services::StorageService,
    domain::config::storage::{Provider, StorageConfig},
};

pub fn create_storage_service(
    config: &StorageConfig,
) -> Result<Arc<dyn StorageService>, StorageError> {
    match config.provider {
        Provider::S3 => {
            let s3_secrets = config.s3_secrets.as_ref().ok_or_else(|| {
                StorageError::InvalidCredentials("S3 secrets not found".to_string())
            })?;

            let service = S3StorageService::new(s3_secrets.clone(), config.bucket_name.clone());
            Ok(Arc::new(service))
        }
        Provider::Supabase => {
            let supabase_secrets = config.supabase_secrets.as_ref().ok_or_else(|| {
                StorageError::InvalidCredentials("Supabase secrets not found".to_string())
            })?;

            let service =
                SupabaseStorageService::new(supabase_secrets.clone(), config.bucket_name.clone());
            Ok(Arc::new(service))
        }
    }
}

/// `{path}/{uuid}_{sanitized filename}`; the uuid keeps same-named uploads apart.
pub(crate) fn generate_file_key(path: &str, filename: &str) -> String {
    let safe_filename = filename
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>();

    format!(
        "{}/{}_{}",
        path.trim_matches('/'),
        Uuid::new_v4().simple(),
        safe_filename
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_key_keeps_path_and_sanitizes_name() {
        let key = generate_file_key("review/100/", "my photo (1).jpg");

        assert!(key.starts_with("review/100/"));
        assert!(key.ends_with("_my_photo__1_.jpg"));
        assert!(!key.contains(' '));
    }

    #[test]
    fn file_keys_are_unique_per_upload() {
        assert_ne!(
            generate_file_key("review/1", "a.jpg"),
            generate_file_key("review/1", "a.jpg")
        );
    }

    #[test]
    fn factory_requires_provider_secrets() {
        let config = StorageConfig {
            provider: Provider::Supabase,
            bucket_url: "https://bucket.example.com".to_string(),
            bucket_name: "reviews".to_string(),
            s3_secrets: None,
            supabase_secrets: None,
        };

        let err = create_storage_service(&config).err().unwrap();
        assert!(matches!(err, StorageError::InvalidCredentials(_)));
    }
}
