use crate::domain::config::{parsed_or, required, storage::StorageConfig, ConfigError};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub max_upload_size: usize,
    /// `None` means permissive CORS.
    pub cors_allowed_origins: Option<Vec<String>>,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|name: &str| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
        });

        Ok(Self {
            database_url: required(lookup, "DATABASE_URL")?,
            port: parsed_or(lookup, "PORT", DEFAULT_PORT)?,
            db_max_connections: parsed_or(lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            max_upload_size: parsed_or(lookup, "MAX_UPLOAD_SIZE", DEFAULT_MAX_UPLOAD_SIZE)?,
            cors_allowed_origins,
            storage: StorageConfig::from_lookup(lookup)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::config::storage::Provider;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    fn s3_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("DATABASE_URL", "postgres://localhost/reviews"),
            ("STORAGE_PROVIDER", "s3"),
            ("STORAGE_BUCKET_URL", "https://bucket.example.com/"),
            ("STORAGE_BUCKET_NAME", "reviews"),
            ("S3_REGION", "ap-northeast-2"),
            ("S3_ACCESS_KEY_ID", "key"),
            ("S3_SECRET_ACCESS_KEY", "secret"),
        ]
    }

    #[test]
    fn loads_s3_config_with_defaults() {
        let config = AppConfig::from_lookup(&lookup_from(&s3_vars())).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.max_upload_size, 10 * 1024 * 1024);
        assert!(config.cors_allowed_origins.is_none());
        assert_eq!(config.storage.provider, Provider::S3);
        assert_eq!(config.storage.bucket_url, "https://bucket.example.com");
        let s3 = config.storage.s3_secrets.unwrap();
        assert_eq!(s3.region, "ap-northeast-2");
        assert!(s3.endpoint.is_none());
        assert!(config.storage.supabase_secrets.is_none());
    }

    #[test]
    fn missing_database_url_is_reported() {
        let vars: Vec<_> = s3_vars()
            .into_iter()
            .filter(|(k, _)| *k != "DATABASE_URL")
            .collect();
        let err = AppConfig::from_lookup(&lookup_from(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn invalid_port_is_reported() {
        let mut vars = s3_vars();
        vars.push(("PORT", "eighty"));
        let err = AppConfig::from_lookup(&lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn supabase_provider_requires_its_secrets() {
        let vars = vec![
            ("DATABASE_URL", "postgres://localhost/reviews"),
            ("STORAGE_PROVIDER", "supabase"),
            ("STORAGE_BUCKET_URL", "https://x.supabase.co/storage/v1/object/public/reviews"),
            ("STORAGE_BUCKET_NAME", "reviews"),
            ("SUPABASE_STORAGE_URL", "https://x.supabase.co/storage/v1"),
        ];
        let err = AppConfig::from_lookup(&lookup_from(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("SUPABASE_API_KEY"));
    }

    #[test]
    fn parses_cors_origins() {
        let mut vars = s3_vars();
        vars.push(("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example,"));
        let config = AppConfig::from_lookup(&lookup_from(&vars)).unwrap();
        assert_eq!(
            config.cors_allowed_origins.unwrap(),
            vec!["https://a.example", "https://b.example"]
        );
    }
}
