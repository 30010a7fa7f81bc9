use serde::{Deserialize, Serialize};

use crate::domain::config::{required, ConfigError};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Provider {
    #[serde(rename = "s3")]
    S3,
    #[serde(rename = "supabase")]
    Supabase,
}

impl std::str::FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s3" => Ok(Provider::S3),
            "supabase" => Ok(Provider::Supabase),
            other => Err(ConfigError::Invalid {
                name: "STORAGE_PROVIDER",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct S3Secrets {
    pub endpoint: Option<String>,
    pub region: String,
    #[serde(rename = "accessKeyId")]
    pub access_key_id: String,
    #[serde(rename = "secretAccessKey")]
    pub secret_access_key: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SupabaseSecrets {
    #[serde(rename = "storageUrl")]
    pub storage_url: String,
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    pub provider: Provider,
    /// Public base URL that object keys are appended to.
    #[serde(rename = "bucketUrl")]
    pub bucket_url: String,
    #[serde(rename = "bucketName")]
    pub bucket_name: String,
    #[serde(rename = "s3Secrets")]
    pub s3_secrets: Option<S3Secrets>,
    #[serde(rename = "supabaseSecrets")]
    pub supabase_secrets: Option<SupabaseSecrets>,
}

impl StorageConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider: Provider = required(lookup, "STORAGE_PROVIDER")?.parse()?;
        let bucket_url = required(lookup, "STORAGE_BUCKET_URL")?
            .trim_end_matches('/')
            .to_string();
        let bucket_name = required(lookup, "STORAGE_BUCKET_NAME")?;

        let (s3_secrets, supabase_secrets) = match provider {
            Provider::S3 => (
                Some(S3Secrets {
                    endpoint: lookup("S3_ENDPOINT").filter(|v| !v.trim().is_empty()),
                    region: required(lookup, "S3_REGION")?,
                    access_key_id: required(lookup, "S3_ACCESS_KEY_ID")?,
                    secret_access_key: required(lookup, "S3_SECRET_ACCESS_KEY")?,
                }),
                None,
            ),
            Provider::Supabase => (
                None,
                Some(SupabaseSecrets {
                    storage_url: required(lookup, "SUPABASE_STORAGE_URL")?,
                    api_key: required(lookup, "SUPABASE_API_KEY")?,
                }),
            ),
        };

        Ok(Self {
            provider,
            bucket_url,
            bucket_name,
            s3_secrets,
            supabase_secrets,
        })
    }
}
