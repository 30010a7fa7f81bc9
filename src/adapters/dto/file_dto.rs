use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{postgres::PgRow, FromRow, Row};

use crate::domain::models::file::File;

impl FromRow<'_, PgRow> for File {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(File {
            file_no: row.try_get("file_no")?,
            file_name: row.try_get("file_name")?,
            file_key: row.try_get("file_key")?,
            file_url: row.try_get("file_url")?,
            reference_type: row.try_get("reference_type")?,
            reference_no: row.try_get("reference_no")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct FileResponse {
    #[serde(rename = "fileNo")]
    pub file_no: i64,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<File> for FileResponse {
    fn from(file: File) -> Self {
        Self {
            file_no: file.file_no,
            file_name: file.file_name,
            file_url: file.file_url,
            created_at: file.created_at,
        }
    }
}
