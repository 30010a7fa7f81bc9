use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner kind of a stored file. The file table is shared between entity kinds,
/// so every row carries one of these tags next to the owner id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileReferenceType {
    Review,
}

impl FileReferenceType {
    /// Value stored in `file.reference_type`.
    pub fn code(&self) -> &'static str {
        match self {
            FileReferenceType::Review => "review",
        }
    }

    /// Leading path segment of uploaded object keys.
    pub fn domain(&self) -> &'static str {
        match self {
            FileReferenceType::Review => "review",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileData {
    pub content: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

impl FileData {
    pub fn new(content: Vec<u8>, filename: String, mime_type: String) -> Self {
        Self {
            content,
            filename,
            mime_type,
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct File {
    pub file_no: i64,
    pub file_name: String,
    pub file_key: String,
    pub file_url: String,
    pub reference_type: String,
    pub reference_no: i64,
    pub created_at: DateTime<Utc>,
}
