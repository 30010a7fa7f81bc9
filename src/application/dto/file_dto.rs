use crate::domain::models::file::FileReferenceType;

/// A file row to insert; `file_no` and `created_at` come from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDTO {
    pub file_name: String,
    pub file_key: String,
    pub file_url: String,
    pub reference_type: String,
    pub reference_no: i64,
}

impl FileDTO {
    pub fn of(
        file_name: String,
        file_key: String,
        file_url: String,
        reference_type: FileReferenceType,
        reference_no: i64,
    ) -> Self {
        Self {
            file_name,
            file_key,
            file_url,
            reference_type: reference_type.code().to_string(),
            reference_no,
        }
    }
}
