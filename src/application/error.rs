use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Resource not found")]
    NotFound,

    #[error("Star rating must be between 0 and 5, got {0}")]
    InvalidStarRating(f64),

    #[error("Invalid review write request")]
    InvalidWriteRequest,

    /// Raised by repositories when the database rejects a write on a constraint.
    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// SQLSTATE classes 22 (data exception, e.g. 22001 value too long) and 23
/// (integrity constraint: not-null, foreign key, unique, check) mean the store
/// refused the row itself.
pub fn is_integrity_violation(sqlstate: &str) -> bool {
    sqlstate.starts_with("22") || sqlstate.starts_with("23")
}

impl From<sqlx::Error> for ApplicationError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => ApplicationError::NotFound,
            sqlx::Error::Database(ref db_error)
                if db_error
                    .code()
                    .is_some_and(|code| is_integrity_violation(&code)) =>
            {
                ApplicationError::IntegrityViolation(db_error.to_string())
            }
            other => ApplicationError::DatabaseError(other.to_string()),
        }
    }
}
