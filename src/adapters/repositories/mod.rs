mod pg_file_repository;
mod pg_review_repository;

pub use pg_file_repository::PgFileRepository;
pub use pg_review_repository::PgReviewRepository;
