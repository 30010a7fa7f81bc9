pub mod file_repository;
pub mod review_repository;
