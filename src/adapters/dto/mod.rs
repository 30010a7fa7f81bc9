pub mod file_dto;
pub mod review_dto;
