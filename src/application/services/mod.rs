pub mod review_service;
mod storage_service;

pub use review_service::ReviewService;
pub use storage_service::StorageService;
