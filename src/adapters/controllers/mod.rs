pub mod health_controller;
pub mod review_controller;
