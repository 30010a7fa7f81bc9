pub mod controllers;
pub mod dto;
pub mod error;
pub mod extract;
pub mod repositories;
pub mod state;
