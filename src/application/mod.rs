pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;
pub mod sessions;

pub use error::ApplicationResult;
