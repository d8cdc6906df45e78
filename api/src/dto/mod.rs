pub mod auth_dto;
pub mod error_dto;

pub use auth_dto::*;
pub use error_dto::*;
