pub mod message;
pub mod wire;
pub mod event;
pub mod config;
pub mod error;


pub use error::{ChatError, ValidationError};
pub type Result<T> = std::result::Result<T, ChatError>;
