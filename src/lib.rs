//! Hello World API Library
//!
//! Re-exports modules for integration testing and the server binary.

pub mod api;
pub mod config;
mod error;

pub use api::{build_app, App};
pub use config::{Config, ConfigError, LogFormat};
pub use error::{AppError, ErrorResponse};
