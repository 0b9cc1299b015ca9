//! Bastion Core Library
//!
//! Configuration schema, defaults, and the error sink shared by the
//! Bastion configuration validators.

pub mod config;
pub mod error;
pub mod types;
pub mod utils;
pub mod validator;

pub use config::{BastionConfig, ConfigFormat};
pub use error::{Error, Result};
pub use validator::StructValidator;

/// Bastion version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
