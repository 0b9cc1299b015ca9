//! Error types for Bastion

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("You cannot provide both `ldap` and `file` objects in `authentication_backend`")]
    ConflictingBackends,

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("Failed to render TOML config: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
}
