//! Configuration for Bastion

use crate::types::AuthenticationBackendConfiguration;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Overrides the LDAP bind password
pub const ENV_LDAP_PASSWORD: &str = "BASTION_AUTHENTICATION_BACKEND_LDAP_PASSWORD";

/// Overrides `authentication_backend.refresh_interval`
pub const ENV_REFRESH_INTERVAL: &str = "BASTION_AUTHENTICATION_BACKEND_REFRESH_INTERVAL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BastionConfig {
    #[serde(default)]
    pub authentication_backend: AuthenticationBackendConfiguration,
}

/// On-disk configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "yml" | "yaml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(crate::Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl BastionConfig {
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        debug!("Loading {:?} config from {}", format, path.display());
        Self::from_str_with_format(&content, format)
    }

    pub fn from_str_with_format(content: &str, format: ConfigFormat) -> crate::Result<Self> {
        let config = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    pub fn to_string_with_format(&self, format: ConfigFormat) -> crate::Result<String> {
        let rendered = match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Yaml => serde_yaml::to_string(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(rendered)
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`, keyed by environment variable name.
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(interval) = lookup(ENV_REFRESH_INTERVAL) {
            debug!("Using refresh_interval from {}", ENV_REFRESH_INTERVAL);
            self.authentication_backend.refresh_interval = interval;
        }

        if let Some(password) = lookup(ENV_LDAP_PASSWORD) {
            if let Some(ldap) = self.authentication_backend.as_ldap_mut() {
                debug!("Using LDAP password from {}", ENV_LDAP_PASSWORD);
                ldap.password = password;
            }
        }
    }

    /// Copy safe to print: secrets replaced with a marker
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if let Some(ldap) = config.authentication_backend.as_ldap_mut() {
            if !ldap.password.is_empty() {
                ldap.password = "<redacted>".to_string();
            }
        }
        config
    }
}
