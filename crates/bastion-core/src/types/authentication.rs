//! `authentication_backend` section

use super::{LdapAuthenticationBackendConfiguration, PasswordConfiguration};
use crate::utils::{parse_duration, DurationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Refresh interval used when none is configured
pub const DEFAULT_REFRESH_INTERVAL: &str = "5m";

/// Never refresh user profiles from the backend
pub const REFRESH_INTERVAL_DISABLE: &str = "disable";

/// Refresh user profiles on every request
pub const REFRESH_INTERVAL_ALWAYS: &str = "always";

/// Where users and their credentials live.
///
/// On disk the section holds optional `file` and `ldap` objects; in memory
/// at most one backend exists. `backend` is `None` when the operator
/// configured neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawAuthenticationBackendConfiguration",
    into = "RawAuthenticationBackendConfiguration"
)]
pub struct AuthenticationBackendConfiguration {
    pub backend: Option<BackendConfiguration>,
    pub refresh_interval: String,
    pub disable_reset_password: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfiguration {
    File(FileAuthenticationBackendConfiguration),
    Ldap(LdapAuthenticationBackendConfiguration),
}

impl AuthenticationBackendConfiguration {
    pub fn file(file: FileAuthenticationBackendConfiguration) -> Self {
        Self {
            backend: Some(BackendConfiguration::File(file)),
            ..Default::default()
        }
    }

    pub fn ldap(ldap: LdapAuthenticationBackendConfiguration) -> Self {
        Self {
            backend: Some(BackendConfiguration::Ldap(ldap)),
            ..Default::default()
        }
    }

    pub fn as_file(&self) -> Option<&FileAuthenticationBackendConfiguration> {
        match &self.backend {
            Some(BackendConfiguration::File(file)) => Some(file),
            _ => None,
        }
    }

    pub fn as_file_mut(&mut self) -> Option<&mut FileAuthenticationBackendConfiguration> {
        match &mut self.backend {
            Some(BackendConfiguration::File(file)) => Some(file),
            _ => None,
        }
    }

    pub fn as_ldap(&self) -> Option<&LdapAuthenticationBackendConfiguration> {
        match &self.backend {
            Some(BackendConfiguration::Ldap(ldap)) => Some(ldap),
            _ => None,
        }
    }

    pub fn as_ldap_mut(&mut self) -> Option<&mut LdapAuthenticationBackendConfiguration> {
        match &mut self.backend {
            Some(BackendConfiguration::Ldap(ldap)) => Some(ldap),
            _ => None,
        }
    }

    /// Typed view of `refresh_interval`; blank reads as the default
    pub fn refresh_policy(&self) -> Result<RefreshPolicy, DurationError> {
        if self.refresh_interval.is_empty() {
            return RefreshPolicy::parse(DEFAULT_REFRESH_INTERVAL);
        }
        RefreshPolicy::parse(&self.refresh_interval)
    }
}

/// How often user details are re-read from the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    Disable,
    Always,
    Every(Duration),
}

impl RefreshPolicy {
    pub fn parse(value: &str) -> Result<Self, DurationError> {
        match value {
            REFRESH_INTERVAL_DISABLE => Ok(RefreshPolicy::Disable),
            REFRESH_INTERVAL_ALWAYS => Ok(RefreshPolicy::Always),
            _ => parse_duration(value).map(RefreshPolicy::Every),
        }
    }
}

impl fmt::Display for RefreshPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshPolicy::Disable => f.write_str(REFRESH_INTERVAL_DISABLE),
            RefreshPolicy::Always => f.write_str(REFRESH_INTERVAL_ALWAYS),
            RefreshPolicy::Every(interval) => write!(f, "every {}s", interval.as_secs()),
        }
    }
}

/// Users database stored in a local file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthenticationBackendConfiguration {
    pub path: String,
    pub password: PasswordConfiguration,
}

/// Wire shape of the section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawAuthenticationBackendConfiguration {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    disable_reset_password: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    refresh_interval: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<FileAuthenticationBackendConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ldap: Option<LdapAuthenticationBackendConfiguration>,
}

impl TryFrom<RawAuthenticationBackendConfiguration> for AuthenticationBackendConfiguration {
    type Error = crate::Error;

    fn try_from(raw: RawAuthenticationBackendConfiguration) -> crate::Result<Self> {
        let backend = match (raw.file, raw.ldap) {
            (Some(_), Some(_)) => return Err(crate::Error::ConflictingBackends),
            (Some(file), None) => Some(BackendConfiguration::File(file)),
            (None, Some(ldap)) => Some(BackendConfiguration::Ldap(ldap)),
            (None, None) => None,
        };

        Ok(Self {
            backend,
            refresh_interval: raw.refresh_interval,
            disable_reset_password: raw.disable_reset_password,
        })
    }
}

impl From<AuthenticationBackendConfiguration> for RawAuthenticationBackendConfiguration {
    fn from(config: AuthenticationBackendConfiguration) -> Self {
        let (file, ldap) = match config.backend {
            Some(BackendConfiguration::File(file)) => (Some(file), None),
            Some(BackendConfiguration::Ldap(ldap)) => (None, Some(ldap)),
            None => (None, None),
        };

        Self {
            disable_reset_password: config.disable_reset_password,
            refresh_interval: config.refresh_interval,
            file,
            ldap,
        }
    }
}
