//! Validation errors for the `authentication_backend` section
//!
//! The rendered messages are matched by operators and tooling; keep them
//! byte-for-byte stable.

use crate::validator::LDAP_DOCS_URL;
use bastion_core::utils::{DurationError, TlsVersionError};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // Backend selection
    #[error("Please provide `ldap` or `file` object in `authentication_backend`")]
    MissingBackend,

    #[error("Auth Backend `refresh_interval` is configured to '{value}' but it must be either a duration notation or one of 'disable', or 'always'. Error from parser: {source}")]
    InvalidRefreshInterval {
        value: String,
        source: DurationError,
    },

    // File backend
    #[error("Please provide a `path` for the users database in `authentication_backend`")]
    MissingUsersDatabasePath,

    // Password hashing
    #[error("Unknown hashing algorithm supplied, valid values are argon2id and sha512, you configured '{0}'")]
    UnknownHashAlgorithm(String),

    #[error("Key length for argon2id must be 16, you configured {0}")]
    InvalidKeyLength(i32),

    #[error("The salt length must be 2 or more, you configured {0}")]
    InvalidSaltLength(i32),

    #[error("The number of iterations specified is invalid, must be 1 or more, you configured {0}")]
    InvalidIterations(i32),

    #[error("Parallelism for argon2id must be 1 or more, you configured {0}")]
    InvalidParallelism(i32),

    #[error("Memory for argon2id must be 16 or more (parallelism * 8), you configured memory as {memory} and parallelism as {parallelism}")]
    InsufficientMemory { memory: i32, parallelism: i32 },

    // LDAP backend
    #[error("authentication backend ldap implementation must be blank or one of the following values `custom`, `activedirectory`")]
    UnknownLdapImplementation(String),

    #[error("error occurred validating the LDAP minimum_tls_version key with value {value}: {source}")]
    InvalidMinimumTlsVersion {
        value: String,
        source: TlsVersionError,
    },

    #[error("Please provide a URL to the LDAP server")]
    MissingLdapUrl,

    #[error("Please provide a user name to connect to the LDAP server")]
    MissingLdapUser,

    #[error("Please provide a password to connect to the LDAP server")]
    MissingLdapPassword,

    #[error("Please provide a base DN to connect to the LDAP server")]
    MissingLdapBaseDn,

    #[error("Please provide a users filter with `users_filter` attribute")]
    MissingUsersFilter,

    #[error("Please provide a groups filter with `groups_filter` attribute")]
    MissingGroupsFilter,

    // LDAP URL
    #[error("Unknown scheme for ldap url, should be ldap:// or ldaps://")]
    UnknownLdapScheme,

    #[error("Unable to parse URL to ldap server. The scheme is probably missing: ldap:// or ldaps://")]
    UnparsableLdapUrl,

    // LDAP filters
    #[error("The {kind} filter should contain enclosing parenthesis. For instance {filter} should be ({filter})")]
    FilterNotEnclosed { kind: FilterKind, filter: String },

    #[error("Unable to detect {{username_attribute}} placeholder in users_filter, your configuration is broken. Please review configuration options listed at {}", LDAP_DOCS_URL)]
    MissingUsernameAttributePlaceholder,

    #[error("Unable to detect {{input}} placeholder in users_filter, your configuration might be broken. Please review configuration options listed at {}", LDAP_DOCS_URL)]
    MissingInputPlaceholder,
}

/// Which search filter a diagnostic refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Users,
    Groups,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::Users => f.write_str("users"),
            FilterKind::Groups => f.write_str("groups"),
        }
    }
}

/// Placeholder tokens substituted into search filters at lookup time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    UsernameAttribute,
    Input,
}

impl Placeholder {
    pub const fn token(&self) -> &'static str {
        match self {
            Placeholder::UsernameAttribute => "{username_attribute}",
            Placeholder::Input => "{input}",
        }
    }

    /// Error raised when the users filter lacks this placeholder
    pub fn missing_error(&self) -> ValidationError {
        match self {
            Placeholder::UsernameAttribute => ValidationError::MissingUsernameAttributePlaceholder,
            Placeholder::Input => ValidationError::MissingInputPlaceholder,
        }
    }
}
