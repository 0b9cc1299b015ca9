//! Authentication backend validation for Bastion
//!
//! Checks the `authentication_backend` section of a loaded configuration,
//! fills in secure defaults for blank fields and records every problem in a
//! [`StructValidator`](bastion_core::StructValidator).

pub mod error;
pub mod validator;

pub use error::{FilterKind, Placeholder, ValidationError};
pub use validator::{
    validate_authentication_backend, validate_config, validate_ldap_url, LDAP_DOCS_URL,
};
