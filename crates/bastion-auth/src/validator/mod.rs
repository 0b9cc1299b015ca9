//! Validators for the `authentication_backend` section
//!
//! A single top-down pass: the backend selector dispatches to the file or
//! LDAP validator, which in turn use the password, URL and filter checks.
//! Every validator fills defaults in place and keeps going after a failure
//! so one run reports as many independent problems as possible.

mod backend;
mod file;
mod filter;
mod ldap;
mod ldap_url;
mod password;

pub use backend::validate_authentication_backend;
pub use file::validate_file_backend;
pub use filter::check_filter;
pub use ldap::validate_ldap_backend;
pub use ldap_url::validate_ldap_url;
pub use password::validate_password_configuration;

use bastion_core::{BastionConfig, StructValidator};

/// Where operators find the LDAP filter documentation
pub const LDAP_DOCS_URL: &str = "https://docs.authelia.com/configuration/authentication/ldap.html";

/// Validate a loaded configuration, returning the errors found
pub fn validate_config(config: &mut BastionConfig) -> StructValidator {
    let mut validator = StructValidator::new();
    validate_authentication_backend(&mut config.authentication_backend, &mut validator);
    validator
}
