//! Backend selection and `refresh_interval`

use super::{validate_file_backend, validate_ldap_backend};
use crate::ValidationError;
use bastion_core::types::{
    AuthenticationBackendConfiguration, BackendConfiguration, RefreshPolicy,
    DEFAULT_REFRESH_INTERVAL,
};
use bastion_core::StructValidator;
use tracing::debug;

/// Validate the `authentication_backend` section, filling defaults in place.
///
/// Errors are appended to `validator`; the section is acceptable only if
/// nothing was appended.
pub fn validate_authentication_backend(
    config: &mut AuthenticationBackendConfiguration,
    validator: &mut StructValidator,
) {
    let Some(backend) = config.backend.as_mut() else {
        validator.push(ValidationError::MissingBackend);
        return;
    };

    match backend {
        BackendConfiguration::File(file) => validate_file_backend(file, validator),
        BackendConfiguration::Ldap(ldap) => validate_ldap_backend(ldap, validator),
    }

    validate_refresh_interval(&mut config.refresh_interval, validator);
}

fn validate_refresh_interval(interval: &mut String, validator: &mut StructValidator) {
    if interval.is_empty() {
        debug!("Defaulting refresh_interval to {}", DEFAULT_REFRESH_INTERVAL);
        *interval = DEFAULT_REFRESH_INTERVAL.to_string();
        return;
    }

    if let Err(source) = RefreshPolicy::parse(interval) {
        validator.push(ValidationError::InvalidRefreshInterval {
            value: interval.clone(),
            source,
        });
    }
}
