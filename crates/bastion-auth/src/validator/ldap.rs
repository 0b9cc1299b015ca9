//! LDAP backend

use super::{check_filter, validate_ldap_url};
use crate::{FilterKind, Placeholder, ValidationError};
use bastion_core::types::{
    LdapAuthenticationBackendConfiguration, LdapImplementation, DEFAULT_LDAP_MINIMUM_TLS_VERSION,
};
use bastion_core::utils::TlsVersion;
use bastion_core::StructValidator;
use tracing::debug;

const USERS_FILTER_PLACEHOLDERS: &[Placeholder] =
    &[Placeholder::UsernameAttribute, Placeholder::Input];

pub fn validate_ldap_backend(
    config: &mut LdapAuthenticationBackendConfiguration,
    validator: &mut StructValidator,
) {
    if config.implementation.is_empty() {
        config.implementation = LdapImplementation::default().as_str().to_string();
    }

    if config.minimum_tls_version.is_empty() {
        config.minimum_tls_version = DEFAULT_LDAP_MINIMUM_TLS_VERSION.to_string();
    } else if let Err(source) = config.minimum_tls_version.parse::<TlsVersion>() {
        validator.push(ValidationError::InvalidMinimumTlsVersion {
            value: config.minimum_tls_version.clone(),
            source,
        });
    }

    match LdapImplementation::from_name(&config.implementation) {
        Some(implementation) => {
            debug!("Applying {} LDAP defaults", implementation);
            config.apply_defaults(implementation.defaults());
        }
        None => validator.push(ValidationError::UnknownLdapImplementation(
            config.implementation.clone(),
        )),
    }

    if config.url.is_empty() {
        validator.push(ValidationError::MissingLdapUrl);
    } else {
        config.url = validate_ldap_url(&config.url, validator);
    }

    if config.user.is_empty() {
        validator.push(ValidationError::MissingLdapUser);
    }

    if config.password.is_empty() {
        validator.push(ValidationError::MissingLdapPassword);
    }

    if config.base_dn.is_empty() {
        validator.push(ValidationError::MissingLdapBaseDn);
    }

    if config.users_filter.is_empty() {
        validator.push(ValidationError::MissingUsersFilter);
    } else {
        check_filter(
            FilterKind::Users,
            &config.users_filter,
            USERS_FILTER_PLACEHOLDERS,
            validator,
        );
    }

    if config.groups_filter.is_empty() {
        validator.push(ValidationError::MissingGroupsFilter);
    } else {
        check_filter(FilterKind::Groups, &config.groups_filter, &[], validator);
    }
}
