//! LDAP server URL normalization

use crate::ValidationError;
use bastion_core::StructValidator;
use tracing::debug;
use url::Url;

const SCHEME_LDAP: &str = "ldap";
const SCHEME_LDAPS: &str = "ldaps";
const DEFAULT_LDAP_PORT: u16 = 389;
const DEFAULT_LDAPS_PORT: u16 = 636;

/// Normalize an LDAP URL, adding the scheme's default port when none is
/// given. Returns an empty string after pushing an error when the URL is
/// unusable. Normalizing an already normalized URL returns it unchanged.
pub fn validate_ldap_url(raw: &str, validator: &mut StructValidator) -> String {
    if !raw.contains(':') {
        validator.push(ValidationError::UnknownLdapScheme);
        return String::new();
    }

    let mut url = match Url::parse(raw) {
        Ok(url) => url,
        Err(e) => {
            debug!("Failed to parse LDAP URL: {}", e);
            validator.push(ValidationError::UnparsableLdapUrl);
            return String::new();
        }
    };

    let default_port = match url.scheme() {
        SCHEME_LDAP => DEFAULT_LDAP_PORT,
        SCHEME_LDAPS => DEFAULT_LDAPS_PORT,
        _ => {
            validator.push(ValidationError::UnknownLdapScheme);
            return String::new();
        }
    };

    if url.port().is_none() && url.set_port(Some(default_port)).is_err() {
        // No host to attach a port to, e.g. `ldap:server`
        validator.push(ValidationError::UnparsableLdapUrl);
        return String::new();
    }

    url.to_string()
}
