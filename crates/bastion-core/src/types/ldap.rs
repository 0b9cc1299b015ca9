//! LDAP/Active Directory backend configuration
//!
//! Supports:
//! - Generic LDAP servers (OpenLDAP, 389 Directory Server)
//! - Microsoft Active Directory
//!
//! Filters may reference `{input}`, `{username_attribute}`,
//! `{mail_attribute}` and `{dn}` placeholders, which are substituted at
//! lookup time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Implementation name for generic LDAP servers
pub const LDAP_IMPLEMENTATION_CUSTOM: &str = "custom";

/// Implementation name for Microsoft Active Directory
pub const LDAP_IMPLEMENTATION_ACTIVE_DIRECTORY: &str = "activedirectory";

/// Minimum TLS version used when none is configured
pub const DEFAULT_LDAP_MINIMUM_TLS_VERSION: &str = "TLS1.2";

// ============================================================================
// LDAP Configuration
// ============================================================================

/// LDAP backend configuration
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LdapAuthenticationBackendConfiguration {
    /// `custom` or `activedirectory`, blank means `custom`
    pub implementation: String,

    /// Server URL (ldap:// or ldaps://)
    pub url: String,

    /// Upgrade plain connections with STARTTLS
    pub start_tls: bool,

    /// Skip certificate verification (not recommended for production)
    pub skip_verify: bool,

    /// Lowest TLS version accepted, e.g. `TLS1.2`
    pub minimum_tls_version: String,

    /// Base DN for every search
    pub base_dn: String,

    /// Extra DN prepended to `base_dn` for user searches
    pub additional_users_dn: String,

    /// User search filter
    /// Example: "(&({username_attribute}={input})(objectClass=person))"
    pub users_filter: String,

    /// Extra DN prepended to `base_dn` for group searches
    pub additional_groups_dn: String,

    /// Group search filter
    /// Example: "(&(member={dn})(objectClass=groupOfNames))"
    pub groups_filter: String,

    pub group_name_attribute: String,
    pub username_attribute: String,
    pub mail_attribute: String,
    pub display_name_attribute: String,

    /// Bind DN of the service account
    pub user: String,

    /// Bind password of the service account
    pub password: String,
}

impl fmt::Debug for LdapAuthenticationBackendConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LdapAuthenticationBackendConfiguration")
            .field("implementation", &self.implementation)
            .field("url", &self.url)
            .field("start_tls", &self.start_tls)
            .field("skip_verify", &self.skip_verify)
            .field("minimum_tls_version", &self.minimum_tls_version)
            .field("base_dn", &self.base_dn)
            .field("additional_users_dn", &self.additional_users_dn)
            .field("users_filter", &self.users_filter)
            .field("additional_groups_dn", &self.additional_groups_dn)
            .field("groups_filter", &self.groups_filter)
            .field("group_name_attribute", &self.group_name_attribute)
            .field("username_attribute", &self.username_attribute)
            .field("mail_attribute", &self.mail_attribute)
            .field("display_name_attribute", &self.display_name_attribute)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LdapAuthenticationBackendConfiguration {
    /// Fill blank attribute and filter fields from `profile`.
    /// Fields the operator set are never touched.
    pub fn apply_defaults(&mut self, profile: &LdapProfile) {
        fill_blank(&mut self.users_filter, profile.users_filter);
        fill_blank(&mut self.username_attribute, profile.username_attribute);
        fill_blank(&mut self.mail_attribute, profile.mail_attribute);
        fill_blank(&mut self.display_name_attribute, profile.display_name_attribute);
        fill_blank(&mut self.groups_filter, profile.groups_filter);
        fill_blank(&mut self.group_name_attribute, profile.group_name_attribute);
    }
}

fn fill_blank(field: &mut String, default: &str) {
    if field.is_empty() && !default.is_empty() {
        *field = default.to_string();
    }
}

// ============================================================================
// Implementations
// ============================================================================

/// Directory server flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LdapImplementation {
    /// Generic LDAP server
    #[default]
    Custom,
    /// Microsoft Active Directory
    ActiveDirectory,
}

impl LdapImplementation {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            LDAP_IMPLEMENTATION_CUSTOM => Some(LdapImplementation::Custom),
            LDAP_IMPLEMENTATION_ACTIVE_DIRECTORY => Some(LdapImplementation::ActiveDirectory),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            LdapImplementation::Custom => LDAP_IMPLEMENTATION_CUSTOM,
            LdapImplementation::ActiveDirectory => LDAP_IMPLEMENTATION_ACTIVE_DIRECTORY,
        }
    }

    /// Attribute and filter defaults for this implementation
    pub const fn defaults(&self) -> &'static LdapProfile {
        match self {
            LdapImplementation::Custom => &DEFAULT_LDAP_IMPLEMENTATION_CUSTOM_CONFIGURATION,
            LdapImplementation::ActiveDirectory => {
                &DEFAULT_LDAP_IMPLEMENTATION_ACTIVE_DIRECTORY_CONFIGURATION
            }
        }
    }
}

impl fmt::Display for LdapImplementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable attribute and filter defaults. Blank entries have no default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LdapProfile {
    pub users_filter: &'static str,
    pub username_attribute: &'static str,
    pub mail_attribute: &'static str,
    pub display_name_attribute: &'static str,
    pub groups_filter: &'static str,
    pub group_name_attribute: &'static str,
}

/// Generic servers get attribute names only; filters stay mandatory
pub const DEFAULT_LDAP_IMPLEMENTATION_CUSTOM_CONFIGURATION: LdapProfile = LdapProfile {
    users_filter: "",
    username_attribute: "",
    mail_attribute: "mail",
    display_name_attribute: "displayname",
    groups_filter: "",
    group_name_attribute: "cn",
};

pub const DEFAULT_LDAP_IMPLEMENTATION_ACTIVE_DIRECTORY_CONFIGURATION: LdapProfile = LdapProfile {
    users_filter: "(&(|({username_attribute}={input})({mail_attribute}={input}))(sAMAccountType=805306368)(!(userAccountControl:1.2.840.113556.1.4.803:=2))(!(pwdLastSet=0)))",
    username_attribute: "sAMAccountName",
    mail_attribute: "mail",
    display_name_attribute: "displayName",
    groups_filter: "(&(member={dn})(objectClass=group))",
    group_name_attribute: "cn",
};
