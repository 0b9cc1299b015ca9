//! Configuration schema for the `authentication_backend` section

mod authentication;
mod ldap;
mod password;

pub use authentication::*;
pub use ldap::*;
pub use password::*;
