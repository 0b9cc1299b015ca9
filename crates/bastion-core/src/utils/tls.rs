//! TLS protocol versions accepted in configuration

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("supplied TLS version isn't supported")]
pub struct TlsVersionError;

/// Minimum TLS version for outbound connections
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TlsVersion {
    Tls10,
    Tls11,
    #[default]
    Tls12,
    Tls13,
}

impl TlsVersion {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TlsVersion::Tls10 => "TLS1.0",
            TlsVersion::Tls11 => "TLS1.1",
            TlsVersion::Tls12 => "TLS1.2",
            TlsVersion::Tls13 => "TLS1.3",
        }
    }
}

impl fmt::Display for TlsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TlsVersion {
    type Err = TlsVersionError;

    /// Accepts `TLS1.2` style labels and the dotless `TLS12` form, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TLS1.3" | "TLS13" => Ok(TlsVersion::Tls13),
            "TLS1.2" | "TLS12" => Ok(TlsVersion::Tls12),
            "TLS1.1" | "TLS11" => Ok(TlsVersion::Tls11),
            "TLS1.0" | "TLS10" => Ok(TlsVersion::Tls10),
            _ => Err(TlsVersionError),
        }
    }
}
