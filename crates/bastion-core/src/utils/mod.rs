//! Utility functions

mod duration;
mod tls;

pub use duration::{parse_duration, DurationError};
pub use tls::{TlsVersion, TlsVersionError};
