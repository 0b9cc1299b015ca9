//! Password hashing parameters for the file backend

use serde::{Deserialize, Serialize};

/// Hashing parameters as written by the operator.
///
/// A zero numeric field means "use the algorithm's default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfiguration {
    pub algorithm: String,
    pub iterations: i32,
    pub key_length: i32,
    pub salt_length: i32,
    pub memory: i32,
    pub parallelism: i32,
}

impl PasswordConfiguration {
    /// Fill every zero field from `profile`
    pub fn apply_defaults(&mut self, profile: &PasswordProfile) {
        if self.algorithm.is_empty() {
            self.algorithm = profile.algorithm.as_str().to_string();
        }
        fill_zero(&mut self.iterations, profile.iterations);
        fill_zero(&mut self.key_length, profile.key_length);
        fill_zero(&mut self.salt_length, profile.salt_length);
        fill_zero(&mut self.memory, profile.memory);
        fill_zero(&mut self.parallelism, profile.parallelism);
    }
}

impl From<&PasswordProfile> for PasswordConfiguration {
    fn from(profile: &PasswordProfile) -> Self {
        Self {
            algorithm: profile.algorithm.as_str().to_string(),
            iterations: profile.iterations,
            key_length: profile.key_length,
            salt_length: profile.salt_length,
            memory: profile.memory,
            parallelism: profile.parallelism,
        }
    }
}

fn fill_zero(field: &mut i32, default: i32) {
    if *field == 0 {
        *field = default;
    }
}

/// Supported password hashing algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    #[default]
    Argon2id,
    Sha512,
}

impl HashAlgorithm {
    /// Look up an algorithm by its exact configured name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "argon2id" => Some(HashAlgorithm::Argon2id),
            "sha512" => Some(HashAlgorithm::Sha512),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Argon2id => "argon2id",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Built-in parameters for this algorithm
    pub const fn defaults(&self) -> &'static PasswordProfile {
        match self {
            HashAlgorithm::Argon2id => &DEFAULT_PASSWORD_CONFIGURATION,
            HashAlgorithm::Sha512 => &DEFAULT_PASSWORD_SHA512_CONFIGURATION,
        }
    }
}

/// Immutable set of hashing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordProfile {
    pub algorithm: HashAlgorithm,
    pub iterations: i32,
    pub key_length: i32,
    pub salt_length: i32,
    pub memory: i32,
    pub parallelism: i32,
}

/// argon2id is the default algorithm
pub const DEFAULT_PASSWORD_CONFIGURATION: PasswordProfile = PasswordProfile {
    algorithm: HashAlgorithm::Argon2id,
    iterations: 1,
    key_length: 16,
    salt_length: 16,
    memory: 1024,
    parallelism: 8,
};

/// sha512 crypt only uses rounds and salt
pub const DEFAULT_PASSWORD_SHA512_CONFIGURATION: PasswordProfile = PasswordProfile {
    algorithm: HashAlgorithm::Sha512,
    iterations: 50_000,
    key_length: 0,
    salt_length: 16,
    memory: 0,
    parallelism: 0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_names() {
        assert_eq!(HashAlgorithm::from_name("argon2id"), Some(HashAlgorithm::Argon2id));
        assert_eq!(HashAlgorithm::from_name("sha512"), Some(HashAlgorithm::Sha512));
        assert_eq!(HashAlgorithm::from_name("SHA512"), None);
        assert_eq!(HashAlgorithm::from_name("Argon2ID"), None);
        assert_eq!(HashAlgorithm::from_name("bcrypt"), None);
        assert_eq!(HashAlgorithm::from_name(""), None);
        assert_eq!(HashAlgorithm::default().as_str(), "argon2id");
    }

    #[test]
    fn test_apply_defaults_only_fills_zero_fields() {
        let mut config = PasswordConfiguration {
            iterations: 3,
            memory: 2048,
            ..Default::default()
        };
        config.apply_defaults(&DEFAULT_PASSWORD_CONFIGURATION);

        assert_eq!(config.algorithm, "argon2id");
        assert_eq!(config.iterations, 3);
        assert_eq!(config.memory, 2048);
        assert_eq!(config.key_length, DEFAULT_PASSWORD_CONFIGURATION.key_length);
        assert_eq!(config.salt_length, DEFAULT_PASSWORD_CONFIGURATION.salt_length);
        assert_eq!(config.parallelism, DEFAULT_PASSWORD_CONFIGURATION.parallelism);
    }

    #[test]
    fn test_negative_values_are_kept() {
        let mut config = PasswordConfiguration {
            salt_length: -1,
            ..Default::default()
        };
        config.apply_defaults(&DEFAULT_PASSWORD_CONFIGURATION);
        assert_eq!(config.salt_length, -1);
    }

    #[test]
    fn test_profile_conversion() {
        let config = PasswordConfiguration::from(&DEFAULT_PASSWORD_SHA512_CONFIGURATION);
        assert_eq!(config.algorithm, "sha512");
        assert_eq!(config.iterations, 50_000);
        assert_eq!(config.memory, 0);
    }

    #[test]
    fn test_default_argon2id_profile_is_self_consistent() {
        let p = DEFAULT_PASSWORD_CONFIGURATION;
        assert_eq!(p.key_length, 16);
        assert!(p.salt_length >= 2);
        assert!(p.iterations >= 1);
        assert!(p.parallelism >= 1);
        assert!(p.memory >= p.parallelism * 8);
    }
}
