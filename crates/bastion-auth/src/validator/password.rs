//! Password hashing parameters

use crate::ValidationError;
use bastion_core::types::{HashAlgorithm, PasswordConfiguration};
use bastion_core::StructValidator;
use tracing::debug;

/// argon2id derives keys of exactly this many bytes
const ARGON2ID_KEY_LENGTH: i32 = 16;
const MIN_SALT_LENGTH: i32 = 2;
const MIN_ITERATIONS: i32 = 1;
const MIN_PARALLELISM: i32 = 1;
/// argon2id needs at least 8 KiB of memory per lane
const MEMORY_PER_LANE: i32 = 8;

/// Resolve the algorithm, fill zero fields from its profile and bounds-check
/// argon2id parameters.
///
/// sha512 parameters are defaulted but not bounds-checked. An unknown
/// algorithm is reported and the rest of the section is left as written.
pub fn validate_password_configuration(
    config: &mut PasswordConfiguration,
    validator: &mut StructValidator,
) {
    let algorithm = if config.algorithm.is_empty() {
        HashAlgorithm::default()
    } else {
        match HashAlgorithm::from_name(&config.algorithm) {
            Some(algorithm) => algorithm,
            None => {
                validator.push(ValidationError::UnknownHashAlgorithm(
                    config.algorithm.clone(),
                ));
                return;
            }
        }
    };

    debug!("Applying {} password defaults", algorithm.as_str());
    config.algorithm = algorithm.as_str().to_string();
    config.apply_defaults(algorithm.defaults());

    if algorithm == HashAlgorithm::Argon2id {
        check_argon2id(config, validator);
    }
}

fn check_argon2id(config: &PasswordConfiguration, validator: &mut StructValidator) {
    if config.key_length != ARGON2ID_KEY_LENGTH {
        validator.push(ValidationError::InvalidKeyLength(config.key_length));
    }

    if config.salt_length < MIN_SALT_LENGTH {
        validator.push(ValidationError::InvalidSaltLength(config.salt_length));
    }

    if config.iterations < MIN_ITERATIONS {
        validator.push(ValidationError::InvalidIterations(config.iterations));
    }

    if config.parallelism < MIN_PARALLELISM {
        validator.push(ValidationError::InvalidParallelism(config.parallelism));
    }

    let min_memory = i64::from(config.parallelism) * i64::from(MEMORY_PER_LANE);
    if i64::from(config.memory) < min_memory {
        validator.push(ValidationError::InsufficientMemory {
            memory: config.memory,
            parallelism: config.parallelism,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bastion_core::types::{DEFAULT_PASSWORD_CONFIGURATION, DEFAULT_PASSWORD_SHA512_CONFIGURATION};

    fn default_config() -> PasswordConfiguration {
        PasswordConfiguration::from(&DEFAULT_PASSWORD_CONFIGURATION)
    }

    fn validate(mut config: PasswordConfiguration) -> (PasswordConfiguration, Vec<String>) {
        let mut validator = StructValidator::new();
        validate_password_configuration(&mut config, &mut validator);
        (config, validator.messages())
    }

    #[test]
    fn test_complete_configuration() {
        let (config, errors) = validate(default_config());
        assert!(errors.is_empty());
        assert_eq!(config, default_config());
    }

    #[test]
    fn test_blank_uses_argon2id_profile() {
        let (config, errors) = validate(PasswordConfiguration::default());

        assert!(errors.is_empty());
        assert_eq!(config.algorithm, "argon2id");
        assert_eq!(config.iterations, DEFAULT_PASSWORD_CONFIGURATION.iterations);
        assert_eq!(config.key_length, DEFAULT_PASSWORD_CONFIGURATION.key_length);
        assert_eq!(config.salt_length, DEFAULT_PASSWORD_CONFIGURATION.salt_length);
        assert_eq!(config.memory, DEFAULT_PASSWORD_CONFIGURATION.memory);
        assert_eq!(config.parallelism, DEFAULT_PASSWORD_CONFIGURATION.parallelism);
    }

    #[test]
    fn test_sha512_profile() {
        let (config, errors) = validate(PasswordConfiguration {
            algorithm: "sha512".to_string(),
            ..Default::default()
        });

        assert!(errors.is_empty());
        assert_eq!(
            config,
            PasswordConfiguration::from(&DEFAULT_PASSWORD_SHA512_CONFIGURATION)
        );
    }

    #[test]
    fn test_sha512_is_not_bounds_checked() {
        let (config, errors) = validate(PasswordConfiguration {
            algorithm: "sha512".to_string(),
            key_length: 3,
            salt_length: 1,
            ..Default::default()
        });

        assert!(errors.is_empty());
        assert_eq!(config.key_length, 3);
        assert_eq!(config.salt_length, 1);
        assert_eq!(config.iterations, DEFAULT_PASSWORD_SHA512_CONFIGURATION.iterations);
    }

    #[test]
    fn test_algorithm_name_is_case_sensitive() {
        let (config, errors) = validate(PasswordConfiguration {
            algorithm: "SHA512".to_string(),
            ..Default::default()
        });

        assert_eq!(
            errors,
            vec!["Unknown hashing algorithm supplied, valid values are argon2id and sha512, you configured 'SHA512'"]
        );
        assert_eq!(config.algorithm, "SHA512");
        assert_eq!(config.iterations, 0);
        assert_eq!(config.salt_length, 0);

        let (config, errors) = validate(PasswordConfiguration {
            algorithm: "Argon2ID".to_string(),
            ..Default::default()
        });
        assert_eq!(errors.len(), 1);
        assert_eq!(config.key_length, 0);
    }

    #[test]
    fn test_unknown_algorithm() {
        let (config, errors) = validate(PasswordConfiguration {
            algorithm: "bogus".to_string(),
            ..default_config()
        });

        assert_eq!(
            errors,
            vec!["Unknown hashing algorithm supplied, valid values are argon2id and sha512, you configured 'bogus'"]
        );
        assert_eq!(config.algorithm, "bogus");
    }

    #[test]
    fn test_key_length() {
        let (_, errors) = validate(PasswordConfiguration {
            key_length: 1,
            ..default_config()
        });
        assert_eq!(errors, vec!["Key length for argon2id must be 16, you configured 1"]);

        let (_, errors) = validate(PasswordConfiguration {
            key_length: 32,
            ..default_config()
        });
        assert_eq!(errors, vec!["Key length for argon2id must be 16, you configured 32"]);
    }

    #[test]
    fn test_salt_length() {
        let (_, errors) = validate(PasswordConfiguration {
            salt_length: -1,
            ..default_config()
        });
        assert_eq!(errors, vec!["The salt length must be 2 or more, you configured -1"]);

        let (_, errors) = validate(PasswordConfiguration {
            salt_length: 2,
            ..default_config()
        });
        assert!(errors.is_empty());
    }

    #[test]
    fn test_iterations() {
        let (_, errors) = validate(PasswordConfiguration {
            iterations: -1,
            ..default_config()
        });
        assert_eq!(
            errors,
            vec!["The number of iterations specified is invalid, must be 1 or more, you configured -1"]
        );
    }

    #[test]
    fn test_parallelism() {
        let (_, errors) = validate(PasswordConfiguration {
            parallelism: -1,
            ..default_config()
        });
        assert_eq!(errors, vec!["Parallelism for argon2id must be 1 or more, you configured -1"]);
    }

    #[test]
    fn test_memory_below_parallelism_times_eight() {
        let (_, errors) = validate(PasswordConfiguration {
            memory: 8,
            parallelism: 2,
            ..default_config()
        });
        assert_eq!(
            errors,
            vec!["Memory for argon2id must be 16 or more (parallelism * 8), you configured memory as 8 and parallelism as 2"]
        );

        let (_, errors) = validate(PasswordConfiguration {
            memory: 16,
            parallelism: 2,
            ..default_config()
        });
        assert!(errors.is_empty());
    }

    #[test]
    fn test_memory_checked_against_resolved_parallelism() {
        let (config, errors) = validate(PasswordConfiguration {
            memory: 32,
            ..Default::default()
        });

        assert_eq!(config.parallelism, DEFAULT_PASSWORD_CONFIGURATION.parallelism);
        assert_eq!(
            errors,
            vec!["Memory for argon2id must be 16 or more (parallelism * 8), you configured memory as 32 and parallelism as 8"]
        );
    }

    #[test]
    fn test_every_violation_is_reported() {
        let (_, errors) = validate(PasswordConfiguration {
            algorithm: "argon2id".to_string(),
            iterations: -3,
            key_length: 8,
            salt_length: 1,
            memory: 4,
            parallelism: 1,
        });

        assert_eq!(
            errors,
            vec![
                "Key length for argon2id must be 16, you configured 8",
                "The salt length must be 2 or more, you configured 1",
                "The number of iterations specified is invalid, must be 1 or more, you configured -3",
                "Memory for argon2id must be 16 or more (parallelism * 8), you configured memory as 4 and parallelism as 1",
            ]
        );
    }

    #[test]
    fn test_huge_parallelism_does_not_overflow() {
        let (_, errors) = validate(PasswordConfiguration {
            memory: i32::MAX,
            parallelism: i32::MAX,
            ..default_config()
        });
        assert_eq!(errors.len(), 1);
    }
}
