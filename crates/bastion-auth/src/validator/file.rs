//! File backend

use super::validate_password_configuration;
use crate::ValidationError;
use bastion_core::types::FileAuthenticationBackendConfiguration;
use bastion_core::StructValidator;

pub fn validate_file_backend(
    config: &mut FileAuthenticationBackendConfiguration,
    validator: &mut StructValidator,
) {
    if config.path.is_empty() {
        validator.push(ValidationError::MissingUsersDatabasePath);
    }

    validate_password_configuration(&mut config.password, validator);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bastion_core::types::{PasswordConfiguration, DEFAULT_PASSWORD_CONFIGURATION};

    #[test]
    fn test_valid_path() {
        let mut config = FileAuthenticationBackendConfiguration {
            path: "/a/path".to_string(),
            ..Default::default()
        };
        let mut validator = StructValidator::new();

        validate_file_backend(&mut config, &mut validator);

        assert_eq!(validator.count(), 0);
        assert_eq!(
            config.password,
            PasswordConfiguration::from(&DEFAULT_PASSWORD_CONFIGURATION)
        );
    }

    #[test]
    fn test_missing_path_still_checks_password() {
        let mut config = FileAuthenticationBackendConfiguration::default();
        config.password.parallelism = -1;
        let mut validator = StructValidator::new();

        validate_file_backend(&mut config, &mut validator);

        assert_eq!(
            validator.messages(),
            vec![
                "Please provide a `path` for the users database in `authentication_backend`",
                "Parallelism for argon2id must be 1 or more, you configured -1",
            ]
        );
    }
}
