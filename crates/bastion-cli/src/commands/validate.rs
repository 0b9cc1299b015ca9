//! validate-config command - check a configuration file

use super::CommandContext;
use anyhow::{Context, Result};
use bastion_core::{BastionConfig, ConfigFormat};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use tracing::info;

#[derive(Serialize)]
struct ValidationReport {
    path: String,
    valid: bool,
    errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    configuration: Option<BastionConfig>,
}

/// Returns whether the configuration is valid
pub fn execute(ctx: &CommandContext, path: &Path, print: bool, use_env: bool) -> Result<bool> {
    let mut config = BastionConfig::from_file(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if use_env {
        config.apply_env_overrides();
    }

    let validator = bastion_auth::validate_config(&mut config);
    let errors = validator.messages();
    let valid = errors.is_empty();
    info!("Validated {} with {} error(s)", path.display(), errors.len());

    // Only meaningful once validation has checked the interval
    let refresh_policy = config
        .authentication_backend
        .refresh_policy()
        .ok()
        .filter(|_| valid)
        .map(|policy| policy.to_string());

    if ctx.is_json() {
        ctx.print_json(&ValidationReport {
            path: path.display().to_string(),
            valid,
            errors,
            refresh_policy,
            configuration: print.then(|| config.redacted()),
        })?;
        return Ok(valid);
    }

    if valid {
        println!("{} {}", "Configuration is valid:".green().bold(), path.display());
        if let Some(policy) = &refresh_policy {
            println!("  refresh policy: {}", policy);
        }
    } else {
        ctx.print_errors(&errors);
        eprintln!(
            "{} {} error(s) in {}",
            "Configuration is invalid:".red().bold(),
            errors.len(),
            path.display()
        );
    }

    if print {
        let format = ConfigFormat::from_path(path).unwrap_or(ConfigFormat::Toml);
        println!();
        print!("{}", config.redacted().to_string_with_format(format)?);
    }

    Ok(valid)
}
