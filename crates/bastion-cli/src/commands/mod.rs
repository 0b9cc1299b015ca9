//! CLI command implementations

pub mod ldap_url;
pub mod validate;

use crate::OutputFormat;
use colored::Colorize;
use serde::Serialize;

/// Context passed to all commands
pub struct CommandContext {
    pub output_format: OutputFormat,
}

impl CommandContext {
    /// Check if output should be JSON
    pub fn is_json(&self) -> bool {
        matches!(self.output_format, OutputFormat::Json)
    }

    /// Print every diagnostic, one per line
    pub fn print_errors(&self, errors: &[String]) {
        for error in errors {
            eprintln!("{} {}", "error:".red().bold(), error);
        }
    }

    pub fn print_json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
