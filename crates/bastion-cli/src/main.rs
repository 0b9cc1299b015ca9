//! Bastion - identity gateway configuration tooling
//!
//! Validates the `authentication_backend` section of a gateway
//! configuration before the gateway is started with it.

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use commands::CommandContext;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "bastion")]
#[command(author = "Bastion Team")]
#[command(version = bastion_core::VERSION)]
#[command(about = "Identity gateway configuration tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "BASTION_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration file
    ValidateConfig {
        /// Configuration file (.toml, .yml, .yaml or .json)
        path: PathBuf,

        /// Print the section with defaults applied
        #[arg(long)]
        print: bool,

        /// Skip BASTION_* environment overrides
        #[arg(long)]
        no_env: bool,
    },

    /// Normalize an LDAP server URL
    CheckLdapUrl {
        /// URL such as ldap://127.0.0.1
        url: String,
    },

    /// Show version information
    Version,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let ctx = CommandContext {
        output_format: cli.output,
    };

    let valid = match cli.command {
        Commands::ValidateConfig {
            path,
            print,
            no_env,
        } => commands::validate::execute(&ctx, &path, print, !no_env)?,
        Commands::CheckLdapUrl { url } => commands::ldap_url::execute(&ctx, &url)?,
        Commands::Version => {
            println!("bastion {}", bastion_core::VERSION);
            true
        }
    };

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
