//! Command-line configuration for the format validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Default configuration file lookup

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

/// Name of the directory under the user config dir holding the default rules
pub const CONFIG_DIR_NAME: &str = "format-validator";

/// Command-line arguments for the format validator
#[derive(Debug, Parser)]
#[command(name = "format-validator")]
#[command(about = "Validate delimited text rows against per-column rules")]
#[command(version)]
pub struct Args {
    /// Validator configuration document
    #[arg(long, short, help = "Rules file (.json or .toml)")]
    pub config: Option<PathBuf>,

    /// Input file; stdin when omitted
    #[arg(long, short, help = "File to validate (defaults to stdin)")]
    pub input: Option<PathBuf>,

    /// Stop after this many failing rows
    #[arg(long, help = "Stop after reporting this many invalid rows")]
    pub max_errors: Option<usize>,

    /// Print the configured column rules and exit
    #[arg(long, help = "List the column rules from the configuration and exit")]
    pub list_rules: bool,

    /// Log level for the validator
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Rules document to load
    pub config_path: PathBuf,
    /// Input file, or stdin
    pub input: Option<PathBuf>,
    pub max_errors: Option<usize>,
    pub list_rules: bool,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let config_path = match args.config {
            Some(path) => path,
            None => match default_config_path() {
                Some(path) => path,
                None => bail!("No --config given and no user config directory available"),
            },
        };

        Ok(Config {
            config_path,
            input: args.input,
            max_errors: args.max_errors,
            list_rules: args.list_rules,
            log_level: args.log_level,
        })
    }
}

/// `<user config dir>/format-validator/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.json"))
}
