//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Reading a file into the buffer at startup
//! - Starting with line numbers enabled
//! - Overriding the command sentinel
//! - Ignoring the configuration file
//! - Listing the command letters

use clap::Parser;
use std::path::PathBuf;

use crate::config::{validate_sentinel, EditorConfig};

/// A line-oriented text editor driven by stdin
#[derive(Parser, Debug)]
#[command(name = "lined", version, about = "A line-oriented text editor")]
pub struct CliArgs {
    /// File to read into the buffer at startup
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Start with line numbers enabled
    #[arg(short = 'n', long)]
    pub number: bool,

    /// Character that marks a command line
    #[arg(short = 's', long, value_name = "C")]
    pub sentinel: Option<String>,

    /// Ignore the configuration file
    #[arg(long)]
    pub no_config: bool,

    /// List the command letters and exit
    #[arg(long = "commands")]
    pub list_commands: bool,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Effective editor settings
    pub editor: EditorConfig,
    /// File to read before the first command
    pub initial_file: Option<PathBuf>,
    /// Print the command summary instead of starting a session
    pub list_commands: bool,
}

impl CliArgs {
    /// Merge parsed CLI args over `config`
    pub fn into_config(self, mut config: EditorConfig) -> Result<StartupConfig, String> {
        if let Some(sentinel) = self.sentinel {
            validate_sentinel(&sentinel)?;
            config.sentinel = sentinel;
        }

        if self.number {
            config.line_numbers = true;
        }

        Ok(StartupConfig {
            editor: config,
            initial_file: self.file,
            list_commands: self.list_commands,
        })
    }

    /// Load the config file unless `--no-config` was given, then merge
    pub fn resolve(self) -> Result<StartupConfig, String> {
        let config = if self.no_config {
            EditorConfig::default()
        } else {
            EditorConfig::load()
        };
        self.into_config(config)
    }
}
