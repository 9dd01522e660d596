//! Command implementations for the ml CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod calendar;
pub mod completions;
pub mod config;
pub mod list;
pub mod show;
pub mod tags;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Log export loading error.
    #[error("import error: {0}")]
    Import(#[from] moodlog_core_rs::import::ImportError),

    /// Filter resolution error.
    #[error("filter error: {0}")]
    Filter(#[from] moodlog_core_rs::filter::FilterError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The requested entry does not exist.
    #[error("no entry found for '{0}'")]
    EntryNotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}
