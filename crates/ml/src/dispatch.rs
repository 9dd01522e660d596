//! Command dispatch module for routing CLI commands to their handlers.
//!
//! This module provides trait-based dispatch for CLI commands, splitting
//! them into those that need the log export file and those that do not
//! (config, completions, help).

use std::path::Path;

use chrono::Weekday;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that run without the log export.
pub trait NoLogCommand {
    /// Execute the command without a log file.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that read the log export.
pub trait LogCommand {
    /// Execute the command against the export at `logs_path`.
    fn execute(&self, ctx: &CommandContext, logs_path: &Path) -> Result<()>;
}

/// Commands that don't require the log export.
pub enum NoLogDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(&'a crate::cli::Shell),
    Help,
}

impl<'a> NoLogDispatch<'a> {
    /// Try to create a no-log dispatch from the CLI command.
    /// Returns None if the command needs the export file.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl NoLogCommand for NoLogDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("ml - mood log CLI");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
        Some(ConfigCommands::Edit) => commands::config::execute_edit(ctx),
    }
}

/// Commands that read the log export.
pub enum LogDispatch<'a> {
    Calendar {
        month: &'a Option<String>,
        text: &'a Option<String>,
        ratings: &'a [String],
        tags: &'a [String],
        week_start: Weekday,
    },
    List {
        text: &'a Option<String>,
        ratings: &'a [String],
        tags: &'a [String],
        excluded: bool,
        limit: u32,
        all: bool,
        reverse: bool,
    },
    Show {
        entry: &'a str,
    },
    Tags,
}

impl<'a> LogDispatch<'a> {
    /// Create a log dispatch from the CLI command.
    /// Returns None for commands handled by [`NoLogDispatch`].
    pub fn from_cli(cli: &'a Cli, week_start: Weekday) -> Option<Self> {
        match &cli.command {
            Some(Commands::Calendar {
                month,
                text,
                rating,
                tag,
            }) => Some(Self::Calendar {
                month,
                text,
                ratings: rating,
                tags: tag,
                week_start,
            }),
            Some(Commands::List {
                text,
                rating,
                tag,
                excluded,
                limit,
                all,
                reverse,
            }) => Some(Self::List {
                text,
                ratings: rating,
                tags: tag,
                excluded: *excluded,
                limit: *limit,
                all: *all,
                reverse: *reverse,
            }),
            Some(Commands::Show { entry }) => Some(Self::Show { entry }),
            Some(Commands::Tags) => Some(Self::Tags),
            // Already handled by NoLogDispatch
            Some(Commands::Config { .. }) | Some(Commands::Completions { .. }) | None => None,
        }
    }
}

impl LogCommand for LogDispatch<'_> {
    fn execute(&self, ctx: &CommandContext, logs_path: &Path) -> Result<()> {
        match self {
            Self::Calendar {
                month,
                text,
                ratings,
                tags,
                week_start,
            } => {
                let opts = commands::calendar::CalendarOptions {
                    month: (*month).clone(),
                    text: (*text).clone(),
                    ratings: (*ratings).to_vec(),
                    tags: (*tags).to_vec(),
                    week_start: *week_start,
                };
                commands::calendar::execute(ctx, &opts, logs_path)
            }

            Self::List {
                text,
                ratings,
                tags,
                excluded,
                limit,
                all,
                reverse,
            } => {
                let opts = commands::list::ListOptions {
                    text: (*text).clone(),
                    ratings: (*ratings).to_vec(),
                    tags: (*tags).to_vec(),
                    excluded: *excluded,
                    limit: *limit,
                    all: *all,
                    reverse: *reverse,
                };
                commands::list::execute(ctx, &opts, logs_path)
            }

            Self::Show { entry } => {
                let opts = commands::show::ShowOptions {
                    entry: (*entry).to_string(),
                };
                commands::show::execute(ctx, &opts, logs_path)
            }

            Self::Tags => commands::tags::execute(ctx, logs_path),
        }
    }
}
