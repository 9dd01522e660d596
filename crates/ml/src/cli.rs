//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the ml CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// ml - A CLI for browsing mood log exports
#[derive(Parser, Debug)]
#[command(name = "ml")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override the log export file (default: from config)
    #[arg(long, global = true, env = "MOODLOG_FILE")]
    pub logs: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a month of entries as a calendar grid
    #[command(alias = "c")]
    Calendar {
        /// Month to show as YYYY-MM (default: current month)
        month: Option<String>,

        /// Dim entries whose message does not contain this text
        #[arg(short, long)]
        text: Option<String>,

        /// Dim entries without one of these ratings (repeatable)
        #[arg(short, long, action = clap::ArgAction::Append)]
        rating: Vec<String>,

        /// Dim entries missing one of these tags (repeatable)
        #[arg(short = 'g', long, action = clap::ArgAction::Append)]
        tag: Vec<String>,
    },

    /// List entries
    #[command(alias = "l")]
    List {
        /// Keep only entries whose message contains this text
        #[arg(short, long)]
        text: Option<String>,

        /// Keep only entries with one of these ratings (repeatable)
        #[arg(short, long, action = clap::ArgAction::Append)]
        rating: Vec<String>,

        /// Keep only entries carrying all of these tags (repeatable)
        #[arg(short = 'g', long, action = clap::ArgAction::Append)]
        tag: Vec<String>,

        /// Invert: show the entries the filters exclude
        #[arg(long)]
        excluded: bool,

        /// Limit results (default: 50)
        #[arg(long, default_value = "50")]
        limit: u32,

        /// Show all entries (no limit)
        #[arg(long)]
        all: bool,

        /// Newest first
        #[arg(long)]
        reverse: bool,
    },

    /// Show one entry in full
    #[command(alias = "s")]
    Show {
        /// Entry date (YYYY-MM-DD) or entry id
        entry: String,
    },

    /// List tags with usage counts
    #[command(alias = "tg")]
    Tags,

    /// View and edit configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open config in $EDITOR
    Edit,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["ml", "--verbose", "list"]);
        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert!(!cli.json);

        let cli = Cli::parse_from(["ml", "--quiet", "--json", "list"]);
        assert!(!cli.verbose);
        assert!(cli.quiet);
        assert!(cli.json);
    }

    #[test]
    fn test_no_color_flag() {
        let cli = Cli::parse_from(["ml", "--no-color", "list"]);
        assert!(cli.no_color);
    }

    #[test]
    fn test_logs_flag() {
        let cli = Cli::parse_from(["ml", "--logs", "/tmp/export.json", "list"]);
        assert_eq!(cli.logs, Some(PathBuf::from("/tmp/export.json")));
    }

    #[test]
    fn test_calendar_alias() {
        let cli = Cli::parse_from(["ml", "c"]);
        assert!(matches!(cli.command, Some(Commands::Calendar { .. })));
    }

    #[test]
    fn test_list_alias() {
        let cli = Cli::parse_from(["ml", "l"]);
        assert!(matches!(cli.command, Some(Commands::List { .. })));
    }

    #[test]
    fn test_show_alias() {
        let cli = Cli::parse_from(["ml", "s", "2024-03-04"]);
        assert!(matches!(cli.command, Some(Commands::Show { .. })));
    }

    #[test]
    fn test_tags_alias() {
        let cli = Cli::parse_from(["ml", "tg"]);
        assert!(matches!(cli.command, Some(Commands::Tags)));
    }

    #[test]
    fn test_calendar_with_filters() {
        let cli = Cli::parse_from([
            "ml", "calendar", "2024-03", "--text", "walk", "-r", "positive", "-g", "work", "-g",
            "sleep",
        ]);
        if let Some(Commands::Calendar {
            month,
            text,
            rating,
            tag,
        }) = cli.command
        {
            assert_eq!(month, Some("2024-03".to_string()));
            assert_eq!(text, Some("walk".to_string()));
            assert_eq!(rating, vec!["positive"]);
            assert_eq!(tag, vec!["work", "sleep"]);
        } else {
            panic!("Expected Calendar command");
        }
    }

    #[test]
    fn test_list_with_options() {
        let cli = Cli::parse_from([
            "ml", "list", "--text", "walk", "-r", "negative", "-r", "neutral", "--limit", "10",
            "--excluded",
        ]);
        if let Some(Commands::List {
            text,
            rating,
            excluded,
            limit,
            ..
        }) = cli.command
        {
            assert_eq!(text, Some("walk".to_string()));
            assert_eq!(rating, vec!["negative", "neutral"]);
            assert!(excluded);
            assert_eq!(limit, 10);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["ml", "config", "set", "week_start", "sunday"]);
        if let Some(Commands::Config {
            command: Some(ConfigCommands::Set { key, value }),
        }) = cli.command
        {
            assert_eq!(key, "week_start");
            assert_eq!(value, "sunday");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn test_completions() {
        let cli = Cli::parse_from(["ml", "completions", "zsh"]);
        if let Some(Commands::Completions { shell }) = cli.command {
            assert!(matches!(shell, Shell::Zsh));
        } else {
            panic!("Expected Completions command");
        }
    }
}
