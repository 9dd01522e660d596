use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError};
use dispatch::{LogCommand, LogDispatch, NoLogCommand, NoLogDispatch};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{}", serde_json::to_string_pretty(&error_json).unwrap());
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    // Commands that work without the export file (config, completions, help)
    if let Some(dispatch) = NoLogDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx);
    }

    let config = load_config().unwrap_or_default();
    let logs_path = resolve_logs_path(cli)?;

    if let Some(dispatch) = LogDispatch::from_cli(cli, config.week_start()) {
        return dispatch.execute(&ctx, &logs_path);
    }

    // Fallback for any unhandled commands
    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "status": "not_implemented",
                "command": format!("{:?}", cli.command)
            })
        );
    } else if !cli.quiet {
        println!("Command not yet implemented: {:?}", cli.command);
    }
    Ok(())
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Import(_) => "IMPORT_ERROR",
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::EntryNotFound(_) => "NOT_FOUND",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Filter(_) => ExitCode::from(1),
        CommandError::EntryNotFound(_) => ExitCode::from(4),
        CommandError::Import(_) => ExitCode::from(2),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}

/// Resolves the log export path with priority: flag > env > config.
///
/// The resolution order is:
/// 1. `--logs` command line flag (highest priority)
/// 2. `MOODLOG_FILE` environment variable (handled by clap's `env` attr)
/// 3. `logs` key from the config file (`~/.config/ml/config.toml`)
fn resolve_logs_path(cli: &Cli) -> commands::Result<PathBuf> {
    // When cli.logs is Some, it came from --logs OR from MOODLOG_FILE
    if let Some(path) = &cli.logs {
        return Ok(path.clone());
    }

    if let Ok(config) = load_config() {
        if let Some(logs) = config.logs {
            return Ok(PathBuf::from(logs));
        }
    }

    Err(CommandError::Config(
        "No log file configured. Pass --logs, set MOODLOG_FILE, or run 'ml config set logs <path>'"
            .to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli::Commands;
    use serial_test::serial;
    use std::env;

    /// Helper to create a test CLI with the given logs path.
    fn cli_with_logs(logs: Option<PathBuf>) -> Cli {
        Cli {
            verbose: false,
            quiet: false,
            json: false,
            no_color: false,
            logs,
            command: Some(Commands::List {
                text: None,
                rating: Vec::new(),
                tag: Vec::new(),
                excluded: false,
                limit: 50,
                all: false,
                reverse: false,
            }),
        }
    }

    #[test]
    #[serial]
    fn test_resolve_logs_path_from_flag() {
        let cli = cli_with_logs(Some(PathBuf::from("/tmp/export.json")));
        let path = resolve_logs_path(&cli).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/export.json"));
    }

    #[test]
    #[serial]
    fn test_resolve_logs_path_missing_is_config_error() {
        // Point the config at a non-existent path so no logs key is found
        let original_config = env::var("ML_CONFIG").ok();
        env::set_var("ML_CONFIG", "/tmp/ml-test-nonexistent/config.toml");

        let cli = cli_with_logs(None);
        let result = resolve_logs_path(&cli);

        if let Some(val) = original_config {
            env::set_var("ML_CONFIG", val);
        } else {
            env::remove_var("ML_CONFIG");
        }

        assert!(matches!(result, Err(CommandError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_resolve_logs_path_from_config() {
        use std::fs;
        use std::io::Write;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut file = fs::File::create(&config_path).unwrap();
        writeln!(file, r#"logs = "/backups/moodlog.json""#).unwrap();

        let original_config = env::var("ML_CONFIG").ok();
        env::set_var("ML_CONFIG", config_path.to_str().unwrap());

        let cli = cli_with_logs(None);
        let result = resolve_logs_path(&cli);

        if let Some(val) = original_config {
            env::set_var("ML_CONFIG", val);
        } else {
            env::remove_var("ML_CONFIG");
        }

        assert_eq!(result.unwrap(), PathBuf::from("/backups/moodlog.json"));
    }

    #[test]
    #[serial]
    fn test_resolve_logs_path_flag_overrides_config() {
        use std::fs;
        use std::io::Write;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut file = fs::File::create(&config_path).unwrap();
        writeln!(file, r#"logs = "/backups/moodlog.json""#).unwrap();

        let original_config = env::var("ML_CONFIG").ok();
        env::set_var("ML_CONFIG", config_path.to_str().unwrap());

        let cli = cli_with_logs(Some(PathBuf::from("/tmp/flag.json")));
        let result = resolve_logs_path(&cli);

        if let Some(val) = original_config {
            env::set_var("ML_CONFIG", val);
        } else {
            env::remove_var("ML_CONFIG");
        }

        assert_eq!(result.unwrap(), PathBuf::from("/tmp/flag.json"));
    }
}
