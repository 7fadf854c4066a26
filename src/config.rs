//! Configuration handling for fix-sql-queries.
//!
//! This module provides configuration management via CLI arguments and environment variables.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Where the data store keeps its document, relative to the working directory.
pub const DEFAULT_DOCUMENT_PATH: &str = "data/quickmcp.json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// How the run result is printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per fixed query
    #[default]
    Text,
    /// A single JSON object describing the run
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Configuration for fix-sql-queries.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fix-sql-queries",
    about = "Rewrite OFFSET/FETCH pagination in stored SQL Server queries into TOP queries",
    version,
    author
)]
pub struct Config {
    /// JSON document holding the `tools` and `resources` arrays.
    /// The file is overwritten in place; no backup is made.
    #[arg(
        value_name = "PATH",
        default_value = DEFAULT_DOCUMENT_PATH,
        env = "FIX_SQL_PATH"
    )]
    pub path: PathBuf,

    /// Report what would change without writing the file
    #[arg(long, env = "FIX_SQL_DRY_RUN")]
    pub dry_run: bool,

    /// Output format for the run result (text or json)
    #[arg(
        short,
        long,
        value_enum,
        default_value = "text",
        env = "FIX_SQL_OUTPUT"
    )]
    pub output: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL, env = "FIX_SQL_LOG_LEVEL")]
    pub log_level: String,

    /// Enable JSON logging format
    #[arg(long, env = "FIX_SQL_JSON_LOGS")]
    pub json_logs: bool,
}

impl Config {
    /// Parse configuration from command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create a default configuration (useful for testing).
    pub fn default_config() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            dry_run: false,
            output: OutputFormat::Text,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json_logs: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.path, PathBuf::from(DEFAULT_DOCUMENT_PATH));
        assert!(!config.dry_run);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_parse_positional_path() {
        let config = Config::try_parse_from(["fix-sql-queries", "/srv/quickmcp.json"]).unwrap();
        assert_eq!(config.path, PathBuf::from("/srv/quickmcp.json"));
        assert!(!config.dry_run);
    }

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from([
            "fix-sql-queries",
            "--dry-run",
            "--output",
            "json",
            "--log-level",
            "debug",
            "--json-logs",
            "store.json",
        ])
        .unwrap();
        assert!(config.dry_run);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
        assert!(config.json_logs);
        assert_eq!(config.path, PathBuf::from("store.json"));
    }

    #[test]
    fn test_rejects_unknown_output_format() {
        let result = Config::try_parse_from(["fix-sql-queries", "--output", "yaml", "a.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
