//! CLI interface and argument parsing
//!
//! Command-line front end for the supplier feed, built on clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Supplier Feed - composes supplier master data into nested records
#[derive(Parser, Debug)]
#[command(name = "supplier-feed")]
#[command(version, about, long_about = None)]
#[command(author = "Supplier Feed Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "feed.toml", env = "SUPPLIER_FEED_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SUPPLIER_FEED_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one page of composed supplier records as JSON
    Fetch(commands::fetch::FetchArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_fetch_defaults() {
        let cli = Cli::parse_from(["supplier-feed", "fetch"]);
        assert_eq!(cli.config, "feed.toml");
        match cli.command {
            Commands::Fetch(args) => {
                assert_eq!(args.page_number, 1);
                assert!(args.page_size.is_none());
                assert!(args.modified_since.is_none());
                assert!(!args.pretty);
            }
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_fetch_with_cursor() {
        let cli = Cli::parse_from([
            "supplier-feed",
            "fetch",
            "--modified-since",
            "2024-03-01T08:00:00Z",
            "--page-number",
            "3",
            "--page-size",
            "50",
        ]);

        let Commands::Fetch(args) = cli.command else {
            panic!("expected fetch");
        };
        assert_eq!(args.page_number, 3);
        assert_eq!(args.page_size, Some(50));
        assert_eq!(
            args.modified_since.map(|t| t.to_rfc3339()),
            Some("2024-03-01T08:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_cli_rejects_malformed_timestamp() {
        let result = Cli::try_parse_from([
            "supplier-feed",
            "fetch",
            "--modified-since",
            "yesterday",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["supplier-feed", "--config", "custom.toml", "fetch"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["supplier-feed", "--log-level", "debug", "fetch"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["supplier-feed", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["supplier-feed", "init", "--force"]);
        let Commands::Init(args) = cli.command else {
            panic!("expected init");
        };
        assert!(args.force);
        assert_eq!(args.output, "feed.toml");
    }
}
