//! Validate config command implementation

use crate::adapters::postgresql::client::redact_connection_string;
use crate::config::schema::SourceKind;
use crate::config::{load_config, FeedConfig};
use clap::Args;
use secrecy::ExposeSecret;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                print_summary(&config);
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2)
            }
        }
    }
}

fn print_summary(config: &FeedConfig) {
    println!("Configuration Summary:");
    println!("  Log Level: {}", config.application.log_level);
    println!("  Environment: {:?}", config.environment);

    match config.source.kind {
        SourceKind::PostgreSQL => {
            println!("  Data Source: PostgreSQL");
            if let Some(ref pg_config) = config.postgresql {
                println!(
                    "  PostgreSQL Connection: {}",
                    redact_connection_string(pg_config.connection_string.expose_secret().as_ref())
                );
                println!("  Schema: {}", pg_config.schema);
                println!("  Max Connections: {}", pg_config.max_connections);
                println!("  SSL Mode: {}", pg_config.ssl_mode);
            }
        }
        SourceKind::Fixture => {
            println!("  Data Source: Fixture");
            println!(
                "  Fixture Path: {}",
                config.source.fixture_path.as_deref().unwrap_or("-")
            );
        }
    }

    println!("  Default Page Size: {}", config.paging.default_page_size);
    println!("  Max Page Size: {}", config.paging.max_page_size);
    println!(
        "  File Logging: {}",
        if config.logging.local_enabled {
            config.logging.local_path.as_str()
        } else {
            "disabled"
        }
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_valid_fixture_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[source]\nkind = \"fixture\"\nfixture_path = \"suppliers.json\"").unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_invalid_paging_is_configuration_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[source]\nkind = \"fixture\"\nfixture_path = \"suppliers.json\"\n\n[paging]\ndefault_page_size = 500\nmax_page_size = 100"
        )
        .unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
