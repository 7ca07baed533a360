//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{FeedConfig, PostgreSQLConfig};
use super::secret::secret_string;
use crate::domain::errors::FeedError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix of every environment override
pub const ENV_PREFIX: &str = "SUPPLIER_FEED_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into FeedConfig
/// 4. Applies environment variable overrides (SUPPLIER_FEED_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`FeedError::Configuration`] if the file cannot be read or parsed,
/// a referenced variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use supplier_feed::config::loader::load_config;
///
/// let config = load_config("feed.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<FeedConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(FeedError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        FeedError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents, |key| std::env::var(key).ok())
}

/// Parses configuration text, resolving variables and overrides through `lookup`
pub(crate) fn parse_config(
    contents: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<FeedConfig> {
    let contents = substitute_env_vars(contents, &lookup)?;

    let mut config: FeedConfig = toml::from_str(&contents)
        .map_err(|e| FeedError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config, &lookup)?;

    config.validate().map_err(|e| {
        FeedError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes variables in the format ${VAR_NAME}, skipping comment lines
fn substitute_env_vars(input: &str, lookup: &impl Fn(&str) -> Option<String>) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| FeedError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match lookup(var_name) {
                Some(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                None => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(FeedError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies overrides following the pattern SUPPLIER_FEED_<SECTION>_<KEY>
///
/// For example: SUPPLIER_FEED_SOURCE_KIND, SUPPLIER_FEED_PAGING_MAX_PAGE_SIZE
fn apply_env_overrides(
    config: &mut FeedConfig,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<()> {
    let var = |key: &str| lookup(&format!("{ENV_PREFIX}{key}"));

    // Application overrides
    if let Some(val) = var("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some(val) = var("ENVIRONMENT") {
        config.environment = parse_override("ENVIRONMENT", &val)?;
    }

    // Source overrides
    if let Some(val) = var("SOURCE_KIND") {
        config.source.kind = parse_override("SOURCE_KIND", &val)?;
    }
    if let Some(val) = var("SOURCE_FIXTURE_PATH") {
        config.source.fixture_path = Some(val);
    }

    // PostgreSQL overrides; a connection string alone is enough to create the section
    if let Some(val) = var("POSTGRESQL_CONNECTION_STRING") {
        match config.postgresql {
            Some(ref mut pg) => pg.connection_string = secret_string(val),
            None => {
                config.postgresql = Some(PostgreSQLConfig::from_connection_string(secret_string(
                    val,
                )))
            }
        }
    }
    if let Some(ref mut pg) = config.postgresql {
        if let Some(val) = var("POSTGRESQL_MAX_CONNECTIONS") {
            pg.max_connections = parse_value("POSTGRESQL_MAX_CONNECTIONS", &val)?;
        }
        if let Some(val) = var("POSTGRESQL_STATEMENT_TIMEOUT_SECONDS") {
            pg.statement_timeout_seconds =
                parse_value("POSTGRESQL_STATEMENT_TIMEOUT_SECONDS", &val)?;
        }
        if let Some(val) = var("POSTGRESQL_SSL_MODE") {
            pg.ssl_mode = val;
        }
        if let Some(val) = var("POSTGRESQL_SCHEMA") {
            pg.schema = val;
        }
    }

    // Paging overrides
    if let Some(val) = var("PAGING_DEFAULT_PAGE_SIZE") {
        config.paging.default_page_size = parse_value("PAGING_DEFAULT_PAGE_SIZE", &val)?;
    }
    if let Some(val) = var("PAGING_MAX_PAGE_SIZE") {
        config.paging.max_page_size = parse_value("PAGING_MAX_PAGE_SIZE", &val)?;
    }

    // Logging overrides
    if let Some(val) = var("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_value("LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Some(val) = var("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

/// Parses a numeric or boolean override
fn parse_value<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().to_lowercase().parse().map_err(|e| {
        FeedError::Configuration(format!("Invalid {ENV_PREFIX}{key} '{value}': {e}"))
    })
}

/// Parses an enum-valued override using its serde spelling
fn parse_override<T: serde::de::DeserializeOwned>(key: &str, value: &str) -> Result<T> {
    T::deserialize(serde::de::value::StrDeserializer::<serde::de::value::Error>::new(
        &value.to_lowercase(),
    ))
    .map_err(|e| FeedError::Configuration(format!("Invalid {ENV_PREFIX}{key} '{value}': {e}")))
}
