//! Fetch command implementation
//!
//! Runs one supplier feed request end to end and writes the response JSON to
//! stdout or a file. Status lines go to stderr so stdout stays parseable.

use crate::adapters::create_data_source;
use crate::config::load_config;
use crate::core::feed::SupplierFeedService;
use crate::domain::supplier::SupplierResponse;
use crate::domain::{FeedError, SupplierDataQuery};
use chrono::{DateTime, Utc};
use clap::Args;
use std::path::PathBuf;
use tokio::sync::watch;

/// Arguments for the fetch command
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Only suppliers modified at or after this RFC 3339 timestamp
    #[arg(long)]
    pub modified_since: Option<DateTime<Utc>>,

    /// 1-based page number
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub page_number: i64,

    /// Suppliers per page (defaults to paging.default_page_size)
    #[arg(long, allow_negative_numbers = true)]
    pub page_size: Option<i64>,

    /// Write the response to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON response
    #[arg(long)]
    pub pretty: bool,
}

impl FetchArgs {
    /// Execute the fetch command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let source = match create_data_source(&config).await {
            Ok(s) => s,
            Err(e @ FeedError::Configuration(_)) => {
                eprintln!("❌ Invalid data source configuration: {e}");
                return Ok(2);
            }
            Err(e) => {
                eprintln!("❌ Failed to open data source: {e}");
                return Ok(5);
            }
        };

        let query = self.query(config.paging.default_page_size);
        let service = SupplierFeedService::new(source, &config.paging);

        let response = match service.handle_with_shutdown(&query, shutdown_signal).await {
            Ok(r) => r,
            Err(FeedError::InvalidArgument(msg)) => {
                eprintln!("❌ Invalid request: {msg}");
                return Ok(2);
            }
            Err(FeedError::Cancelled(msg)) => {
                eprintln!("⚠️  Fetch cancelled: {msg}");
                return Ok(5);
            }
            Err(e) => {
                eprintln!("❌ Fetch failed: {e}");
                return Ok(5);
            }
        };

        self.write_response(&response).await?;

        eprintln!(
            "✅ {} suppliers written ({} matching in total)",
            response.suppliers.len(),
            response.total_records
        );
        Ok(0)
    }

    fn query(&self, default_page_size: u32) -> SupplierDataQuery {
        SupplierDataQuery::new(
            self.modified_since,
            self.page_number,
            self.page_size.unwrap_or(i64::from(default_page_size)),
        )
    }

    async fn write_response(&self, response: &SupplierResponse) -> anyhow::Result<()> {
        let mut json = render(response, self.pretty)?;
        json.push('\n');

        match &self.output {
            Some(path) => {
                tokio::fs::write(path, json).await?;
                tracing::info!(path = %path.display(), "Response written");
            }
            None => print!("{json}"),
        }
        Ok(())
    }
}

fn render(response: &SupplierResponse, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    }
}
