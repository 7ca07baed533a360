//! Data source factory
//!
//! Creates the configured supplier data source.

use crate::adapters::memory::InMemorySource;
use crate::adapters::postgresql::{PostgresClient, PostgresSupplierSource};
use crate::adapters::source::SupplierDataSource;
use crate::config::schema::{FeedConfig, SourceKind};
use crate::domain::{FeedError, Result};
use std::sync::Arc;

/// Create a data source based on `source.kind`
///
/// # Errors
///
/// Returns [`FeedError::Configuration`] if the selected backend's settings are
/// missing or the backend cannot be set up.
pub async fn create_data_source(config: &FeedConfig) -> Result<Arc<dyn SupplierDataSource>> {
    match config.source.kind {
        SourceKind::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                FeedError::Configuration(
                    "postgresql configuration is required when source.kind = 'postgresql'"
                        .to_string(),
                )
            })?;

            tracing::info!("Creating PostgreSQL supplier source");
            let client = PostgresClient::new(pg_config.clone()).await?;
            Ok(Arc::new(PostgresSupplierSource::new(client)) as Arc<dyn SupplierDataSource>)
        }
        SourceKind::Fixture => {
            let path = config.source.fixture_path.as_deref().ok_or_else(|| {
                FeedError::Configuration(
                    "source.fixture_path is required when source.kind = 'fixture'".to_string(),
                )
            })?;

            tracing::info!(path, "Creating fixture supplier source");
            let source = InMemorySource::from_path(path).await?;
            Ok(Arc::new(source) as Arc<dyn SupplierDataSource>)
        }
    }
}
