//! Supplier feed request pipeline
//!
//! One request runs validate, resolve, fetch, compose and assemble in that
//! order. Validation failures are raised before the data source is touched,
//! and a page with no identifiers never reaches the child-table fetch.
//!
//! # Example
//!
//! ```rust,no_run
//! use supplier_feed::adapters::create_data_source;
//! use supplier_feed::config::load_config;
//! use supplier_feed::core::feed::SupplierFeedService;
//! use supplier_feed::domain::SupplierDataQuery;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("feed.toml")?;
//! let source = create_data_source(&config).await?;
//! let service = SupplierFeedService::new(source, &config.paging);
//!
//! let response = service.handle(&SupplierDataQuery::new(None, 1, 100)).await?;
//! println!("{} of {}", response.suppliers.len(), response.total_records);
//! # Ok(())
//! # }
//! ```

pub mod response;

use crate::adapters::SupplierDataSource;
use crate::config::PagingConfig;
use crate::core::compose::compose;
use crate::domain::supplier::SupplierResponse;
use crate::domain::{FeedError, Result, SupplierDataQuery};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tracing::Instrument;
use uuid::Uuid;

/// Serves pages of composed supplier records from a data source
pub struct SupplierFeedService {
    source: Arc<dyn SupplierDataSource>,
    max_page_size: u32,
}

impl SupplierFeedService {
    /// Create a service bounded by the configured paging limits
    pub fn new(source: Arc<dyn SupplierDataSource>, paging: &PagingConfig) -> Self {
        Self::with_max_page_size(source, paging.max_page_size)
    }

    pub fn with_max_page_size(source: Arc<dyn SupplierDataSource>, max_page_size: u32) -> Self {
        Self {
            source,
            max_page_size,
        }
    }

    pub fn max_page_size(&self) -> u32 {
        self.max_page_size
    }

    /// Serve one page without a cancellation signal
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidArgument`] for malformed page parameters and
    /// passes data source failures through unchanged.
    pub async fn handle(&self, query: &SupplierDataQuery) -> Result<SupplierResponse> {
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        self.handle_with_shutdown(query, shutdown_rx).await
    }

    /// Serve one page, aborting in-flight fetches once `shutdown` flips to true
    ///
    /// # Errors
    ///
    /// As [`handle`](Self::handle), plus [`FeedError::Cancelled`] when the
    /// signal arrives before composition starts.
    pub async fn handle_with_shutdown(
        &self,
        query: &SupplierDataQuery,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<SupplierResponse> {
        let span = tracing::info_span!(
            "supplier_feed_request",
            request_id = %Uuid::new_v4(),
            source = self.source.source_name(),
        );

        self.run(query, &mut shutdown).instrument(span).await
    }

    async fn run(
        &self,
        query: &SupplierDataQuery,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<SupplierResponse> {
        let start = Instant::now();

        let window = query.page_window(self.max_page_size).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected supplier feed request");
        })?;

        tracing::debug!(
            modified_since = ?query.modified_since_utc,
            page_number = window.page_number(),
            page_size = window.page_size(),
            "Resolving supplier page"
        );

        let page = until_shutdown(
            shutdown,
            "resolving supplier identifiers",
            self.source.resolve_supplier_ids(query, window),
        )
        .await
        .inspect_err(|e| {
            crate::log_error_with_context!(e, "Failed to resolve supplier page");
        })?;

        if page.is_empty() {
            tracing::debug!(
                total_records = page.total_records,
                "Page holds no suppliers, skipping child fetch"
            );
            return Ok(response::empty_page(page.total_records));
        }

        let ids = page.supplier_ids();
        let tables = until_shutdown(
            shutdown,
            "fetching supplier tables",
            self.source.fetch_supplier_tables(&ids),
        )
        .await
        .inspect_err(|e| {
            crate::log_error_with_context!(e, "Failed to fetch supplier tables");
        })?;

        let suppliers = compose(&page.statuses, &tables);

        crate::log_page_composed!(
            window.page_number(),
            window.page_size(),
            suppliers.len(),
            page.total_records,
            start.elapsed()
        );

        Ok(response::assemble(suppliers, page.total_records))
    }
}

/// Runs `fetch` unless shutdown is signalled first
async fn until_shutdown<T>(
    shutdown: &mut watch::Receiver<bool>,
    stage: &str,
    fetch: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        biased;
        _ = shutdown_signalled(shutdown) => {
            tracing::warn!(stage, "Shutdown signal received, cancelling request");
            Err(FeedError::Cancelled(format!("shutdown requested while {stage}")))
        }
        result = fetch => result,
    }
}

/// Resolves once the flag is true; never resolves if the sender is gone
async fn shutdown_signalled(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
