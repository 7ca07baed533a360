//! Core business logic for the supplier feed.
//!
//! # Modules
//!
//! - [`compose`] - Rebuilds nested supplier records from flat result sets
//! - [`feed`] - Request pipeline: validation, fetch, composition, envelope
//!
//! # Request Workflow
//!
//! 1. **Validate**: Reject malformed page parameters
//! 2. **Resolve**: Ask the data source for one page of supplier ids and statuses
//! 3. **Fetch**: Load the supplier rows and the nine child tables for those ids
//! 4. **Compose**: Attach children to parents by foreign key
//! 5. **Assemble**: Wrap the records with the cursor-wide total
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
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let query = SupplierDataQuery::new(None, 1, config.paging.default_page_size as i64);
//! let response = service.handle_with_shutdown(&query, shutdown_rx).await?;
//!
//! println!("Total: {}", response.total_records);
//! # Ok(())
//! # }
//! ```

pub mod compose;
pub mod feed;
