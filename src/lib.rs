// Supplier Feed - composes supplier master data into nested records
// Copyright (c) 2025 Supplier Feed Contributors
// Licensed under the MIT License

//! # Supplier Feed
//!
//! Serves supplier master data as paginated pages of nested
//! [`SupplierRecord`](domain::SupplierRecord)s. A page is produced in two
//! fetches and one pure composition step:
//!
//! 1. **Resolve** the identifiers of one page of suppliers modified since a
//!    cursor, together with each supplier's status and the total match count.
//! 2. **Fetch** the supplier table and its nine child tables for exactly
//!    those identifiers, as flat result sets.
//! 3. **Compose** the flat rows into one tree per supplier, keeping the
//!    order the identifiers were resolved in.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Composition engine and the request pipeline
//! - [`adapters`] - Data sources (PostgreSQL, JSON fixture)
//! - [`domain`] - Flat rows, the composed tree, ids and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use supplier_feed::adapters::create_data_source;
//! use supplier_feed::config::load_config;
//! use supplier_feed::core::feed::SupplierFeedService;
//! use supplier_feed::domain::SupplierDataQuery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("feed.toml")?;
//!     let source = create_data_source(&config).await?;
//!     let service = SupplierFeedService::new(source, &config.paging);
//!
//!     let since = "2024-03-01T00:00:00Z".parse()?;
//!     let response = service
//!         .handle(&SupplierDataQuery::new(Some(since), 1, 100))
//!         .await?;
//!
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Composing without a data source
//!
//! The composer works on rows already in memory:
//!
//! ```rust
//! use supplier_feed::core::compose::compose;
//! use supplier_feed::domain::rows::{SupplierRow, SupplierStatusRow, SupplierTables};
//! use supplier_feed::domain::SupplierId;
//!
//! let statuses = vec![SupplierStatusRow {
//!     supplier_id: SupplierId::new(1),
//!     status: "Updated".to_string(),
//! }];
//! let tables = SupplierTables {
//!     suppliers: vec![SupplierRow {
//!         supplier_id: SupplierId::new(1),
//!         name: "Acme Gravel".to_string(),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let records = compose(&statuses, &tables);
//! assert_eq!(records[0].status, "Updated");
//! assert!(records[0].profiles.is_empty());
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::FeedError`]. Malformed page parameters
//! surface as `InvalidArgument` before any data is fetched; data source
//! failures surface unchanged as `FetchFailure`.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
