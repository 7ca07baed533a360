//! Supplier data sources.
//!
//! - [`source`] - The [`SupplierDataSource`] trait the feed pipeline fetches through
//! - [`postgresql`] - PostgreSQL master-data database
//! - [`memory`] - JSON fixture held in memory
//! - [`factory`] - Picks the backend named in the configuration
//!
//! The pipeline only sees `Arc<dyn SupplierDataSource>`, so tests can
//! substitute their own implementation.

pub mod factory;
pub mod memory;
pub mod postgresql;
pub mod source;

pub use factory::create_data_source;
pub use memory::{FixtureData, InMemorySource};
pub use source::SupplierDataSource;
