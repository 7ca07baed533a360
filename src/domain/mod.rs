//! Domain models and types for the supplier feed.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`SupplierId`], [`SupplierToProfileId`], ...)
//! - **Flat result sets** as delivered by the fetch layer ([`rows`])
//! - **The composed tree** returned to callers ([`SupplierRecord`], [`SupplierResponse`])
//! - **Request parameters** ([`SupplierDataQuery`], [`PageWindow`])
//! - **Error types** ([`FeedError`]) and the [`Result`] alias
//!
//! # Example
//!
//! ```rust
//! use supplier_feed::domain::{SupplierDataQuery, FeedError};
//!
//! let query = SupplierDataQuery::new(None, 1, 0);
//! let err = query.page_window(1000).unwrap_err();
//! assert!(matches!(err, FeedError::InvalidArgument(_)));
//! ```

pub mod errors;
pub mod ids;
pub mod query;
pub mod result;
pub mod rows;
pub mod supplier;

// Re-export commonly used types for convenience
pub use errors::FeedError;
pub use ids::{ProductId, SupplierId, SupplierToLoadingPointId, SupplierToProfileId};
pub use query::{PageWindow, SupplierDataQuery, SupplierPage};
pub use result::Result;
pub use rows::{ChildTables, SupplierStatusRow, SupplierTables};
pub use supplier::{SupplierProfile, SupplierRecord, SupplierResponse};
