//! Supplier data source abstraction
//!
//! This module defines the trait that fetch backends must implement to feed
//! the composition pipeline.

use crate::domain::ids::SupplierId;
use crate::domain::query::{PageWindow, SupplierDataQuery};
use crate::domain::rows::SupplierTables;
use crate::domain::{Result, SupplierPage};
use async_trait::async_trait;

/// Backend that resolves supplier pages and loads their flat result sets
///
/// Implementations report every failure as
/// [`FeedError::FetchFailure`](crate::domain::FeedError::FetchFailure); the
/// service passes those through untouched.
#[async_trait]
pub trait SupplierDataSource: Send + Sync {
    /// Short backend name used in logs
    fn source_name(&self) -> &'static str;

    /// Resolve the identifiers and statuses for one page
    ///
    /// # Arguments
    ///
    /// * `query` - The caller's request, for the modification cursor
    /// * `window` - The validated page window
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier lookup or the count fails.
    async fn resolve_supplier_ids(
        &self,
        query: &SupplierDataQuery,
        window: PageWindow,
    ) -> Result<SupplierPage>;

    /// Fetch the supplier root rows and all nine child tables
    ///
    /// Every returned row belongs to one of `ids`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the table fetches fails.
    async fn fetch_supplier_tables(&self, ids: &[SupplierId]) -> Result<SupplierTables>;
}
