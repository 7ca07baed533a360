//! Feed request parameters
//!
//! A request names a modification-time cursor and a page window. The window is
//! validated into a [`PageWindow`] before anything is fetched.

use super::errors::FeedError;
use super::ids::SupplierId;
use super::result::Result;
use super::rows::SupplierStatusRow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request for one page of supplier master data
///
/// Page parameters are signed so that malformed values coming from callers
/// (zero or negative) can be rejected with [`FeedError::InvalidArgument`]
/// instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDataQuery {
    /// Only suppliers modified at or after this instant; `None` matches all
    #[serde(rename = "modifiedSinceUTC", default)]
    pub modified_since_utc: Option<DateTime<Utc>>,

    /// 1-based page number
    pub page_number: i64,

    /// Number of suppliers per page
    pub page_size: i64,
}

impl SupplierDataQuery {
    pub fn new(modified_since_utc: Option<DateTime<Utc>>, page_number: i64, page_size: i64) -> Self {
        Self {
            modified_since_utc,
            page_number,
            page_size,
        }
    }

    /// Validates the page parameters against `max_page_size`
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidArgument`] when the page number or page size
    /// is below 1, or the page size exceeds `max_page_size`.
    pub fn page_window(&self, max_page_size: u32) -> Result<PageWindow> {
        PageWindow::new(self.page_number, self.page_size, max_page_size)
    }
}

/// A validated page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page_number: u32,
    page_size: u32,
}

impl PageWindow {
    /// Creates a window, rejecting out-of-range parameters
    pub fn new(page_number: i64, page_size: i64, max_page_size: u32) -> Result<Self> {
        if page_number < 1 {
            return Err(FeedError::InvalidArgument(format!(
                "page_number must be >= 1, got {page_number}"
            )));
        }
        if page_size < 1 {
            return Err(FeedError::InvalidArgument(format!(
                "page_size must be >= 1, got {page_size}"
            )));
        }
        if page_size > i64::from(max_page_size) {
            return Err(FeedError::InvalidArgument(format!(
                "page_size must be <= {max_page_size}, got {page_size}"
            )));
        }

        let page_number = u32::try_from(page_number).map_err(|_| {
            FeedError::InvalidArgument(format!("page_number is too large: {page_number}"))
        })?;

        Ok(Self {
            page_number,
            // bounded by max_page_size above
            page_size: page_size as u32,
        })
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of suppliers on the pages before this one
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number - 1) * u64::from(self.page_size)
    }
}

/// Identifiers and statuses for one page, plus the cursor-wide total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierPage {
    /// Status rows in page order
    pub statuses: Vec<SupplierStatusRow>,

    /// Suppliers matching the cursor across all pages
    pub total_records: u64,
}

impl SupplierPage {
    pub fn new(statuses: Vec<SupplierStatusRow>, total_records: u64) -> Self {
        Self {
            statuses,
            total_records,
        }
    }

    /// Supplier identifiers in page order
    pub fn supplier_ids(&self) -> Vec<SupplierId> {
        self.statuses.iter().map(|s| s.supplier_id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
