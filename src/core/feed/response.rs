//! Response envelope assembly

use crate::domain::supplier::{SupplierRecord, SupplierResponse};

/// Wraps the composed records and the cursor-wide total
///
/// `total_records` counts every supplier matching the cursor, not just the
/// ones on this page.
pub fn assemble(suppliers: Vec<SupplierRecord>, total_records: u64) -> SupplierResponse {
    SupplierResponse {
        suppliers,
        total_records,
    }
}

/// The response for a page past the end of the result set
pub fn empty_page(total_records: u64) -> SupplierResponse {
    assemble(Vec::new(), total_records)
}
