//! Flat-result composition engine
//!
//! Rebuilds the nested supplier tree from the independently fetched flat
//! result sets. Composition is pure: no I/O, no errors. Children whose
//! foreign keys match no parent are left out, and a parent without children
//! gets empty collections.
//!
//! The work is staged: every child table is indexed by its foreign key once
//! ([`index::ChildIndex`]), then each supplier, profile, product and loading
//! point looks its children up in those indices.
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
//!         number: "S-1".to_string(),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let records = compose(&statuses, &tables);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].status, "Updated");
//! assert!(records[0].profiles.is_empty());
//! ```

pub mod index;
pub mod loading_numbers;
pub mod profile;

use crate::domain::rows::{SupplierRow, SupplierStatusRow, SupplierTables};
use crate::domain::supplier::{Address, Contact, SupplierRecord};
use index::{ChildIndex, StatusLookup};
use profile::compose_profile;

/// Composes one record per supplier root row, in root-row order
pub fn compose(statuses: &[SupplierStatusRow], tables: &SupplierTables) -> Vec<SupplierRecord> {
    let status_lookup = StatusLookup::build(statuses);
    let index = ChildIndex::build(&tables.children);

    let records: Vec<SupplierRecord> = tables
        .suppliers
        .iter()
        .map(|supplier| compose_supplier(supplier, &status_lookup, &index))
        .collect();

    tracing::debug!(
        suppliers = records.len(),
        child_rows = tables.children.row_count(),
        profiles = index.profiles.key_count(),
        "Composed supplier records"
    );

    records
}

fn compose_supplier(
    supplier: &SupplierRow,
    statuses: &StatusLookup<'_>,
    index: &ChildIndex<'_>,
) -> SupplierRecord {
    let id = supplier.supplier_id;

    let status = match statuses.status_of(id) {
        Some(status) => status.to_string(),
        None => {
            tracing::debug!(supplier_id = %id, "No status row for supplier");
            String::new()
        }
    };

    SupplierRecord {
        name: supplier.name.clone(),
        number: supplier.number.clone(),
        erp_number: supplier.erp_number.clone(),
        short_name: supplier.short_name.clone(),
        active: supplier.active,
        description: supplier.description.clone(),
        status,
        addresses: index
            .addresses
            .get(&id)
            .iter()
            .map(|a| Address {
                street: a.street.clone(),
                street_number: a.street_number.clone(),
                city: a.city.clone(),
                state: a.state.clone(),
                zip: a.zip.clone(),
                country: a.country.clone(),
                district: a.district.clone(),
                is_default: a.is_default,
                language: a.language.clone(),
                latitude: a.latitude,
                longitude: a.longitude,
                time_zone: a.time_zone.clone(),
            })
            .collect(),
        contacts: index
            .contacts
            .get(&id)
            .iter()
            .map(|c| Contact {
                first_name: c.first_name.clone(),
                last_name: c.last_name.clone(),
                middle_name: c.middle_name.clone(),
                phone: c.phone.clone(),
                phone_type: c.phone_type.clone(),
                email: c.email.clone(),
                email_type: c.email_type.clone(),
                match_code: c.match_code.clone(),
            })
            .collect(),
        profiles: index
            .profiles
            .get(&id)
            .iter()
            .map(|profile| compose_profile(profile, index))
            .collect(),
    }
}
