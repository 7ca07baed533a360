//! In-memory data source over a JSON fixture
//!
//! A fixture document holds the supplier root rows, each with its status and
//! modification time, plus the nine child tables in their flat form:
//!
//! ```json
//! {
//!   "suppliers": [
//!     { "supplier_id": 1, "name": "Acme Gravel", "number": "S-1", "active": true,
//!       "status": "Updated", "modified_at": "2024-03-01T08:00:00Z" }
//!   ],
//!   "addresses": [ { "supplier_id": 1, "city": "Linz", "is_default": true } ],
//!   "profiles": [ { "supplier_id": 1, "supplier_to_profile_id": 10, "name": "Aggregates" } ]
//! }
//! ```
//!
//! Paging follows the order of the `suppliers` array.

use crate::adapters::source::SupplierDataSource;
use crate::domain::ids::SupplierId;
use crate::domain::query::{PageWindow, SupplierDataQuery};
use crate::domain::rows::{ChildTables, SupplierRow, SupplierStatusRow, SupplierTables};
use crate::domain::{FeedError, Result, SupplierPage};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// One supplier root row with the fields the identifier lookup filters on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSupplier {
    #[serde(flatten)]
    pub row: SupplierRow,

    #[serde(default)]
    pub status: String,

    pub modified_at: DateTime<Utc>,
}

/// Complete fixture document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureData {
    #[serde(default)]
    pub suppliers: Vec<FixtureSupplier>,

    #[serde(flatten)]
    pub children: ChildTables,
}

impl FixtureData {
    /// Parse a fixture from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| FeedError::Configuration(format!("Invalid supplier fixture: {e}")))
    }
}

/// Supplier data source serving a fixture held in memory
pub struct InMemorySource {
    data: FixtureData,
}

impl InMemorySource {
    pub fn new(data: FixtureData) -> Self {
        Self { data }
    }

    /// Load a fixture file
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Configuration`] if the file cannot be read or is
    /// not a valid fixture document.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            FeedError::Configuration(format!(
                "Failed to read supplier fixture {}: {}",
                path.display(),
                e
            ))
        })?;

        let data = FixtureData::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            suppliers = data.suppliers.len(),
            child_rows = data.children.row_count(),
            "Loaded supplier fixture"
        );

        Ok(Self::new(data))
    }

    pub fn data(&self) -> &FixtureData {
        &self.data
    }
}

#[async_trait]
impl SupplierDataSource for InMemorySource {
    fn source_name(&self) -> &'static str {
        "fixture"
    }

    async fn resolve_supplier_ids(
        &self,
        query: &SupplierDataQuery,
        window: PageWindow,
    ) -> Result<SupplierPage> {
        let matching: Vec<&FixtureSupplier> = self
            .data
            .suppliers
            .iter()
            .filter(|s| match query.modified_since_utc {
                Some(since) => s.modified_at >= since,
                None => true,
            })
            .collect();

        let offset = usize::try_from(window.offset()).unwrap_or(usize::MAX);
        let statuses = matching
            .iter()
            .skip(offset)
            .take(window.page_size() as usize)
            .map(|s| SupplierStatusRow {
                supplier_id: s.row.supplier_id,
                status: s.status.clone(),
            })
            .collect();

        Ok(SupplierPage::new(statuses, matching.len() as u64))
    }

    async fn fetch_supplier_tables(&self, ids: &[SupplierId]) -> Result<SupplierTables> {
        let by_id: HashMap<SupplierId, &SupplierRow> = self
            .data
            .suppliers
            .iter()
            .map(|s| (s.row.supplier_id, &s.row))
            .collect();

        // Root rows in request order
        let suppliers = ids
            .iter()
            .filter_map(|id| by_id.get(id).map(|row| (*row).clone()))
            .collect();

        let wanted: HashSet<SupplierId> = ids.iter().copied().collect();
        let mut children = self.data.children.clone();
        children.retain_suppliers(|id| wanted.contains(&id));

        Ok(SupplierTables {
            suppliers,
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rows::{AddressRow, ContactRow};
    use chrono::TimeZone;

    fn supplier(id: i64, day: u32) -> FixtureSupplier {
        FixtureSupplier {
            row: SupplierRow {
                supplier_id: SupplierId::new(id),
                name: format!("Supplier {id}"),
                number: format!("S-{id}"),
                ..Default::default()
            },
            status: "Updated".to_string(),
            modified_at: Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap(),
        }
    }

    fn source() -> InMemorySource {
        InMemorySource::new(FixtureData {
            suppliers: vec![supplier(3, 1), supplier(1, 5), supplier(2, 9)],
            children: ChildTables {
                addresses: vec![
                    AddressRow {
                        supplier_id: SupplierId::new(1),
                        ..Default::default()
                    },
                    AddressRow {
                        supplier_id: SupplierId::new(3),
                        ..Default::default()
                    },
                ],
                contacts: vec![ContactRow {
                    supplier_id: SupplierId::new(2),
                    ..Default::default()
                }],
                ..Default::default()
            },
        })
    }

    fn window(page_number: i64, page_size: i64) -> PageWindow {
        PageWindow::new(page_number, page_size, 1000).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_filters_by_modified_since() {
        let since = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let query = SupplierDataQuery::new(Some(since), 1, 10);

        let page = source()
            .resolve_supplier_ids(&query, window(1, 10))
            .await
            .unwrap();

        assert_eq!(page.supplier_ids(), vec![SupplierId::new(1), SupplierId::new(2)]);
        assert_eq!(page.total_records, 2);
    }

    #[tokio::test]
    async fn test_resolve_pages_in_input_order() {
        let query = SupplierDataQuery::new(None, 2, 2);
        let page = source()
            .resolve_supplier_ids(&query, window(2, 2))
            .await
            .unwrap();

        assert_eq!(page.supplier_ids(), vec![SupplierId::new(2)]);
        assert_eq!(page.total_records, 3);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty_with_total() {
        let query = SupplierDataQuery::new(None, 5, 2);
        let page = source()
            .resolve_supplier_ids(&query, window(5, 2))
            .await
            .unwrap();

        assert!(page.is_empty());
        assert_eq!(page.total_records, 3);
    }

    #[tokio::test]
    async fn test_fetch_scopes_tables_to_ids() {
        let tables = source()
            .fetch_supplier_tables(&[SupplierId::new(1), SupplierId::new(3)])
            .await
            .unwrap();

        let ids: Vec<_> = tables.suppliers.iter().map(|s| s.supplier_id).collect();
        assert_eq!(ids, vec![SupplierId::new(1), SupplierId::new(3)]);
        assert_eq!(tables.children.addresses.len(), 2);
        assert!(tables.children.contacts.is_empty());
    }

    #[test]
    fn test_fixture_json_parsing() {
        let json = r#"{
            "suppliers": [
                { "id": 7, "name": "Delta", "number": "S-7",
                  "status": "New", "modified_at": "2024-01-01T00:00:00Z" }
            ],
            "profiles": [ { "supplier_id": 7, "supplier_to_profile_id": 70, "name": "Sand" } ]
        }"#;

        let data = FixtureData::from_json(json).unwrap();
        assert_eq!(data.suppliers[0].row.supplier_id, SupplierId::new(7));
        assert_eq!(data.suppliers[0].status, "New");
        assert_eq!(data.children.profiles.len(), 1);
        assert!(data.children.addresses.is_empty());
    }

    #[test]
    fn test_fixture_json_rejects_garbage() {
        let err = FixtureData::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, FeedError::Configuration(_)));
    }
}
