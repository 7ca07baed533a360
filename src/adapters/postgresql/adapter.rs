//! PostgreSQL implementation of the supplier data source
//!
//! The database exposes set-returning functions in a configurable schema:
//!
//! | Function | Returns |
//! |----------|---------|
//! | `get_supplier_ids(modified_since timestamptz, page_number bigint, page_size bigint)` | `supplier_id`, `status` |
//! | `count_supplier_ids(modified_since timestamptz)` | `bigint` |
//! | `get_suppliers(ids bigint[])` | supplier root rows |
//! | `get_supplier_<table>(ids bigint[])` | one child table each |
//!
//! Child functions exist for `addresses`, `contacts`, `profiles`, `clients`,
//! `products`, `articles`, `loading_points`, `product_articles` and
//! `loading_numbers`.

use crate::adapters::postgresql::client::PostgresClient;
use crate::adapters::postgresql::models::{map_rows, FromRow};
use crate::adapters::source::SupplierDataSource;
use crate::domain::ids::SupplierId;
use crate::domain::query::{PageWindow, SupplierDataQuery};
use crate::domain::rows::{ChildTables, SupplierRow, SupplierStatusRow, SupplierTables};
use crate::domain::{FeedError, Result, SupplierPage};
use async_trait::async_trait;
use deadpool_postgres::Object;
use std::collections::HashMap;
use std::sync::Arc;
use tokio_postgres::types::ToSql;

const CHILD_TABLES: [&str; 9] = [
    "addresses",
    "contacts",
    "profiles",
    "clients",
    "products",
    "articles",
    "loading_points",
    "product_articles",
    "loading_numbers",
];

/// SQL text for every function call, qualified with the configured schema
#[derive(Debug, Clone)]
struct SupplierQueries {
    ids: String,
    count: String,
    suppliers: String,
    children: [String; 9],
}

impl SupplierQueries {
    fn new(schema: &str) -> Self {
        Self {
            ids: format!("SELECT supplier_id, status FROM {schema}.get_supplier_ids($1, $2, $3)"),
            count: format!("SELECT {schema}.count_supplier_ids($1)"),
            suppliers: format!("SELECT * FROM {schema}.get_suppliers($1)"),
            children: CHILD_TABLES
                .map(|table| format!("SELECT * FROM {schema}.get_supplier_{table}($1)")),
        }
    }
}

/// Supplier data source backed by PostgreSQL
pub struct PostgresSupplierSource {
    client: Arc<PostgresClient>,
    queries: SupplierQueries,
}

impl PostgresSupplierSource {
    pub fn new(client: PostgresClient) -> Self {
        Self::new_with_arc(Arc::new(client))
    }

    pub fn new_with_arc(client: Arc<PostgresClient>) -> Self {
        let queries = SupplierQueries::new(client.schema());
        Self { client, queries }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<PostgresClient> {
        &self.client
    }
}

async fn query_table<T: FromRow>(
    conn: &Object,
    table: &str,
    sql: &str,
    ids: &(dyn ToSql + Sync),
) -> Result<Vec<T>> {
    let rows = conn
        .query(sql, &[ids])
        .await
        .map_err(|e| FeedError::FetchFailure(format!("Failed to fetch {table}: {e}")))?;
    map_rows(table, &rows)
}

#[async_trait]
impl SupplierDataSource for PostgresSupplierSource {
    fn source_name(&self) -> &'static str {
        "postgresql"
    }

    async fn resolve_supplier_ids(
        &self,
        query: &SupplierDataQuery,
        window: PageWindow,
    ) -> Result<SupplierPage> {
        let conn = self.client.get_connection().await?;
        let modified_since = query.modified_since_utc;
        let page_number = i64::from(window.page_number());
        let page_size = i64::from(window.page_size());

        let (id_rows, count_row) = futures::try_join!(
            async {
                conn.query(self.queries.ids.as_str(), &[&modified_since, &page_number, &page_size])
                    .await
                    .map_err(|e| {
                        FeedError::FetchFailure(format!("Failed to resolve supplier ids: {e}"))
                    })
            },
            async {
                conn.query_one(self.queries.count.as_str(), &[&modified_since])
                    .await
                    .map_err(|e| {
                        FeedError::FetchFailure(format!("Failed to count supplier ids: {e}"))
                    })
            },
        )?;

        let statuses: Vec<SupplierStatusRow> = map_rows("supplier_ids", &id_rows)?;
        let total: Option<i64> = count_row
            .try_get(0)
            .map_err(|e| FeedError::FetchFailure(format!("Failed to read supplier count: {e}")))?;
        let total_records = u64::try_from(total.unwrap_or(0)).map_err(|_| {
            FeedError::FetchFailure(format!("Negative supplier count: {total:?}"))
        })?;

        tracing::debug!(
            suppliers = statuses.len(),
            total_records,
            "Resolved supplier ids from PostgreSQL"
        );

        Ok(SupplierPage::new(statuses, total_records))
    }

    async fn fetch_supplier_tables(&self, ids: &[SupplierId]) -> Result<SupplierTables> {
        let conn = self.client.get_connection().await?;
        let id_array: Vec<i64> = ids.iter().map(|id| id.get()).collect();
        let q = &self.queries;
        let c = &q.children;

        // All ten calls are pipelined on the same connection
        let (
            suppliers,
            addresses,
            contacts,
            profiles,
            clients,
            products,
            articles,
            loading_points,
            product_articles,
            loading_numbers,
        ) = futures::try_join!(
            query_table(&conn, "suppliers", &q.suppliers, &id_array),
            query_table(&conn, CHILD_TABLES[0], &c[0], &id_array),
            query_table(&conn, CHILD_TABLES[1], &c[1], &id_array),
            query_table(&conn, CHILD_TABLES[2], &c[2], &id_array),
            query_table(&conn, CHILD_TABLES[3], &c[3], &id_array),
            query_table(&conn, CHILD_TABLES[4], &c[4], &id_array),
            query_table(&conn, CHILD_TABLES[5], &c[5], &id_array),
            query_table(&conn, CHILD_TABLES[6], &c[6], &id_array),
            query_table(&conn, CHILD_TABLES[7], &c[7], &id_array),
            query_table(&conn, CHILD_TABLES[8], &c[8], &id_array),
        )?;

        let tables = SupplierTables {
            suppliers: in_request_order(suppliers, ids),
            children: ChildTables {
                addresses,
                contacts,
                profiles,
                clients,
                products,
                articles,
                loading_points,
                product_articles,
                loading_numbers,
            },
        };

        tracing::debug!(
            suppliers = tables.suppliers.len(),
            child_rows = tables.children.row_count(),
            "Fetched supplier tables from PostgreSQL"
        );

        Ok(tables)
    }
}

/// Root rows reordered to follow `ids`; `get_suppliers` returns them in no fixed order
fn in_request_order(rows: Vec<SupplierRow>, ids: &[SupplierId]) -> Vec<SupplierRow> {
    let mut by_id: HashMap<SupplierId, SupplierRow> = HashMap::with_capacity(rows.len());
    for row in rows {
        by_id.entry(row.supplier_id).or_insert(row);
    }
    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(id: i64) -> SupplierRow {
        SupplierRow {
            supplier_id: SupplierId::new(id),
            name: format!("Supplier {id}"),
            ..Default::default()
        }
    }

    #[test]
    fn test_root_rows_follow_requested_ids() {
        let ids = [SupplierId::new(3), SupplierId::new(1), SupplierId::new(2)];
        let ordered = in_request_order(vec![root(1), root(2), root(3)], &ids);

        let got: Vec<_> = ordered.iter().map(|r| r.supplier_id).collect();
        assert_eq!(got, ids.to_vec());
    }

    #[test]
    fn test_root_rows_missing_or_repeated() {
        let ids = [SupplierId::new(2), SupplierId::new(9)];
        let mut first = root(2);
        first.number = "first".to_string();
        let ordered = in_request_order(vec![root(5), first, root(2)], &ids);

        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].number, "first");
    }

    #[test]
    fn test_queries_are_schema_qualified() {
        let queries = SupplierQueries::new("masterdata");
        assert_eq!(
            queries.ids,
            "SELECT supplier_id, status FROM masterdata.get_supplier_ids($1, $2, $3)"
        );
        assert_eq!(queries.count, "SELECT masterdata.count_supplier_ids($1)");
        assert_eq!(queries.suppliers, "SELECT * FROM masterdata.get_suppliers($1)");
        assert_eq!(
            queries.children[8],
            "SELECT * FROM masterdata.get_supplier_loading_numbers($1)"
        );
    }

    #[test]
    fn test_child_function_per_table() {
        let queries = SupplierQueries::new("supplier");
        for (table, sql) in CHILD_TABLES.iter().zip(queries.children.iter()) {
            assert!(sql.ends_with(&format!("get_supplier_{table}($1)")));
        }
    }
}
