//! Foreign-key lookup indices
//!
//! Every child table is indexed once per request so that attaching children
//! to a parent is a hash lookup instead of a scan over the whole table.
//! Buckets keep the input order of their rows.

use crate::domain::ids::{ProductId, SupplierId, SupplierToLoadingPointId, SupplierToProfileId};
use crate::domain::rows::{
    AddressRow, ArticleRow, ChildTables, ClientRow, ContactRow, LoadingNumberRow,
    LoadingPointRow, ProductArticleRow, ProductRow, ProfileRow, SupplierStatusRow,
};
use std::collections::HashMap;
use std::hash::Hash;

/// Rows of one supplier-to-profile link are keyed by both ids, so a row that
/// names a profile of a different supplier is treated as an orphan.
pub type ProfileKey = (SupplierId, SupplierToProfileId);

pub type ArticleKey = (SupplierId, SupplierToProfileId, ProductId);

pub type LoadingPointKey = (SupplierId, SupplierToProfileId, SupplierToLoadingPointId);

/// Full key used to re-collect loading numbers for a loading point group
pub type LoadingNumberKey<'a> = (
    SupplierId,
    SupplierToProfileId,
    SupplierToLoadingPointId,
    &'a str,
);

/// Multimap from a foreign key to the rows carrying it
#[derive(Debug)]
pub struct GroupIndex<'a, K, R> {
    buckets: HashMap<K, Vec<&'a R>>,
}

impl<'a, K, R> GroupIndex<'a, K, R>
where
    K: Eq + Hash,
{
    /// Indexes `rows` by `key`
    pub fn build(rows: &'a [R], key: impl Fn(&'a R) -> K) -> Self {
        let mut buckets: HashMap<K, Vec<&'a R>> = HashMap::new();
        for row in rows {
            buckets.entry(key(row)).or_default().push(row);
        }
        Self { buckets }
    }

    /// Rows carrying `key`, in input order; empty when nothing matches
    pub fn get(&self, key: &K) -> &[&'a R] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct keys
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }
}

/// Splits `rows` into buckets of equal key, ordered by first appearance
///
/// The first row of each bucket is its representative.
pub fn group_in_order<'a, R, K>(
    rows: impl IntoIterator<Item = &'a R>,
    key: impl Fn(&'a R) -> K,
) -> Vec<Vec<&'a R>>
where
    R: 'a,
    K: Eq + Hash,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Vec<&'a R>> = Vec::new();

    for row in rows {
        let slot = *positions.entry(key(row)).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(row);
    }

    groups
}

/// Status of each supplier on the page
///
/// A supplier without a status row is valid and simply has no status.
#[derive(Debug)]
pub struct StatusLookup<'a> {
    statuses: HashMap<SupplierId, &'a str>,
}

impl<'a> StatusLookup<'a> {
    pub fn build(rows: &'a [SupplierStatusRow]) -> Self {
        let mut statuses = HashMap::with_capacity(rows.len());
        for row in rows {
            // first row wins
            statuses
                .entry(row.supplier_id)
                .or_insert(row.status.as_str());
        }
        Self { statuses }
    }

    pub fn status_of(&self, supplier_id: SupplierId) -> Option<&'a str> {
        self.statuses.get(&supplier_id).copied()
    }
}

/// All child-table indices for one request
#[derive(Debug)]
pub struct ChildIndex<'a> {
    pub addresses: GroupIndex<'a, SupplierId, AddressRow>,
    pub contacts: GroupIndex<'a, SupplierId, ContactRow>,
    pub profiles: GroupIndex<'a, SupplierId, ProfileRow>,
    pub clients: GroupIndex<'a, ProfileKey, ClientRow>,
    pub products: GroupIndex<'a, ProfileKey, ProductRow>,
    pub articles: GroupIndex<'a, ArticleKey, ArticleRow>,
    pub loading_points: GroupIndex<'a, ProfileKey, LoadingPointRow>,
    pub product_articles: GroupIndex<'a, LoadingPointKey, ProductArticleRow>,
    pub loading_numbers: GroupIndex<'a, ProfileKey, LoadingNumberRow>,
    pub loading_numbers_by_point: GroupIndex<'a, LoadingNumberKey<'a>, LoadingNumberRow>,
}

impl<'a> ChildIndex<'a> {
    pub fn build(tables: &'a ChildTables) -> Self {
        Self {
            addresses: GroupIndex::build(&tables.addresses, |r| r.supplier_id),
            contacts: GroupIndex::build(&tables.contacts, |r| r.supplier_id),
            profiles: GroupIndex::build(&tables.profiles, |r| r.supplier_id),
            clients: GroupIndex::build(&tables.clients, |r| {
                (r.supplier_id, r.supplier_to_profile_id)
            }),
            products: GroupIndex::build(&tables.products, |r| {
                (r.supplier_id, r.supplier_to_profile_id)
            }),
            articles: GroupIndex::build(&tables.articles, |r| {
                (r.supplier_id, r.supplier_to_profile_id, r.product_id)
            }),
            loading_points: GroupIndex::build(&tables.loading_points, |r| {
                (r.supplier_id, r.supplier_to_profile_id)
            }),
            product_articles: GroupIndex::build(&tables.product_articles, |r| {
                (
                    r.supplier_id,
                    r.supplier_to_profile_id,
                    r.supplier_to_loading_point_id,
                )
            }),
            loading_numbers: GroupIndex::build(&tables.loading_numbers, |r| {
                (r.supplier_id, r.supplier_to_profile_id)
            }),
            loading_numbers_by_point: GroupIndex::build(&tables.loading_numbers, |r| {
                (
                    r.supplier_id,
                    r.supplier_to_profile_id,
                    r.supplier_to_loading_point_id,
                    r.client_name.as_str(),
                )
            }),
        }
    }
}
