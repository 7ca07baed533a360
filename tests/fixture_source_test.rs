//! End-to-end tests over the bundled JSON fixture
//!
//! Runs the full pipeline (resolve, fetch, compose, assemble) against
//! `fixtures/suppliers.json` through the in-memory data source.

use chrono::{TimeZone, Utc};
use std::sync::Arc;
use supplier_feed::adapters::InMemorySource;
use supplier_feed::core::feed::SupplierFeedService;
use supplier_feed::domain::supplier::SupplierResponse;
use supplier_feed::domain::SupplierDataQuery;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/suppliers.json");

async fn fetch(query: SupplierDataQuery) -> SupplierResponse {
    let source = InMemorySource::from_path(FIXTURE).await.unwrap();
    let service = SupplierFeedService::with_max_page_size(Arc::new(source), 1000);
    service.handle(&query).await.unwrap()
}

#[tokio::test]
async fn test_full_page_without_cursor() {
    let response = fetch(SupplierDataQuery::new(None, 1, 10)).await;

    assert_eq!(response.total_records, 3);
    let names: Vec<_> = response.suppliers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Gravel", "Birch Quarries", "Cedar Concrete"]);

    let statuses: Vec<_> = response.suppliers.iter().map(|s| s.status.as_str()).collect();
    assert_eq!(statuses, vec!["Updated", "New", "Deleted"]);
}

#[tokio::test]
async fn test_cursor_and_paging() {
    let since = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

    let first = fetch(SupplierDataQuery::new(Some(since), 1, 1)).await;
    let second = fetch(SupplierDataQuery::new(Some(since), 2, 1)).await;
    let third = fetch(SupplierDataQuery::new(Some(since), 3, 1)).await;

    assert_eq!(first.total_records, 2);
    assert_eq!(first.suppliers[0].name, "Acme Gravel");
    assert_eq!(second.suppliers[0].name, "Birch Quarries");
    assert!(third.suppliers.is_empty());
    assert_eq!(third.total_records, 2);
}

#[tokio::test]
async fn test_acme_tree() {
    let response = fetch(SupplierDataQuery::new(None, 1, 1)).await;
    let acme = &response.suppliers[0];

    assert_eq!(acme.erp_number.as_deref(), Some("ERP-1001"));
    assert_eq!(acme.addresses.len(), 1);
    assert_eq!(acme.addresses[0].city.as_deref(), Some("Linz"));
    assert_eq!(acme.contacts.len(), 1);

    let names: Vec<_> = acme.profiles.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Aggregates", "Asphalt"]);

    let aggregates = &acme.profiles[0];
    assert_eq!(aggregates.clients.len(), 1);

    let articles: Vec<_> = aggregates
        .products
        .iter()
        .map(|p| (p.product.as_str(), p.articles.len()))
        .collect();
    assert_eq!(articles, vec![("Gravel", 2), ("Sand", 0)]);

    let links: Vec<_> = aggregates
        .loading_points
        .iter()
        .map(|lp| (lp.number.as_str(), lp.product_articles.len()))
        .collect();
    assert_eq!(links, vec![("LP1", 1), ("LP2", 1)]);

    assert_eq!(aggregates.loading_number_groups.len(), 1);
    let acme_group = &aggregates.loading_number_groups[0];
    assert_eq!(acme_group.client_name, "Acme");

    let points: Vec<_> = acme_group
        .loading_point_groups
        .iter()
        .map(|g| {
            let numbers: Vec<_> = g.entries.iter().map(|e| e.loading_number.as_str()).collect();
            (g.loading_point_number.as_str(), numbers)
        })
        .collect();
    assert_eq!(
        points,
        vec![
            ("LP1", vec!["LN-100-1", "LN-100-2"]),
            ("LP2", vec!["LN-101-1"]),
        ]
    );
    assert_eq!(acme_group.loading_point_groups[0].entries[0].pin.as_deref(), Some("4711"));
}

#[tokio::test]
async fn test_children_stay_with_their_supplier() {
    let response = fetch(SupplierDataQuery::new(None, 2, 1)).await;
    let birch = &response.suppliers[0];

    assert_eq!(birch.name, "Birch Quarries");
    assert_eq!(birch.profiles.len(), 1);
    assert_eq!(birch.profiles[0].clients[0].name, "Roadworks Ltd");
    assert!(birch.profiles[0].products.is_empty());
    assert!(birch.contacts.is_empty());
}
