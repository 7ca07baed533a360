//! Grouped loading-number reconstruction
//!
//! A profile's loading-number rows become a two-level tree: one group per
//! client name, and within it one group per loading point name/number pair.
//! Each group level keeps the first row seen as its representative.
//!
//! The entries of a loading point group are not the rows that landed in that
//! bucket. They are re-collected from the whole profile by
//! (profile, representative's loading point id, client name). Rows that share
//! the displayed loading point name/number with the representative but were
//! collapsed by the grouping are recovered this way, and rows are matched on
//! the loading point identifier rather than its display name.

use super::index::{group_in_order, ChildIndex, ProfileKey};
use crate::domain::rows::LoadingNumberRow;
use crate::domain::supplier::{LoadingNumberEntry, LoadingNumberGroup, LoadingPointGroup};

/// Builds the loading-number groups of one supplier profile
pub fn compose_loading_numbers(
    profile: ProfileKey,
    index: &ChildIndex<'_>,
) -> Vec<LoadingNumberGroup> {
    let rows = index.loading_numbers.get(&profile);

    group_in_order(rows.iter().copied(), |r| r.client_name.as_str())
        .into_iter()
        .map(|client_rows| {
            let client_name = client_rows[0].client_name.as_str();
            LoadingNumberGroup {
                client_name: client_name.to_string(),
                loading_point_groups: compose_loading_point_groups(
                    profile,
                    client_name,
                    &client_rows,
                    index,
                ),
            }
        })
        .collect()
}

fn compose_loading_point_groups(
    (supplier_id, profile_id): ProfileKey,
    client_name: &str,
    client_rows: &[&LoadingNumberRow],
    index: &ChildIndex<'_>,
) -> Vec<LoadingPointGroup> {
    group_in_order(client_rows.iter().copied(), |r| {
        (r.loading_point.as_str(), r.loading_point_number.as_str())
    })
    .into_iter()
    .map(|point_rows| {
        let representative = point_rows[0];
        let entries = index
            .loading_numbers_by_point
            .get(&(
                supplier_id,
                profile_id,
                representative.supplier_to_loading_point_id,
                client_name,
            ))
            .iter()
            .map(|row| LoadingNumberEntry {
                product: row.product.clone(),
                article: row.article.clone(),
                loading_number: row.loading_number.clone(),
                pin: row.pin.clone(),
            })
            .collect();

        LoadingPointGroup {
            loading_point: representative.loading_point.clone(),
            loading_point_number: representative.loading_point_number.clone(),
            entries,
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::{SupplierId, SupplierToLoadingPointId, SupplierToProfileId};
    use crate::domain::rows::ChildTables;

    const SUPPLIER: SupplierId = SupplierId::new(1);
    const PROFILE: SupplierToProfileId = SupplierToProfileId::new(10);

    fn row(client: &str, point_id: i64, point: &str, number: &str, ln: &str) -> LoadingNumberRow {
        LoadingNumberRow {
            supplier_id: SUPPLIER,
            supplier_to_profile_id: PROFILE,
            supplier_to_loading_point_id: SupplierToLoadingPointId::new(point_id),
            client_name: client.to_string(),
            loading_point: point.to_string(),
            loading_point_number: number.to_string(),
            product: "Gravel".to_string(),
            article: "0/16".to_string(),
            loading_number: ln.to_string(),
            pin: None,
        }
    }

    fn compose_rows(rows: Vec<LoadingNumberRow>) -> Vec<LoadingNumberGroup> {
        let tables = ChildTables {
            loading_numbers: rows,
            ..Default::default()
        };
        let index = ChildIndex::build(&tables);
        compose_loading_numbers((SUPPLIER, PROFILE), &index)
    }

    #[test]
    fn test_one_group_per_client_in_first_seen_order() {
        let groups = compose_rows(vec![
            row("Beta", 1, "North", "LP1", "LN-1"),
            row("Acme", 1, "North", "LP1", "LN-2"),
            row("Beta", 2, "South", "LP2", "LN-3"),
        ]);

        let clients: Vec<_> = groups.iter().map(|g| g.client_name.as_str()).collect();
        assert_eq!(clients, vec!["Beta", "Acme"]);
        assert_eq!(groups[0].loading_point_groups.len(), 2);
        assert_eq!(groups[1].loading_point_groups.len(), 1);
    }

    #[test]
    fn test_point_group_collects_all_entries_for_full_key() {
        let groups = compose_rows(vec![
            row("Acme", 1, "North", "LP1", "LN-1"),
            row("Acme", 1, "North", "LP1", "LN-2"),
            row("Beta", 1, "North", "LP1", "LN-3"),
        ]);

        let acme = &groups[0];
        assert_eq!(acme.loading_point_groups.len(), 1);
        let numbers: Vec<_> = acme.loading_point_groups[0]
            .entries
            .iter()
            .map(|e| e.loading_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["LN-1", "LN-2"]);
    }

    #[test]
    fn test_entries_follow_representative_loading_point_id() {
        // Same displayed name/number under two loading point ids: the group
        // takes the first id and collects that id's rows only.
        let groups = compose_rows(vec![
            row("Acme", 1, "North", "LP1", "LN-1"),
            row("Acme", 2, "North", "LP1", "LN-2"),
            row("Acme", 1, "North pit", "LP1", "LN-3"),
        ]);

        let points = &groups[0].loading_point_groups;
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].loading_point, "North");
        let first: Vec<_> = points[0].entries.iter().map(|e| e.loading_number.as_str()).collect();
        assert_eq!(first, vec!["LN-1", "LN-3"]);

        // "North pit" shares loading point id 1, so it re-collects the same rows
        assert_eq!(points[1].loading_point, "North pit");
        assert_eq!(points[1].entries.len(), 2);
    }

    #[test]
    fn test_other_profile_rows_are_ignored() {
        let mut foreign = row("Acme", 1, "North", "LP1", "LN-9");
        foreign.supplier_to_profile_id = SupplierToProfileId::new(11);

        let groups = compose_rows(vec![foreign, row("Acme", 1, "North", "LP1", "LN-1")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].loading_point_groups[0].entries.len(), 1);
        assert_eq!(
            groups[0].loading_point_groups[0].entries[0].loading_number,
            "LN-1"
        );
    }

    #[test]
    fn test_no_rows_yields_no_groups() {
        assert!(compose_rows(vec![]).is_empty());
    }
}
