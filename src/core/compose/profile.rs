//! Profile-scoped nesting
//!
//! Clients, products (with their articles) and loading points (with their
//! product/article links) of one supplier-to-profile relationship.

use super::index::{ChildIndex, ProfileKey};
use super::loading_numbers::compose_loading_numbers;
use crate::domain::rows::{LoadingPointRow, ProductRow, ProfileRow};
use crate::domain::supplier::{
    LoadingPointProductArticle, SupplierArticle, SupplierClient, SupplierLoadingPoint,
    SupplierProduct, SupplierProfile,
};

/// Builds one profile with all of its nested collections
pub fn compose_profile(profile: &ProfileRow, index: &ChildIndex<'_>) -> SupplierProfile {
    let key: ProfileKey = (profile.supplier_id, profile.supplier_to_profile_id);

    SupplierProfile {
        name: profile.name.clone(),
        clients: compose_clients(key, index),
        products: index
            .products
            .get(&key)
            .iter()
            .map(|product| compose_product(product, index))
            .collect(),
        loading_points: index
            .loading_points
            .get(&key)
            .iter()
            .map(|point| compose_loading_point(point, index))
            .collect(),
        loading_number_groups: compose_loading_numbers(key, index),
    }
}

fn compose_clients(key: ProfileKey, index: &ChildIndex<'_>) -> Vec<SupplierClient> {
    index
        .clients
        .get(&key)
        .iter()
        .map(|client| SupplierClient {
            name: client.name.clone(),
            number: client.number.clone(),
        })
        .collect()
}

fn compose_product(product: &ProductRow, index: &ChildIndex<'_>) -> SupplierProduct {
    let articles = index
        .articles
        .get(&(
            product.supplier_id,
            product.supplier_to_profile_id,
            product.product_id,
        ))
        .iter()
        .map(|article| SupplierArticle {
            article: article.article.clone(),
            article_number: article.article_number.clone(),
            is_assigned_to_product: article.is_assigned_to_product,
        })
        .collect();

    SupplierProduct {
        product: product.product.clone(),
        product_number: product.product_number.clone(),
        articles,
    }
}

fn compose_loading_point(point: &LoadingPointRow, index: &ChildIndex<'_>) -> SupplierLoadingPoint {
    let product_articles = index
        .product_articles
        .get(&(
            point.supplier_id,
            point.supplier_to_profile_id,
            point.supplier_to_loading_point_id,
        ))
        .iter()
        .map(|link| LoadingPointProductArticle {
            product: link.product.clone(),
            article: link.article.clone(),
        })
        .collect();

    SupplierLoadingPoint {
        name: point.name.clone(),
        number: point.number.clone(),
        product_articles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::{ProductId, SupplierId, SupplierToLoadingPointId, SupplierToProfileId};
    use crate::domain::rows::{ArticleRow, ChildTables, ClientRow, ProductArticleRow};

    const SUPPLIER: SupplierId = SupplierId::new(1);
    const PROFILE: SupplierToProfileId = SupplierToProfileId::new(10);

    fn profile_row() -> ProfileRow {
        ProfileRow {
            supplier_id: SUPPLIER,
            supplier_to_profile_id: PROFILE,
            name: "Aggregates".to_string(),
        }
    }

    fn product(id: i64, name: &str) -> ProductRow {
        ProductRow {
            supplier_id: SUPPLIER,
            supplier_to_profile_id: PROFILE,
            product_id: ProductId::new(id),
            product: name.to_string(),
            product_number: format!("P-{id}"),
        }
    }

    fn article(product_id: i64, profile: SupplierToProfileId, name: &str) -> ArticleRow {
        ArticleRow {
            supplier_id: SUPPLIER,
            supplier_to_profile_id: profile,
            product_id: ProductId::new(product_id),
            article: name.to_string(),
            article_number: format!("A-{name}"),
            is_assigned_to_product: true,
        }
    }

    #[test]
    fn test_articles_match_profile_and_product() {
        let tables = ChildTables {
            products: vec![product(1, "Gravel"), product(2, "Sand")],
            articles: vec![
                article(1, PROFILE, "0/16"),
                article(2, PROFILE, "0/2"),
                article(1, SupplierToProfileId::new(99), "foreign"),
                article(1, PROFILE, "16/32"),
            ],
            ..Default::default()
        };
        let index = ChildIndex::build(&tables);

        let composed = compose_profile(&profile_row(), &index);
        assert_eq!(composed.name, "Aggregates");
        assert_eq!(composed.products.len(), 2);

        let gravel: Vec<_> = composed.products[0]
            .articles
            .iter()
            .map(|a| a.article.as_str())
            .collect();
        assert_eq!(gravel, vec!["0/16", "16/32"]);
        assert_eq!(composed.products[1].articles.len(), 1);
    }

    #[test]
    fn test_product_without_articles_has_empty_list() {
        let tables = ChildTables {
            products: vec![product(3, "Crushed stone")],
            ..Default::default()
        };
        let index = ChildIndex::build(&tables);

        let composed = compose_profile(&profile_row(), &index);
        assert_eq!(composed.products.len(), 1);
        assert!(composed.products[0].articles.is_empty());
    }

    #[test]
    fn test_clients_and_loading_point_links() {
        let tables = ChildTables {
            clients: vec![ClientRow {
                supplier_id: SUPPLIER,
                supplier_to_profile_id: PROFILE,
                name: "Acme".to_string(),
                number: "C-1".to_string(),
            }],
            loading_points: vec![LoadingPointRow {
                supplier_id: SUPPLIER,
                supplier_to_profile_id: PROFILE,
                supplier_to_loading_point_id: SupplierToLoadingPointId::new(5),
                name: "North Pit".to_string(),
                number: "LP1".to_string(),
            }],
            product_articles: vec![
                ProductArticleRow {
                    supplier_id: SUPPLIER,
                    supplier_to_profile_id: PROFILE,
                    supplier_to_loading_point_id: SupplierToLoadingPointId::new(5),
                    product: "Gravel".to_string(),
                    article: "0/16".to_string(),
                },
                ProductArticleRow {
                    supplier_id: SUPPLIER,
                    supplier_to_profile_id: PROFILE,
                    supplier_to_loading_point_id: SupplierToLoadingPointId::new(6),
                    product: "Sand".to_string(),
                    article: "0/2".to_string(),
                },
            ],
            ..Default::default()
        };
        let index = ChildIndex::build(&tables);

        let composed = compose_profile(&profile_row(), &index);
        assert_eq!(composed.clients.len(), 1);
        assert_eq!(composed.clients[0].number, "C-1");
        assert_eq!(composed.loading_points.len(), 1);
        assert_eq!(composed.loading_points[0].product_articles.len(), 1);
        assert_eq!(composed.loading_points[0].product_articles[0].product, "Gravel");
        assert!(composed.loading_number_groups.is_empty());
    }
}
