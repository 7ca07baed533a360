//! Flat supplier result sets
//!
//! Each type mirrors one denormalized row produced by the fetch layer. A row
//! carries its own key plus the keys of every ancestor as plain fields; the
//! composition engine rebuilds the tree from those keys alone.

use super::ids::{ProductId, SupplierId, SupplierToLoadingPointId, SupplierToProfileId};
use serde::{Deserialize, Serialize};

/// Identifier and status of one supplier matched by the page query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierStatusRow {
    #[serde(alias = "id")]
    pub supplier_id: SupplierId,
    pub status: String,
}

/// Scalar fields of a supplier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierRow {
    #[serde(alias = "id")]
    pub supplier_id: SupplierId,
    pub name: String,
    pub number: String,
    #[serde(default)]
    pub erp_number: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressRow {
    pub supplier_id: SupplierId,
    pub street: Option<String>,
    pub street_number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub district: Option<String>,
    pub is_default: bool,
    pub language: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRow {
    pub supplier_id: SupplierId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub phone: Option<String>,
    pub phone_type: Option<String>,
    pub email: Option<String>,
    pub email_type: Option<String>,
    pub match_code: Option<String>,
}

/// One supplier-to-profile relationship
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub supplier_id: SupplierId,
    pub supplier_to_profile_id: SupplierToProfileId,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientRow {
    pub supplier_id: SupplierId,
    pub supplier_to_profile_id: SupplierToProfileId,
    pub name: String,
    #[serde(default)]
    pub number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub supplier_id: SupplierId,
    pub supplier_to_profile_id: SupplierToProfileId,
    pub product_id: ProductId,
    pub product: String,
    #[serde(default)]
    pub product_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleRow {
    pub supplier_id: SupplierId,
    pub supplier_to_profile_id: SupplierToProfileId,
    pub product_id: ProductId,
    pub article: String,
    #[serde(default)]
    pub article_number: String,
    #[serde(default)]
    pub is_assigned_to_product: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadingPointRow {
    pub supplier_id: SupplierId,
    pub supplier_to_profile_id: SupplierToProfileId,
    pub supplier_to_loading_point_id: SupplierToLoadingPointId,
    pub name: String,
    #[serde(default)]
    pub number: String,
}

/// Product/article pair offered at a loading point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductArticleRow {
    pub supplier_id: SupplierId,
    pub supplier_to_profile_id: SupplierToProfileId,
    pub supplier_to_loading_point_id: SupplierToLoadingPointId,
    pub product: String,
    pub article: String,
}

/// Loading number issued for a client at a loading point
///
/// The loading point name and number are denormalized copies; the
/// `supplier_to_loading_point_id` is the authoritative link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadingNumberRow {
    pub supplier_id: SupplierId,
    pub supplier_to_profile_id: SupplierToProfileId,
    pub supplier_to_loading_point_id: SupplierToLoadingPointId,
    pub client_name: String,
    pub loading_point: String,
    #[serde(default)]
    pub loading_point_number: String,
    pub product: String,
    pub article: String,
    pub loading_number: String,
    #[serde(default)]
    pub pin: Option<String>,
}

/// Every child result set fetched for one page of suppliers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildTables {
    pub addresses: Vec<AddressRow>,
    pub contacts: Vec<ContactRow>,
    pub profiles: Vec<ProfileRow>,
    pub clients: Vec<ClientRow>,
    pub products: Vec<ProductRow>,
    pub articles: Vec<ArticleRow>,
    pub loading_points: Vec<LoadingPointRow>,
    pub product_articles: Vec<ProductArticleRow>,
    pub loading_numbers: Vec<LoadingNumberRow>,
}

impl ChildTables {
    /// Total number of child rows across all tables
    pub fn row_count(&self) -> usize {
        self.addresses.len()
            + self.contacts.len()
            + self.profiles.len()
            + self.clients.len()
            + self.products.len()
            + self.articles.len()
            + self.loading_points.len()
            + self.product_articles.len()
            + self.loading_numbers.len()
    }

    /// Keeps only the rows whose supplier passes `keep`
    pub fn retain_suppliers(&mut self, keep: impl Fn(SupplierId) -> bool) {
        self.addresses.retain(|r| keep(r.supplier_id));
        self.contacts.retain(|r| keep(r.supplier_id));
        self.profiles.retain(|r| keep(r.supplier_id));
        self.clients.retain(|r| keep(r.supplier_id));
        self.products.retain(|r| keep(r.supplier_id));
        self.articles.retain(|r| keep(r.supplier_id));
        self.loading_points.retain(|r| keep(r.supplier_id));
        self.product_articles.retain(|r| keep(r.supplier_id));
        self.loading_numbers.retain(|r| keep(r.supplier_id));
    }
}

/// Supplier root rows together with their child result sets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierTables {
    #[serde(default)]
    pub suppliers: Vec<SupplierRow>,
    #[serde(flatten)]
    pub children: ChildTables,
}
