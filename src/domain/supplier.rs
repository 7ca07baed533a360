//! Composed supplier records
//!
//! The nested response tree produced by the composition engine. Field names
//! serialize in camelCase; a few collections keep their historical wire names
//! (`articles`, `products`, `loadingNumbers`, `loadingPoints`,
//! `loadingNumberInfo`) so existing consumers of the feed keep working.
//! Collections are always serialized, even when empty.

use serde::{Deserialize, Serialize};

/// One supplier with everything that hangs off it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRecord {
    pub name: String,
    pub number: String,
    #[serde(rename = "erpNumber")]
    pub erp_number: Option<String>,
    pub short_name: Option<String>,
    pub active: bool,
    pub description: Option<String>,
    /// Status from the page query; empty when no status row matched
    pub status: String,
    pub addresses: Vec<Address>,
    pub contacts: Vec<Contact>,
    pub profiles: Vec<SupplierProfile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
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
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub phone: Option<String>,
    pub phone_type: Option<String>,
    pub email: Option<String>,
    pub email_type: Option<String>,
    pub match_code: Option<String>,
}

/// Clients, products and loading points scoped to one supplier-to-profile link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierProfile {
    pub name: String,
    pub clients: Vec<SupplierClient>,
    pub products: Vec<SupplierProduct>,
    pub loading_points: Vec<SupplierLoadingPoint>,
    #[serde(rename = "loadingNumbers")]
    pub loading_number_groups: Vec<LoadingNumberGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierClient {
    pub name: String,
    pub number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierProduct {
    pub product: String,
    pub product_number: String,
    pub articles: Vec<SupplierArticle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierArticle {
    pub article: String,
    pub article_number: String,
    pub is_assigned_to_product: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierLoadingPoint {
    pub name: String,
    pub number: String,
    #[serde(rename = "products")]
    pub product_articles: Vec<LoadingPointProductArticle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingPointProductArticle {
    pub product: String,
    pub article: String,
}

/// Loading numbers of one profile grouped under a client name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingNumberGroup {
    pub client_name: String,
    #[serde(rename = "loadingPoints")]
    pub loading_point_groups: Vec<LoadingPointGroup>,
}

/// Loading numbers of one client grouped under a loading point name/number
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingPointGroup {
    pub loading_point: String,
    pub loading_point_number: String,
    #[serde(rename = "loadingNumberInfo")]
    pub entries: Vec<LoadingNumberEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingNumberEntry {
    pub product: String,
    pub article: String,
    pub loading_number: String,
    pub pin: Option<String>,
}

/// Paginated response envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierResponse {
    pub suppliers: Vec<SupplierRecord>,
    /// Suppliers matching the cursor across all pages
    pub total_records: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_response_serialization() {
        let response = SupplierResponse::default();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"suppliers": [], "totalRecords": 0})
        );
    }

    #[test]
    fn test_product_serializes_empty_articles() {
        let product = SupplierProduct {
            product: "Gravel".to_string(),
            product_number: "P-1".to_string(),
            articles: vec![],
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["articles"], json!([]));
        assert_eq!(value["productNumber"], "P-1");
    }

    #[test]
    fn test_profile_wire_names() {
        let profile = SupplierProfile {
            name: "Default".to_string(),
            loading_points: vec![SupplierLoadingPoint {
                name: "North Pit".to_string(),
                number: "LP1".to_string(),
                product_articles: vec![],
            }],
            loading_number_groups: vec![LoadingNumberGroup {
                client_name: "Acme".to_string(),
                loading_point_groups: vec![LoadingPointGroup {
                    loading_point: "North Pit".to_string(),
                    loading_point_number: "LP1".to_string(),
                    entries: vec![LoadingNumberEntry {
                        product: "Gravel".to_string(),
                        article: "16/32".to_string(),
                        loading_number: "LN-7".to_string(),
                        pin: Some("1234".to_string()),
                    }],
                }],
            }],
            ..Default::default()
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["loadingPoints"][0]["products"], json!([]));
        let group = &value["loadingNumbers"][0];
        assert_eq!(group["clientName"], "Acme");
        let point = &group["loadingPoints"][0];
        assert_eq!(point["loadingPointNumber"], "LP1");
        assert_eq!(point["loadingNumberInfo"][0]["pin"], "1234");
    }

    #[test]
    fn test_supplier_record_erp_number_name() {
        let record = SupplierRecord {
            erp_number: Some("ERP-9".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["erpNumber"], "ERP-9");
        assert_eq!(value["status"], "");
        assert_eq!(value["profiles"], json!([]));
    }
}
