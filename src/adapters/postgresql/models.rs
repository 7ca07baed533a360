//! Row mapping for the supplier result sets
//!
//! Each `get_supplier_*` function returns columns named after the fields of
//! the matching flat row type.

use crate::domain::ids::{ProductId, SupplierId, SupplierToLoadingPointId, SupplierToProfileId};
use crate::domain::rows::{
    AddressRow, ArticleRow, ClientRow, ContactRow, LoadingNumberRow, LoadingPointRow,
    ProductArticleRow, ProductRow, ProfileRow, SupplierRow, SupplierStatusRow,
};
use crate::domain::{FeedError, Result};
use tokio_postgres::Row;

/// Conversion from one result row
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> std::result::Result<Self, tokio_postgres::Error>;
}

/// Maps every row of `table`, failing on the first column mismatch
pub fn map_rows<T: FromRow>(table: &str, rows: &[Row]) -> Result<Vec<T>> {
    rows.iter()
        .map(T::from_row)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| FeedError::FetchFailure(format!("Failed to map {table} row: {e}")))
}

fn supplier_id(row: &Row) -> std::result::Result<SupplierId, tokio_postgres::Error> {
    row.try_get::<_, i64>("supplier_id").map(SupplierId::new)
}

fn profile_id(row: &Row) -> std::result::Result<SupplierToProfileId, tokio_postgres::Error> {
    row.try_get::<_, i64>("supplier_to_profile_id")
        .map(SupplierToProfileId::new)
}

fn loading_point_id(
    row: &Row,
) -> std::result::Result<SupplierToLoadingPointId, tokio_postgres::Error> {
    row.try_get::<_, i64>("supplier_to_loading_point_id")
        .map(SupplierToLoadingPointId::new)
}

impl FromRow for SupplierStatusRow {
    fn from_row(row: &Row) -> std::result::Result<Self, tokio_postgres::Error> {
        Ok(Self {
            supplier_id: supplier_id(row)?,
            status: row.try_get("status")?,
        })
    }
}

impl FromRow for SupplierRow {
    fn from_row(row: &Row) -> std::result::Result<Self, tokio_postgres::Error> {
        Ok(Self {
            supplier_id: supplier_id(row)?,
            name: row.try_get("name")?,
            number: row.try_get("number")?,
            erp_number: row.try_get("erp_number")?,
            short_name: row.try_get("short_name")?,
            active: row.try_get("active")?,
            description: row.try_get("description")?,
        })
    }
}

impl FromRow for AddressRow {
    fn from_row(row: &Row) -> std::result::Result<Self, tokio_postgres::Error> {
        Ok(Self {
            supplier_id: supplier_id(row)?,
            street: row.try_get("street")?,
            street_number: row.try_get("street_number")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            zip: row.try_get("zip")?,
            country: row.try_get("country")?,
            district: row.try_get("district")?,
            is_default: row.try_get("is_default")?,
            language: row.try_get("language")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            time_zone: row.try_get("time_zone")?,
        })
    }
}

impl FromRow for ContactRow {
    fn from_row(row: &Row) -> std::result::Result<Self, tokio_postgres::Error> {
        Ok(Self {
            supplier_id: supplier_id(row)?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            middle_name: row.try_get("middle_name")?,
            phone: row.try_get("phone")?,
            phone_type: row.try_get("phone_type")?,
            email: row.try_get("email")?,
            email_type: row.try_get("email_type")?,
            match_code: row.try_get("match_code")?,
        })
    }
}

impl FromRow for ProfileRow {
    fn from_row(row: &Row) -> std::result::Result<Self, tokio_postgres::Error> {
        Ok(Self {
            supplier_id: supplier_id(row)?,
            supplier_to_profile_id: profile_id(row)?,
            name: row.try_get("name")?,
        })
    }
}

impl FromRow for ClientRow {
    fn from_row(row: &Row) -> std::result::Result<Self, tokio_postgres::Error> {
        Ok(Self {
            supplier_id: supplier_id(row)?,
            supplier_to_profile_id: profile_id(row)?,
            name: row.try_get("name")?,
            number: row.try_get("number")?,
        })
    }
}

impl FromRow for ProductRow {
    fn from_row(row: &Row) -> std::result::Result<Self, tokio_postgres::Error> {
        Ok(Self {
            supplier_id: supplier_id(row)?,
            supplier_to_profile_id: profile_id(row)?,
            product_id: row.try_get::<_, i64>("product_id").map(ProductId::new)?,
            product: row.try_get("product")?,
            product_number: row.try_get("product_number")?,
        })
    }
}

impl FromRow for ArticleRow {
    fn from_row(row: &Row) -> std::result::Result<Self, tokio_postgres::Error> {
        Ok(Self {
            supplier_id: supplier_id(row)?,
            supplier_to_profile_id: profile_id(row)?,
            product_id: row.try_get::<_, i64>("product_id").map(ProductId::new)?,
            article: row.try_get("article")?,
            article_number: row.try_get("article_number")?,
            is_assigned_to_product: row.try_get("is_assigned_to_product")?,
        })
    }
}

impl FromRow for LoadingPointRow {
    fn from_row(row: &Row) -> std::result::Result<Self, tokio_postgres::Error> {
        Ok(Self {
            supplier_id: supplier_id(row)?,
            supplier_to_profile_id: profile_id(row)?,
            supplier_to_loading_point_id: loading_point_id(row)?,
            name: row.try_get("name")?,
            number: row.try_get("number")?,
        })
    }
}

impl FromRow for ProductArticleRow {
    fn from_row(row: &Row) -> std::result::Result<Self, tokio_postgres::Error> {
        Ok(Self {
            supplier_id: supplier_id(row)?,
            supplier_to_profile_id: profile_id(row)?,
            supplier_to_loading_point_id: loading_point_id(row)?,
            product: row.try_get("product")?,
            article: row.try_get("article")?,
        })
    }
}

impl FromRow for LoadingNumberRow {
    fn from_row(row: &Row) -> std::result::Result<Self, tokio_postgres::Error> {
        Ok(Self {
            supplier_id: supplier_id(row)?,
            supplier_to_profile_id: profile_id(row)?,
            supplier_to_loading_point_id: loading_point_id(row)?,
            client_name: row.try_get("client_name")?,
            loading_point: row.try_get("loading_point")?,
            loading_point_number: row.try_get("loading_point_number")?,
            product: row.try_get("product")?,
            article: row.try_get("article")?,
            loading_number: row.try_get("loading_number")?,
            pin: row.try_get("pin")?,
        })
    }
}
