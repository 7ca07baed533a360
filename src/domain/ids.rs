//! Domain identifier types
//!
//! Newtype wrappers for the numeric keys that link the flat supplier result
//! sets together. Keeping them distinct prevents matching, say, a product id
//! against a loading point id by accident.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw database key
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw database key
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

numeric_id!(
    /// Supplier identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use supplier_feed::domain::ids::SupplierId;
    /// use std::str::FromStr;
    ///
    /// let id = SupplierId::from_str("42").unwrap();
    /// assert_eq!(id.get(), 42);
    /// ```
    SupplierId
);

numeric_id!(
    /// Key of one supplier-to-profile relationship
    SupplierToProfileId
);

numeric_id!(
    /// Product key, scoped to a supplier profile
    ProductId
);

numeric_id!(
    /// Key of one supplier-to-loading-point relationship
    SupplierToLoadingPointId
);
