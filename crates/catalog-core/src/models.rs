//! Domain models and the strongly-typed product identifier.
//!
//! Defines the `Product` entity as stored in PostgreSQL and returned on the
//! wire, the `NewProduct` write DTO produced by validation, and the
//! `ProductId` newtype with database serialization traits.
//!
//! Wire field names keep the catalog's historical uppercase keys
//! (`PRODUCTID`, `PRODUCTNAME`, `PRICE`, `STOCK`) so existing API clients
//! continue to work unchanged.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

type PgDb = sqlx::Postgres;
type PgValueRef<'r> = sqlx::postgres::PgValueRef<'r>;
type PgTypeInfo = sqlx::postgres::PgTypeInfo;
type PgArgumentBuffer = sqlx::postgres::PgArgumentBuffer;
type EncodeResult =
    Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync + 'static>>;
type BoxDynError = sqlx::error::BoxDynError;

/// Strongly-typed product identifier.
///
/// Wraps the store-assigned serial key. Assigned on insert and immutable
/// for the lifetime of the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub i32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = CoreError;

    /// Parses an id from its query-string form.
    ///
    /// A value the store could not bind as an integer key is reported as
    /// `CoreError::InvalidId`, which callers surface as a store failure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| CoreError::InvalidId(s.to_string()))
    }
}

impl sqlx::Type<PgDb> for ProductId {
    fn type_info() -> PgTypeInfo {
        <i32 as sqlx::Type<PgDb>>::type_info()
    }
}

impl<'r> sqlx::Decode<'r, PgDb> for ProductId {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let id = <i32 as sqlx::Decode<PgDb>>::decode(value)?;
        Ok(Self(id))
    }
}

impl sqlx::Encode<'_, PgDb> for ProductId {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> EncodeResult {
        <i32 as sqlx::Encode<PgDb>>::encode_by_ref(&self.0, buf)
    }
}

/// A product row as stored and as serialized to API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// Store-assigned unique identifier.
    #[serde(rename = "PRODUCTID")]
    #[sqlx(rename = "productid")]
    pub id: ProductId,

    /// Display name, unique across the catalog.
    #[serde(rename = "PRODUCTNAME")]
    #[sqlx(rename = "productname")]
    pub name: String,

    /// Unit price, two decimal places, strictly positive.
    #[serde(rename = "PRICE")]
    #[sqlx(rename = "price")]
    pub price: Decimal,

    /// Units on hand, never negative.
    #[serde(rename = "STOCK")]
    #[sqlx(rename = "stock")]
    pub stock: i32,
}

/// Validated fields for creating or replacing a product.
///
/// Only produced by [`crate::validate::validate_product`]; handlers never
/// construct one from unchecked input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Units on hand.
    pub stock: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_serializes_with_uppercase_wire_keys() {
        let product = Product {
            id: ProductId(1),
            name: "Widget".to_string(),
            price: Decimal::new(999, 2),
            stock: 10,
        };

        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["PRODUCTID"], 1);
        assert_eq!(json["PRODUCTNAME"], "Widget");
        assert_eq!(json["STOCK"], 10);
        // serde-float keeps the price a JSON number
        assert!(json["PRICE"].is_number());
    }

    #[test]
    fn product_id_parses_from_query_string_form() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId(42));
        assert_eq!(" 7 ".parse::<ProductId>().unwrap(), ProductId(7));
    }

    #[test]
    fn malformed_product_id_is_an_invalid_id_error() {
        let err = "abc".parse::<ProductId>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidId(_)));
        assert_eq!(err.to_string(), "invalid product id: abc");
    }

    #[test]
    fn product_id_displays_as_plain_integer() {
        assert_eq!(ProductId(5).to_string(), "5");
    }
}
