//! Payload validation for product create and replace operations.
//!
//! Checks a raw JSON payload against the catalog business rules and
//! produces either a typed [`NewProduct`] or a single descriptive error.
//! The first violated rule wins; rules are checked in a fixed order so
//! clients always see the same message for the same payload. Pure and
//! side-effect free.

use rust_decimal::{prelude::FromPrimitive, Decimal};
use serde_json::Value;
use thiserror::Error;

use crate::models::NewProduct;

/// Default upper bound on product name length, in characters.
pub const MAX_PRODUCT_NAME_LENGTH: usize = 100;

/// A single violated validation rule.
///
/// `Display` output is the exact message returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name missing or blank, non-positive price, or negative stock.
    #[error("Invalid product data")]
    InvalidData,

    /// Name field present but carrying a non-string value.
    #[error("Product name must be a string")]
    NameNotString,

    /// Price field missing or not a finite number.
    #[error("Price must be a valid number")]
    PriceNotNumber,

    /// Stock field missing, fractional, or not a number at all.
    #[error("Stock must be an integer")]
    StockNotInteger,

    /// Name exceeds the configured character limit.
    #[error("Product name must not exceed {0} characters")]
    NameTooLong(usize),
}

/// Validates a candidate payload with the default name length limit.
///
/// # Errors
///
/// Returns the first violated rule; see [`validate_product_with_limit`].
pub fn validate_product(payload: &Value) -> Result<NewProduct, ValidationError> {
    validate_product_with_limit(payload, MAX_PRODUCT_NAME_LENGTH)
}

/// Validates a candidate payload against the catalog business rules.
///
/// Rule order, first violation wins:
/// 1. missing/blank name, price ≤ 0, or stock < 0
/// 2. name is not a string
/// 3. price is not a finite number
/// 4. stock is not an integer
/// 5. name longer than `max_name_length` characters
///
/// # Errors
///
/// Returns the corresponding [`ValidationError`] for the first rule the
/// payload violates.
pub fn validate_product_with_limit(
    payload: &Value,
    max_name_length: usize,
) -> Result<NewProduct, ValidationError> {
    let name = payload.get("PRODUCTNAME");
    let price = payload.get("PRICE");
    let stock = payload.get("STOCK");

    let name_blank = match name {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    };
    let price_not_positive = price.and_then(Value::as_f64).is_some_and(|p| p <= 0.0);
    let stock_negative = stock.and_then(Value::as_f64).is_some_and(|s| s < 0.0);

    if name_blank || price_not_positive || stock_negative {
        return Err(ValidationError::InvalidData);
    }

    let Some(Value::String(name)) = name else {
        return Err(ValidationError::NameNotString);
    };

    let price = match price.and_then(Value::as_f64) {
        Some(p) if p.is_finite() => {
            Decimal::from_f64(p).ok_or(ValidationError::PriceNotNumber)?
        },
        _ => return Err(ValidationError::PriceNotNumber),
    };

    let stock = match stock.and_then(Value::as_f64) {
        Some(s) if s.fract() == 0.0 => {
            i32::try_from(s as i64).map_err(|_| ValidationError::StockNotInteger)?
        },
        _ => return Err(ValidationError::StockNotInteger),
    };

    if name.chars().count() > max_name_length {
        return Err(ValidationError::NameTooLong(max_name_length));
    }

    Ok(NewProduct { name: name.clone(), price, stock })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn widget(name: &str, price: f64, stock: i64) -> Value {
        json!({ "PRODUCTNAME": name, "PRICE": price, "STOCK": stock })
    }

    #[test]
    fn valid_payload_produces_typed_product() {
        let product = validate_product(&widget("Widget", 9.99, 10)).unwrap();

        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, Decimal::new(999, 2));
        assert_eq!(product.stock, 10);
    }

    #[test]
    fn missing_name_is_invalid_data() {
        let payload = json!({ "PRICE": 9.99, "STOCK": 10 });
        assert_eq!(validate_product(&payload), Err(ValidationError::InvalidData));
    }

    #[test]
    fn null_name_is_invalid_data() {
        let payload = json!({ "PRODUCTNAME": null, "PRICE": 9.99, "STOCK": 10 });
        assert_eq!(validate_product(&payload), Err(ValidationError::InvalidData));
    }

    #[test]
    fn blank_name_is_invalid_data() {
        assert_eq!(validate_product(&widget("", 9.99, 10)), Err(ValidationError::InvalidData));
        assert_eq!(validate_product(&widget("   ", 9.99, 10)), Err(ValidationError::InvalidData));
    }

    #[test]
    fn zero_or_negative_price_is_invalid_data() {
        assert_eq!(validate_product(&widget("Widget", 0.0, 10)), Err(ValidationError::InvalidData));
        assert_eq!(
            validate_product(&widget("Widget", -1.5, 10)),
            Err(ValidationError::InvalidData)
        );
    }

    #[test]
    fn negative_stock_is_invalid_data() {
        assert_eq!(validate_product(&widget("Widget", 9.99, -1)), Err(ValidationError::InvalidData));
    }

    #[test]
    fn non_string_name_is_rejected_by_type() {
        let payload = json!({ "PRODUCTNAME": 42, "PRICE": 9.99, "STOCK": 10 });
        assert_eq!(validate_product(&payload), Err(ValidationError::NameNotString));
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let payload = json!({ "PRODUCTNAME": "Widget", "PRICE": "cheap", "STOCK": 10 });
        assert_eq!(validate_product(&payload), Err(ValidationError::PriceNotNumber));

        let payload = json!({ "PRODUCTNAME": "Widget", "STOCK": 10 });
        assert_eq!(validate_product(&payload), Err(ValidationError::PriceNotNumber));
    }

    #[test]
    fn fractional_stock_is_rejected() {
        let payload = json!({ "PRODUCTNAME": "Widget", "PRICE": 9.99, "STOCK": 3.5 });
        assert_eq!(validate_product(&payload), Err(ValidationError::StockNotInteger));
    }

    #[test]
    fn non_numeric_stock_is_rejected() {
        let payload = json!({ "PRODUCTNAME": "Widget", "PRICE": 9.99, "STOCK": "many" });
        assert_eq!(validate_product(&payload), Err(ValidationError::StockNotInteger));

        let payload = json!({ "PRODUCTNAME": "Widget", "PRICE": 9.99 });
        assert_eq!(validate_product(&payload), Err(ValidationError::StockNotInteger));
    }

    #[test]
    fn whole_valued_float_stock_is_accepted() {
        let payload = json!({ "PRODUCTNAME": "Widget", "PRICE": 9.99, "STOCK": 3.0 });
        assert_eq!(validate_product(&payload).unwrap().stock, 3);
    }

    #[test]
    fn name_at_limit_accepted_one_past_rejected() {
        let exactly = "a".repeat(100);
        assert!(validate_product(&widget(&exactly, 9.99, 10)).is_ok());

        let too_long = "a".repeat(101);
        assert_eq!(
            validate_product(&widget(&too_long, 9.99, 10)),
            Err(ValidationError::NameTooLong(100))
        );
    }

    #[test]
    fn custom_limit_is_honored_and_named_in_message() {
        let err = validate_product_with_limit(&widget("abcdef", 9.99, 10), 5).unwrap_err();
        assert_eq!(err, ValidationError::NameTooLong(5));
        assert_eq!(err.to_string(), "Product name must not exceed 5 characters");
    }

    #[test]
    fn blank_name_outranks_type_errors() {
        // Rule 1 wins even when later rules would also fire.
        let payload = json!({ "PRODUCTNAME": "", "PRICE": "cheap", "STOCK": 3.5 });
        assert_eq!(validate_product(&payload), Err(ValidationError::InvalidData));
    }

    #[test]
    fn price_type_error_outranks_length_check() {
        let long = "a".repeat(101);
        let payload = json!({ "PRODUCTNAME": long, "PRICE": "cheap", "STOCK": 10 });
        assert_eq!(validate_product(&payload), Err(ValidationError::PriceNotNumber));
    }

    #[test]
    fn messages_match_the_api_contract() {
        assert_eq!(ValidationError::InvalidData.to_string(), "Invalid product data");
        assert_eq!(ValidationError::NameNotString.to_string(), "Product name must be a string");
        assert_eq!(ValidationError::PriceNotNumber.to_string(), "Price must be a valid number");
        assert_eq!(ValidationError::StockNotInteger.to_string(), "Stock must be an integer");
        assert_eq!(
            ValidationError::NameTooLong(100).to_string(),
            "Product name must not exceed 100 characters"
        );
    }
}
