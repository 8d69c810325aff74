//! Validation and parsing for product catalog fields.
//!
//! The HTTP layer accepts `quantity` and `price` as either JSON numbers or
//! numeric strings, mirroring clients that send form-style payloads. The
//! helpers here normalize both shapes and enforce the non-negativity
//! invariant before anything reaches the store.

use serde_json::Value;

use crate::error::CoreError;

/// Parse a quantity value into a non-negative integer.
///
/// Accepts a JSON integer or a string containing one. Fractional numbers,
/// booleans, and unparseable strings are rejected.
pub fn parse_quantity(value: &Value) -> Result<i64, CoreError> {
    let quantity = match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| invalid_format())?,
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid_format())?,
        _ => return Err(invalid_format()),
    };

    if quantity < 0 {
        return Err(CoreError::Validation(
            "Quantity must be non-negative".to_string(),
        ));
    }

    Ok(quantity)
}

/// Parse a price value into a non-negative finite float.
///
/// Accepts a JSON number or a string containing one.
pub fn parse_price(value: &Value) -> Result<f64, CoreError> {
    let price = match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| invalid_format())?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid_format())?,
        _ => return Err(invalid_format()),
    };

    if !price.is_finite() {
        return Err(invalid_format());
    }

    if price < 0.0 {
        return Err(CoreError::Validation(
            "Price must be non-negative".to_string(),
        ));
    }

    Ok(price)
}

/// Validate that a product name is non-empty after trimming.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate that a product category is non-empty after trimming.
///
/// Categories are free-form text; no vocabulary is enforced.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if category.trim().is_empty() {
        return Err(CoreError::Validation(
            "Category must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn invalid_format() -> CoreError {
    CoreError::Validation("Invalid quantity or price format".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- parse_quantity -------------------------------------------------------

    #[test]
    fn quantity_accepts_integers_and_numeric_strings() {
        assert_eq!(parse_quantity(&json!(15)).unwrap(), 15);
        assert_eq!(parse_quantity(&json!(0)).unwrap(), 0);
        assert_eq!(parse_quantity(&json!("42")).unwrap(), 42);
        assert_eq!(parse_quantity(&json!(" 7 ")).unwrap(), 7);
    }

    #[test]
    fn negative_quantity_rejected() {
        assert!(parse_quantity(&json!(-1)).is_err());
        assert!(parse_quantity(&json!("-5")).is_err());
    }

    #[test]
    fn non_integer_quantity_rejected() {
        assert!(parse_quantity(&json!(1.5)).is_err());
        assert!(parse_quantity(&json!("abc")).is_err());
        assert!(parse_quantity(&json!(true)).is_err());
        assert!(parse_quantity(&json!(null)).is_err());
    }

    // -- parse_price ----------------------------------------------------------

    #[test]
    fn price_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_price(&json!(29.99)).unwrap(), 29.99);
        assert_eq!(parse_price(&json!(0)).unwrap(), 0.0);
        assert_eq!(parse_price(&json!("19.99")).unwrap(), 19.99);
        assert_eq!(parse_price(&json!("15")).unwrap(), 15.0);
    }

    #[test]
    fn negative_price_rejected() {
        assert!(parse_price(&json!(-0.01)).is_err());
        assert!(parse_price(&json!("-3")).is_err());
    }

    #[test]
    fn malformed_price_rejected() {
        assert!(parse_price(&json!("cheap")).is_err());
        assert!(parse_price(&json!([])).is_err());
        assert!(parse_price(&json!("NaN")).is_err());
    }

    // -- name / category ------------------------------------------------------

    #[test]
    fn blank_name_and_category_rejected() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("Laptop").is_ok());

        assert!(validate_category("").is_err());
        assert!(validate_category("Electronics").is_ok());
    }
}
