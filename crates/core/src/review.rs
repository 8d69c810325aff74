//! Validation for customer review fields.

use serde_json::Value;

use crate::error::CoreError;

/// Name stored when a reviewer leaves the name field blank or absent.
pub const ANONYMOUS_REVIEWER: &str = "Anonymous";

/// Lowest accepted star rating.
pub const MIN_RATING: i64 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: i64 = 5;

/// Parse a rating value into an integer in `[MIN_RATING, MAX_RATING]`.
///
/// Accepts a JSON integer or a string containing one.
pub fn parse_rating(value: &Value) -> Result<i64, CoreError> {
    let rating = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match rating {
        Some(r) if (MIN_RATING..=MAX_RATING).contains(&r) => Ok(r),
        _ => Err(CoreError::Validation(format!(
            "Rating must be an integer between {MIN_RATING} and {MAX_RATING}"
        ))),
    }
}

/// Normalize a reviewer name, falling back to [`ANONYMOUS_REVIEWER`] when
/// the name is absent or blank.
pub fn normalize_reviewer_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => ANONYMOUS_REVIEWER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- parse_rating ---------------------------------------------------------

    #[test]
    fn ratings_in_range_accepted() {
        for r in 1..=5 {
            assert_eq!(parse_rating(&json!(r)).unwrap(), r);
        }
        assert_eq!(parse_rating(&json!("4")).unwrap(), 4);
    }

    #[test]
    fn out_of_range_ratings_rejected() {
        assert!(parse_rating(&json!(0)).is_err());
        assert!(parse_rating(&json!(6)).is_err());
        assert!(parse_rating(&json!(-3)).is_err());
    }

    #[test]
    fn non_integer_ratings_rejected() {
        assert!(parse_rating(&json!(4.5)).is_err());
        assert!(parse_rating(&json!("great")).is_err());
        assert!(parse_rating(&json!(null)).is_err());
    }

    // -- normalize_reviewer_name ----------------------------------------------

    #[test]
    fn blank_or_absent_reviewer_becomes_anonymous() {
        assert_eq!(normalize_reviewer_name(None), "Anonymous");
        assert_eq!(normalize_reviewer_name(Some("")), "Anonymous");
        assert_eq!(normalize_reviewer_name(Some("   ")), "Anonymous");
    }

    #[test]
    fn reviewer_name_is_trimmed() {
        assert_eq!(normalize_reviewer_name(Some("  Dana ")), "Dana");
    }
}
