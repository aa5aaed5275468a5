//! Price parsing for incoming product payloads.

use serde_json::Value;

use crate::error::{ProductError, ProductResult};

/// A finite price parsed from request input.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Parse a JSON number or numeric string.
    ///
    /// Strings are trimmed and must parse as a decimal float (`"100"`,
    /// `"9.99"`, `"1e3"`). Null, booleans, arrays, objects, empty or
    /// non-numeric strings and non-finite values all fail with
    /// [`ProductError::InvalidPrice`].
    pub fn parse(raw: &Value) -> ProductResult<Self> {
        let parsed = match raw {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        parsed
            .filter(|value| value.is_finite())
            .map(Price)
            .ok_or(ProductError::InvalidPrice)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(Price::parse(&json!(100)).unwrap().value(), 100.0);
        assert_eq!(Price::parse(&json!(9.99)).unwrap().value(), 9.99);
        assert_eq!(Price::parse(&json!(-1)).unwrap().value(), -1.0);
    }

    #[test]
    fn test_parse_numeric_strings() {
        assert_eq!(Price::parse(&json!("100")).unwrap().value(), 100.0);
        assert_eq!(Price::parse(&json!(" 2.50 ")).unwrap().value(), 2.5);
        assert_eq!(Price::parse(&json!("1e3")).unwrap().value(), 1000.0);
    }

    #[test]
    fn test_parse_rejects_non_numeric_input() {
        for raw in [
            json!("invalid"),
            json!(""),
            json!("   "),
            json!("12abc"),
            json!("NaN"),
            json!("inf"),
            json!(null),
            json!(true),
            json!([1]),
            json!({ "amount": 1 }),
        ] {
            assert!(
                matches!(Price::parse(&raw), Err(ProductError::InvalidPrice)),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_number() {
        let raw: Value = serde_json::from_str("1e400").unwrap();
        assert!(matches!(Price::parse(&raw), Err(ProductError::InvalidPrice)));

        let raw: Value = serde_json::from_str("-1e400").unwrap();
        assert!(matches!(Price::parse(&raw), Err(ProductError::InvalidPrice)));
    }
}
