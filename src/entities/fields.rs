//! Lenient field readers for the raw API records.
//!
//! The backend is not consistent about scalar types: ids and prices arrive as
//! numbers or numeric strings, flags as booleans or `0`/`1`. Raw records keep
//! such fields as [`Value`] and the canonical entities read them through these
//! helpers.

use serde_json::Value;

/// Active/visibility flag: `true`, `1`, `"true"` and `"1"` are active; every
/// other value, including null and absent, is inactive.
#[must_use]
pub fn flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64() == Some(1) || n.as_f64() == Some(1.0),
        Some(Value::String(s)) => matches!(s.trim(), "true" | "1"),
        _ => false,
    }
}

/// Integer from a number or a numeric string.
#[must_use]
pub fn integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Floating point number from a number or a numeric string.
#[must_use]
pub fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Non-empty string; numbers are rendered as text.
#[must_use]
pub fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First present value among alias fields, in precedence order.
#[must_use]
pub fn first<'a>(candidates: &[Option<&'a Value>]) -> Option<&'a Value> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flag_representations_classify_identically() {
        for active in [json!(true), json!(1), json!("1"), json!("true")] {
            assert!(flag(Some(&active)), "{active} should be active");
        }
        for inactive in [json!(false), json!(0), json!("0"), Value::Null] {
            assert!(!flag(Some(&inactive)), "{inactive} should be inactive");
        }
        assert!(!flag(None));
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(integer(Some(&json!("42"))), Some(42));
        assert_eq!(integer(Some(&json!(7))), Some(7));
        assert_eq!(number(Some(&json!("19.5"))), Some(19.5));
        assert_eq!(number(Some(&json!("abc"))), None);
        assert_eq!(integer(None), None);
    }

    #[test]
    fn test_first_skips_null_aliases() {
        let a = Value::Null;
        let b = json!(3);
        assert_eq!(first(&[Some(&a), None, Some(&b)]), Some(&b));
        assert_eq!(first(&[None, Some(&a)]), None);
    }

    #[test]
    fn test_text_ignores_blank() {
        assert_eq!(text(Some(&json!("  "))), None);
        assert_eq!(text(Some(&json!("áo"))).as_deref(), Some("áo"));
    }
}
