//! Forgiving field decoders. The backend writes whatever the upstream scrapers
//! produced, so numbers can show up as strings and anything can be `null`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Finite numbers only. `"NaN"` and `"inf"` parse as floats but count as missing.
pub fn value_as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Text for display. Empty strings count as missing.
pub fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_as_f64).unwrap_or(0.0))
}

pub(crate) fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_as_f64))
}

/// `null` becomes `T::default()` instead of an error.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_numeric_strings() {
        assert_eq!(value_as_f64(&json!(3.5)), Some(3.5));
        assert_eq!(value_as_f64(&json!(" 42 ")), Some(42.0));
        assert_eq!(value_as_f64(&json!("n/a")), None);
        assert_eq!(value_as_f64(&Value::Null), None);
        assert_eq!(value_as_f64(&json!("NaN")), None);
        assert_eq!(value_as_f64(&json!("inf")), None);
        assert_eq!(value_as_f64(&json!("-Infinity")), None);
    }

    #[test]
    fn text_skips_blank_and_structured_values() {
        assert_eq!(value_as_text(&json!("CPI")), Some("CPI".to_string()));
        assert_eq!(value_as_text(&json!(3.1)), Some("3.1".to_string()));
        assert_eq!(value_as_text(&json!("  ")), None);
        assert_eq!(value_as_text(&json!({"a": 1})), None);
    }
}
