use serde_json::Value;

use crate::utils::{format_local_datetime, format_locale_number, truncate_chars};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub key: String,
    pub value: String,
}

fn is_time_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    lower.contains("timestamp") || lower.contains("date")
}

fn summarize_value(key: &str, value: &Value, max_chars: usize) -> String {
    match value {
        Value::String(s) if is_time_key(key) => {
            format_local_datetime(s).unwrap_or_else(|| truncate_chars(s, max_chars))
        }
        Value::String(s) => truncate_chars(s, max_chars),
        Value::Number(n) => n
            .as_f64()
            .map_or_else(|| n.to_string(), format_locale_number),
        Value::Object(_) | Value::Array(_) => truncate_chars(&value.to_string(), max_chars),
        other => other.to_string(),
    }
}

/// Short key/value view of an opaque push: the first `max_entries` fields in
/// document order. Anything that is not an object summarises to nothing.
pub fn summarize_push(push: &Value, max_entries: usize, max_chars: usize) -> Vec<SummaryEntry> {
    let Some(obj) = push.as_object() else {
        return Vec::new();
    };
    obj.iter()
        .take(max_entries)
        .map(|(key, value)| SummaryEntry {
            key: key.clone(),
            value: summarize_value(key, value, max_chars),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn values(push: &Value) -> Vec<String> {
        summarize_push(push, 5, 50).into_iter().map(|e| e.value).collect()
    }

    #[test]
    fn keeps_the_first_five_in_document_order() {
        let push = json!({"f": 1, "e": 2, "d": 3, "c": 4, "b": 5, "a": 6});
        let keys: Vec<String> = summarize_push(&push, 5, 50).into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn formats_each_kind_of_value() {
        let long = "x".repeat(60);
        let push = json!({
            "volume": 1234567.8912,
            "nested": {"BTC": {"price_usd": 64000.0, "market_cap": 1.26e12}},
            "note": long,
            "live": true,
            "missing": null
        });
        let out = values(&push);
        assert_eq!(out[0], "1,234,567.891");
        assert!(out[1].starts_with("{\"BTC\":"));
        assert!(out[1].ends_with("..."));
        assert_eq!(out[1].chars().count(), 53);
        assert_eq!(out[2], format!("{}...", "x".repeat(50)));
        assert_eq!(out[3], "true");
        assert_eq!(out[4], "null");
    }

    #[test]
    fn time_keys_render_as_local_time() {
        let push = json!({"Last_Update_Date": "2025-01-10", "timestamp": "garbage"});
        assert_eq!(values(&push), vec!["2025-01-10", "garbage"]);
    }

    #[test]
    fn non_objects_summarise_to_nothing() {
        assert!(summarize_push(&json!([1, 2]), 5, 50).is_empty());
        assert!(summarize_push(&Value::Null, 5, 50).is_empty());
    }
}
