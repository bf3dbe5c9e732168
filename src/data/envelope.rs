//! The backend's `{ "error": "..." }` failure convention.

use anyhow::{Result, bail};
use serde_json::Value;

/// The error text of an `{error: string}` body, if that is what this is.
pub fn envelope_error(body: &Value) -> Option<&str> {
    body.as_object()?.get("error")?.as_str()
}

/// Turns a decoded response into success or failure.
///
/// A non-2xx status fails with the body's `error` when it has one, else with
/// `HTTP error! status: N`. A 2xx body that carries an `error` string fails too.
/// `body` is `None` when the response was not JSON.
pub fn check_envelope(status: u16, body: Option<Value>) -> Result<Value> {
    let ok = (200..300).contains(&status);
    match body {
        Some(body) => {
            if let Some(err) = envelope_error(&body) {
                bail!("{}", err);
            }
            if !ok {
                bail!("HTTP error! status: {}", status);
            }
            Ok(body)
        }
        None if ok => bail!("Response was not valid JSON"),
        None => bail!("HTTP error! status: {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_field_is_a_failure_on_any_status() {
        let err = check_envelope(200, Some(json!({"error": "No crypto data available"}))).unwrap_err();
        assert_eq!(err.to_string(), "No crypto data available");
        let err = check_envelope(404, Some(json!({"error": "Symbol not found"}))).unwrap_err();
        assert_eq!(err.to_string(), "Symbol not found");
    }

    #[test]
    fn bad_status_without_error_field() {
        let err = check_envelope(500, Some(json!({"detail": "boom"}))).unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        let err = check_envelope(502, None).unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 502");
    }

    #[test]
    fn everything_else_is_success() {
        assert!(check_envelope(200, Some(json!([]))).is_ok());
        assert!(check_envelope(200, Some(json!({"error": null, "data": 1}))).is_ok());
        assert!(check_envelope(200, Some(json!({"error": {"code": 1}}))).is_ok());
        assert!(check_envelope(204, Some(Value::Null)).is_ok());
        assert!(check_envelope(200, None).is_err());
    }
}
