use serde::{Deserialize, Serialize};

use super::lenient::nullable;

/// What the backend currently has on disk (`/api/data/overview`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DataOverview {
    #[serde(deserialize_with = "nullable")]
    pub crypto_symbols: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub has_crypto_pushes: bool,
    #[serde(deserialize_with = "nullable")]
    pub has_macro_pushes: bool,
    #[serde(deserialize_with = "nullable")]
    pub has_economic_calendar: bool,
}

impl DataOverview {
    pub fn has_crypto_history(&self) -> bool {
        !self.crypto_symbols.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthStatus {
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(deserialize_with = "nullable")]
    pub message: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overview_tolerates_missing_and_null_fields() {
        let o: DataOverview =
            serde_json::from_value(json!({"crypto_symbols": null, "has_macro_pushes": true}))
                .unwrap();
        assert!(o.crypto_symbols.is_empty());
        assert!(o.has_macro_pushes);
        assert!(!o.has_crypto_pushes);
        assert!(!o.has_crypto_history());
    }

    #[test]
    fn health_status() {
        let h: HealthStatus =
            serde_json::from_value(json!({"status": "healthy", "message": "MarketInfo API is running"}))
                .unwrap();
        assert!(h.is_healthy());
        assert!(!HealthStatus::default().is_healthy());
    }
}
