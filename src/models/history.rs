use serde::Serialize;
use serde_json::{Map, Value};

use super::lenient::{value_as_f64, value_as_text};

const LABEL_KEYS: &[&str] = &["date", "timestamp", "Date", "Timestamp"];
const PRICE_KEY_HINTS: &[&str] = &["price", "close", "value"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub label: String,
    pub price: f64,
}

/// One coin's stored price series (`/api/crypto/prices/:symbol`).
///
/// The rows are CSV lines turned into JSON, so the column holding the price is
/// guessed from the first row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceHistory {
    pub symbol: String,
    pub price_key: Option<String>,
    pub points: Vec<PricePoint>,
}

impl PriceHistory {
    pub fn from_value(requested_symbol: &str, value: &Value) -> Self {
        let symbol = value
            .get("symbol")
            .and_then(value_as_text)
            .unwrap_or_else(|| requested_symbol.to_uppercase());

        let rows: Vec<&Map<String, Value>> = value
            .get("data")
            .and_then(Value::as_array)
            .map(|rows| rows.iter().filter_map(Value::as_object).collect())
            .unwrap_or_default();

        let price_key = rows.first().and_then(|first| detect_price_key(first));

        let points = rows
            .iter()
            .enumerate()
            .map(|(i, row)| PricePoint {
                label: row_label(row, i),
                price: price_key
                    .as_deref()
                    .and_then(|k| row.get(k))
                    .and_then(value_as_f64)
                    .unwrap_or(0.0),
            })
            .collect();

        Self {
            symbol,
            price_key,
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// `[x, y]` pairs for plotting, x being the row index.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.price])
            .collect()
    }

    pub fn label_at(&self, x: f64) -> Option<&str> {
        if !x.is_finite() || x < -0.5 {
            return None;
        }
        self.points
            .get(x.round() as usize)
            .map(|p| p.label.as_str())
    }
}

/// First column whose name mentions a price, else the second column.
pub fn detect_price_key(row: &Map<String, Value>) -> Option<String> {
    row.keys()
        .find(|k| {
            let lower = k.to_lowercase();
            PRICE_KEY_HINTS.iter().any(|hint| lower.contains(hint))
        })
        .or_else(|| row.keys().nth(1))
        .cloned()
}

fn row_label(row: &Map<String, Value>, index: usize) -> String {
    LABEL_KEYS
        .iter()
        .filter_map(|k| row.get(*k))
        .find_map(value_as_text)
        .unwrap_or_else(|| format!("Point {}", index + 1))
}
