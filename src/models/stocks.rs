use serde::{Deserialize, Serialize};

use super::lenient::{f64_or_zero, nullable, opt_f64};
use crate::utils::{format_signed, format_signed_pct, format_usd};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StockQuote {
    #[serde(deserialize_with = "nullable")]
    pub symbol: String,
    #[serde(deserialize_with = "f64_or_zero")]
    pub price: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub change: f64,
    #[serde(rename = "changePercent", deserialize_with = "f64_or_zero")]
    pub change_percent: f64,
    #[serde(rename = "marketCap", deserialize_with = "opt_f64")]
    pub market_cap: Option<f64>,
    #[serde(deserialize_with = "opt_f64")]
    pub volume: Option<f64>,
}

impl StockQuote {
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }

    /// `$NVDA $1,234.56 +1.23 (+0.45%)`
    pub fn ticker_text(&self) -> String {
        format!(
            "${} {} {} ({})",
            self.symbol,
            format_usd(self.price),
            format_signed(self.change, 2),
            format_signed_pct(self.change_percent),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WatchlistResponse {
    #[serde(deserialize_with = "nullable")]
    pub stocks: Vec<StockQuote>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_camel_case_fields() {
        let resp: WatchlistResponse = serde_json::from_value(json!({
            "stocks": [
                {"symbol": "NVDA", "price": 1234.56, "change": 1.23, "changePercent": 0.45, "marketCap": 3.0e12},
                {"symbol": "TSLA", "price": "250.1", "change": -3.5, "changePercent": -1.38, "volume": null}
            ]
        }))
        .unwrap();
        assert_eq!(resp.stocks.len(), 2);
        assert_eq!(resp.stocks[0].market_cap, Some(3.0e12));
        assert_eq!(resp.stocks[1].price, 250.1);
        assert!(resp.stocks[1].volume.is_none());
        assert!(!resp.stocks[1].is_up());
    }

    #[test]
    fn missing_stocks_is_empty() {
        let resp: WatchlistResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.stocks.is_empty());
        let resp: WatchlistResponse = serde_json::from_value(json!({"stocks": null})).unwrap();
        assert!(resp.stocks.is_empty());
    }

    #[test]
    fn ticker_text_format() {
        let up = StockQuote {
            symbol: "NVDA".into(),
            price: 1234.56,
            change: 1.23,
            change_percent: 0.45,
            ..Default::default()
        };
        assert_eq!(up.ticker_text(), "$NVDA $1,234.56 +1.23 (+0.45%)");

        let down = StockQuote {
            symbol: "AAPL".into(),
            price: 187.2,
            change: -2.0,
            change_percent: -1.05,
            ..Default::default()
        };
        assert_eq!(down.ticker_text(), "$AAPL $187.20 -2.00 (-1.05%)");
    }
}
