use serde::{Deserialize, Serialize};

use super::lenient::{f64_or_zero, nullable, opt_f64};

/// ETF proxy for an index (SPY, QQQ). Polygon's close overrides the scraped one when present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexQuote {
    #[serde(deserialize_with = "f64_or_zero")]
    pub price: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub open: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub high: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub low: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub volume: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub change: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub change_percent: f64,
    #[serde(deserialize_with = "opt_f64")]
    pub polygon_price: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub timestamp: String,
}

impl IndexQuote {
    pub fn display_price(&self) -> f64 {
        match self.polygon_price {
            Some(p) if p > 0.0 => p,
            _ => self.price,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarketIndices {
    pub sp500: Option<IndexQuote>,
    pub nasdaq100: Option<IndexQuote>,
}

impl MarketIndices {
    /// (label, ETF ticker, quote) for every index present.
    pub fn labelled(&self) -> Vec<(&'static str, &'static str, &IndexQuote)> {
        [
            ("S&P 500", "SPY", self.sp500.as_ref()),
            ("NASDAQ-100", "QQQ", self.nasdaq100.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, etf, q)| q.map(|q| (label, etf, q)))
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TreasuryYield {
    #[serde(deserialize_with = "f64_or_zero")]
    pub yield_percent: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub change: f64,
    #[serde(deserialize_with = "nullable")]
    pub timestamp: String,
}

/// A single FRED rate print (fed funds, unemployment, inflation).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RateReading {
    #[serde(deserialize_with = "f64_or_zero")]
    pub rate_percent: f64,
    pub date: Option<String>,
    pub source: Option<String>,
    pub note: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InterestRates {
    pub us10yr: Option<TreasuryYield>,
    pub fed_funds_rate: Option<RateReading>,
}

/// Level plus month-over-month and year-over-year change, in percent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsumerSeries {
    #[serde(deserialize_with = "f64_or_zero")]
    pub value: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub change_mom: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub change_yoy: f64,
    pub date: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsumerData {
    pub cpi: Option<ConsumerSeries>,
    pub retail_sales: Option<ConsumerSeries>,
    pub unemployment_rate: Option<RateReading>,
    pub inflation_rate: Option<RateReading>,
}

/// Latest macro snapshot (`/api/pushes/macro`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MacroPush {
    pub market_indices: Option<MarketIndices>,
    pub interest_rates: Option<InterestRates>,
    pub consumer_data: Option<ConsumerData>,
    #[serde(deserialize_with = "nullable")]
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_sections_and_prefers_polygon_price() {
        let push: MacroPush = serde_json::from_value(json!({
            "market_indices": {
                "sp500": {"price": 580.1, "open": 575.0, "high": 582.0, "low": 574.2, "volume": 51234567,
                          "change": 5.1, "change_percent": 0.887, "polygon_price": 580.4},
                "nasdaq100": {"price": 495.0, "change_percent": -0.4, "polygon_price": null}
            },
            "interest_rates": {
                "us10yr": {"yield_percent": 4.21, "change": -0.03},
                "fed_funds_rate": {"rate_percent": 5.25, "note": "FRED API not available - using approximate value"}
            },
            "consumer_data": {
                "cpi": {"value": 314.2, "change_mom": 0.2, "change_yoy": 2.9, "date": "2024-12-01"},
                "unemployment_rate": {"rate_percent": 4.1, "date": "2024-12-01", "source": "FRED"}
            },
            "data_type": "macro"
        }))
        .unwrap();

        let indices = push.market_indices.as_ref().unwrap();
        assert_eq!(indices.sp500.as_ref().unwrap().display_price(), 580.4);
        assert_eq!(indices.nasdaq100.as_ref().unwrap().display_price(), 495.0);
        assert_eq!(indices.labelled().len(), 2);

        let rates = push.interest_rates.as_ref().unwrap();
        assert_eq!(rates.us10yr.as_ref().unwrap().yield_percent, 4.21);
        assert!(rates.fed_funds_rate.as_ref().unwrap().note.is_some());

        let consumer = push.consumer_data.as_ref().unwrap();
        assert!(consumer.retail_sales.is_none());
        assert_eq!(consumer.unemployment_rate.as_ref().unwrap().rate_percent, 4.1);
    }

    #[test]
    fn zero_polygon_price_falls_back() {
        let q = IndexQuote {
            price: 10.0,
            polygon_price: Some(0.0),
            ..Default::default()
        };
        assert_eq!(q.display_price(), 10.0);
    }

    #[test]
    fn missing_sections_stay_none() {
        let push: MacroPush = serde_json::from_value(json!({"timestamp": null})).unwrap();
        assert!(push.market_indices.is_none());
        assert!(push.interest_rates.is_none());
        assert!(push.consumer_data.is_none());
        assert!(push.timestamp.is_empty());
    }
}
