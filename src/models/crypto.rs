use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use super::lenient::{f64_or_zero, nullable};
use crate::config::DASHBOARD;

/// Spot data for one coin. `change_24h` is already a percentage.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CryptoQuote {
    #[serde(deserialize_with = "f64_or_zero")]
    pub price_usd: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub market_cap: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub volume_24h: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub change_24h: f64,
    #[serde(deserialize_with = "nullable")]
    pub timestamp: String,
}

impl CryptoQuote {
    /// Dollar move of the market cap implied by the 24h price change.
    pub fn market_cap_change(&self) -> f64 {
        self.market_cap * self.change_24h / 100.0
    }

    pub fn change_intensity(&self) -> ChangeIntensity {
        ChangeIntensity::from_change_pct(self.change_24h)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkStats {
    #[serde(deserialize_with = "f64_or_zero")]
    pub hash_rate_th_s: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub difficulty: f64,
    #[serde(deserialize_with = "nullable")]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FearGreed {
    #[serde(deserialize_with = "f64_or_zero")]
    pub value: f64,
    #[serde(deserialize_with = "nullable")]
    pub value_classification: String,
    #[serde(deserialize_with = "nullable")]
    pub timestamp: String,
}

impl FearGreed {
    pub fn band(&self) -> FearGreedBand {
        FearGreedBand::from_value(self.value)
    }

    /// What is left of the gauge after the filled part.
    pub fn remaining(&self) -> f64 {
        (100.0 - self.value).clamp(0.0, 100.0)
    }
}

/// Latest crypto snapshot (`/api/pushes/crypto`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CryptoPush {
    #[serde(deserialize_with = "nullable")]
    pub crypto_prices: HashMap<String, CryptoQuote>,
    #[serde(deserialize_with = "nullable")]
    pub hash_rates: HashMap<String, NetworkStats>,
    pub fear_greed_index: Option<FearGreed>,
    #[serde(deserialize_with = "nullable")]
    pub timestamp: String,
}

impl CryptoPush {
    pub fn has_prices(&self) -> bool {
        !self.crypto_prices.is_empty()
    }

    pub fn quote(&self, symbol: &str) -> Option<&CryptoQuote> {
        self.crypto_prices.get(symbol)
    }

    pub fn btc_network(&self) -> Option<&NetworkStats> {
        self.hash_rates.get("BTC")
    }

    /// Market caps of the tracked coins in display order; missing coins count as 0.
    pub fn tracked_market_caps(&self) -> Vec<f64> {
        DASHBOARD
            .tracked_coins
            .iter()
            .map(|c| self.quote(c.symbol).map_or(0.0, |q| q.market_cap))
            .collect()
    }

    pub fn tracked_market_cap_total(&self) -> f64 {
        self.tracked_market_caps().iter().sum()
    }

    /// 1-based rank of `symbol` by market cap among the tracked coins.
    pub fn market_cap_rank(&self, symbol: &str) -> Option<usize> {
        let cap = self.quote(symbol)?.market_cap;
        let mut caps = self.tracked_market_caps();
        caps.sort_by(|a, b| b.total_cmp(a));
        caps.iter().position(|c| *c == cap).map(|i| i + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ChangeIntensity {
    #[strum(serialize = "HIGH")]
    High,
    #[strum(serialize = "MED")]
    Medium,
    #[strum(serialize = "LOW")]
    Low,
}

impl ChangeIntensity {
    pub fn from_change_pct(change_pct: f64) -> Self {
        let magnitude = change_pct.abs();
        if magnitude >= DASHBOARD.change_high_pct {
            Self::High
        } else if magnitude >= DASHBOARD.change_medium_pct {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn indicator(&self, change_pct: f64) -> &'static str {
        let up = change_pct >= 0.0;
        match (self, up) {
            (Self::High, true) => "🚀",
            (Self::High, false) => "📉",
            (Self::Medium, true) => "📈",
            (Self::Medium, false) => "📊",
            (Self::Low, true) => "🟢",
            (Self::Low, false) => "🔴",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum FearGreedBand {
    #[strum(serialize = "Extreme Fear")]
    ExtremeFear,
    Fear,
    Neutral,
    Greed,
    #[strum(serialize = "Extreme Greed")]
    ExtremeGreed,
}

impl FearGreedBand {
    pub fn from_value(value: f64) -> Self {
        if value < 25.0 {
            Self::ExtremeFear
        } else if value < 45.0 {
            Self::Fear
        } else if value < 55.0 {
            Self::Neutral
        } else if value < 75.0 {
            Self::Greed
        } else {
            Self::ExtremeGreed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> CryptoPush {
        serde_json::from_value(json!({
            "crypto_prices": {
                "BTC": {"price_usd": 64000.0, "market_cap": 1.26e12, "volume_24h": 3.1e10, "change_24h": 2.5, "timestamp": "2025-01-10T12:00:00"},
                "ETH": {"price_usd": 3100.0, "market_cap": 3.7e11, "volume_24h": 1.5e10, "change_24h": -6.2, "timestamp": "2025-01-10T12:00:00"},
                "SOL": {"price_usd": 140.0, "market_cap": null, "volume_24h": "2.5e9", "change_24h": 11.0}
            },
            "hash_rates": {"BTC": {"hash_rate_th_s": 612345678.9, "difficulty": 8.3e13, "timestamp": "2025-01-10T12:00:00"}},
            "fear_greed_index": {"value": 72, "value_classification": "Greed", "timestamp": "2025-01-10T12:00:00"},
            "timestamp": "2025-01-10T12:00:00",
            "data_type": "crypto"
        }))
        .unwrap()
    }

    #[test]
    fn parses_a_full_push() {
        let push = sample();
        assert!(push.has_prices());
        assert_eq!(push.quote("SOL").unwrap().market_cap, 0.0);
        assert_eq!(push.quote("SOL").unwrap().volume_24h, 2.5e9);
        assert_eq!(push.btc_network().unwrap().difficulty, 8.3e13);
        assert_eq!(push.fear_greed_index.as_ref().unwrap().band(), FearGreedBand::Greed);
    }

    #[test]
    fn empty_object_is_a_push_without_prices() {
        let push: CryptoPush = serde_json::from_value(json!({})).unwrap();
        assert!(!push.has_prices());
        assert!(push.fear_greed_index.is_none());
        assert_eq!(push.tracked_market_cap_total(), 0.0);
    }

    #[test]
    fn ranks_by_market_cap() {
        let push = sample();
        assert_eq!(push.market_cap_rank("BTC"), Some(1));
        assert_eq!(push.market_cap_rank("ETH"), Some(2));
        assert_eq!(push.market_cap_rank("SOL"), Some(3));
        assert_eq!(push.market_cap_rank("DOGE"), None);
        assert_eq!(push.tracked_market_caps(), vec![1.26e12, 3.7e11, 0.0]);
    }

    #[test]
    fn market_cap_change_uses_percent() {
        let q = CryptoQuote {
            market_cap: 1_000.0,
            change_24h: -5.0,
            ..Default::default()
        };
        assert_eq!(q.market_cap_change(), -50.0);
    }

    #[test]
    fn change_intensity_bands() {
        assert_eq!(ChangeIntensity::from_change_pct(12.0), ChangeIntensity::High);
        assert_eq!(ChangeIntensity::from_change_pct(-10.0), ChangeIntensity::High);
        assert_eq!(ChangeIntensity::from_change_pct(5.0), ChangeIntensity::Medium);
        assert_eq!(ChangeIntensity::from_change_pct(-4.99), ChangeIntensity::Low);
        assert_eq!(ChangeIntensity::High.to_string(), "HIGH");
        assert_eq!(ChangeIntensity::Low.indicator(-1.0), "🔴");
    }

    #[test]
    fn fear_greed_bands() {
        assert_eq!(FearGreedBand::from_value(0.0), FearGreedBand::ExtremeFear);
        assert_eq!(FearGreedBand::from_value(24.9), FearGreedBand::ExtremeFear);
        assert_eq!(FearGreedBand::from_value(25.0), FearGreedBand::Fear);
        assert_eq!(FearGreedBand::from_value(45.0), FearGreedBand::Neutral);
        assert_eq!(FearGreedBand::from_value(55.0), FearGreedBand::Greed);
        assert_eq!(FearGreedBand::from_value(75.0), FearGreedBand::ExtremeGreed);
        assert_eq!(FearGreedBand::ExtremeFear.to_string(), "Extreme Fear");
        let fg = FearGreed {
            value: 72.0,
            ..Default::default()
        };
        assert_eq!(fg.remaining(), 28.0);
    }
}
