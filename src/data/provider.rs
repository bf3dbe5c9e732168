use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::models::{
    ChatRequest, CryptoPush, DataOverview, EconomicEvent, HealthStatus, MacroPush, PriceHistory,
    StockQuote,
};

/// Abstract interface to the market data backend. One method per endpoint.
///
/// The typed push accessors have default implementations on top of the raw
/// ones, so an implementor only has to return JSON for those.
#[async_trait]
pub trait MarketApi: Send + Sync {
    async fn health(&self) -> Result<HealthStatus>;

    async fn overview(&self) -> Result<DataOverview>;

    async fn crypto_push_raw(&self) -> Result<Value>;

    async fn crypto_push(&self) -> Result<CryptoPush> {
        let raw = self.crypto_push_raw().await?;
        serde_json::from_value(raw).context("Failed to parse crypto push")
    }

    async fn macro_push_raw(&self) -> Result<Value>;

    async fn macro_push(&self) -> Result<MacroPush> {
        let raw = self.macro_push_raw().await?;
        serde_json::from_value(raw).context("Failed to parse macro push")
    }

    /// Events in the order the backend returned them.
    async fn calendar(&self) -> Result<Vec<EconomicEvent>>;

    async fn price_history(&self, symbol: &str) -> Result<PriceHistory>;

    async fn watchlist(&self, symbols: &[String]) -> Result<Vec<StockQuote>>;

    /// The assistant's reply text.
    async fn chat(&self, request: &ChatRequest) -> Result<String>;
}
