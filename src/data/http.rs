use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use super::envelope::check_envelope;
use super::provider::MarketApi;
use crate::config::API;
use crate::models::{
    ChatRequest, DataOverview, EconomicEvent, HealthStatus, PriceHistory, StockQuote,
    WatchlistResponse, normalize_calendar, parse_chat_reply,
};
use crate::utils::truncate_chars;

#[cfg(debug_assertions)]
use crate::config::DF;

/// `MarketApi` over HTTP against the dashboard backend.
#[derive(Debug, Clone)]
pub struct HttpMarketApi {
    base_url: String,
    client: Client,
}

impl HttpMarketApi {
    pub fn new(base_url: &str) -> Result<Self> {
        let defaults = &API.client;
        let client = Client::builder()
            .user_agent(concat!("marketinfo/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_millis(defaults.timeout_ms))
            .connect_timeout(Duration::from_millis(defaults.connect_timeout_ms))
            .pool_max_idle_per_host(defaults.pool_max_idle_per_host)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Value> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Request for {} failed", what))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read {} response body", what))?;

        #[cfg(debug_assertions)]
        if DF.log_responses {
            log::info!("{} -> {} ({} bytes)", what, status, text.len());
        }

        let body = serde_json::from_str::<Value>(&text).ok();
        if body.is_none() {
            log::warn!(
                "{} returned non-JSON body (status {}): {}",
                what,
                status,
                truncate_chars(&text, API.client.max_error_body_chars)
            );
        }
        check_envelope(status, body)
    }

    async fn get_json(&self, path: &str, what: &str) -> Result<Value> {
        let url = self.url(path);
        #[cfg(debug_assertions)]
        if DF.log_requests {
            log::info!("GET {}", url);
        }
        self.send(self.client.get(&url), what).await
    }
}

#[async_trait]
impl MarketApi for HttpMarketApi {
    async fn health(&self) -> Result<HealthStatus> {
        let raw = self.get_json(API.routes.health, "health").await?;
        serde_json::from_value(raw).context("Failed to parse health status")
    }

    async fn overview(&self) -> Result<DataOverview> {
        let raw = self.get_json(API.routes.overview, "data overview").await?;
        serde_json::from_value(raw).context("Failed to parse data overview")
    }

    async fn crypto_push_raw(&self) -> Result<Value> {
        self.get_json(API.routes.crypto_push, "crypto push").await
    }

    async fn macro_push_raw(&self) -> Result<Value> {
        self.get_json(API.routes.macro_push, "macro push").await
    }

    async fn calendar(&self) -> Result<Vec<EconomicEvent>> {
        let raw = self.get_json(API.routes.calendar, "economic calendar").await?;
        Ok(normalize_calendar(&raw))
    }

    async fn price_history(&self, symbol: &str) -> Result<PriceHistory> {
        let symbol = symbol.trim().to_uppercase();
        let path = format!("{}/{}", API.routes.price_history, symbol);
        let raw = self.get_json(&path, &format!("{} price history", symbol)).await?;
        Ok(PriceHistory::from_value(&symbol, &raw))
    }

    async fn watchlist(&self, symbols: &[String]) -> Result<Vec<StockQuote>> {
        let url = self.url(API.routes.watchlist);
        let joined = symbols.join(",");
        #[cfg(debug_assertions)]
        if DF.log_requests {
            log::info!("GET {}?symbols={}", url, joined);
        }
        let request = self.client.get(&url).query(&[("symbols", joined.as_str())]);
        let raw = self.send(request, "watchlist").await?;
        let parsed: WatchlistResponse =
            serde_json::from_value(raw).context("Failed to parse watchlist")?;
        Ok(parsed.stocks)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String> {
        let url = self.url(API.routes.chat);
        #[cfg(debug_assertions)]
        if DF.log_requests {
            log::info!("POST {} ({} history turns)", url, request.history.len());
        }
        let raw = self
            .send(self.client.post(&url).json(request), "chat reply")
            .await?;
        parse_chat_reply(&raw).ok_or_else(|| anyhow!("Unexpected response from assistant"))
    }
}
