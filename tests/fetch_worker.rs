//! Fetch worker against an in-memory backend.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use marketinfo::engine::{DataWorker, FetchRequest, FetchResponse, execute};
use marketinfo::data::MarketApi;
use marketinfo::models::{
    ChatRequest, ChatRole, ChatTurn, DataOverview, EconomicEvent, HealthStatus, PriceHistory,
    StockQuote,
};

#[derive(Default)]
struct FakeApi {
    down: bool,
    history_calls: Mutex<Vec<String>>,
    chats: Mutex<Vec<ChatRequest>>,
}

impl FakeApi {
    fn down() -> Self {
        Self {
            down: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.down {
            return Err(anyhow!("HTTP error! status: 503"));
        }
        Ok(())
    }
}

#[async_trait]
impl MarketApi for FakeApi {
    async fn health(&self) -> Result<HealthStatus> {
        self.check()?;
        Ok(HealthStatus {
            status: "healthy".into(),
            message: "ok".into(),
        })
    }

    async fn overview(&self) -> Result<DataOverview> {
        self.check()?;
        Ok(DataOverview {
            crypto_symbols: vec!["BTC".into(), "ETH".into()],
            has_crypto_pushes: true,
            has_macro_pushes: false,
            has_economic_calendar: true,
        })
    }

    async fn crypto_push_raw(&self) -> Result<Value> {
        self.check()?;
        Ok(json!({
            "crypto_prices": {
                "BTC": { "price_usd": 65000.5, "market_cap": 1.2e12, "volume_24h": 3.0e10, "change_24h": 2.5 }
            },
            "timestamp": "2024-05-01T12:00:00Z"
        }))
    }

    async fn macro_push_raw(&self) -> Result<Value> {
        self.check()?;
        Ok(json!({ "timestamp": "2024-05-01T12:00:00Z" }))
    }

    async fn calendar(&self) -> Result<Vec<EconomicEvent>> {
        self.check()?;
        // Newest first plus one undated event, more than the panel shows.
        let mut events: Vec<EconomicEvent> = (1..=12)
            .rev()
            .map(|day| EconomicEvent {
                title: format!("Event {}", day),
                date: Some(format!("2024-05-{:02}", day)),
                ..EconomicEvent::default()
            })
            .collect();
        events.insert(
            0,
            EconomicEvent {
                title: "Undated".into(),
                ..EconomicEvent::default()
            },
        );
        Ok(events)
    }

    async fn price_history(&self, symbol: &str) -> Result<PriceHistory> {
        self.check()?;
        if let Ok(mut calls) = self.history_calls.lock() {
            calls.push(symbol.to_string());
        }
        Ok(PriceHistory::from_value(
            symbol,
            &json!({ "data": [{ "date": "2024-05-01", "close": "101.5" }] }),
        ))
    }

    async fn watchlist(&self, symbols: &[String]) -> Result<Vec<StockQuote>> {
        self.check()?;
        Ok(symbols
            .iter()
            .map(|s| StockQuote {
                symbol: s.clone(),
                price: 100.0,
                ..StockQuote::default()
            })
            .collect())
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String> {
        self.check()?;
        if let Ok(mut chats) = self.chats.lock() {
            chats.push(request.clone());
        }
        Ok(format!("echo: {}", request.message))
    }
}

#[tokio::test]
async fn overview_response_is_tagged() {
    let api = FakeApi::default();
    let response = execute(&api, FetchRequest::Overview).await;
    match response {
        FetchResponse::Overview(Ok(o)) => assert_eq!(o.crypto_symbols, vec!["BTC", "ETH"]),
        other => panic!("unexpected response {:?}", other),
    }
}

#[tokio::test]
async fn failures_become_strings() {
    let api = FakeApi::down();
    let response = execute(&api, FetchRequest::Health).await;
    assert_eq!(response.kind(), "Health");
    assert_eq!(response.error(), Some("HTTP error! status: 503"));
}

#[tokio::test]
async fn crypto_push_keeps_raw_and_parsed() {
    let api = FakeApi::default();
    let FetchResponse::CryptoPush(Ok(snapshot)) = execute(&api, FetchRequest::CryptoPush).await
    else {
        panic!("expected a crypto snapshot");
    };
    assert_eq!(snapshot.parsed.quote("BTC").map(|q| q.price_usd), Some(65000.5));
    assert_eq!(snapshot.raw["timestamp"], json!("2024-05-01T12:00:00Z"));
}

#[tokio::test]
async fn calendar_is_sorted_and_capped() {
    let api = FakeApi::default();
    let FetchResponse::Calendar(Ok(events)) = execute(&api, FetchRequest::Calendar).await else {
        panic!("expected calendar events");
    };
    assert_eq!(events.len(), 10);
    assert_eq!(events[0].title, "Event 1");
    assert_eq!(events[9].title, "Event 10");
    assert!(events.iter().all(|e| e.date.is_some()));
}

#[tokio::test]
async fn history_symbol_is_uppercased() {
    let api = FakeApi::default();
    let response = execute(&api, FetchRequest::PriceHistory("eth".into())).await;
    let FetchResponse::PriceHistory { symbol, result } = response else {
        panic!("expected price history");
    };
    assert_eq!(symbol, "ETH");
    let history = result.expect("history");
    assert_eq!(history.symbol, "ETH");
    assert_eq!(history.latest().map(|p| p.price), Some(101.5));
    assert_eq!(*api.history_calls.lock().unwrap(), vec!["ETH".to_string()]);
}

#[tokio::test]
async fn chat_sends_history_along() {
    let api = FakeApi::default();
    let request = ChatRequest {
        message: "BTC?".into(),
        history: vec![ChatTurn {
            role: ChatRole::Assistant,
            content: "Hello!".into(),
        }],
    };
    let response = execute(&api, FetchRequest::Chat(request.clone())).await;
    match response {
        FetchResponse::Chat(Ok(reply)) => assert_eq!(reply, "echo: BTC?"),
        other => panic!("unexpected response {:?}", other),
    }
    assert_eq!(*api.chats.lock().unwrap(), vec![request]);
}

fn collect(worker: &DataWorker, n: usize) -> Vec<FetchResponse> {
    (0..n)
        .filter_map(|_| worker.recv_timeout(Duration::from_secs(5)))
        .collect()
}

#[test]
fn worker_answers_every_request() {
    let worker = DataWorker::spawn(Arc::new(FakeApi::default()), None).expect("worker");
    assert!(worker.request(FetchRequest::Health));
    assert!(worker.request(FetchRequest::Watchlist(vec!["NVDA".into(), "AAPL".into()])));

    let mut kinds: Vec<&str> = collect(&worker, 2).iter().map(|r| r.kind()).collect();
    kinds.sort();
    assert_eq!(kinds, vec!["Health", "Watchlist"]);
    assert!(worker.drain().is_empty());
}

#[test]
fn worker_reports_backend_failure() {
    let worker = DataWorker::spawn(Arc::new(FakeApi::down()), None).expect("worker");
    assert!(worker.request(FetchRequest::Watchlist(vec!["NVDA".into()])));

    let responses = collect(&worker, 1);
    assert_eq!(responses.len(), 1);
    match &responses[0] {
        FetchResponse::Watchlist(Err(e)) => assert_eq!(e, "HTTP error! status: 503"),
        other => panic!("unexpected response {:?}", other),
    }
}

#[test]
fn local_failure_matches_request() {
    let response = FetchResponse::failure(&FetchRequest::PriceHistory("sol".into()), "gone");
    assert!(response.is_dashboard());
    match response {
        FetchResponse::PriceHistory { symbol, result } => {
            assert_eq!(symbol, "SOL");
            assert_eq!(result, Err("gone".to_string()));
        }
        other => panic!("unexpected response {:?}", other),
    }
    assert!(!FetchResponse::failure(&FetchRequest::Watchlist(vec![]), "x").is_dashboard());
}
