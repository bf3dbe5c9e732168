use serde_json::Value;
use strum_macros::Display;

use crate::models::{
    ChatRequest, CryptoPush, DataOverview, EconomicEvent, HealthStatus, MacroPush, PriceHistory,
    StockQuote,
};

/// Work for the fetch worker. One variant per backend endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FetchRequest {
    Health,
    Overview,
    CryptoPush,
    MacroPush,
    Calendar,
    PriceHistory(String),
    Watchlist(Vec<String>),
    Chat(ChatRequest),
}

/// A push decoded into its typed form, with the JSON kept for the summary panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PushSnapshot<T> {
    pub raw: Value,
    pub parsed: T,
}

/// What the worker sends back. The variant says which request it answers.
#[derive(Debug, Clone)]
pub enum FetchResponse {
    Health(Result<HealthStatus, String>),
    Overview(Result<DataOverview, String>),
    CryptoPush(Result<PushSnapshot<CryptoPush>, String>),
    MacroPush(Result<PushSnapshot<MacroPush>, String>),
    /// Sorted and capped for display.
    Calendar(Result<Vec<EconomicEvent>, String>),
    PriceHistory {
        symbol: String,
        result: Result<PriceHistory, String>,
    },
    Watchlist(Result<Vec<StockQuote>, String>),
    Chat(Result<String, String>),
}

impl FetchResponse {
    /// A failed answer to `request` built without going through the worker.
    pub fn failure(request: &FetchRequest, message: impl Into<String>) -> Self {
        let e = message.into();
        match request {
            FetchRequest::Health => Self::Health(Err(e)),
            FetchRequest::Overview => Self::Overview(Err(e)),
            FetchRequest::CryptoPush => Self::CryptoPush(Err(e)),
            FetchRequest::MacroPush => Self::MacroPush(Err(e)),
            FetchRequest::Calendar => Self::Calendar(Err(e)),
            FetchRequest::PriceHistory(symbol) => Self::PriceHistory {
                symbol: symbol.to_uppercase(),
                result: Err(e),
            },
            FetchRequest::Watchlist(_) => Self::Watchlist(Err(e)),
            FetchRequest::Chat(_) => Self::Chat(Err(e)),
        }
    }

    /// Whether this answers one of the dashboard panels rather than the
    /// ticker or the chat window.
    pub fn is_dashboard(&self) -> bool {
        !matches!(self, Self::Watchlist(_) | Self::Chat(_))
    }

    /// Name of the request variant this answers, as `FetchRequest` displays it.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Health(_) => "Health",
            Self::Overview(_) => "Overview",
            Self::CryptoPush(_) => "CryptoPush",
            Self::MacroPush(_) => "MacroPush",
            Self::Calendar(_) => "Calendar",
            Self::PriceHistory { .. } => "PriceHistory",
            Self::Watchlist(_) => "Watchlist",
            Self::Chat(_) => "Chat",
        }
    }

    pub fn error(&self) -> Option<&str> {
        let err = match self {
            Self::Health(r) => r.as_ref().err(),
            Self::Overview(r) => r.as_ref().err(),
            Self::CryptoPush(r) => r.as_ref().err(),
            Self::MacroPush(r) => r.as_ref().err(),
            Self::Calendar(r) => r.as_ref().err(),
            Self::PriceHistory { result, .. } => result.as_ref().err(),
            Self::Watchlist(r) => r.as_ref().err(),
            Self::Chat(r) => r.as_ref().err(),
        };
        err.map(String::as_str)
    }
}
