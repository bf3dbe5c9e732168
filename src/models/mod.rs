mod calendar;
mod chat;
mod crypto;
mod history;
mod lenient;
mod macro_data;
mod overview;
mod push_summary;
mod stocks;

pub use {
    calendar::{
        DEFAULT_EVENT_TITLE, EconomicEvent, ImpactLevel, normalize_calendar, prepare_calendar,
        sort_events,
    },
    chat::{ChatMessage, ChatRequest, ChatRole, ChatSession, ChatTurn, WELCOME_MESSAGE, parse_chat_reply},
    crypto::{ChangeIntensity, CryptoPush, CryptoQuote, FearGreed, FearGreedBand, NetworkStats},
    history::{PriceHistory, PricePoint, detect_price_key},
    lenient::{value_as_f64, value_as_text},
    macro_data::{
        ConsumerData, ConsumerSeries, IndexQuote, InterestRates, MacroPush, MarketIndices,
        RateReading, TreasuryYield,
    },
    overview::{DataOverview, HealthStatus},
    push_summary::{SummaryEntry, summarize_push},
    stocks::{StockQuote, WatchlistResponse},
};
