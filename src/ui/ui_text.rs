use std::sync::LazyLock;

pub const ICON_REFRESH: &str = "🔄";
pub const ICON_CHAT: &str = "💬";
pub const ICON_CLOSE: &str = "✖";
pub const ICON_SEND: &str = "➤";
pub const ICON_DOT: &str = "●";
pub const ICON_CHART: &str = "📈";
pub const ICON_CALENDAR: &str = "📅";
pub const ICON_GLOBE: &str = "🌐";
pub const ICON_LINK: &str = "🔗";

pub struct UiText {
    // Window
    pub app_title: String,
    pub label_api: String,
    pub label_last_refresh: String,
    pub label_auto_refresh: String,
    pub label_refreshing: String,
    pub button_refresh: String,
    pub label_watchlist: String,
    pub label_quotes: String,
    pub label_off: String,

    // Bootstrap screen
    pub ls_title: String,
    pub ls_connecting: String,
    pub ls_waiting: String,
    pub ls_failed: String,
    pub ls_loaded: String,

    // Generic panel states
    pub label_loading: String,
    pub error_loading_prefix: String,
    pub label_no_data: String,

    // Section headings
    pub heading_overview: String,
    pub heading_crypto_prices: String,
    pub heading_change: String,
    pub heading_market_cap: String,
    pub heading_volume: String,
    pub heading_distribution: String,
    pub heading_fear_greed: String,
    pub heading_btc_network: String,
    pub heading_indices: String,
    pub heading_rates: String,
    pub heading_consumer: String,
    pub heading_labour: String,
    pub heading_calendar: String,
    pub heading_history: String,
    pub heading_push_data: String,
    pub heading_crypto_stream: String,
    pub heading_macro_stream: String,

    // Empty states
    pub empty_crypto: String,
    pub empty_fear_greed: String,
    pub empty_hash_rate: String,
    pub empty_indices: String,
    pub empty_rates: String,
    pub empty_consumer: String,
    pub empty_calendar: String,
    pub empty_history_prefix: String,
    pub empty_push_data: String,

    // Overview
    pub overview_crypto_data: String,
    pub overview_crypto_pushes: String,
    pub overview_macro_pushes: String,
    pub overview_calendar: String,
    pub overview_backend: String,

    // Metrics
    pub label_rank: String,
    pub label_share: String,
    pub label_change: String,
    pub label_intensity: String,
    pub label_hash_rate: String,
    pub label_difficulty: String,
    pub label_open: String,
    pub label_high: String,
    pub label_low: String,
    pub label_volume: String,
    pub label_us10y: String,
    pub label_fed_funds: String,
    pub label_cpi: String,
    pub label_retail_sales: String,
    pub label_unemployment: String,
    pub label_inflation: String,
    pub label_mom: String,
    pub label_yoy: String,
    pub label_actual: String,
    pub label_forecast: String,
    pub label_symbol: String,
    pub label_points: String,
    pub label_total: String,

    // Ticker
    pub ticker_loading: String,
    pub ticker_failed: String,
    pub ticker_empty: String,

    // Chat
    pub chat_title: String,
    pub chat_hint: String,
    pub chat_typing: String,
    pub chat_toggle: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Market Info Dashboard".to_string(),
    label_api: "API".to_string(),
    label_last_refresh: "Last refresh".to_string(),
    label_auto_refresh: "Auto refresh".to_string(),
    label_refreshing: "Refreshing...".to_string(),
    button_refresh: format!("{} Refresh", ICON_REFRESH),
    label_watchlist: "Watchlist".to_string(),
    label_quotes: "quotes".to_string(),
    label_off: "off".to_string(),

    ls_title: "MARKET INFO".to_string(),
    ls_connecting: "Connecting to backend".to_string(),
    ls_waiting: "Waiting".to_string(),
    ls_failed: "FAILED".to_string(),
    ls_loaded: "OK".to_string(),

    label_loading: "Loading...".to_string(),
    error_loading_prefix: "Error loading".to_string(),
    label_no_data: "No data available".to_string(),

    heading_overview: "Data Overview".to_string(),
    heading_crypto_prices: "Crypto Prices".to_string(),
    heading_change: "24h Change".to_string(),
    heading_market_cap: "Market Cap".to_string(),
    heading_volume: "24h Volume (B)".to_string(),
    heading_distribution: "Market Cap Distribution".to_string(),
    heading_fear_greed: "Fear & Greed Index".to_string(),
    heading_btc_network: "BTC Network".to_string(),
    heading_indices: "Market Indices".to_string(),
    heading_rates: "Interest Rates".to_string(),
    heading_consumer: "Consumer Data".to_string(),
    heading_labour: "Labour & Inflation".to_string(),
    heading_calendar: format!("{} Economic Calendar", ICON_CALENDAR),
    heading_history: format!("{} Price History", ICON_CHART),
    heading_push_data: format!("{} Data Streams", ICON_GLOBE),
    heading_crypto_stream: "Crypto Push".to_string(),
    heading_macro_stream: "Macro Push".to_string(),

    empty_crypto: "No crypto market data available".to_string(),
    empty_fear_greed: "No fear & greed data available".to_string(),
    empty_hash_rate: "No hash rate data available".to_string(),
    empty_indices: "No market index data available".to_string(),
    empty_rates: "No interest rate data available".to_string(),
    empty_consumer: "No consumer data available".to_string(),
    empty_calendar: "No economic events available".to_string(),
    empty_history_prefix: "No data available for".to_string(),
    empty_push_data: "No push data available".to_string(),

    overview_crypto_data: "Crypto Data".to_string(),
    overview_crypto_pushes: "Crypto Pushes".to_string(),
    overview_macro_pushes: "Macro Pushes".to_string(),
    overview_calendar: "Economic Calendar".to_string(),
    overview_backend: "Backend".to_string(),

    label_rank: "Rank".to_string(),
    label_share: "Share".to_string(),
    label_change: "Change".to_string(),
    label_intensity: "Intensity".to_string(),
    label_hash_rate: "Hash Rate".to_string(),
    label_difficulty: "Difficulty".to_string(),
    label_open: "O".to_string(),
    label_high: "H".to_string(),
    label_low: "L".to_string(),
    label_volume: "Vol".to_string(),
    label_us10y: "US 10Y Treasury".to_string(),
    label_fed_funds: "Fed Funds Rate".to_string(),
    label_cpi: "CPI".to_string(),
    label_retail_sales: "Retail Sales".to_string(),
    label_unemployment: "Unemployment".to_string(),
    label_inflation: "Inflation".to_string(),
    label_mom: "MoM".to_string(),
    label_yoy: "YoY".to_string(),
    label_actual: "Actual".to_string(),
    label_forecast: "Forecast".to_string(),
    label_symbol: "Symbol".to_string(),
    label_points: "points".to_string(),
    label_total: "Total".to_string(),

    ticker_loading: "Loading market data...".to_string(),
    ticker_failed: "Failed to load stock data".to_string(),
    ticker_empty: "No stock data".to_string(),

    chat_title: format!("{} Market Assistant", ICON_CHAT),
    chat_hint: "Ask about markets...".to_string(),
    chat_typing: "Assistant is typing...".to_string(),
    chat_toggle: ICON_CHAT.to_string(),
});
