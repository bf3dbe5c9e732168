//! Backend API routes and HTTP client defaults.

pub const DEFAULT_API_URL: &str = "http://localhost:5001";

/// Relative routes exposed by the backend.
pub struct ApiRoutes {
    pub health: &'static str,
    pub overview: &'static str,
    pub crypto_push: &'static str,
    pub macro_push: &'static str,
    pub calendar: &'static str,
    /// Symbol is appended as a final path segment.
    pub price_history: &'static str,
    pub watchlist: &'static str,
    pub chat: &'static str,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
    pub pool_max_idle_per_host: usize,
    /// Cap on how much of an error body we echo into logs.
    pub max_error_body_chars: usize,
}

pub struct ApiConfig {
    pub routes: ApiRoutes,
    pub client: ClientDefaults,
}

pub const API: ApiConfig = ApiConfig {
    routes: ApiRoutes {
        health: "/api/health",
        overview: "/api/data/overview",
        crypto_push: "/api/pushes/crypto",
        macro_push: "/api/pushes/macro",
        calendar: "/api/calendar/economic",
        price_history: "/api/crypto/prices",
        watchlist: "/api/stocks/watchlist",
        chat: "/api/chat",
    },
    client: ClientDefaults {
        timeout_ms: 10_000,
        connect_timeout_ms: 3_000,
        pool_max_idle_per_host: 4,
        max_error_body_chars: 500,
    },
};
