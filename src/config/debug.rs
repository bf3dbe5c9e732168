//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every outgoing request URL.
    pub log_requests: bool,

    /// Log response sizes and parse outcomes.
    pub log_responses: bool,

    /// Ticker refresh scheduling.
    pub log_ticker: bool,

    /// Anything about the selected history symbol.
    pub log_selection: bool,

    pub log_chat: bool,
}

pub const DF: LogFlags = LogFlags {
    log_requests: true,
    log_selection: true,

    log_responses: false,
    log_ticker: false,
    log_chat: false,
};
