//! Configuration module for the marketinfo dashboard.

// Can all be private now because we have a public re-export.
mod api;
mod dashboard;
mod debug;
mod persistence;
mod ticker;

// Re-export commonly used items
pub use api::{API, ApiConfig, DEFAULT_API_URL};
pub use dashboard::{DASHBOARD, TrackedCoin};
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use ticker::{DEFAULT_WATCHLIST, TICKER};
