#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

use std::time::Duration;

// Re-export commonly used types outside of crate (for the snapshot bin and tests)
pub use app::App;
pub use config::{DEFAULT_API_URL, DEFAULT_WATCHLIST, PERSISTENCE};
pub use data::{HttpMarketApi, MarketApi};
pub use engine::{DataWorker, FetchRequest, FetchResponse};

// CLI argument parsing
use clap::Parser;
use itertools::Itertools;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the market data backend
    #[arg(long, env = "MARKETINFO_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Comma-separated stock tickers for the ticker tape
    #[arg(long, value_delimiter = ',')]
    pub watchlist: Vec<String>,

    /// Re-fetch every panel this often, in seconds (0 = off)
    #[arg(long, default_value_t = 0)]
    pub refresh_secs: u64,
}

impl Cli {
    /// Upper-cased, de-duplicated watchlist. Falls back to the default list
    /// when nothing usable was given.
    pub fn watchlist_symbols(&self) -> Vec<String> {
        let symbols: Vec<String> = self
            .watchlist
            .iter()
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .unique()
            .collect();
        if symbols.is_empty() {
            return DEFAULT_WATCHLIST.iter().map(|s| s.to_string()).collect();
        }
        symbols
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_secs > 0).then(|| Duration::from_secs(self.refresh_secs))
    }
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
