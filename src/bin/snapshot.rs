//! One-shot terminal snapshot of the market backend.
//!
//! Hits the same endpoints the dashboard does, once, and prints each as a table.
//!
//! cargo run --bin snapshot -- --symbol ETH

use anyhow::Result;
use clap::Parser;
use tabled::{Table, Tabled, settings::Style};

use marketinfo::Cli;
use marketinfo::config::DASHBOARD;
use marketinfo::data::{HttpMarketApi, MarketApi};
use marketinfo::models::{CryptoPush, EconomicEvent, MacroPush, PriceHistory, StockQuote, sort_events};
use marketinfo::utils::{
    format_market_cap, format_price, format_signed, format_signed_pct, format_thousands,
    format_usd,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print a snapshot of the market backend as tables")]
struct SnapshotArgs {
    #[command(flatten)]
    cli: Cli,

    /// Also print the price history of this symbol
    #[arg(long)]
    symbol: Option<String>,
}

#[derive(Tabled)]
struct CryptoRow {
    #[tabled(rename = "Coin")]
    coin: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "24h")]
    change: String,
    #[tabled(rename = "Market cap")]
    market_cap: String,
    #[tabled(rename = "Volume 24h")]
    volume: String,
}

#[derive(Tabled)]
struct IndexRow {
    #[tabled(rename = "Index")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Volume")]
    volume: String,
}

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Impact")]
    impact: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Event")]
    title: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Forecast")]
    forecast: String,
}

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Change")]
    change: String,
}

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "When")]
    label: String,
    #[tabled(rename = "Price")]
    price: String,
}

fn print_table<T: Tabled>(title: &str, rows: Vec<T>) {
    println!("\n== {} ==", title);
    if rows.is_empty() {
        println!("No data available");
        return;
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

fn print_failure(title: &str, e: &anyhow::Error) {
    println!("\n== {} ==", title);
    println!("Error loading {}: {:#}", title.to_lowercase(), e);
}

fn crypto_rows(push: &CryptoPush) -> Vec<CryptoRow> {
    DASHBOARD
        .tracked_coins
        .iter()
        .filter_map(|coin| {
            push.quote(coin.symbol).map(|q| CryptoRow {
                coin: format!("{} ({})", coin.name, coin.symbol),
                price: format_price(q.price_usd),
                change: format_signed_pct(q.change_24h),
                market_cap: format_market_cap(q.market_cap),
                volume: format_market_cap(q.volume_24h),
            })
        })
        .collect()
}

fn index_rows(push: &MacroPush) -> Vec<IndexRow> {
    push.market_indices
        .as_ref()
        .map(|m| {
            m.labelled()
                .into_iter()
                .map(|(label, etf, q)| IndexRow {
                    name: format!("{} ({})", label, etf),
                    price: format_usd(q.display_price()),
                    change: format!(
                        "{} ({})",
                        format_signed(q.change, 2),
                        format_signed_pct(q.change_percent)
                    ),
                    volume: format_thousands(q.volume, 0),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn event_rows(mut events: Vec<EconomicEvent>) -> Vec<EventRow> {
    sort_events(&mut events);
    events.truncate(DASHBOARD.calendar_max_events);
    events
        .into_iter()
        .map(|e| EventRow {
            impact: e.impact_level().to_string(),
            date: e.display_date().unwrap_or_default(),
            title: e.title,
            country: e.country.unwrap_or_default(),
            actual: e.actual.unwrap_or_default(),
            forecast: e.forecast.unwrap_or_default(),
        })
        .collect()
}

fn quote_rows(quotes: &[StockQuote]) -> Vec<QuoteRow> {
    quotes
        .iter()
        .map(|q| QuoteRow {
            symbol: q.symbol.clone(),
            price: format_usd(q.price),
            change: format!(
                "{} ({})",
                format_signed(q.change, 2),
                format_signed_pct(q.change_percent)
            ),
        })
        .collect()
}

fn point_rows(history: &PriceHistory) -> Vec<PointRow> {
    let skip = history.points.len().saturating_sub(20);
    history
        .points
        .iter()
        .skip(skip)
        .map(|p| PointRow {
            label: p.label.clone(),
            price: format_price(p.price),
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter(None, log::LevelFilter::Warn)
        .filter(Some("marketinfo"), log::LevelFilter::Info)
        .init();

    let args = SnapshotArgs::parse();
    let api = HttpMarketApi::new(&args.cli.api_url)?;
    let watchlist = args.cli.watchlist_symbols();

    println!("Snapshot of {}", args.cli.api_url);

    let (health, overview, crypto, macro_push, calendar, quotes) = futures::join!(
        api.health(),
        api.overview(),
        api.crypto_push(),
        api.macro_push(),
        api.calendar(),
        api.watchlist(&watchlist),
    );

    match health {
        Ok(h) => println!("Backend: {} {}", h.status, h.message),
        Err(e) => print_failure("Backend health", &e),
    }
    match overview {
        Ok(o) => println!("Crypto history symbols: {}", o.crypto_symbols.join(", ")),
        Err(e) => print_failure("Data overview", &e),
    }
    match crypto {
        Ok(push) => {
            print_table("Crypto prices", crypto_rows(&push));
            if let Some(fg) = &push.fear_greed_index {
                println!("Fear & Greed: {:.0} ({})", fg.value, fg.band());
            }
        }
        Err(e) => print_failure("Crypto prices", &e),
    }
    match macro_push {
        Ok(push) => print_table("Market indices", index_rows(&push)),
        Err(e) => print_failure("Market indices", &e),
    }
    match calendar {
        Ok(events) => print_table("Economic calendar", event_rows(events)),
        Err(e) => print_failure("Economic calendar", &e),
    }
    match quotes {
        Ok(q) => print_table("Watchlist", quote_rows(&q)),
        Err(e) => print_failure("Watchlist", &e),
    }

    if let Some(symbol) = &args.symbol {
        let title = format!("{} history", symbol.to_uppercase());
        match api.price_history(&symbol.to_uppercase()).await {
            Ok(h) => print_table(&title, point_rows(&h)),
            Err(e) => print_failure(&title, &e),
        }
    }

    Ok(())
}
