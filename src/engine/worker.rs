use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use eframe::egui;
use tokio::runtime::{Builder, Runtime};

use super::messages::{FetchRequest, FetchResponse, PushSnapshot};
use crate::config::DASHBOARD;
use crate::data::MarketApi;
use crate::models::{CryptoPush, MacroPush, sort_events};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Owns the background fetch thread. Requests go in over one channel and
/// tagged responses come back over another; the UI drains them every frame.
pub struct DataWorker {
    request_tx: Sender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
}

impl DataWorker {
    /// Starts the runtime thread. `repaint` is poked after each response so the
    /// UI wakes up without user input.
    pub fn spawn(api: Arc<dyn MarketApi>, repaint: Option<egui::Context>) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("marketinfo-fetch")
            .enable_all()
            .build()
            .context("Failed to build tokio runtime for the fetch worker")?;

        let (request_tx, request_rx) = channel::<FetchRequest>();
        let (response_tx, response_rx) = channel::<FetchResponse>();

        thread::Builder::new()
            .name("marketinfo-dispatch".into())
            .spawn(move || dispatch_loop(runtime, api, request_rx, response_tx, repaint))
            .context("Failed to spawn fetch worker thread")?;

        Ok(Self {
            request_tx,
            response_rx,
        })
    }

    /// Queues a request. Returns false if the worker has gone away.
    pub fn request(&self, request: FetchRequest) -> bool {
        match self.request_tx.send(request) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Fetch worker is gone, dropping {}", e.0);
                false
            }
        }
    }

    /// Everything that has arrived since the last call, without blocking.
    pub fn drain(&self) -> Vec<FetchResponse> {
        self.response_rx.try_iter().collect()
    }

    /// Blocks up to `timeout` for the next response.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<FetchResponse> {
        match self.response_rx.recv_timeout(timeout) {
            Ok(r) => Some(r),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

fn dispatch_loop(
    runtime: Runtime,
    api: Arc<dyn MarketApi>,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
    repaint: Option<egui::Context>,
) {
    while let Ok(request) = request_rx.recv() {
        let api = api.clone();
        let tx = response_tx.clone();
        let repaint = repaint.clone();
        runtime.spawn(async move {
            let response = execute(api.as_ref(), request).await;
            // Receiver gone means the app is shutting down.
            if tx.send(response).is_ok() {
                if let Some(ctx) = repaint {
                    ctx.request_repaint();
                }
            }
        });
    }
    log::info!("Fetch worker stopped: request channel closed");
}

fn flatten<T>(label: &str, result: Result<T>) -> Result<T, String> {
    result.map_err(|e| {
        log::warn!("{} failed: {:#}", label, e);
        format!("{:#}", e)
    })
}

/// Runs one request against `api` and tags the outcome.
pub async fn execute(api: &dyn MarketApi, request: FetchRequest) -> FetchResponse {
    let started = Instant::now();
    let label = request.to_string();

    let response = match request {
        FetchRequest::Health => FetchResponse::Health(flatten(&label, api.health().await)),
        FetchRequest::Overview => FetchResponse::Overview(flatten(&label, api.overview().await)),
        FetchRequest::CryptoPush => {
            let result = async {
                let raw = api.crypto_push_raw().await?;
                let parsed = serde_json::from_value::<CryptoPush>(raw.clone())
                    .context("Failed to parse crypto push")?;
                Ok::<_, anyhow::Error>(PushSnapshot { raw, parsed })
            }
            .await;
            FetchResponse::CryptoPush(flatten(&label, result))
        }
        FetchRequest::MacroPush => {
            let result = async {
                let raw = api.macro_push_raw().await?;
                let parsed = serde_json::from_value::<MacroPush>(raw.clone())
                    .context("Failed to parse macro push")?;
                Ok::<_, anyhow::Error>(PushSnapshot { raw, parsed })
            }
            .await;
            FetchResponse::MacroPush(flatten(&label, result))
        }
        FetchRequest::Calendar => {
            let result = api.calendar().await.map(|mut events| {
                sort_events(&mut events);
                events.truncate(DASHBOARD.calendar_max_events);
                events
            });
            FetchResponse::Calendar(flatten(&label, result))
        }
        FetchRequest::PriceHistory(symbol) => {
            let symbol = symbol.to_uppercase();
            let result = flatten(&label, api.price_history(&symbol).await);
            FetchResponse::PriceHistory { symbol, result }
        }
        FetchRequest::Watchlist(symbols) => {
            FetchResponse::Watchlist(flatten(&label, api.watchlist(&symbols).await))
        }
        FetchRequest::Chat(chat) => FetchResponse::Chat(flatten(&label, api.chat(&chat).await)),
    };

    #[cfg(debug_assertions)]
    if DF.log_responses {
        log::info!(
            "{} finished in {}ms (ok: {})",
            label,
            started.elapsed().as_millis(),
            response.error().is_none()
        );
    }
    #[cfg(not(debug_assertions))]
    let _ = started;

    response
}
