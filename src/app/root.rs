use {
    chrono::{DateTime, Local},
    eframe::{Frame, Storage, egui::Context},
    serde::{Deserialize, Serialize},
    std::{
        mem,
        sync::Arc,
        time::{Duration, Instant},
    },
};

use crate::{
    Cli,
    app::{
        AppState, BootstrapState, DashboardData, PhaseView, refresh_requests,
        resolve_history_symbol,
    },
    config::DASHBOARD,
    data::{HttpMarketApi, Loadable},
    engine::{DataWorker, FetchRequest, FetchResponse},
    models::{ChatRequest, ChatSession},
    ui::{TickerState, setup_custom_visuals},
};

#[cfg(debug_assertions)]
use crate::config::DF;

const WORKER_UNAVAILABLE: &str = "Fetch worker is not running";

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) selected_symbol: String, // persists across sessions.
    pub(crate) chat_open: bool,
    #[serde(skip)]
    pub(crate) api_url: String,
    #[serde(skip)]
    pub(crate) watchlist: Vec<String>,
    #[serde(skip)]
    pub(crate) refresh_every: Option<Duration>,
    #[serde(skip)]
    pub(crate) data: DashboardData,
    #[serde(skip)]
    pub(crate) ticker_state: TickerState,
    #[serde(skip)]
    pub(crate) chat: ChatSession,
    #[serde(skip)]
    pub(crate) last_refresh: Option<DateTime<Local>>,
    #[serde(skip)]
    pub(crate) in_flight: usize,
    #[serde(skip)]
    next_refresh: Option<Instant>,
    #[serde(skip)]
    worker: Option<DataWorker>,
    #[serde(skip)]
    undelivered: Vec<FetchResponse>,
    #[serde(skip)]
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            selected_symbol: DASHBOARD.default_history_symbol.to_string(),
            chat_open: false,
            api_url: String::new(),
            watchlist: Vec::new(),
            refresh_every: None,
            data: DashboardData::default(),
            ticker_state: TickerState::default(),
            chat: ChatSession::default(),
            last_refresh: None,
            in_flight: 0,
            next_refresh: None,
            worker: None,
            undelivered: Vec::new(),
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.api_url = args.api_url.clone();
        app.watchlist = args.watchlist_symbols();
        app.refresh_every = args.refresh_interval();
        app.selected_symbol = resolve_history_symbol(&app.selected_symbol, &[]);

        app.worker = match HttpMarketApi::new(&args.api_url)
            .and_then(|api| DataWorker::spawn(Arc::new(api), Some(cc.egui_ctx.clone())))
        {
            Ok(worker) => Some(worker),
            Err(e) => {
                log::error!("Failed to start fetch worker: {:#}", e);
                None
            }
        };

        // The history chart is not part of start-up; it can wait for the overview.
        let startup = refresh_requests(&app.selected_symbol)
            .into_iter()
            .filter(|r| !matches!(r, FetchRequest::PriceHistory(_)))
            .map(|r| r.to_string());
        app.state = AppState::Bootstrapping(BootstrapState::new(startup));

        let now = Instant::now();
        app.refresh_all(now);
        app.request_watchlist(now);
        app
    }

    /// Queues `request` and flags its panel as loading. If the worker is gone
    /// the failure is delivered on the next poll like any other response.
    pub(crate) fn dispatch(&mut self, request: FetchRequest) {
        self.data.begin(&request);
        if !matches!(request, FetchRequest::Watchlist(_) | FetchRequest::Chat(_)) {
            self.in_flight += 1;
        }
        let sent = self
            .worker
            .as_ref()
            .is_some_and(|w| w.request(request.clone()));
        if !sent {
            self.undelivered
                .push(FetchResponse::failure(&request, WORKER_UNAVAILABLE));
        }
    }

    /// Re-fetches every dashboard panel.
    pub(crate) fn refresh_all(&mut self, now: Instant) {
        for request in refresh_requests(&self.selected_symbol) {
            self.dispatch(request);
        }
        self.last_refresh = Some(Local::now());
        self.next_refresh = self.refresh_every.map(|every| now + every);
    }

    pub(crate) fn request_watchlist(&mut self, now: Instant) {
        self.ticker_state.mark_requested(now);
        self.dispatch(FetchRequest::Watchlist(self.watchlist.clone()));
    }

    pub(crate) fn send_chat(&mut self, request: ChatRequest) {
        #[cfg(debug_assertions)]
        if DF.log_chat {
            log::info!(
                "Chat send: {} chars, {} turns of history",
                request.message.len(),
                request.history.len()
            );
        }
        self.dispatch(FetchRequest::Chat(request));
    }

    pub(crate) fn select_history_symbol(&mut self, symbol: String) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("History symbol {} -> {}", self.selected_symbol, symbol);
        }
        self.selected_symbol = symbol.to_uppercase();
        self.data.history = Loadable::Loading;
        self.dispatch(FetchRequest::PriceHistory(self.selected_symbol.clone()));
    }

    /// Applies everything that came back since the last frame and reports
    /// each outcome as (request name, error).
    pub(crate) fn poll_worker(&mut self) -> Vec<(&'static str, Option<String>)> {
        let mut responses = mem::take(&mut self.undelivered);
        if let Some(worker) = &self.worker {
            responses.extend(worker.drain());
        }
        responses
            .into_iter()
            .map(|response| {
                let outcome = (response.kind(), response.error().map(str::to_string));
                self.handle_response(response);
                outcome
            })
            .collect()
    }

    fn handle_response(&mut self, response: FetchResponse) {
        if response.is_dashboard() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        match response {
            FetchResponse::Health(r) => self.data.health = r.into(),
            FetchResponse::Overview(r) => {
                let symbols = r.as_ref().ok().map(|o| o.crypto_symbols.clone());
                self.data.overview = r.into();
                if let Some(symbols) = symbols {
                    self.sync_history_symbol(&symbols);
                }
            }
            FetchResponse::CryptoPush(r) => self.data.crypto = r.into(),
            FetchResponse::MacroPush(r) => self.data.macro_push = r.into(),
            FetchResponse::Calendar(r) => self.data.calendar = r.into(),
            FetchResponse::PriceHistory { symbol, result } => {
                if symbol.eq_ignore_ascii_case(&self.selected_symbol) {
                    self.data.history = result.map(Arc::new).into();
                } else {
                    #[cfg(debug_assertions)]
                    if DF.log_selection {
                        log::info!(
                            "Dropping stale {} history, {} is selected",
                            symbol,
                            self.selected_symbol
                        );
                    }
                }
            }
            FetchResponse::Watchlist(r) => self.ticker_state.apply(r),
            FetchResponse::Chat(r) => self.chat.receive_reply(r),
        }
    }

    fn sync_history_symbol(&mut self, symbols: &[String]) {
        let resolved = resolve_history_symbol(&self.selected_symbol, symbols);
        if resolved != self.selected_symbol {
            self.select_history_symbol(resolved);
        }
    }

    fn schedule_refreshes(&mut self, now: Instant) {
        if self.next_refresh.is_some_and(|at| now >= at) {
            log::info!("Auto-refresh");
            self.refresh_all(now);
        }
        if self.ticker_state.refresh_due(now) {
            self.request_watchlist(now);
        }
    }

    fn next_wakeup(&self, now: Instant) -> Duration {
        let ticker = self.ticker_state.next_refresh_in(now);
        match self.next_refresh {
            Some(at) => ticker.min(at.saturating_duration_since(now)),
            None => ticker,
        }
    }

    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        let now = Instant::now();
        self.poll_worker();
        self.schedule_refreshes(now);

        self.render_top_panel(ctx);
        self.render_ticker_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        self.render_chat(ctx);

        ctx.request_repaint_after(self.next_wakeup(now));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Bootstrapping(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!(
                "SAVE [App]: symbol = {}, chat_open = {}",
                self.selected_symbol,
                self.chat_open
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceHistory;
    use pretty_assertions::assert_eq;

    fn history_response(symbol: &str, result: Result<PriceHistory, String>) -> FetchResponse {
        FetchResponse::PriceHistory {
            symbol: symbol.to_string(),
            result,
        }
    }

    #[test]
    fn stale_history_is_dropped_but_still_counted() {
        let mut app = App {
            selected_symbol: "ETH".to_string(),
            in_flight: 2,
            ..App::default()
        };

        app.handle_response(history_response("BTC", Ok(PriceHistory::default())));

        assert!(app.data.history.ready().is_none());
        assert_eq!(app.data.history.error(), None);
        assert_eq!(app.in_flight, 1);
    }

    #[test]
    fn history_for_selected_symbol_is_applied_case_insensitively() {
        let mut app = App {
            selected_symbol: "ETH".to_string(),
            in_flight: 1,
            ..App::default()
        };

        app.handle_response(history_response("eth", Err("HTTP error! status: 500".into())));

        assert_eq!(app.data.history.error(), Some("HTTP error! status: 500"));
        assert_eq!(app.in_flight, 0);
    }

    #[test]
    fn missing_worker_fails_requests_on_next_poll() {
        let mut app = App::default();
        app.dispatch(FetchRequest::Calendar);
        assert_eq!(app.in_flight, 1);

        let outcomes = app.poll_worker();

        assert_eq!(
            outcomes,
            vec![("Calendar", Some(WORKER_UNAVAILABLE.to_string()))]
        );
        assert_eq!(app.data.calendar.error(), Some(WORKER_UNAVAILABLE));
        assert_eq!(app.in_flight, 0);
    }
}
