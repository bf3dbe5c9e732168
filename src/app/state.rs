// src/app/state.rs

use std::{collections::BTreeMap, sync::Arc};

use crate::config::DASHBOARD;
use crate::data::Loadable;
use crate::engine::{FetchRequest, PushSnapshot};
use crate::models::{
    CryptoPush, DataOverview, EconomicEvent, HealthStatus, MacroPush, PriceHistory,
};

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Bootstrapping(BootstrapState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Bootstrapping(BootstrapState::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SyncStatus {
    Pending,
    Completed,
    Failed(String),
}

/// Start-up progress: one row per endpoint the dashboard needs before it is shown.
#[derive(Default, Clone)]
pub(crate) struct BootstrapState {
    pub(crate) endpoints: BTreeMap<usize, (String, SyncStatus)>,
    pub(crate) completed: usize,
    pub(crate) failed: usize,
}

impl BootstrapState {
    pub(crate) fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let endpoints = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| (i, (label.into(), SyncStatus::Pending)))
            .collect();
        Self {
            endpoints,
            completed: 0,
            failed: 0,
        }
    }

    pub(crate) fn total(&self) -> usize {
        self.endpoints.len()
    }

    /// Records the first outcome for `label`. Later outcomes for the same
    /// endpoint (a manual refresh during start-up) are ignored.
    pub(crate) fn record(&mut self, label: &str, error: Option<&str>) {
        let Some((_, status)) = self
            .endpoints
            .values_mut()
            .find(|(l, s)| l == label && *s == SyncStatus::Pending)
        else {
            return;
        };
        *status = match error {
            None => SyncStatus::Completed,
            Some(e) => SyncStatus::Failed(e.to_string()),
        };
        self.completed = self
            .endpoints
            .values()
            .filter(|(_, s)| matches!(s, SyncStatus::Completed))
            .count();
        self.failed = self
            .endpoints
            .values()
            .filter(|(_, s)| matches!(s, SyncStatus::Failed(_)))
            .count();
    }

    pub(crate) fn is_settled(&self) -> bool {
        self.completed + self.failed >= self.total()
    }
}

/// Everything the central panel renders, one slot per backend resource.
#[derive(Default)]
pub(crate) struct DashboardData {
    pub(crate) health: Loadable<HealthStatus>,
    pub(crate) overview: Loadable<DataOverview>,
    pub(crate) crypto: Loadable<PushSnapshot<CryptoPush>>,
    pub(crate) macro_push: Loadable<PushSnapshot<MacroPush>>,
    pub(crate) calendar: Loadable<Vec<EconomicEvent>>,
    pub(crate) history: Loadable<Arc<PriceHistory>>,
}

impl DashboardData {
    /// Flags the slot `request` fills as loading. Watchlist and chat state live elsewhere.
    pub(crate) fn begin(&mut self, request: &FetchRequest) {
        match request {
            FetchRequest::Health => self.health.begin(),
            FetchRequest::Overview => self.overview.begin(),
            FetchRequest::CryptoPush => self.crypto.begin(),
            FetchRequest::MacroPush => self.macro_push.begin(),
            FetchRequest::Calendar => self.calendar.begin(),
            FetchRequest::PriceHistory(_) => self.history.begin(),
            FetchRequest::Watchlist(_) | FetchRequest::Chat(_) => {}
        }
    }
}

/// Requests that make up one full dashboard refresh.
pub(crate) fn refresh_requests(symbol: &str) -> Vec<FetchRequest> {
    vec![
        FetchRequest::Health,
        FetchRequest::Overview,
        FetchRequest::CryptoPush,
        FetchRequest::MacroPush,
        FetchRequest::Calendar,
        FetchRequest::PriceHistory(symbol.to_uppercase()),
    ]
}

/// Which symbol the history chart should show once the backend's list is known.
/// Keeps `current` when the list is empty or contains it, otherwise falls back to
/// the first listed symbol.
pub(crate) fn resolve_history_symbol(current: &str, symbols: &[String]) -> String {
    let current = match current.trim() {
        "" => DASHBOARD.default_history_symbol,
        s => s,
    };
    if symbols.is_empty() || symbols.iter().any(|s| s.eq_ignore_ascii_case(current)) {
        return current.to_uppercase();
    }
    symbols
        .first()
        .map(|s| s.to_uppercase())
        .unwrap_or_else(|| current.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn persisted_symbol_survives_when_listed() {
        assert_eq!(resolve_history_symbol("eth", &symbols(&["BTC", "ETH"])), "ETH");
    }

    #[test]
    fn unknown_symbol_falls_back_to_first() {
        assert_eq!(resolve_history_symbol("DOGE", &symbols(&["SOL", "BTC"])), "SOL");
    }

    #[test]
    fn empty_inputs_use_defaults() {
        assert_eq!(resolve_history_symbol("", &[]), DASHBOARD.default_history_symbol);
        assert_eq!(resolve_history_symbol("ada", &[]), "ADA");
    }

    #[test]
    fn bootstrap_settles_once_every_endpoint_answers() {
        let mut state = BootstrapState::new(["Health", "Overview"]);
        assert!(!state.is_settled());

        state.record("Health", None);
        state.record("Chat", None);
        assert_eq!((state.completed, state.failed), (1, 0));

        state.record("Overview", Some("HTTP error! status: 500"));
        assert!(state.is_settled());
        assert_eq!(state.failed, 1);

        // A second answer does not overwrite the first.
        state.record("Overview", None);
        assert_eq!((state.completed, state.failed), (1, 1));
    }

    #[test]
    fn begin_leaves_watchlist_alone() {
        let mut data = DashboardData::default();
        data.begin(&FetchRequest::Watchlist(vec!["NVDA".into()]));
        data.begin(&FetchRequest::Calendar);
        assert!(data.calendar.is_loading());
        assert!(!data.health.is_loading());
    }

    #[test]
    fn refresh_covers_every_panel() {
        let reqs = refresh_requests("btc");
        assert_eq!(reqs.len(), 6);
        assert_eq!(reqs.last(), Some(&FetchRequest::PriceHistory("BTC".into())));
    }
}
