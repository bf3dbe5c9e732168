mod phases;
mod root;
mod state;

pub(crate) use phases::PhaseView;
pub(crate) use state::{
    AppState, BootstrapState, DashboardData, SyncStatus, refresh_requests, resolve_history_symbol,
};

pub use root::App;
