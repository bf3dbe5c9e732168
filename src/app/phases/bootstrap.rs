// app/phases/bootstrap.rs

use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::BootstrapState, state::RunningState};
use crate::ui::render_bootstrap;

impl PhaseView for BootstrapState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        for (kind, error) in app.poll_worker() {
            self.record(kind, error.as_deref());
        }
        if self.is_settled() {
            log::info!(
                "Start-up fetches settled: {} ok, {} failed",
                self.completed,
                self.failed
            );
            return AppState::Running(RunningState);
        }
        render_bootstrap(ctx, self, &app.api_url);
        AppState::Bootstrapping(self.clone())
    }
}
