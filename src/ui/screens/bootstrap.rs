use {
    crate::{
        app::{BootstrapState, SyncStatus},
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{
        Align, CentralPanel, Context, Grid, Layout, ProgressBar, RichText, ScrollArea, Ui,
    },
};

pub(crate) fn render_bootstrap(ctx: &Context, state: &BootstrapState, api_url: &str) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                RichText::new(&UI_TEXT.ls_title)
                    .size(24.0)
                    .strong()
                    .color(UI_CONFIG.colors.warning),
            );
            ui.label(
                RichText::new(format!("{} {}", UI_TEXT.ls_connecting, api_url))
                    .italics()
                    .color(UI_CONFIG.colors.text_subdued),
            );
            ui.add_space(20.0);
            let total = state.total();
            let done = state.completed + state.failed;
            let progress = if total > 0 {
                done as f32 / total as f32
            } else {
                0.0
            };
            ui.add(
                ProgressBar::new(progress)
                    .show_percentage()
                    .animate(true)
                    .text(format!("Loaded {}/{}", done, total)),
            );
            ui.add_space(20.0);
        });

        render_endpoint_grid(ui, state);
    });
}

fn render_endpoint_grid(ui: &mut Ui, state: &BootstrapState) {
    ScrollArea::vertical().show(ui, |ui| {
        Grid::new("bootstrap_endpoints")
            .striped(true)
            .spacing([20.0, 10.0])
            .min_col_width(220.0)
            .show(ui, |ui| {
                for (label, status) in state.endpoints.values() {
                    let (name_color, status_text, status_color) = match status {
                        SyncStatus::Pending => (
                            UI_CONFIG.colors.text_subdued,
                            UI_TEXT.ls_waiting.clone(),
                            UI_CONFIG.colors.text_subdued,
                        ),
                        SyncStatus::Completed => (
                            UI_CONFIG.colors.text_primary,
                            UI_TEXT.ls_loaded.clone(),
                            UI_CONFIG.colors.positive,
                        ),
                        SyncStatus::Failed(_) => (
                            UI_CONFIG.colors.negative,
                            UI_TEXT.ls_failed.clone(),
                            UI_CONFIG.colors.negative,
                        ),
                    };
                    ui.horizontal(|ui| {
                        ui.set_min_width(210.0);
                        ui.label(RichText::new(label).strong().color(name_color));
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if matches!(status, SyncStatus::Pending) {
                                ui.spinner();
                            } else {
                                ui.label(RichText::new(status_text).color(status_color));
                            }
                        });
                    });
                    match status {
                        SyncStatus::Failed(e) => {
                            ui.label(RichText::new(e).small().color(UI_CONFIG.colors.negative));
                        }
                        _ => {
                            ui.label("");
                        }
                    }
                    ui.end_row();
                }
            });
    });
}
