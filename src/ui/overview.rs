use eframe::egui::{RichText, Ui};

use crate::data::Loadable;
use crate::models::{DataOverview, HealthStatus};
use crate::ui::panels::show_loadable;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};

pub(crate) fn render_overview(
    ui: &mut Ui,
    overview: &Loadable<DataOverview>,
    health: &Loadable<HealthStatus>,
) {
    ui.card(&UI_TEXT.heading_overview, |ui| {
        match health {
            Loadable::Ready(h) => {
                ui.status_dot(h.is_healthy(), &UI_TEXT.overview_backend);
                if !h.message.is_empty() {
                    ui.label_subdued(&h.message);
                }
            }
            Loadable::Failed(_) => ui.status_dot(false, &UI_TEXT.overview_backend),
            Loadable::Idle | Loadable::Loading => {}
        }

        show_loadable(
            ui,
            overview,
            "data overview",
            &UI_TEXT.label_no_data,
            |_| false,
            |ui, o| {
                ui.status_dot(o.has_crypto_history(), &UI_TEXT.overview_crypto_data);
                if o.has_crypto_history() {
                    ui.label(
                        RichText::new(o.crypto_symbols.join(", "))
                            .small()
                            .color(UI_CONFIG.colors.info),
                    );
                }
                ui.status_dot(o.has_crypto_pushes, &UI_TEXT.overview_crypto_pushes);
                ui.status_dot(o.has_macro_pushes, &UI_TEXT.overview_macro_pushes);
                ui.status_dot(o.has_economic_calendar, &UI_TEXT.overview_calendar);
            },
        );
    });
}
