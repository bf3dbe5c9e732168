use eframe::egui::{RichText, Ui};

use crate::data::Loadable;
use crate::models::EconomicEvent;
use crate::ui::panels::show_loadable;
use crate::ui::styles::BandColor;
use crate::ui::ui_text::ICON_LINK;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};

fn event_row(ui: &mut Ui, event: &EconomicEvent) {
    ui.horizontal(|ui| {
        let level = event.impact_level();
        ui.badge(
            event.impact.as_deref().unwrap_or(&level.to_string()),
            level.color(),
        );
        ui.label(
            RichText::new(&event.title)
                .strong()
                .color(UI_CONFIG.colors.text_primary),
        );
        if let Some(link) = &event.link {
            ui.hyperlink_to(ICON_LINK, link);
        }
    });
    ui.horizontal(|ui| {
        if let Some(date) = event.display_date() {
            ui.label_subdued(date);
        }
        if let Some(country) = &event.country {
            ui.label_subdued(country);
        }
        if let Some(actual) = &event.actual {
            ui.metric(&UI_TEXT.label_actual, actual, UI_CONFIG.colors.text_primary);
        }
        if let Some(forecast) = &event.forecast {
            ui.metric(&UI_TEXT.label_forecast, forecast, UI_CONFIG.colors.info);
        }
    });
    ui.separator();
}

pub(crate) fn render_calendar(ui: &mut Ui, calendar: &Loadable<Vec<EconomicEvent>>) {
    ui.card(&UI_TEXT.heading_calendar, |ui| {
        show_loadable(
            ui,
            calendar,
            "economic calendar",
            &UI_TEXT.empty_calendar,
            |events| events.is_empty(),
            |ui, events| {
                for event in events {
                    event_row(ui, event);
                }
            },
        );
    });
}
