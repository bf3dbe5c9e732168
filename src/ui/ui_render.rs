use std::time::Instant;

use eframe::egui::{
    Align, Button, CentralPanel, Context, Layout, RichText, ScrollArea, TopBottomPanel, Ui,
};

use crate::app::App;
use crate::config::TICKER;
use crate::data::Loadable;
use crate::ui::calendar::render_calendar;
use crate::ui::chat::{render_chat_toggle, render_chat_window};
use crate::ui::crypto::render_crypto_section;
use crate::ui::history::render_history;
use crate::ui::macro_view::render_macro_section;
use crate::ui::overview::render_overview;
use crate::ui::push_data::render_push_data;
use crate::ui::ui_text::{ICON_CALENDAR, ICON_CHART, ICON_GLOBE};
use crate::ui::{TickerStatus, UI_CONFIG, UI_TEXT, UiStyleExt};
use crate::utils::format_clock;

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.top_panel_frame();

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&UI_TEXT.app_title)
                            .strong()
                            .size(16.0)
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();
                    ui.label_subdued(format!("{} {}", UI_TEXT.label_api, self.api_url));

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.add(Button::new(UI_TEXT.button_refresh.as_str())).clicked() {
                            log::info!("Manual refresh");
                            self.refresh_all(Instant::now());
                        }
                        if self.in_flight > 0 {
                            ui.spinner();
                            ui.label_subdued(&UI_TEXT.label_refreshing);
                        }
                        if let Some(at) = &self.last_refresh {
                            ui.label_subdued(format!(
                                "{} {}",
                                UI_TEXT.label_last_refresh,
                                format_clock(at)
                            ));
                        }
                    });
                });
            });
    }

    pub(crate) fn render_ticker_panel(&mut self, ctx: &Context) {
        let panel_frame = UI_CONFIG.bottom_panel_frame();

        // Rendered before the status panel so it sits below it.
        TopBottomPanel::bottom("ticker_panel")
            .frame(panel_frame)
            .min_height(TICKER.height)
            .resizable(false)
            .show(ctx, |ui| {
                self.ticker_state.render(ui);
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.bottom_panel_frame();
        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    self.render_status_backend(ui);
                    ui.separator();
                    self.render_status_ticker(ui);
                    ui.separator();
                    self.render_status_refresh(ui);
                });
            });
    }

    fn render_status_backend(&self, ui: &mut Ui) {
        let ok = match &self.data.health {
            Loadable::Ready(h) => h.is_healthy(),
            _ => false,
        };
        ui.status_dot(ok, &format!("{} {}", ICON_GLOBE, self.api_url));
    }

    fn render_status_ticker(&self, ui: &mut Ui) {
        let (text, color) = match self.ticker_state.status() {
            TickerStatus::Loading => (UI_TEXT.label_loading.clone(), UI_CONFIG.colors.warning),
            TickerStatus::Ready => (
                format!("{} {}", self.ticker_state.items().len(), UI_TEXT.label_quotes),
                UI_CONFIG.colors.text_primary,
            ),
            TickerStatus::Failed => (UI_TEXT.ticker_failed.clone(), UI_CONFIG.colors.negative),
        };
        ui.metric(&format!("{} {}", ICON_CHART, UI_TEXT.label_watchlist), &text, color);
    }

    fn render_status_refresh(&self, ui: &mut Ui) {
        let value = match self.refresh_every {
            Some(every) => format!("{}s", every.as_secs()),
            None => UI_TEXT.label_off.clone(),
        };
        ui.metric(
            &format!("{} {}", ICON_CALENDAR, UI_TEXT.label_auto_refresh),
            &value,
            UI_CONFIG.colors.text_subdued,
        );
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = UI_CONFIG.central_panel_frame();
        let mut picked = None;

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        render_overview(ui, &self.data.overview, &self.data.health);
                        ui.add_space(8.0);
                        render_crypto_section(ui, &self.data.crypto);
                        ui.add_space(8.0);
                        render_macro_section(ui, &self.data.macro_push);
                        ui.add_space(8.0);
                        ui.horizontal_wrapped(|ui| {
                            render_calendar(ui, &self.data.calendar);
                            picked = render_history(
                                ui,
                                &self.data.overview,
                                &self.selected_symbol,
                                &self.data.history,
                            );
                        });
                        ui.add_space(8.0);
                        render_push_data(ui, &self.data.crypto, &self.data.macro_push);
                    });
            });

        if let Some(symbol) = picked {
            self.select_history_symbol(symbol);
        }
    }

    pub(crate) fn render_chat(&mut self, ctx: &Context) {
        render_chat_toggle(ctx, &mut self.chat_open);
        if !self.chat_open {
            return;
        }
        if let Some(request) = render_chat_window(ctx, &mut self.chat_open, &mut self.chat) {
            self.send_chat(request);
        }
    }
}
