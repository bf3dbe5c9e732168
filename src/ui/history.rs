use std::sync::Arc;

use eframe::egui::{ComboBox, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::data::Loadable;
use crate::models::{DataOverview, PriceHistory};
use crate::ui::panels::show_loadable;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};
use crate::utils::format_price;

/// Symbol picker plus the price line. Returns the newly picked symbol, if any.
pub(crate) fn render_history(
    ui: &mut Ui,
    overview: &Loadable<DataOverview>,
    selected: &str,
    history: &Loadable<Arc<PriceHistory>>,
) -> Option<String> {
    let mut picked = None;
    ui.card(&UI_TEXT.heading_history, |ui| {
        ui.horizontal(|ui| {
            ui.label_subdued(&UI_TEXT.label_symbol);
            let symbols: &[String] = overview
                .ready()
                .map_or(&[], |o| o.crypto_symbols.as_slice());
            ComboBox::from_id_salt("history_symbol")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for symbol in symbols {
                        if ui
                            .selectable_label(symbol == selected, symbol)
                            .clicked()
                            && symbol != selected
                        {
                            picked = Some(symbol.clone());
                        }
                    }
                });
            if let Some(h) = history.ready() {
                if let Some(last) = h.latest() {
                    ui.label(
                        RichText::new(format_price(last.price))
                            .strong()
                            .color(UI_CONFIG.colors.text_primary),
                    );
                    ui.label_subdued(format!("{} {}", h.points.len(), UI_TEXT.label_points));
                }
            }
        });
        ui.add_space(6.0);

        let empty_text = format!("{} {}", UI_TEXT.empty_history_prefix, selected);
        show_loadable(
            ui,
            history,
            &format!("{} history", selected),
            &empty_text,
            |h| h.is_empty(),
            |ui, h| price_plot(ui, h),
        );
    });
    picked
}

fn price_plot(ui: &mut Ui, history: &Arc<PriceHistory>) {
    let series_name = history
        .price_key
        .clone()
        .unwrap_or_else(|| history.symbol.clone());
    // Formatters must own their data.
    let axis = Arc::clone(history);
    let hover = Arc::clone(history);
    Plot::new("price_history_plot")
        .height(UI_CONFIG.chart_height)
        .allow_scroll(false)
        .x_axis_formatter(move |mark, _| axis.label_at(mark.value).unwrap_or_default().to_string())
        .label_formatter(move |_, value| {
            let label = hover.label_at(value.x).unwrap_or_default();
            format!("{}\n{}", label, format_price(value.y))
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(series_name, PlotPoints::new(history.plot_points()))
                    .color(UI_CONFIG.colors.info),
            );
        });
}
