use eframe::egui::{Grid, RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::Loadable;
use crate::engine::PushSnapshot;
use crate::models::{ConsumerSeries, IndexQuote, MacroPush, RateReading};
use crate::ui::panels::{empty_block, show_loadable};
use crate::ui::styles::get_outcome_color;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};
use crate::utils::{format_signed, format_signed_pct, format_thousands, format_usd};

type MacroState = Loadable<PushSnapshot<MacroPush>>;

pub(crate) fn render_macro_section(ui: &mut Ui, macro_push: &MacroState) {
    ui.horizontal_wrapped(|ui| {
        ui.card(&UI_TEXT.heading_indices, |ui| indices_card(ui, macro_push));
        ui.card(&UI_TEXT.heading_rates, |ui| rates_card(ui, macro_push));
        ui.card(&UI_TEXT.heading_consumer, |ui| consumer_card(ui, macro_push));
        ui.card(&UI_TEXT.heading_labour, |ui| labour_card(ui, macro_push));
    });
}

fn index_block(ui: &mut Ui, label: &str, etf: &str, q: &IndexQuote) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).strong().color(UI_CONFIG.colors.text_primary));
        ui.label_subdued(format!("({})", etf));
    });
    ui.horizontal(|ui| {
        ui.label(RichText::new(format_usd(q.display_price())).size(18.0));
        ui.label(
            RichText::new(format!(
                "{} ({})",
                format_signed(q.change, 2),
                format_signed_pct(q.change_percent)
            ))
            .color(get_outcome_color(q.change)),
        );
    });
    ui.horizontal(|ui| {
        ui.metric(&UI_TEXT.label_open, &format!("{:.2}", q.open), UI_CONFIG.colors.text_subdued);
        ui.metric(&UI_TEXT.label_high, &format!("{:.2}", q.high), UI_CONFIG.colors.text_subdued);
        ui.metric(&UI_TEXT.label_low, &format!("{:.2}", q.low), UI_CONFIG.colors.text_subdued);
        ui.metric(
            &UI_TEXT.label_volume,
            &format_thousands(q.volume, 0),
            UI_CONFIG.colors.text_subdued,
        );
    });
    ui.add_space(4.0);
}

fn indices_card(ui: &mut Ui, macro_push: &MacroState) {
    show_loadable(
        ui,
        macro_push,
        "market indices",
        &UI_TEXT.empty_indices,
        |snap| {
            snap.parsed
                .market_indices
                .as_ref()
                .is_none_or(|m| m.labelled().is_empty())
        },
        |ui, snap| {
            let Some(indices) = snap.parsed.market_indices.as_ref() else {
                return;
            };
            let labelled = indices.labelled();
            for (label, etf, q) in &labelled {
                index_block(ui, label, etf, q);
            }

            let bars: Vec<Bar> = labelled
                .iter()
                .enumerate()
                .map(|(i, (_, etf, q))| {
                    Bar::new(i as f64, q.change_percent)
                        .name(*etf)
                        .fill(get_outcome_color(q.change_percent))
                        .width(0.5)
                })
                .collect();
            let names: Vec<String> = labelled.iter().map(|(_, etf, _)| etf.to_string()).collect();
            Plot::new("index_change_plot")
                .height(UI_CONFIG.chart_height * 0.5)
                .width(UI_CONFIG.card_min_width)
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .x_axis_formatter(move |mark, _| {
                    let idx = mark.value.round();
                    if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                        return String::new();
                    }
                    names.get(idx as usize).cloned().unwrap_or_default()
                })
                .label_formatter(|name, value| format!("{}: {:+.2}%", name, value.y))
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new("change %", bars));
                });
        },
    );
}

fn rate_row(ui: &mut Ui, label: &str, reading: &RateReading) {
    ui.horizontal(|ui| {
        ui.label_subdued(label);
        ui.label(
            RichText::new(format!("{:.2}%", reading.rate_percent))
                .strong()
                .color(UI_CONFIG.colors.text_primary),
        );
        if let Some(date) = &reading.date {
            ui.label_subdued(date);
        }
    });
    if let Some(note) = reading.note.as_ref().or(reading.error.as_ref()) {
        ui.label(RichText::new(note).small().italics().color(UI_CONFIG.colors.warning));
    }
}

fn rates_card(ui: &mut Ui, macro_push: &MacroState) {
    show_loadable(
        ui,
        macro_push,
        "interest rates",
        &UI_TEXT.empty_rates,
        |snap| {
            snap.parsed
                .interest_rates
                .as_ref()
                .is_none_or(|r| r.us10yr.is_none() && r.fed_funds_rate.is_none())
        },
        |ui, snap| {
            let Some(rates) = snap.parsed.interest_rates.as_ref() else {
                return;
            };
            if let Some(t) = &rates.us10yr {
                ui.horizontal(|ui| {
                    ui.label_subdued(&UI_TEXT.label_us10y);
                    ui.label(
                        RichText::new(format!("{:.2}%", t.yield_percent))
                            .strong()
                            .color(UI_CONFIG.colors.text_primary),
                    );
                    ui.label(
                        RichText::new(format_signed(t.change, 2))
                            .small()
                            .color(get_outcome_color(t.change)),
                    );
                });
            }
            if let Some(ff) = &rates.fed_funds_rate {
                rate_row(ui, &UI_TEXT.label_fed_funds, ff);
            }
        },
    );
}

fn consumer_rows(ui: &mut Ui, label: &str, series: &ConsumerSeries) {
    ui.label_subdued(label);
    ui.label(RichText::new(format_thousands(series.value, 2)).color(UI_CONFIG.colors.text_primary));
    ui.label(
        RichText::new(format!("{} {}", UI_TEXT.label_mom, format_signed_pct(series.change_mom)))
            .small()
            .color(get_outcome_color(series.change_mom)),
    );
    ui.label(
        RichText::new(format!("{} {}", UI_TEXT.label_yoy, format_signed_pct(series.change_yoy)))
            .small()
            .color(get_outcome_color(series.change_yoy)),
    );
    ui.label_subdued(series.date.clone().unwrap_or_default());
    ui.end_row();
    if let Some(note) = &series.note {
        ui.label(RichText::new(note).small().italics().color(UI_CONFIG.colors.warning));
        ui.end_row();
    }
}

fn consumer_card(ui: &mut Ui, macro_push: &MacroState) {
    show_loadable(
        ui,
        macro_push,
        "consumer data",
        &UI_TEXT.empty_consumer,
        |snap| {
            snap.parsed
                .consumer_data
                .as_ref()
                .is_none_or(|c| c.cpi.is_none() && c.retail_sales.is_none())
        },
        |ui, snap| {
            let Some(consumer) = snap.parsed.consumer_data.as_ref() else {
                return;
            };
            Grid::new("consumer_grid").spacing([10.0, 4.0]).show(ui, |ui| {
                let rows = [
                    (&UI_TEXT.label_cpi, consumer.cpi.as_ref()),
                    (&UI_TEXT.label_retail_sales, consumer.retail_sales.as_ref()),
                ];
                for (label, series) in rows {
                    if let Some(series) = series {
                        consumer_rows(ui, label, series);
                    }
                }
            });
        },
    );
}

fn labour_card(ui: &mut Ui, macro_push: &MacroState) {
    show_loadable(
        ui,
        macro_push,
        "labour data",
        &UI_TEXT.empty_consumer,
        |snap| {
            snap.parsed.consumer_data.as_ref().is_none_or(|c| {
                c.unemployment_rate.is_none() && c.inflation_rate.is_none()
            })
        },
        |ui, snap| match snap.parsed.consumer_data.as_ref() {
            Some(consumer) => {
                if let Some(r) = &consumer.unemployment_rate {
                    rate_row(ui, &UI_TEXT.label_unemployment, r);
                }
                if let Some(r) = &consumer.inflation_rate {
                    rate_row(ui, &UI_TEXT.label_inflation, r);
                }
            }
            None => empty_block(ui, &UI_TEXT.empty_consumer),
        },
    );
}
