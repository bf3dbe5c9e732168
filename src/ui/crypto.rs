use eframe::egui::{Rect, RichText, Sense, Ui, Vec2};
use egui_plot::{Bar, BarChart, Plot};
use strum::IntoEnumIterator;

use crate::config::DASHBOARD;
use crate::data::Loadable;
use crate::engine::PushSnapshot;
use crate::models::{CryptoPush, FearGreed, FearGreedBand};
use crate::ui::donut::{DonutSlice, donut_chart};
use crate::ui::panels::{empty_block, show_loadable};
use crate::ui::styles::{BandColor, get_outcome_color};
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};
use crate::utils::{
    change_arrow, format_market_cap, format_price, format_signed_pct, format_thousands,
};

type CryptoState = Loadable<PushSnapshot<CryptoPush>>;

fn with_prices(
    ui: &mut Ui,
    crypto: &CryptoState,
    panel: &str,
    content: impl FnOnce(&mut Ui, &CryptoPush),
) {
    show_loadable(
        ui,
        crypto,
        panel,
        &UI_TEXT.empty_crypto,
        |snap| !snap.parsed.has_prices(),
        |ui, snap| content(ui, &snap.parsed),
    );
}

pub(crate) fn render_crypto_section(ui: &mut Ui, crypto: &CryptoState) {
    ui.horizontal_wrapped(|ui| {
        ui.card(&UI_TEXT.heading_crypto_prices, |ui| prices_card(ui, crypto));
        ui.card(&UI_TEXT.heading_change, |ui| change_card(ui, crypto));
        ui.card(&UI_TEXT.heading_market_cap, |ui| market_cap_card(ui, crypto));
    });
    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        ui.card(&UI_TEXT.heading_volume, |ui| volume_card(ui, crypto));
        ui.card(&UI_TEXT.heading_distribution, |ui| distribution_card(ui, crypto));
        ui.card(&UI_TEXT.heading_fear_greed, |ui| fear_greed_card(ui, crypto));
        ui.card(&UI_TEXT.heading_btc_network, |ui| btc_network_card(ui, crypto));
    });
}

fn prices_card(ui: &mut Ui, crypto: &CryptoState) {
    with_prices(ui, crypto, "crypto prices", |ui, push| {
        for coin in DASHBOARD.tracked_coins {
            let Some(q) = push.quote(coin.symbol) else {
                continue;
            };
            ui.horizontal(|ui| {
                ui.label(RichText::new(coin.symbol).strong().color(coin.color));
                ui.label_subdued(coin.name);
            });
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format_price(q.price_usd))
                        .size(18.0)
                        .color(UI_CONFIG.colors.text_primary),
                );
                ui.label(
                    RichText::new(format!(
                        "{} {:.2}%",
                        change_arrow(q.change_24h),
                        q.change_24h.abs()
                    ))
                    .color(get_outcome_color(q.change_24h)),
                );
            });
            ui.add_space(4.0);
        }
    });
}

fn change_card(ui: &mut Ui, crypto: &CryptoState) {
    with_prices(ui, crypto, "24h changes", |ui, push| {
        for coin in DASHBOARD.tracked_coins {
            let Some(q) = push.quote(coin.symbol) else {
                continue;
            };
            let intensity = q.change_intensity();
            ui.horizontal(|ui| {
                ui.label(intensity.indicator(q.change_24h));
                ui.label(RichText::new(coin.symbol).strong().color(coin.color));
                ui.label(
                    RichText::new(format_signed_pct(q.change_24h))
                        .strong()
                        .color(get_outcome_color(q.change_24h)),
                );
                ui.badge(&intensity.to_string(), get_outcome_color(q.change_24h));
            });
        }
    });
}

fn market_cap_card(ui: &mut Ui, crypto: &CryptoState) {
    with_prices(ui, crypto, "market caps", |ui, push| {
        let total = push.tracked_market_cap_total();
        for coin in DASHBOARD.tracked_coins {
            let Some(q) = push.quote(coin.symbol) else {
                continue;
            };
            ui.horizontal(|ui| {
                ui.label(RichText::new(coin.symbol).strong().color(coin.color));
                ui.label(
                    RichText::new(format_market_cap(q.market_cap))
                        .color(UI_CONFIG.colors.text_primary),
                );
                if let Some(rank) = push.market_cap_rank(coin.symbol) {
                    ui.label_subdued(format!("#{}", rank));
                }
            });
            ui.horizontal(|ui| {
                if total > 0.0 {
                    ui.metric(
                        &UI_TEXT.label_share,
                        &format!("{:.1}%", q.market_cap / total * 100.0),
                        UI_CONFIG.colors.info,
                    );
                }
                let delta = q.market_cap_change();
                let sign = if delta >= 0.0 { "+" } else { "-" };
                ui.metric(
                    &UI_TEXT.label_change,
                    &format!("{}{}", sign, format_market_cap(delta.abs())),
                    get_outcome_color(delta),
                );
            });
        }
        ui.separator();
        ui.metric(
            &UI_TEXT.label_total,
            &format_market_cap(total),
            UI_CONFIG.colors.text_primary,
        );
    });
}

fn volume_card(ui: &mut Ui, crypto: &CryptoState) {
    with_prices(ui, crypto, "trading volume", |ui, push| {
        let bars: Vec<Bar> = DASHBOARD
            .tracked_coins
            .iter()
            .enumerate()
            .map(|(i, coin)| {
                let billions = push.quote(coin.symbol).map_or(0.0, |q| q.volume_24h) / 1e9;
                Bar::new(i as f64, billions)
                    .name(coin.symbol)
                    .fill(coin.color)
                    .width(0.6)
            })
            .collect();
        Plot::new("crypto_volume_plot")
            .height(UI_CONFIG.chart_height * 0.7)
            .width(UI_CONFIG.card_min_width)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show_x(false)
            .x_axis_formatter(|mark, _| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                    return String::new();
                }
                DASHBOARD
                    .tracked_coins
                    .get(idx as usize)
                    .map(|c| c.symbol.to_string())
                    .unwrap_or_default()
            })
            .label_formatter(|name, value| format!("{}: {:.2}B", name, value.y))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("24h volume", bars));
            });
    });
}

fn distribution_card(ui: &mut Ui, crypto: &CryptoState) {
    with_prices(ui, crypto, "market cap distribution", |ui, push| {
        let caps = push.tracked_market_caps();
        let slices: Vec<DonutSlice<'_>> = DASHBOARD
            .tracked_coins
            .iter()
            .zip(caps)
            .map(|(coin, value)| DonutSlice {
                label: coin.symbol,
                value,
                color: coin.color,
            })
            .collect();
        donut_chart(ui, "market_cap_donut", &slices);
    });
}

fn fear_greed_gauge(ui: &mut Ui, fg: &FearGreed) {
    let band = fg.band();
    let width = UI_CONFIG.card_min_width - 24.0;
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 14.0), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 7.0, UI_CONFIG.fear_greed.track);
    let filled = (fg.value.clamp(0.0, 100.0) / 100.0) as f32;
    let fill_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width() * filled, rect.height()));
    painter.rect_filled(fill_rect, 7.0, band.color());
}

fn fear_greed_card(ui: &mut Ui, crypto: &CryptoState) {
    show_loadable(
        ui,
        crypto,
        "fear & greed index",
        &UI_TEXT.empty_fear_greed,
        |snap| snap.parsed.fear_greed_index.is_none(),
        |ui, snap| {
            let Some(fg) = snap.parsed.fear_greed_index.as_ref() else {
                return;
            };
            let band = fg.band();
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{:.0}", fg.value))
                        .size(28.0)
                        .strong()
                        .color(band.color()),
                );
                ui.vertical(|ui| {
                    ui.label(RichText::new(band.to_string()).strong().color(band.color()));
                    if !fg.value_classification.is_empty() {
                        ui.label_subdued(&fg.value_classification);
                    }
                });
            });
            fear_greed_gauge(ui, fg);
            ui.label_subdued(format!("{:.0} / 100 ({:.0} to max)", fg.value, fg.remaining()));
            ui.horizontal_wrapped(|ui| {
                for b in FearGreedBand::iter() {
                    let text = RichText::new(b.to_string()).small().color(b.color());
                    ui.label(if b == band { text.strong().underline() } else { text });
                }
            });
        },
    );
}

fn btc_network_card(ui: &mut Ui, crypto: &CryptoState) {
    show_loadable(
        ui,
        crypto,
        "network stats",
        &UI_TEXT.empty_hash_rate,
        |snap| snap.parsed.btc_network().is_none(),
        |ui, snap| match snap.parsed.btc_network() {
            Some(net) => {
                ui.metric(
                    &UI_TEXT.label_hash_rate,
                    &format!("{} TH/s", format_thousands(net.hash_rate_th_s, 2)),
                    UI_CONFIG.colors.text_primary,
                );
                ui.metric(
                    &UI_TEXT.label_difficulty,
                    &format_thousands(net.difficulty, 0),
                    UI_CONFIG.colors.text_primary,
                );
            }
            None => empty_block(ui, &UI_TEXT.empty_hash_rate),
        },
    );
}
