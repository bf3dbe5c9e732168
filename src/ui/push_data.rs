use eframe::egui::{Grid, RichText, Ui};
use serde_json::Value;

use crate::config::DASHBOARD;
use crate::data::Loadable;
use crate::engine::PushSnapshot;
use crate::models::{CryptoPush, MacroPush, summarize_push};
use crate::ui::panels::{empty_block, loading_row};
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};

fn has_content(raw: &Value) -> bool {
    raw.as_object().is_some_and(|o| !o.is_empty())
}

fn ready_raw<T>(state: &Loadable<PushSnapshot<T>>) -> Option<&Value> {
    state.ready().map(|s| &s.raw).filter(|raw| has_content(raw))
}

/// True once both pushes have settled and neither has anything to summarise.
/// A failed push counts as absent.
fn nothing_to_show<A, B>(
    crypto: &Loadable<PushSnapshot<A>>,
    macro_push: &Loadable<PushSnapshot<B>>,
) -> bool {
    !crypto.is_pending()
        && !macro_push.is_pending()
        && ready_raw(crypto).is_none()
        && ready_raw(macro_push).is_none()
}

fn summary_section<T>(ui: &mut Ui, title: &str, id: &str, state: &Loadable<PushSnapshot<T>>) {
    ui.label_subheader(title);
    if state.is_pending() {
        loading_row(ui);
    } else {
        match ready_raw(state) {
            None => empty_block(ui, &UI_TEXT.label_no_data),
            Some(raw) => {
                let entries = summarize_push(
                    raw,
                    DASHBOARD.push_summary_max_entries,
                    DASHBOARD.push_summary_max_chars,
                );
                Grid::new(id).striped(true).spacing([12.0, 4.0]).show(ui, |ui| {
                    for entry in entries {
                        ui.label(
                            RichText::new(entry.key)
                                .monospace()
                                .color(UI_CONFIG.colors.info),
                        );
                        ui.label(
                            RichText::new(entry.value)
                                .monospace()
                                .color(UI_CONFIG.colors.text_primary),
                        );
                        ui.end_row();
                    }
                });
            }
        }
    }
    ui.add_space(6.0);
}

/// Both pushes, summarised. Uses the snapshots the crypto and macro panels already hold.
pub(crate) fn render_push_data(
    ui: &mut Ui,
    crypto: &Loadable<PushSnapshot<CryptoPush>>,
    macro_push: &Loadable<PushSnapshot<MacroPush>>,
) {
    ui.card(&UI_TEXT.heading_push_data, |ui| {
        summary_section(ui, &UI_TEXT.heading_crypto_stream, "crypto_push_grid", crypto);
        summary_section(ui, &UI_TEXT.heading_macro_stream, "macro_push_grid", macro_push);
        if nothing_to_show(crypto, macro_push) {
            empty_block(ui, &UI_TEXT.empty_push_data);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot<T: Default>(raw: Value) -> Loadable<PushSnapshot<T>> {
        Loadable::Ready(PushSnapshot {
            raw,
            parsed: T::default(),
        })
    }

    #[test]
    fn failed_and_empty_pushes_fold_into_one_message() {
        let failed: Loadable<PushSnapshot<CryptoPush>> =
            Loadable::Failed("HTTP error! status: 502".into());
        let empty = snapshot::<MacroPush>(json!({}));
        assert!(nothing_to_show(&failed, &empty));

        let also_failed: Loadable<PushSnapshot<MacroPush>> = Loadable::Failed("timeout".into());
        assert!(nothing_to_show(&failed, &also_failed));
    }

    #[test]
    fn content_or_pending_push_keeps_sections_alone() {
        let crypto = snapshot::<CryptoPush>(json!({"timestamp": "2025-01-01"}));
        let empty = snapshot::<MacroPush>(json!({}));
        assert!(!nothing_to_show(&crypto, &empty));

        let loading: Loadable<PushSnapshot<CryptoPush>> = Loadable::Loading;
        assert!(!nothing_to_show(&loading, &empty));
    }
}
