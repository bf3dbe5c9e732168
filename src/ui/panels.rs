//! Loading / error / empty / content dispatch shared by every panel.

use eframe::egui::{RichText, Ui};

use crate::data::Loadable;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};

pub(crate) fn loading_row(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label_subdued(&UI_TEXT.label_loading);
    });
}

pub(crate) fn error_block(ui: &mut Ui, panel: &str, message: &str) {
    ui.label(
        RichText::new(format!("{} {}", UI_TEXT.error_loading_prefix, panel))
            .strong()
            .color(UI_CONFIG.colors.negative),
    );
    ui.label(RichText::new(message).small().color(UI_CONFIG.colors.text_subdued));
}

pub(crate) fn empty_block(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).italics().color(UI_CONFIG.colors.text_subdued));
}

/// Renders the right thing for the state of `loadable`. `is_empty` decides
/// when a successful payload has nothing worth drawing.
pub(crate) fn show_loadable<T>(
    ui: &mut Ui,
    loadable: &Loadable<T>,
    panel: &str,
    empty_text: &str,
    is_empty: impl FnOnce(&T) -> bool,
    content: impl FnOnce(&mut Ui, &T),
) {
    match loadable {
        Loadable::Idle | Loadable::Loading => loading_row(ui),
        Loadable::Failed(e) => error_block(ui, panel, e),
        Loadable::Ready(v) if is_empty(v) => empty_block(ui, empty_text),
        Loadable::Ready(v) => content(ui, v),
    }
}
