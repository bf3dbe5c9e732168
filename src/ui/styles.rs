use {
    crate::{
        models::{FearGreedBand, ImpactLevel},
        ui::{UI_CONFIG, ui_text::ICON_DOT},
    },
    eframe::egui::{Color32, Context, RichText, Ui, Visuals},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Green for flat or up, red for down.
pub fn get_outcome_color(value: f64) -> Color32 {
    if value >= 0.0 {
        UI_CONFIG.colors.positive
    } else {
        UI_CONFIG.colors.negative
    }
}

pub trait BandColor {
    fn color(&self) -> Color32;
}

impl BandColor for FearGreedBand {
    fn color(&self) -> Color32 {
        let c = &UI_CONFIG.fear_greed;
        match self {
            Self::ExtremeFear => c.extreme_fear,
            Self::Fear => c.fear,
            Self::Neutral => c.neutral,
            Self::Greed => c.greed,
            Self::ExtremeGreed => c.extreme_greed,
        }
    }
}

impl BandColor for ImpactLevel {
    fn color(&self) -> Color32 {
        let c = &UI_CONFIG.impact;
        match self {
            Self::High => c.high,
            Self::Medium => c.medium,
            Self::Low => c.low,
            Self::Unknown => c.unknown,
        }
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn status_dot(&mut self, ok: bool, label: &str);
    fn badge(&mut self, text: &str, color: Color32);
    /// A framed card with a heading.
    fn card(&mut self, title: &str, add_contents: impl FnOnce(&mut Ui));
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.text_subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn status_dot(&mut self, ok: bool, label: &str) {
        let color = if ok {
            UI_CONFIG.colors.positive
        } else {
            UI_CONFIG.colors.negative
        };
        self.horizontal(|ui| {
            ui.label(RichText::new(ICON_DOT).color(color));
            ui.label(RichText::new(label).color(UI_CONFIG.colors.text_primary));
        });
    }

    fn badge(&mut self, text: &str, color: Color32) {
        self.label(
            RichText::new(format!(" {} ", text))
                .small()
                .strong()
                .color(Color32::WHITE)
                .background_color(color),
        );
    }

    fn card(&mut self, title: &str, add_contents: impl FnOnce(&mut Ui)) {
        UI_CONFIG.card_frame().show(self, |ui| {
            ui.set_min_width(UI_CONFIG.card_min_width);
            ui.label(
                RichText::new(title)
                    .strong()
                    .size(15.0)
                    .color(UI_CONFIG.colors.heading),
            );
            ui.add_space(6.0);
            add_contents(ui);
        });
    }
}

pub(crate) fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_color_treats_zero_as_up() {
        assert_eq!(get_outcome_color(0.0), UI_CONFIG.colors.positive);
        assert_eq!(get_outcome_color(-0.01), UI_CONFIG.colors.negative);
    }

    #[test]
    fn band_colors() {
        assert_eq!(FearGreedBand::ExtremeFear.color(), UI_CONFIG.fear_greed.extreme_fear);
        assert_eq!(ImpactLevel::Unknown.color(), UI_CONFIG.impact.unknown);
    }
}
