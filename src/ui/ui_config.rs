use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub text_primary: Color32,
    pub text_subdued: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub warning: Color32,
    pub info: Color32,
}

/// Fear & Greed band colours, extreme fear first.
#[derive(Clone, Copy, Default)]
pub struct FearGreedColors {
    pub extreme_fear: Color32,
    pub fear: Color32,
    pub neutral: Color32,
    pub greed: Color32,
    pub extreme_greed: Color32,
    pub track: Color32,
}

#[derive(Clone, Copy, Default)]
pub struct ImpactColors {
    pub high: Color32,
    pub medium: Color32,
    pub low: Color32,
    pub unknown: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub fear_greed: FearGreedColors,
    pub impact: ImpactColors,
    pub card_min_width: f32,
    pub chart_height: f32,
    pub chat_window_size: [f32; 2],
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(250, 204, 21),
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(17, 17, 24),
        side_panel: Color32::from_rgb(25, 25, 25),
        card: Color32::from_rgb(28, 28, 38),
        card_border: Color32::from_rgb(55, 55, 70),
        text_primary: Color32::from_rgb(230, 230, 235),
        text_subdued: Color32::from_rgb(140, 140, 150),
        positive: Color32::from_rgb(74, 222, 128),
        negative: Color32::from_rgb(248, 113, 113),
        warning: Color32::from_rgb(251, 191, 36),
        info: Color32::from_rgb(96, 165, 250),
    },
    fear_greed: FearGreedColors {
        extreme_fear: Color32::from_rgb(220, 38, 38),
        fear: Color32::from_rgb(249, 115, 22),
        neutral: Color32::from_rgb(234, 179, 8),
        greed: Color32::from_rgb(34, 197, 94),
        extreme_greed: Color32::from_rgb(21, 128, 61),
        track: Color32::from_rgb(55, 55, 65),
    },
    impact: ImpactColors {
        high: Color32::from_rgb(239, 68, 68),
        medium: Color32::from_rgb(245, 158, 11),
        low: Color32::from_rgb(34, 197, 94),
        unknown: Color32::from_rgb(107, 114, 128),
    },
    card_min_width: 260.0,
    chart_height: 220.0,
    chat_window_size: [360.0, 460.0],
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame around each dashboard card.
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }
}
