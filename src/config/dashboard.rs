use eframe::egui::Color32;

/// A coin shown on the crypto cards, in display order.
pub struct TrackedCoin {
    pub symbol: &'static str,
    pub name: &'static str,
    pub color: Color32,
}

pub struct DonutLayout {
    pub center: (f32, f32),
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Extra outer radius for the hovered segment.
    pub hover_growth: f32,
    /// Arc tessellation: points per full turn.
    pub steps_per_turn: usize,
    pub intro_animation_secs: f32,
}

pub struct DashboardConfig {
    pub tracked_coins: &'static [TrackedCoin],
    pub default_history_symbol: &'static str,
    pub calendar_max_events: usize,
    pub push_summary_max_entries: usize,
    pub push_summary_max_chars: usize,
    /// 24h change (percent) at or above which a move counts as HIGH.
    pub change_high_pct: f64,
    /// 24h change (percent) at or above which a move counts as MED.
    pub change_medium_pct: f64,
    pub donut: DonutLayout,
}

pub const DASHBOARD: DashboardConfig = DashboardConfig {
    tracked_coins: &[
        TrackedCoin {
            symbol: "BTC",
            name: "Bitcoin",
            color: Color32::from_rgb(251, 146, 60),
        },
        TrackedCoin {
            symbol: "ETH",
            name: "Ethereum",
            color: Color32::from_rgb(168, 85, 247),
        },
        TrackedCoin {
            symbol: "SOL",
            name: "Solana",
            color: Color32::from_rgb(34, 197, 94),
        },
    ],
    default_history_symbol: "BTC",
    calendar_max_events: 10,
    push_summary_max_entries: 5,
    push_summary_max_chars: 50,
    change_high_pct: 10.0,
    change_medium_pct: 5.0,
    donut: DonutLayout {
        center: (90.0, 90.0),
        inner_radius: 35.0,
        outer_radius: 75.0,
        hover_growth: 8.0,
        steps_per_turn: 180,
        intro_animation_secs: 0.6,
    },
};
