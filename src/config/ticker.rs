use eframe::egui::Color32;

pub const DEFAULT_WATCHLIST: &[&str] = &["NVDA", "AAPL", "AMZN", "MSFT", "GOOGL", "TSLA", "META"];

pub struct TickerConfig {
    pub height: f32,
    pub speed_pixels_per_sec: f32,
    pub font_size: f32,
    pub item_spacing: f32,
    pub background_color: Color32,
    /// Seconds between watchlist refreshes.
    pub refresh_secs: u64,
    /// Upper bound on frame delta so a lag spike does not teleport the tape.
    pub max_frame_dt: f32,

    // Colors
    pub text_color_neutral: Color32,
    pub text_color_up: Color32,
    pub text_color_down: Color32,
    pub text_color_error: Color32,
}

pub const TICKER: TickerConfig = TickerConfig {
    height: 22.0,
    speed_pixels_per_sec: 60.0, // Keep at 60 - perfect number for 60fps monitors etc.
    font_size: 12.0,
    item_spacing: 48.0,
    background_color: Color32::from_rgb(10, 10, 15), // Very dark
    refresh_secs: 30,
    max_frame_dt: 0.05,

    text_color_neutral: Color32::LIGHT_GRAY,
    text_color_up: Color32::from_rgb(74, 222, 128),
    text_color_down: Color32::from_rgb(248, 113, 113),
    text_color_error: Color32::from_rgb(248, 113, 113),
};
