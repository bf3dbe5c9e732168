use std::time::{Duration, Instant};

use eframe::egui::{Color32, FontId, Pos2, Rect, Sense, Ui, Vec2};

use crate::config::TICKER;
use crate::models::StockQuote;
use crate::ui::UI_TEXT;

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerStatus {
    /// First load still in flight.
    Loading,
    Ready,
    Failed,
}

pub struct TickerState {
    // Horizontal offset (pixels)
    offset: f32,
    items: Vec<StockQuote>,
    status: TickerStatus,
    last_fetch: Option<Instant>,
    is_hovered: bool,
    is_dragging: bool,
}

impl Default for TickerState {
    fn default() -> Self {
        Self {
            offset: 0.0,
            items: Vec::new(),
            status: TickerStatus::Loading,
            last_fetch: None,
            is_hovered: false,
            is_dragging: false,
        }
    }
}

impl TickerState {
    pub fn status(&self) -> TickerStatus {
        self.status
    }

    pub fn items(&self) -> &[StockQuote] {
        &self.items
    }

    /// True when a watchlist refresh should go out.
    pub fn refresh_due(&self, now: Instant) -> bool {
        match self.last_fetch {
            None => true,
            Some(at) => now.duration_since(at) >= Duration::from_secs(TICKER.refresh_secs),
        }
    }

    pub fn mark_requested(&mut self, now: Instant) {
        self.last_fetch = Some(now);
        #[cfg(debug_assertions)]
        if DF.log_ticker {
            log::info!("Ticker refresh requested");
        }
    }

    /// Time left until the next scheduled refresh.
    pub fn next_refresh_in(&self, now: Instant) -> Duration {
        let period = Duration::from_secs(TICKER.refresh_secs);
        match self.last_fetch {
            None => Duration::ZERO,
            Some(at) => period.saturating_sub(now.duration_since(at)),
        }
    }

    /// A failed refresh clears the tape.
    pub fn apply(&mut self, result: Result<Vec<StockQuote>, String>) {
        match result {
            Ok(stocks) => {
                #[cfg(debug_assertions)]
                if DF.log_ticker {
                    log::info!("Ticker received {} quotes", stocks.len());
                }
                self.items = stocks;
                self.status = TickerStatus::Ready;
            }
            Err(e) => {
                log::warn!("Ticker refresh failed: {}", e);
                self.items.clear();
                self.status = TickerStatus::Failed;
            }
        }
    }

    fn render_banner(&self, ui: &mut Ui, panel_rect: Rect, text: &str, color: Color32) {
        let painter = ui.painter().with_clip_rect(panel_rect);
        let galley = painter.layout_no_wrap(
            text.to_string(),
            FontId::monospace(TICKER.font_size),
            color,
        );
        let pos = Pos2::new(
            (panel_rect.min.x + 8.0).round(),
            (panel_rect.min.y + (TICKER.height - galley.size().y) / 2.0).round(),
        );
        painter.galley(pos, galley, color);
    }

    pub fn render(&mut self, ui: &mut Ui) {
        let rect = ui.available_rect_before_wrap();
        let height = TICKER.height;
        let panel_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), height));
        let response = ui.allocate_rect(panel_rect, Sense::click_and_drag());
        ui.painter()
            .rect_filled(panel_rect, 0.0, TICKER.background_color);

        match self.status {
            TickerStatus::Loading => {
                self.render_banner(ui, panel_rect, &UI_TEXT.ticker_loading, TICKER.text_color_neutral);
                return;
            }
            TickerStatus::Failed => {
                self.render_banner(ui, panel_rect, &UI_TEXT.ticker_failed, TICKER.text_color_error);
                return;
            }
            TickerStatus::Ready if self.items.is_empty() => {
                self.render_banner(ui, panel_rect, &UI_TEXT.ticker_empty, TICKER.text_color_neutral);
                return;
            }
            TickerStatus::Ready => {}
        }

        self.is_hovered = response.hovered();
        self.is_dragging = response.dragged();

        if self.is_dragging {
            // Drag to scrub
            self.offset += response.drag_delta().x;
        } else if !self.is_hovered {
            // Clamp dt so a lag spike slows the tape rather than jumping it.
            let dt = ui.input(|i| i.stable_dt).min(TICKER.max_frame_dt);
            self.offset -= TICKER.speed_pixels_per_sec * dt;
        }

        let painter = ui.painter().with_clip_rect(panel_rect);
        let font_id = FontId::monospace(TICKER.font_size);

        // Pass 1: total width, needed to know when to loop.
        let galleys: Vec<_> = self
            .items
            .iter()
            .map(|item| {
                let color = if item.is_up() {
                    TICKER.text_color_up
                } else {
                    TICKER.text_color_down
                };
                painter.layout_no_wrap(item.ticker_text(), font_id.clone(), color)
            })
            .collect();
        let total_width: f32 = galleys
            .iter()
            .map(|g| g.size().x + TICKER.item_spacing)
            .sum();
        if total_width < 1.0 {
            return;
        }

        self.offset = wrap_offset(self.offset, total_width);

        // Pass 2: draw, repeating the strip until the panel is covered.
        let screen_width = panel_rect.width();
        let loops_needed = (screen_width / total_width).ceil() as i32 + 2;
        for loop_idx in 0..loops_needed {
            let mut loop_x = self.offset + (loop_idx as f32 * total_width);
            for galley in &galleys {
                let w = galley.size().x;
                let h = galley.size().y;
                if loop_x + w > 0.0 && loop_x < screen_width {
                    let pos = Pos2::new(
                        (panel_rect.min.x + loop_x).round(),
                        (panel_rect.min.y + (height - h) / 2.0).round(),
                    );
                    painter.galley(pos, galley.clone(), TICKER.text_color_neutral);
                }
                loop_x += w + TICKER.item_spacing;
            }
        }

        // Keep animating if we are scrolling
        if !self.is_hovered && !self.is_dragging {
            ui.ctx().request_repaint();
        }
    }
}

/// Keeps the scroll offset within one strip width, always <= 0.
pub fn wrap_offset(offset: f32, total_width: f32) -> f32 {
    if total_width <= 0.0 {
        return 0.0;
    }
    let wrapped = offset % total_width;
    if wrapped > 0.0 {
        wrapped - total_width
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(symbol: &str, change: f64) -> StockQuote {
        StockQuote {
            symbol: symbol.into(),
            price: 100.0,
            change,
            change_percent: change,
            ..Default::default()
        }
    }

    #[test]
    fn failure_clears_items() {
        let mut t = TickerState::default();
        assert_eq!(t.status(), TickerStatus::Loading);
        t.apply(Ok(vec![quote("NVDA", 1.0), quote("AAPL", -1.0)]));
        assert_eq!(t.items().len(), 2);
        assert_eq!(t.status(), TickerStatus::Ready);

        t.apply(Err("HTTP error! status: 500".into()));
        assert!(t.items().is_empty());
        assert_eq!(t.status(), TickerStatus::Failed);

        t.apply(Ok(vec![quote("MSFT", 0.0)]));
        assert_eq!(t.status(), TickerStatus::Ready);
    }

    #[test]
    fn refresh_schedule() {
        let mut t = TickerState::default();
        let start = Instant::now();
        assert!(t.refresh_due(start));
        t.mark_requested(start);
        assert!(!t.refresh_due(start + Duration::from_secs(5)));
        assert!(t.refresh_due(start + Duration::from_secs(TICKER.refresh_secs)));
        assert_eq!(
            t.next_refresh_in(start + Duration::from_secs(10)),
            Duration::from_secs(TICKER.refresh_secs - 10)
        );
    }

    #[test]
    fn offset_wraps_into_one_strip() {
        assert_eq!(wrap_offset(-250.0, 100.0), -50.0);
        assert_eq!(wrap_offset(30.0, 100.0), -70.0);
        assert_eq!(wrap_offset(0.0, 100.0), 0.0);
        assert_eq!(wrap_offset(5.0, 0.0), 0.0);
    }
}
