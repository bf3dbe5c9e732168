use eframe::egui::{Color32, Id, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};

use crate::config::DASHBOARD;
use crate::ui::{UI_CONFIG, UiStyleExt};
use crate::utils::{donut, format_market_cap};

pub(crate) struct DonutSlice<'a> {
    pub label: &'a str,
    pub value: f64,
    pub color: Color32,
}

/// Seconds since this donut first appeared, tracked in egui memory.
fn seconds_since_first_shown(ui: &Ui, id: Id) -> f32 {
    let now = ui.input(|i| i.time);
    let started = ui.data_mut(|d| *d.get_temp_mut_or_insert_with(id, || now));
    (now - started) as f32
}

/// Market-cap donut with hover highlight and a short intro sweep.
pub(crate) fn donut_chart(ui: &mut Ui, id_salt: &str, slices: &[DonutSlice<'_>]) {
    let layout = &DASHBOARD.donut;
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let segments = donut::build_segments(&values);
    if segments.is_empty() {
        ui.label_subdued("-");
        return;
    }

    let size = Vec2::new(layout.center.0 * 2.0, layout.center.1 * 2.0);
    ui.horizontal(|ui| {
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
        let center = rect.min + Vec2::new(layout.center.0, layout.center.1);

        let elapsed = seconds_since_first_shown(ui, ui.id().with(id_salt));
        let progress = donut::ease_out(elapsed / layout.intro_animation_secs);
        if progress < 1.0 {
            ui.ctx().request_repaint();
        }

        let hovered = response
            .hover_pos()
            .and_then(|p| donut::hit_test(center, layout.inner_radius, layout.outer_radius, &segments, p));

        let painter = ui.painter_at(rect);
        for seg in &segments {
            let seg = seg.animated(progress);
            if seg.sweep_deg <= 0.0 {
                continue;
            }
            let outer = if hovered == Some(seg.index) {
                layout.outer_radius + layout.hover_growth
            } else {
                layout.outer_radius
            };
            let color = slices[seg.index].color;
            for quad in donut::arc_quads(
                center,
                layout.inner_radius,
                outer,
                seg.start_deg,
                seg.end_deg(),
                layout.steps_per_turn,
            ) {
                painter.add(Shape::convex_polygon(quad.to_vec(), color, Stroke::NONE));
            }
            let outline: Vec<Pos2> = donut::arc_band(
                center,
                layout.inner_radius,
                outer,
                seg.start_deg,
                seg.end_deg(),
                layout.steps_per_turn,
            );
            painter.add(Shape::closed_line(
                outline,
                Stroke::new(1.0, UI_CONFIG.colors.card),
            ));
        }

        if let Some(idx) = hovered {
            let seg = &segments[idx];
            let slice = &slices[idx];
            response.on_hover_text(format!(
                "{}: {} ({:.1}%)",
                slice.label,
                format_market_cap(slice.value),
                seg.percentage()
            ));
        }

        ui.vertical(|ui| {
            for seg in &segments {
                let slice = &slices[seg.index];
                ui.horizontal(|ui| {
                    let (swatch, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, slice.color);
                    let text = format!("{} {:.1}%", slice.label, seg.percentage());
                    let rich = if hovered == Some(seg.index) {
                        RichText::new(text).strong().color(UI_CONFIG.colors.text_primary)
                    } else {
                        RichText::new(text).color(UI_CONFIG.colors.text_subdued)
                    };
                    ui.label(rich);
                });
            }
        });
    });
}
