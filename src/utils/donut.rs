//! Ring-sector geometry for the market-cap donut.
//!
//! Angles are in degrees, 0 at twelve o'clock, growing clockwise, in screen
//! space (y down). `polar_to_cartesian` shifts by -90 so that convention lines
//! up with the usual cos/sin maths.

use eframe::egui::{Pos2, pos2};

/// Where the first segment begins.
pub const START_ANGLE_DEG: f32 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSegment {
    pub index: usize,
    pub value: f64,
    /// Fraction of the total, 0..=1.
    pub share: f64,
    pub start_deg: f32,
    pub sweep_deg: f32,
}

impl DonutSegment {
    pub fn end_deg(&self) -> f32 {
        self.start_deg + self.sweep_deg
    }

    pub fn percentage(&self) -> f64 {
        self.share * 100.0
    }

    /// The segment with its sweep scaled by an intro animation factor.
    pub fn animated(&self, progress: f32) -> Self {
        Self {
            sweep_deg: self.sweep_deg * progress.clamp(0.0, 1.0),
            ..*self
        }
    }
}

/// Lays values out as contiguous segments starting at [`START_ANGLE_DEG`].
/// Negative or non-finite values count as zero. Returns nothing if the total is zero.
pub fn build_segments(values: &[f64]) -> Vec<DonutSegment> {
    let clean: Vec<f64> = values
        .iter()
        .map(|v| if v.is_finite() && *v > 0.0 { *v } else { 0.0 })
        .collect();
    let total: f64 = clean.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut current = START_ANGLE_DEG;
    clean
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let share = value / total;
            let sweep_deg = (share * 360.0) as f32;
            let seg = DonutSegment {
                index,
                value,
                share,
                start_deg: current,
                sweep_deg,
            };
            current += sweep_deg;
            seg
        })
        .collect()
}

pub fn polar_to_cartesian(center: Pos2, radius: f32, angle_deg: f32) -> Pos2 {
    let rad = (angle_deg - 90.0).to_radians();
    pos2(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

fn arc_points(center: Pos2, radius: f32, start_deg: f32, end_deg: f32, steps: usize) -> Vec<Pos2> {
    (0..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            polar_to_cartesian(center, radius, start_deg + (end_deg - start_deg) * t)
        })
        .collect()
}

fn steps_for(sweep_deg: f32, steps_per_turn: usize) -> usize {
    ((sweep_deg.abs() / 360.0) * steps_per_turn as f32).ceil().max(1.0) as usize
}

/// Closed outline of a ring sector: outer arc start->end, inner arc end->start.
pub fn arc_band(
    center: Pos2,
    inner: f32,
    outer: f32,
    start_deg: f32,
    end_deg: f32,
    steps_per_turn: usize,
) -> Vec<Pos2> {
    let steps = steps_for(end_deg - start_deg, steps_per_turn);
    let mut points = arc_points(center, outer, start_deg, end_deg, steps);
    let mut inner_pts = arc_points(center, inner, start_deg, end_deg, steps);
    inner_pts.reverse();
    points.extend(inner_pts);
    points
}

/// The same ring sector split into convex quads, for filling.
pub fn arc_quads(
    center: Pos2,
    inner: f32,
    outer: f32,
    start_deg: f32,
    end_deg: f32,
    steps_per_turn: usize,
) -> Vec<[Pos2; 4]> {
    let steps = steps_for(end_deg - start_deg, steps_per_turn);
    let outer_pts = arc_points(center, outer, start_deg, end_deg, steps);
    let inner_pts = arc_points(center, inner, start_deg, end_deg, steps);
    (0..steps)
        .map(|i| [outer_pts[i], outer_pts[i + 1], inner_pts[i + 1], inner_pts[i]])
        .collect()
}

/// Index of the segment under `point`, if it falls inside the ring.
pub fn hit_test(
    center: Pos2,
    inner: f32,
    outer: f32,
    segments: &[DonutSegment],
    point: Pos2,
) -> Option<usize> {
    let d = point - center;
    let dist = d.length();
    if dist < inner || dist > outer {
        return None;
    }
    // Inverse of polar_to_cartesian: 0 deg at the top, clockwise.
    let angle = d.x.atan2(-d.y).to_degrees();
    segments
        .iter()
        .find(|s| s.sweep_deg > 0.0 && (angle - s.start_deg).rem_euclid(360.0) < s.sweep_deg)
        .map(|s| s.index)
}

/// Cubic ease-out for the intro animation.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
