// src/analysis/geometry.rs
//! Plot-space geometry for the polar panels. `egui_plot` only knows cartesian
//! items, so the donut and radar charts are built from polygons computed here.
//!
//! Angles start at twelve o'clock and advance clockwise.

use std::f64::consts::{FRAC_PI_2, TAU};
use crate::data::{CategoryShare, RadarScore};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub start: f64,
    pub end: f64,
    pub fraction: f64,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

pub fn pie_slices(shares: &[CategoryShare]) -> Vec<PieSlice> {
    let total: f64 = shares.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    shares.iter()
        .map(|share| {
            let fraction = share.value.max(0.0) / total;
            let end = start + fraction * TAU;
            let slice = PieSlice { start, end, fraction };
            start = end;
            slice
        })
        .collect()
}

/// Point at `radius` along the clockwise-from-top `angle`.
pub fn polar(angle: f64, radius: f64) -> [f64; 2] {
    let theta = FRAC_PI_2 - angle;
    [radius * theta.cos(), radius * theta.sin()]
}

/// Outline of a donut wedge: outer arc forward, inner arc back.
pub fn wedge_outline(slice: &PieSlice, inner: f64, outer: f64, steps: usize) -> Vec<[f64; 2]> {
    let steps = steps.max(1);
    let mut points = arc(slice, outer, steps);
    let mut inner_arc = arc(slice, inner, steps);
    inner_arc.reverse();
    points.extend(inner_arc);
    points
}

fn arc(slice: &PieSlice, radius: f64, steps: usize) -> Vec<[f64; 2]> {
    let span = slice.end - slice.start;
    (0..=steps)
        .map(|i| polar(slice.start + span * i as f64 / steps as f64, radius))
        .collect()
}

pub fn axis_angle(index: usize, axes: usize) -> f64 {
    if axes == 0 {
        0.0
    } else {
        TAU * index as f64 / axes as f64
    }
}

/// Vertices of the score polygon, each axis scaled to `score / max`.
pub fn radar_polygon(scores: &[RadarScore]) -> Vec<[f64; 2]> {
    scores.iter()
        .enumerate()
        .map(|(i, score)| {
            let radius = if score.max > 0.0 {
                (score.score / score.max).clamp(0.0, 1.0)
            } else {
                0.0
            };
            polar(axis_angle(i, scores.len()), radius)
        })
        .collect()
}

/// Regular polygon used for the radar grid rings.
pub fn radar_ring(axes: usize, radius: f64) -> Vec<[f64; 2]> {
    (0..axes).map(|i| polar(axis_angle(i, axes), radius)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CATEGORY_SHARES, RADAR_SCORES};

    const EPS: f64 = 1e-9;

    #[test]
    fn slices_cover_full_turn() {
        let slices = pie_slices(&CATEGORY_SHARES);
        assert_eq!(slices.len(), 4);
        assert!(slices[0].start.abs() < EPS);
        assert!((slices[3].end - TAU).abs() < EPS);
        let fractions: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((fractions - 1.0).abs() < EPS);
        // 400 of 1200
        assert!((slices[0].fraction - 1.0 / 3.0).abs() < EPS);
        for pair in slices.windows(2) {
            assert!((pair[0].end - pair[1].start).abs() < EPS);
        }
    }

    #[test]
    fn empty_or_zero_shares_have_no_slices() {
        assert!(pie_slices(&[]).is_empty());
        let zero = [CategoryShare { label: "x", value: 0.0 }];
        assert!(pie_slices(&zero).is_empty());
    }

    #[test]
    fn polar_starts_at_top_and_goes_clockwise() {
        let top = polar(0.0, 1.0);
        assert!(top[0].abs() < EPS && (top[1] - 1.0).abs() < EPS);
        let right = polar(FRAC_PI_2, 1.0);
        assert!((right[0] - 1.0).abs() < EPS && right[1].abs() < EPS);
    }

    #[test]
    fn radar_vertices_stay_inside_unit_circle() {
        let polygon = radar_polygon(&RADAR_SCORES);
        assert_eq!(polygon.len(), RADAR_SCORES.len());
        for [x, y] in &polygon {
            assert!((x * x + y * y).sqrt() <= 1.0 + EPS);
        }
        // Marketing: 120 / 150 straight up
        assert!((polygon[0][1] - 0.8).abs() < EPS);
    }

    #[test]
    fn radar_zero_max_collapses_to_origin() {
        let scores = [RadarScore { axis: "x", score: 10.0, max: 0.0 }];
        assert_eq!(radar_polygon(&scores), vec![[0.0, 0.0]]);
    }

    #[test]
    fn wedge_outline_has_both_arcs() {
        let slice = PieSlice { start: 0.0, end: FRAC_PI_2, fraction: 0.25 };
        let outline = wedge_outline(&slice, 0.5, 1.0, 8);
        assert_eq!(outline.len(), 18);
        let first = outline[0];
        let last = outline[outline.len() - 1];
        assert!((first[1] - 1.0).abs() < EPS);
        assert!((last[1] - 0.5).abs() < EPS);
    }
}
