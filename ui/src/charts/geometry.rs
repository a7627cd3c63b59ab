//! SVG geometry for the chart surfaces. Pure math, so the shapes are
//! testable without a document.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Square user space shared by both chart kinds.
pub const VIEWBOX: f64 = 100.0;

const MARGIN: f64 = 5.0;

/// One pie slice as an SVG path, plus the fraction of the circle it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub path: String,
    pub fraction: f64,
}

/// One bar, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Splits the circle into slices proportional to `values`, starting at
/// twelve o'clock and sweeping clockwise. A zero or non-finite total
/// degrades to equal slices so degenerate data still draws.
pub fn pie_slices(values: &[f64]) -> Vec<PieSlice> {
    if values.is_empty() {
        return Vec::new();
    }

    let total: f64 = values.iter().copied().sum();
    let fractions: Vec<f64> = if total > 0.0 && total.is_finite() {
        values.iter().map(|value| value / total).collect()
    } else {
        vec![1.0 / values.len() as f64; values.len()]
    };

    let cx = VIEWBOX / 2.0;
    let cy = VIEWBOX / 2.0;
    let r = VIEWBOX / 2.0 - MARGIN;

    let mut start = -FRAC_PI_2;
    fractions
        .into_iter()
        .map(|fraction| {
            let sweep = fraction * TAU;
            let end = start + sweep;
            let (x0, y0) = (cx + r * start.cos(), cy + r * start.sin());
            let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
            let large_arc = if sweep > PI { 1 } else { 0 };
            let path = format!(
                "M {cx:.3} {cy:.3} L {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x1:.3} {y1:.3} Z"
            );
            start = end;
            PieSlice { path, fraction }
        })
        .collect()
}

/// Lays out one bar per value across the viewbox, heights scaled so the
/// largest value fills the drawable height.
pub fn bar_layout(values: &[f64]) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }

    let drawable = VIEWBOX - 2.0 * MARGIN;
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let scale = if max > 0.0 && max.is_finite() {
        drawable / max
    } else {
        0.0
    };

    let slot = VIEWBOX / values.len() as f64;
    let width = slot * 0.6;

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let height = (value.max(0.0) * scale).min(drawable);
            BarRect {
                x: slot * index as f64 + (slot - width) / 2.0,
                y: VIEWBOX - MARGIN - height,
                width,
                height,
            }
        })
        .collect()
}
