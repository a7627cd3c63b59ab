use dioxus::prelude::*;

use super::geometry::{bar_layout, pie_slices, VIEWBOX};
use super::{ChartKind, ChartSpec};
use crate::core::format;

/// Renders one chart spec as inline SVG: a pie when the mode selected
/// `Spectrum`, bars otherwise, plus a shared legend.
#[component]
pub fn PlaylistChart(spec: ChartSpec) -> Element {
    let surface = match spec.kind {
        ChartKind::Pie => render_pie(&spec),
        ChartKind::Bar => render_bars(&spec),
    };

    let legend: Vec<LegendEntry> = spec
        .labels
        .iter()
        .zip(spec.values.iter())
        .zip(spec.styles.iter())
        .map(|((label, value), style)| LegendEntry {
            label,
            value: format::format_feature(*value),
            fill: style.fill,
            border: style.border,
        })
        .collect();

    rsx! {
        figure { class: "playlist-chart",
            {surface}
            figcaption { class: "playlist-chart__legend",
                for entry in legend.into_iter() {
                    span { class: "playlist-chart__legend-entry",
                        span {
                            class: "playlist-chart__legend-swatch",
                            style: "background: {entry.fill}; border-color: {entry.border};",
                        }
                        "{entry.label} · {entry.value}"
                    }
                }
            }
        }
    }
}

struct LegendEntry {
    label: &'static str,
    value: String,
    fill: &'static str,
    border: &'static str,
}

fn render_pie(spec: &ChartSpec) -> Element {
    let slices = pie_slices(&spec.values);

    rsx! {
        svg {
            class: "playlist-chart__surface playlist-chart__surface--pie",
            view_box: "0 0 {VIEWBOX} {VIEWBOX}",
            role: "img",
            for (slice, style) in slices.iter().zip(spec.styles.iter()) {
                path {
                    d: "{slice.path}",
                    fill: "{style.fill}",
                    stroke: "{style.border}",
                    stroke_width: "1",
                }
            }
        }
    }
}

fn render_bars(spec: &ChartSpec) -> Element {
    let bars = bar_layout(&spec.values);

    rsx! {
        svg {
            class: "playlist-chart__surface playlist-chart__surface--bar",
            view_box: "0 0 {VIEWBOX} {VIEWBOX}",
            role: "img",
            for (bar, style) in bars.iter().zip(spec.styles.iter()) {
                rect {
                    x: "{bar.x}",
                    y: "{bar.y}",
                    width: "{bar.width}",
                    height: "{bar.height}",
                    fill: "{style.fill}",
                    stroke: "{style.border}",
                    stroke_width: "1",
                }
            }
        }
    }
}
