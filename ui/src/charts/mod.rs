//! Pure chart-spec layer: turns one playlist record plus the display mode
//! into the data a chart surface needs, independent of any rendering
//! backend.

mod geometry;
mod view;

pub use view::PlaylistChart;

use api::model::{DisplayMode, PlaylistRecord};
use thiserror::Error;

use crate::core::stats;

/// Chart shape selected by the display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Bar,
}

impl ChartKind {
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Spectrum => Self::Pie,
            DisplayMode::Bars => Self::Bar,
        }
    }
}

/// Category labels, in render order.
pub const FEATURE_LABELS: [&str; 3] = ["Valence", "Energy", "Danceability"];

/// Fill/border pairs aligned one-to-one with `FEATURE_LABELS`. Colours are
/// fixed per category, never picked from the data.
pub const FEATURE_STYLES: [SeriesStyle; 3] = [
    SeriesStyle {
        fill: "rgba(255, 99, 132, 0.2)",
        border: "rgba(255, 99, 132, 1)",
    },
    SeriesStyle {
        fill: "rgba(54, 162, 235, 0.2)",
        border: "rgba(54, 162, 235, 1)",
    },
    SeriesStyle {
        fill: "rgba(255, 206, 86, 0.2)",
        border: "rgba(255, 206, 86, 1)",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStyle {
    pub fill: &'static str,
    pub border: &'static str,
}

/// Everything a chart surface needs to draw one playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: [&'static str; 3],
    pub values: [f64; 3],
    pub styles: [SeriesStyle; 3],
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// A record arrived with no per-track values for one of its features.
    #[error("playlist \"{playlist}\" has no {field} values")]
    EmptyFeatureSeries {
        playlist: String,
        field: &'static str,
    },
}

/// Builds the chart spec for one playlist: the three feature means under the
/// fixed labels, shaped by the current display mode.
pub fn chart_spec(record: &PlaylistRecord, mode: DisplayMode) -> Result<ChartSpec, ChartError> {
    let valence = feature_mean(record, "valence", &record.valences)?;
    let energy = feature_mean(record, "energy", &record.energies)?;
    let danceability = feature_mean(record, "danceability", &record.danceabilities)?;

    Ok(ChartSpec {
        kind: ChartKind::for_mode(mode),
        labels: FEATURE_LABELS,
        values: [valence, energy, danceability],
        styles: FEATURE_STYLES,
    })
}

fn feature_mean(
    record: &PlaylistRecord,
    field: &'static str,
    values: &[f64],
) -> Result<f64, ChartError> {
    stats::mean(values).ok_or_else(|| ChartError::EmptyFeatureSeries {
        playlist: record.name.clone(),
        field,
    })
}
