//! Formatting helpers for presenting playlist metadata.

pub fn format_bpm(value: f64) -> String {
    format!("{value:.0} BPM")
}

pub fn format_feature(value: f64) -> String {
    format!("{value:.2}")
}
