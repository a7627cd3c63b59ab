//! End-to-end checks over the wire format: decode a retrieval response and
//! build chart specs the way the dashboard does.

use api::model::{DisplayMode, PlaylistRecord};
use ui::charts::{self, ChartKind};

const RESPONSE_FIXTURE: &str = r#"[
  {
    "name": "Chill",
    "tempo": 90.0,
    "mood": "Calm",
    "valences": [0.2, 0.4],
    "energies": [0.1, 0.3],
    "danceabilities": [0.5, 0.5]
  },
  {
    "name": "Hype",
    "tempo": 128.0,
    "mood": "Happy",
    "valences": [0.8, 0.9, 0.7],
    "energies": [0.9, 0.95, 0.85],
    "danceabilities": [0.9, 0.8, 0.85]
  }
]"#;

fn decode() -> Vec<PlaylistRecord> {
    serde_json::from_str(RESPONSE_FIXTURE).expect("fixture decodes")
}

#[test]
fn response_decodes_with_the_exact_field_names() {
    let records = decode();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Chill");
    assert_eq!(records[0].tempo, 90.0);
    assert_eq!(records[0].mood, "Calm");
    assert_eq!(records[0].valences, vec![0.2, 0.4]);
    assert_eq!(records[0].energies, vec![0.1, 0.3]);
    assert_eq!(records[0].danceabilities, vec![0.5, 0.5]);
}

#[test]
fn one_spec_per_record_in_response_order() {
    let records = decode();
    let specs: Vec<_> = records
        .iter()
        .map(|record| charts::chart_spec(record, DisplayMode::Bars).unwrap())
        .collect();

    assert_eq!(specs.len(), records.len());
    // Display order is response order: the first spec carries Chill's means,
    // the second Hype's.
    assert!((specs[0].values[0] - 0.3).abs() < 1e-12);
    assert!(specs[1].values[0] > 0.7);
}

#[test]
fn bars_scenario_matches_the_documented_example() {
    let records = decode();
    let spec = charts::chart_spec(&records[0], DisplayMode::Bars).unwrap();

    assert_eq!(spec.kind, ChartKind::Bar);
    assert_eq!(spec.labels, ["Valence", "Energy", "Danceability"]);
    for (actual, expected) in spec.values.iter().zip([0.3, 0.2, 0.5]) {
        assert!((actual - expected).abs() < 1e-12);
    }
}

#[test]
fn spectrum_scenario_only_changes_the_kind() {
    let records = decode();
    let bars = charts::chart_spec(&records[0], DisplayMode::Bars).unwrap();
    let pie = charts::chart_spec(&records[0], DisplayMode::Spectrum).unwrap();

    assert_eq!(pie.kind, ChartKind::Pie);
    assert_eq!(pie.values, bars.values);
    assert_eq!(pie.labels, bars.labels);
    assert_eq!(pie.styles, bars.styles);
}

#[test]
fn empty_response_yields_no_specs() {
    let records: Vec<PlaylistRecord> = serde_json::from_str("[]").expect("empty list decodes");
    let specs: Vec<_> = records
        .iter()
        .map(|record| charts::chart_spec(record, DisplayMode::Bars))
        .collect();
    assert!(specs.is_empty());
}
