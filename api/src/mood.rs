//! Library summarisation: collapses per-track audio features into the
//! records the dashboard renders.

use serde::Deserialize;

use crate::model::PlaylistRecord;

/// Audio features for one track, all in 0.0–1.0 except tempo (BPM).
#[derive(Debug, Clone, Deserialize)]
pub struct TrackFeatures {
    pub tempo: f64,
    pub valence: f64,
    pub energy: f64,
    pub danceability: f64,
}

/// A named playlist in the raw track library.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistSource {
    pub name: String,
    pub tracks: Vec<TrackFeatures>,
}

/// Buckets a track into a mood by its valence.
pub fn infer_mood(valence: f64) -> &'static str {
    if valence > 0.7 {
        "Happy"
    } else if valence < 0.3 {
        "Sad"
    } else {
        "Neutral"
    }
}

/// Summarises one playlist: mean track tempo, the most common inferred
/// mood (first seen wins a tie), and the raw feature sequences in track
/// order. A playlist with no tracks gets a zero tempo and `Neutral`; the
/// chart layer reports its empty sequences to the user.
pub fn summarize(source: &PlaylistSource) -> PlaylistRecord {
    let tracks = &source.tracks;

    let tempo = if tracks.is_empty() {
        0.0
    } else {
        tracks.iter().map(|track| track.tempo).sum::<f64>() / tracks.len() as f64
    };

    let mut tallies: Vec<(&'static str, usize)> = Vec::new();
    for track in tracks {
        let mood = infer_mood(track.valence);
        match tallies.iter_mut().find(|(label, _)| *label == mood) {
            Some((_, count)) => *count += 1,
            None => tallies.push((mood, 1)),
        }
    }

    let mut mood: &'static str = "Neutral";
    let mut best = 0;
    for (label, count) in &tallies {
        if *count > best {
            mood = label;
            best = *count;
        }
    }

    PlaylistRecord {
        name: source.name.clone(),
        tempo,
        mood: mood.to_string(),
        valences: tracks.iter().map(|track| track.valence).collect(),
        energies: tracks.iter().map(|track| track.energy).collect(),
        danceabilities: tracks.iter().map(|track| track.danceability).collect(),
    }
}
