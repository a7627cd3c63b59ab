use api::model::{DisplayMode, PlaylistRecord};
use dioxus::prelude::*;

use crate::charts::{self, PlaylistChart};
use crate::core::format;

/// One playlist block: heading, tempo, mood, chart surface, and an artwork
/// slot populated later.
///
/// A record whose feature sequences are empty gets an inline notice instead
/// of a chart; the rest of the card still renders.
#[component]
pub fn PlaylistCard(record: PlaylistRecord, mode: DisplayMode) -> Element {
    let tempo = format::format_bpm(record.tempo);

    let chart = match charts::chart_spec(&record, mode) {
        Ok(spec) => rsx! {
            PlaylistChart { spec }
        },
        Err(err) => rsx! {
            p { class: "playlist-card__chart-error", "⚠️ {err}" }
        },
    };

    rsx! {
        li { class: "playlist-card",
            h3 { class: "playlist-card__name", "{record.name}" }
            p { class: "playlist-card__tempo", "Tempo: {tempo}" }
            p { class: "playlist-card__mood", "Mood: {record.mood}" }
            {chart}
            img { class: "playlist-card__art", alt: "{record.name} artwork" }
        }
    }
}
