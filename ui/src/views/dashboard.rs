use api::model::DisplayMode;
use dioxus::prelude::*;

use crate::playlists::{PlaylistCard, PlaylistsState};

#[cfg(debug_assertions)]
fn log_dashboard_render(mode: DisplayMode) {
    // Render trace for diagnosing mode plumbing during development.
    println!("[dashboard] render (mode={})", mode.label());
}

/// The playlist dashboard. `mode` is resolved once at startup by the shell
/// and passed in explicitly, so chart-kind selection is deterministic for
/// the lifetime of the page.
#[component]
pub fn Dashboard(mode: DisplayMode) -> Element {
    #[cfg(debug_assertions)]
    log_dashboard_render(mode);

    let playlists = use_resource(|| PlaylistsState::load());

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Your playlists" }

            match &*playlists.read_unchecked() {
                None => rsx! {
                    p { class: "dashboard__loading", "Loading playlists…" }
                },
                Some(state) => {
                    let body = if let Some(message) = state.error.as_ref() {
                        rsx! {
                            div { class: "dashboard__error", "⚠️ {message}" }
                        }
                    } else if state.records.is_empty() {
                        rsx! {
                            p { class: "dashboard__placeholder",
                                "No playlists yet. Add some to your library to see their mood profile here."
                            }
                        }
                    } else {
                        rsx! {
                            ul { class: "dashboard__playlists",
                                for record in state.records.iter() {
                                    PlaylistCard {
                                        key: "{record.name}",
                                        record: record.clone(),
                                        mode,
                                    }
                                }
                            }
                        }
                    };

                    rsx! {
                        div { class: "dashboard__content", {body} }
                    }
                }
            }
        }
    }
}
