//! Shared API crate for Moodboard: wire types plus the server functions the
//! dashboard calls.

pub mod model;
pub mod mood;

use dioxus::prelude::*;

pub use model::{DisplayMode, PlaylistRecord};

#[cfg(feature = "server")]
mod state {
    use std::sync::RwLock;

    use once_cell::sync::Lazy;

    use crate::model::{DisplayMode, PlaylistRecord};
    use crate::mood::{self, PlaylistSource};

    /// Process-wide display mode; `Bars` until the first toggle.
    pub static MODE: Lazy<RwLock<DisplayMode>> =
        Lazy::new(|| RwLock::new(DisplayMode::default()));

    static SAMPLE_LIBRARY: &str = include_str!("../data/library.json");

    /// Track library, parsed and summarised once per process.
    /// `MOODBOARD_LIBRARY` points at an alternative JSON file; the embedded
    /// sample is the default.
    pub static PLAYLISTS: Lazy<Result<Vec<PlaylistRecord>, String>> = Lazy::new(|| {
        let raw = match std::env::var("MOODBOARD_LIBRARY") {
            Ok(path) => std::fs::read_to_string(&path)
                .map_err(|err| format!("couldn't read library at {path}: {err}"))?,
            Err(_) => SAMPLE_LIBRARY.to_string(),
        };

        let sources: Vec<PlaylistSource> =
            serde_json::from_str(&raw).map_err(|err| format!("malformed library: {err}"))?;

        Ok(sources.iter().map(mood::summarize).collect())
    });
}

/// Full playlist set, summarised from the track library, in display order.
#[server]
pub async fn get_playlists() -> Result<Vec<PlaylistRecord>, ServerFnError> {
    state::PLAYLISTS
        .as_ref()
        .map(Clone::clone)
        .map_err(|err| ServerFnError::new(err.clone()))
}

/// Startup read of the server-held display mode.
#[server]
pub async fn current_mode() -> Result<DisplayMode, ServerFnError> {
    let mode = state::MODE
        .read()
        .map_err(|_| ServerFnError::new("mode state poisoned"))?;
    Ok(*mode)
}

/// Toggles the display mode for subsequent page loads and returns the new
/// value. Callers reload the page rather than applying it optimistically.
#[server]
pub async fn switch_mode() -> Result<DisplayMode, ServerFnError> {
    let mut mode = state::MODE
        .write()
        .map_err(|_| ServerFnError::new("mode state poisoned"))?;
    *mode = mode.toggled();
    Ok(*mode)
}
