mod card;
pub use card::PlaylistCard;

use api::model::PlaylistRecord;

/// Shared state for the dashboard aggregating fetched playlists or the
/// retrieval error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistsState {
    pub records: Vec<PlaylistRecord>,
    pub error: Option<String>,
}

impl PlaylistsState {
    /// One retrieval per page load; server order is kept as display order.
    pub async fn load() -> Self {
        match api::get_playlists().await {
            Ok(records) => Self {
                records,
                error: None,
            },
            Err(err) => Self {
                records: Vec::new(),
                error: Some(format!("Couldn't load playlists: {err}")),
            },
        }
    }
}
