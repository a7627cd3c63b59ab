//! Shared UI crate for Moodboard. The pure chart computation and the
//! dashboard views live here; platform crates provide the router and shell.

pub mod charts;
pub mod core;
pub mod playlists;
pub mod views;

pub mod components {
    // Display-mode toggle control (components/mode_switch.rs)
    pub mod mode_switch;
    pub use mode_switch::ModeSwitch;
}
