pub mod format;
pub mod platform;
pub mod stats;
