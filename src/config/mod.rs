//! Configuration module for FinTrack
//!
//! - Platform path resolution
//! - Application settings persistence

pub mod paths;
pub mod settings;

pub use paths::FintrackPaths;
pub use settings::Settings;
