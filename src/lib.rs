//! Browser client core for a remote music library: typed gateway, track
//! normalization, the artist → album → track selection cascade, and the
//! now-playing tracker.

pub mod api;
pub mod config;
pub mod library;
