//! Test helpers shared across crates.
//!
//! Fixtures are plain [`serde_json::Value`] documents so every crate can turn
//! them into its own tree type, and [`files::ConfigDir`] writes them to disk
//! for loader tests.

pub mod files;
pub mod fixtures;
