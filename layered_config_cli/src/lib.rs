//! Library half of the `layered-config` binary.
//!
//! [`run`] loads the requested layers into a
//! [`ConfigStore`](layered_config::ConfigStore) and renders the selected view
//! as JSON to any writer, which keeps the command testable without spawning a
//! process.

mod cli;
mod error;
mod runner;

pub use cli::{ArrayMode, Args, Command, LayerArgs};
pub use error::CliError;
pub use runner::{build_store, run};
