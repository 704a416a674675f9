//! Builds the store from CLI layers and renders the requested view.

use std::io::Write;

use camino::Utf8PathBuf;
use layered_config::{ConfigStore, MergeOptions, Node, merge_deep, plainify, sources};
use tracing::debug;

use crate::cli::{Args, Command, LayerArgs};
use crate::error::CliError;

/// Execute `args`, writing pretty JSON to `out`.
///
/// # Errors
///
/// Returns a [`CliError`] when a layer cannot be loaded, a requested path is
/// absent, or the output cannot be written.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), CliError> {
    let store = build_store(&args.layers)?;
    let rendered = match &args.command {
        Command::Show {
            flatten,
            defaults_only,
        } => {
            let view = if *defaults_only {
                store.defaults()
            } else {
                store.current()
            };
            if *flatten {
                serde_json::to_string_pretty(&plainify(view))?
            } else {
                serde_json::to_string_pretty(view)?
            }
        }
        Command::Get {
            path,
            from_defaults,
        } => {
            let found = if *from_defaults {
                store.get_default(Some(path.as_str()))
            } else {
                store.get_prop_ref(Some(path.as_str()))
            };
            let node = found.ok_or_else(|| CliError::PathNotFound(path.clone()))?;
            serde_json::to_string_pretty(node)?
        }
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}

/// Load every layer named in `layers` into a [`ConfigStore`].
///
/// Defaults files merge left to right into the defaults view; override files
/// and then the environment merge over them into the current view.
///
/// # Errors
///
/// Returns [`CliError::MissingFile`] when a named file does not exist and
/// [`CliError::Layer`] when a file or the environment cannot be parsed.
pub fn build_store(layers: &LayerArgs) -> Result<ConfigStore, CliError> {
    let options = MergeOptions::with_array(layers.array_mode.into());

    let defaults = merge_files(&layers.defaults, &options)?;
    let mut overrides = merge_files(&layers.configs, &options)?;
    if let Some(prefix) = layers.env_prefix.as_deref() {
        let env = sources::from_env(prefix)?;
        merge_deep(&mut overrides, [&env], &options);
    }

    let mut store = ConfigStore::default();
    store.add(&overrides, &defaults, &options);
    Ok(store)
}

fn merge_files(paths: &[Utf8PathBuf], options: &MergeOptions) -> Result<Node, CliError> {
    let mut acc = Node::structure();
    for path in paths {
        let layer = sources::load_file(path)?.ok_or_else(|| CliError::MissingFile(path.clone()))?;
        debug!(path = path.as_str(), "merged layer");
        merge_deep(&mut acc, [&layer], options);
    }
    Ok(acc)
}
