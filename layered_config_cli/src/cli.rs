//! Command-line interface definitions for `layered-config`.

use camino::Utf8PathBuf;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use layered_config::ArrayBehavior;

/// Array merge behaviour selectable from the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum ArrayMode {
    /// Later lists replace earlier ones.
    #[default]
    Replace,
    /// Later lists are appended to earlier ones.
    Append,
}

impl From<ArrayMode> for ArrayBehavior {
    fn from(mode: ArrayMode) -> Self {
        match mode {
            ArrayMode::Replace => Self::ReplaceCopy,
            ArrayMode::Append => Self::Append,
        }
    }
}

/// Parsed CLI arguments for `layered-config`.
#[derive(Debug, Parser)]
#[command(name = "layered-config")]
#[command(about = "Merge layered configuration files and inspect the result")]
#[command(version)]
pub struct Args {
    /// Layer sources shared by every subcommand.
    #[command(flatten)]
    pub layers: LayerArgs,
    /// Action to perform on the merged configuration.
    #[command(subcommand)]
    pub command: Command,
}

/// Files and environment settings that feed the store.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct LayerArgs {
    /// Defaults file (TOML or JSON); repeat to layer several.
    #[arg(long = "defaults", value_name = "path", global = true)]
    pub defaults: Vec<Utf8PathBuf>,
    /// Override file (TOML or JSON); repeat to layer several.
    #[arg(long = "config", value_name = "path", global = true)]
    pub configs: Vec<Utf8PathBuf>,
    /// Environment variable prefix whose values override the files.
    #[arg(long, value_name = "prefix", global = true)]
    pub env_prefix: Option<String>,
    /// How lists from later layers combine with earlier ones.
    #[arg(long, value_enum, default_value_t = ArrayMode::Replace, global = true)]
    pub array_mode: ArrayMode,
}

/// Subcommands of `layered-config`.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the merged configuration.
    Show {
        /// Flatten nested keys into dotted form.
        #[arg(long)]
        flatten: bool,
        /// Print the defaults view instead of the merged values.
        #[arg(long = "defaults-only")]
        defaults_only: bool,
    },
    /// Print the value at a dotted path.
    Get {
        /// Dotted path such as `server.port`.
        path: String,
        /// Read from the defaults view.
        #[arg(long = "default")]
        from_defaults: bool,
    },
}
