//! Temporary directories holding configuration files.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
///
/// # Examples
///
/// ```
/// use layered_config_test_helpers::files::ConfigDir;
///
/// let dir = ConfigDir::new()?;
/// let path = dir.write("app.toml", "port = 8080")?;
/// assert!(path.as_std_path().is_file());
/// # Ok::<_, anyhow::Error>(())
/// ```
#[derive(Debug)]
pub struct ConfigDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl ConfigDir {
    /// Creates an empty temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("create temporary config directory")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|p| anyhow::anyhow!("non UTF-8 temp path: {}", p.display()))?;
        Ok(Self { _dir: dir, root })
    }

    /// Directory root.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.root
    }

    /// Writes `contents` to `name` inside the directory and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.root.join(name);
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Serialises `value` as pretty JSON into `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn write_json(&self, name: &str, value: &serde_json::Value) -> Result<Utf8PathBuf> {
        let rendered = serde_json::to_string_pretty(value).context("render JSON fixture")?;
        self.write(name, &rendered)
    }
}
