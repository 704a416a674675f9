//! Document formats understood by the file loader.

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Format, Json, Toml};

/// Serialisation format of a configuration document.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DocumentFormat {
    /// TOML, the default for unknown extensions.
    #[default]
    Toml,
    /// JSON with an object at its root.
    Json,
}

impl DocumentFormat {
    /// Selects a format from the file extension, case-insensitively.
    ///
    /// ```rust
    /// use camino::Utf8Path;
    /// use layered_config::sources::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_path(Utf8Path::new("a.JSON")), DocumentFormat::Json);
    /// assert_eq!(DocumentFormat::from_path(Utf8Path::new("a.conf")), DocumentFormat::Toml);
    /// ```
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    pub(super) fn figment(self, data: &str) -> Figment {
        match self {
            Self::Toml => Figment::from(Toml::string(data)),
            Self::Json => Figment::from(Json::string(data)),
        }
    }
}
