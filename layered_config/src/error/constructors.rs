//! Constructors for `LayeredError`.

use std::sync::Arc;

use camino::Utf8Path;

use super::LayeredError;

impl LayeredError {
    /// Construct a [`LayeredError::File`] for `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use layered_config::LayeredError;
    ///
    /// let err = LayeredError::file(Utf8Path::new("app.toml"), std::io::Error::other("boom"));
    /// assert!(err.to_string().contains("app.toml"));
    /// ```
    #[must_use]
    pub fn file(
        path: &Utf8Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    /// Construct a gathering error wrapped in an [`Arc`].
    ///
    /// # Examples
    ///
    /// ```
    /// use layered_config::LayeredError;
    ///
    /// let err = LayeredError::gathering_arc(figment::Error::from("boom"));
    /// assert!(matches!(&*err, LayeredError::Gathering(_)));
    /// ```
    #[must_use]
    pub fn gathering_arc(source: figment::Error) -> Arc<Self> {
        Arc::new(Self::Gathering(Box::new(source)))
    }
}
