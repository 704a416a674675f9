//! Conversions from external error types into `LayeredError`.

use super::LayeredError;

impl From<figment::Error> for LayeredError {
    fn from(e: figment::Error) -> Self {
        Self::Gathering(Box::new(e))
    }
}

impl From<LayeredError> for figment::Error {
    /// Allow using `?` inside `figment::Jail` closures.
    fn from(e: LayeredError) -> Self {
        Self::from(e.to_string())
    }
}
