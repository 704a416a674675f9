//! Error types produced by configuration loaders and typed extraction.
//!
//! Merging, flattening and lookups never fail; errors only arise at the
//! edges where external documents are read or views are deserialised.

mod constructors;
mod conversions;
mod types;

pub use types::LayeredError;
