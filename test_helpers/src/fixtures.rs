//! Sample configuration documents used across test suites.

use serde_json::{Value, json};

/// Defaults mixing nested values, lists and option descriptors.
///
/// Entries under `meta` are descriptors shaped `{desc, type, ...}` that
/// flattening tests keep whole.
#[must_use]
pub fn described_defaults() -> Value {
    json!({
        "foo": "bar",
        "nested": {
            "nested": {"foo": "bar", "array": [1, 2]},
            "foo": "bar"
        },
        "meta": {
            "foo": {"desc": "Some description", "type": "string", "alias": "f"},
            "nested": {
                "foo": {"desc": "Some description", "type": "string"},
                "nested": {
                    "foo": "Some description",
                    "array": {"desc": "Some description", "type": "array", "alias": "a"}
                }
            }
        }
    })
}

/// Server defaults paired with [`server_overrides`].
#[must_use]
pub fn server_defaults() -> Value {
    json!({
        "port": 8000,
        "delims": ["\\$\\$"],
        "formula": {"input": "TeX"}
    })
}

/// Overrides layered over [`server_defaults`].
#[must_use]
pub fn server_overrides() -> Value {
    json!({
        "port": 8080,
        "formula": {"delims": ["<math>"], "output": "mml"}
    })
}

