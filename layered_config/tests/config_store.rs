//! Integration tests covering the documented store workflows.

use anyhow::{Result, ensure};
use layered_config::{
    ArrayBehavior, ConfigStore, MergeOptions, Node, Structure, create, merge_deep, plainify,
    plainify_with,
};
use rstest::rstest;
use serde_json::json;
use test_helpers::fixtures;

fn is_descriptor(map: &Structure) -> bool {
    let truthy = |key: &str| map.get(key).is_some_and(|value| !value.is_falsy());
    truthy("desc") && truthy("type")
}

#[rstest]
fn basic_usage() -> Result<()> {
    let mut config = create(
        &Node::from(json!({"a": "new value"})),
        &Node::from(json!({"a": "default value"})),
    );
    ensure!(config.get_prop_ref(Some("a")).and_then(Node::as_str) == Some("new value"));
    ensure!(config.get_default(Some("a")).and_then(Node::as_str) == Some("default value"));

    config.add(
        &Node::from(json!({"b": 1})),
        &Node::from(json!({"b": 0})),
        &MergeOptions::default(),
    );
    ensure!(config.get_prop_ref(Some("b")).and_then(Node::as_i64) == Some(1));
    ensure!(config.get_default(Some("b")).and_then(Node::as_i64) == Some(0));
    Ok(())
}

#[rstest]
fn advanced_usage() -> Result<()> {
    let defaults = Node::from(json!({"yourOption": 1, "nested": {"option": "two", "array": [1]}}));
    let mut config = ConfigStore::new(&Node::from(json!({"yourOption": 2})), &defaults);
    ensure!(config.get_prop_ref(Some("yourOption")).and_then(Node::as_i64) == Some(2));
    ensure!(config.get_prop_ref(Some("nested.array")) == Some(&Node::from(json!([1]))));

    let overrides = Node::from(json!({"yourOption": 3, "nested": {"option": "three", "array": [2]}}));
    config.add(&overrides, &Node::structure(), &MergeOptions::default());
    ensure!(config.get_prop_ref(Some("nested.array")) == Some(&Node::from(json!([2]))));

    config.add(
        &Node::from(json!({"nested": {"array": [3]}})),
        &Node::structure(),
        &MergeOptions::with_array(ArrayBehavior::Append),
    );
    ensure!(config.get_prop_ref(Some("nested.array")) == Some(&Node::from(json!([2, 3]))));
    ensure!(config.get_prop_ref(Some("yourOption")).and_then(Node::as_i64) == Some(3));
    ensure!(config.get_default(Some("yourOption")).and_then(Node::as_i64) == Some(1));
    ensure!(config.get_prop_ref(Some("nested.option")).and_then(Node::as_str) == Some("three"));
    ensure!(config.get_default(Some("nested.option")).and_then(Node::as_str) == Some("two"));
    Ok(())
}

#[rstest]
fn merge_and_flatten_extras() -> Result<()> {
    let mut first = Node::from(json!({"a": 1, "nested": {"arr": [1, 2]}}));
    let second = Node::from(json!({"a": 2, "nested": {"arr": [3], "foo": "bar"}}));
    merge_deep(&mut first, [&second], &MergeOptions::with_array(ArrayBehavior::Append));
    ensure!(first == Node::from(json!({"a": 2, "nested": {"arr": [1, 2, 3], "foo": "bar"}})));

    let flat = plainify(&second);
    ensure!(flat == Node::from(json!({"a": 2, "nested.arr": [3], "nested.foo": "bar"})));
    Ok(())
}

#[rstest]
fn construction_from_shared_fixtures() -> Result<()> {
    let config = create(
        &Node::from(fixtures::server_overrides()),
        &Node::from(fixtures::server_defaults()),
    );
    ensure!(config.get_prop_ref(Some("port")).and_then(Node::as_i64) == Some(8080));
    ensure!(config.get_default(Some("port")).and_then(Node::as_i64) == Some(8000));
    ensure!(config.get_prop_ref(Some("formula.input")).and_then(Node::as_str) == Some("TeX"));
    ensure!(
        config.get_prop_ref(Some("formula.delims")) == Some(&Node::from(json!(["<math>"])))
    );
    Ok(())
}

#[rstest]
fn descriptor_metadata_flattens_to_option_table() -> Result<()> {
    let config = create(&Node::structure(), &Node::from(fixtures::described_defaults()));
    let meta = config
        .get_prop_ref(Some("meta"))
        .ok_or_else(|| anyhow::anyhow!("meta section missing"))?;
    let options = plainify_with(meta, is_descriptor);
    ensure!(
        options
            == Node::from(json!({
                "foo": {"desc": "Some description", "type": "string", "alias": "f"},
                "nested.foo": {"desc": "Some description", "type": "string"},
                "nested.nested.foo": "Some description",
                "nested.nested.array": {"desc": "Some description", "type": "array", "alias": "a"}
            })),
        "unexpected option table: {options:?}"
    );
    Ok(())
}

#[rstest]
fn linked_arrays_are_an_explicit_opt_in() -> Result<()> {
    let shared = Node::from(json!({"hosts": ["a"]}));
    let mut config = ConfigStore::default();
    config.add(
        &shared,
        &Node::structure(),
        &MergeOptions::with_array(ArrayBehavior::ReplaceLink),
    );
    let Some(Node::Sequence(hosts)) = config.get_prop_ref(Some("hosts")) else {
        anyhow::bail!("hosts missing");
    };
    hosts.push(Node::from("b"));
    ensure!(shared == Node::from(json!({"hosts": ["a", "b"]})));
    Ok(())
}
