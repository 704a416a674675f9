//! Unit tests for the two-view configuration store.

use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::json;

use super::ConfigStore;
use crate::merge::{ArrayBehavior, MergeOptions};
use crate::node::Node;

#[fixture]
fn defaults() -> Node {
    Node::from(json!({
        "foo": "bar",
        "nested": {"nested": {"foo": "bar", "array": [1, 2]}, "foo": "bar"},
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
    }))
}

#[rstest]
fn construction_overlays_overrides_on_defaults() {
    let store = ConfigStore::new(
        &Node::from(json!({"port": 8080, "formula": {"delims": ["<math>"], "output": "mml"}})),
        &Node::from(json!({"port": 8000, "delims": ["\\$\\$"], "formula": {"input": "TeX"}})),
    );
    assert_eq!(
        store.current(),
        &Node::from(json!({
            "port": 8080,
            "delims": ["\\$\\$"],
            "formula": {"input": "TeX", "output": "mml", "delims": ["<math>"]}
        }))
    );
    assert_eq!(store.get_default(Some("port")).and_then(Node::as_i64), Some(8000));
    assert!(store.get_default(Some("formula.output")).is_none());
}

#[rstest]
fn mutating_current_never_touches_defaults() {
    let shared = Node::from(json!({"array": [[1, 2]]}));
    let mut store = ConfigStore::new(&shared, &shared);

    if let Some(Node::Sequence(array)) = store.get_prop_mut(Some("array")) {
        array.push(Node::from(json!([3])));
    }
    assert_eq!(store.get_prop_ref(Some("array")), Some(&Node::from(json!([[1, 2], [3]]))));
    assert_eq!(store.get_default(Some("array")), Some(&Node::from(json!([[1, 2]]))));
    assert_eq!(shared, Node::from(json!({"array": [[1, 2]]})));
}

#[rstest]
fn add_honours_array_behavior(defaults: Node) {
    let mut store = ConfigStore::new(&Node::structure(), &defaults);
    store.add(
        &Node::from(json!({"nested": {"nested": {"array": [3]}}})),
        &Node::structure(),
        &MergeOptions::with_array(ArrayBehavior::Append),
    );
    assert_eq!(
        store.get_prop_ref(Some("nested.nested.array")),
        Some(&Node::from(json!([1, 2, 3])))
    );
    assert_eq!(
        store.get_default(Some("nested.nested.array")),
        Some(&Node::from(json!([1, 2])))
    );
}

#[rstest]
fn add_always_mutates_the_store() {
    let mut store = ConfigStore::new(&Node::from(json!({"a": 1})), &Node::from(json!({"a": 0})));
    store.add(
        &Node::from(json!({"a": 2})),
        &Node::from(json!({"b": 0})),
        &MergeOptions::default().non_mutating(),
    );
    assert_eq!(store.current(), &Node::from(json!({"a": 2, "b": 0})));
    assert_eq!(store.defaults(), &Node::from(json!({"a": 0, "b": 0})));
}

#[rstest]
fn add_applies_skip_predicate_to_both_views() {
    let mut store = ConfigStore::new(&Node::structure(), &Node::from(json!({"known": 1})));
    store.add(
        &Node::from(json!({"known": 2, "unknown": 3})),
        &Node::from(json!({"extra": 0})),
        &MergeOptions::default().with_skip(|current, _| current.is_none()),
    );
    assert_eq!(store.current(), &Node::from(json!({"known": 2})));
    assert_eq!(store.defaults(), &Node::from(json!({"known": 1})));
}

#[rstest]
fn add_is_chainable() {
    let mut store = ConfigStore::default();
    store
        .add(&Node::from(json!({"a": 1})), &Node::structure(), &MergeOptions::default())
        .add(&Node::from(json!({"a": 2})), &Node::structure(), &MergeOptions::default());
    assert_eq!(store.get_prop_ref(Some("a")).and_then(Node::as_i64), Some(2));
}

#[rstest]
#[case(None)]
#[case(Some(""))]
fn empty_path_returns_whole_view(defaults: Node, #[case] path: Option<&str>) {
    let store = ConfigStore::new(&Node::structure(), &defaults);
    assert!(store.get_prop_ref(path).is_some_and(|node| std::ptr::eq(node, store.current())));
    assert!(store.get_default(path).is_some_and(|node| std::ptr::eq(node, store.defaults())));
}

#[rstest]
fn resolves_paths_in_nested_views(defaults: Node) {
    let store = ConfigStore::new(&Node::structure(), &defaults);
    assert_eq!(store.get_prop_ref(Some("nested.foo")).and_then(Node::as_str), Some("bar"));
    assert_eq!(
        store.get_prop_ref(Some("meta.nested.nested.array")),
        Some(&Node::from(json!({"desc": "Some description", "type": "array", "alias": "a"})))
    );
    assert!(store.get_prop_ref(Some("meta.missing.foo")).is_none());
}

#[rstest]
fn plainified_flattens_current_view() {
    let store = ConfigStore::new(
        &Node::from(json!({"a": 2, "nested": {"foo": "bar"}})),
        &Node::from(json!({"nested": {"arr": [3]}})),
    );
    assert_eq!(
        store.plainified(),
        Node::from(json!({"a": 2, "nested.arr": [3], "nested.foo": "bar"}))
    );
}

#[derive(Debug, Deserialize, PartialEq)]
struct Server {
    host: String,
    port: u16,
}

#[rstest]
fn extracts_typed_views() -> anyhow::Result<()> {
    let store = ConfigStore::new(
        &Node::from(json!({"port": 8080})),
        &Node::from(json!({"host": "localhost", "port": 8000})),
    );
    let current: Server = store.extract().map_err(|e| anyhow::anyhow!("{e}"))?;
    let defaults: Server = store.extract_default().map_err(|e| anyhow::anyhow!("{e}"))?;
    anyhow::ensure!(current == Server { host: "localhost".into(), port: 8080 });
    anyhow::ensure!(defaults == Server { host: "localhost".into(), port: 8000 });
    Ok(())
}

#[rstest]
fn extraction_reports_shape_mismatches() {
    let store = ConfigStore::new(&Node::from(json!({"port": "eighty"})), &Node::structure());
    let Err(err) = store.extract::<Server>() else {
        panic!("expected a port type mismatch");
    };
    assert!(matches!(&*err, crate::LayeredError::Extract(_)));
}

#[rstest]
fn subtrees_resolve_through_prop_ref(defaults: Node) {
    let store = ConfigStore::new(&Node::structure(), &defaults);
    let meta = store.get_prop_ref(Some("meta.nested"));
    assert_eq!(
        meta.and_then(|tree| crate::prop_ref(tree, Some("nested.array.alias")))
            .and_then(Node::as_str),
        Some("a")
    );
    assert_eq!(
        meta.and_then(|tree| crate::prop_ref(tree, None)),
        store.get_prop_ref(Some("meta.nested"))
    );
}
