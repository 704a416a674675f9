//! Unit tests for dotted-key flattening.

use rstest::rstest;
use serde_json::{Value, json};

use super::{plainify, plainify_with};
use crate::node::{Node, Structure};

fn has_descriptor(map: &Structure) -> bool {
    map.get("desc").is_some_and(|desc| !desc.is_nullish())
        && map.get("type").is_some_and(|kind| !kind.is_nullish())
}

#[rstest]
#[case::flat(json!({"a": 1, "b": 2}), json!({"a": 1, "b": 2}))]
#[case::nested(
    json!({"nested": {"foo": "bar", "nested": {"foo": [1, 2]}}, "foo": "bar"}),
    json!({"nested.foo": "bar", "nested.nested.foo": [1, 2], "foo": "bar"})
)]
#[case::empty_nested(json!({"gone": {}, "kept": 1}), json!({"kept": 1}))]
#[case::lists_stay_whole(json!({"a": {"list": [{"x": 1}]}}), json!({"a.list": [{"x": 1}]}))]
fn flattens_nested_structures(#[case] input: Value, #[case] expected: Value) {
    assert_eq!(plainify(&Node::from(input)), Node::from(expected));
}

#[rstest]
fn does_not_mutate_input() {
    let input = Node::from(json!({"foo": "bar", "someKey": true, "someArray": [1, 2]}));
    let flat = plainify(&input);
    assert_eq!(input, Node::from(json!({"foo": "bar", "someKey": true, "someArray": [1, 2]})));

    let (Some(original), Some(copied)) = (
        input.get("someArray").and_then(Node::as_sequence),
        flat.get("someArray").and_then(Node::as_sequence),
    ) else {
        panic!("someArray missing");
    };
    assert!(!original.shares_storage_with(copied));
}

#[rstest]
fn keeps_structures_matching_condition() {
    let input = Node::from(json!({
        "key": {"desc": "description", "type": "number", "default": 5},
        "nested": {
            "key": {"desc": "description", "type": "boolean", "default": true},
            "foo": "bar",
            "plainKey": {"type": "boolean"}
        }
    }));
    let flat = plainify_with(&input, has_descriptor);
    assert_eq!(
        flat,
        Node::from(json!({
            "nested.foo": "bar",
            "nested.plainKey.type": "boolean",
            "nested.key": {"desc": "description", "type": "boolean", "default": true},
            "key": {"desc": "description", "type": "number", "default": 5}
        }))
    );
}

#[rstest]
fn drops_undefined_leaves() {
    let mut input = Node::from(json!({"nested": {"kept": 1}}));
    if let Some(nested) = input.get_mut("nested").and_then(Node::as_structure_mut) {
        nested.insert("unset".to_owned(), Node::undefined());
    }
    assert_eq!(plainify(&input), Node::from(json!({"nested.kept": 1})));
}

#[rstest]
#[case(Node::from("scalar"))]
#[case(Node::from(json!([1, {"a": 1}])))]
fn non_structures_are_copied(#[case] input: Node) {
    assert_eq!(plainify(&input), input);
}
