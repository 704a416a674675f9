//! Conversions between [`Node`] trees, JSON values and serde.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use super::{Leaf, Node, Sequence};

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Structure(
                map.into_iter()
                    .map(|(key, child)| (key, Self::from(child)))
                    .collect(),
            ),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Null => Self::Leaf(Leaf::Null),
            Value::Bool(flag) => Self::Leaf(Leaf::Bool(flag)),
            Value::Number(number) => Self::Leaf(Leaf::Number(number)),
            Value::String(text) => Self::Leaf(Leaf::String(text)),
        }
    }
}

/// Undefined entries are dropped from maps and rendered as `null` inside
/// lists, mirroring how JSON encoders treat unset values.
impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::Structure(map) => Self::Object(
                map.iter()
                    .filter(|(_, child)| !child.is_undefined())
                    .map(|(key, child)| (key.clone(), Self::from(child)))
                    .collect::<Map<String, Self>>(),
            ),
            Node::Sequence(seq) => Self::Array(seq.borrow().iter().map(Self::from).collect()),
            Node::Leaf(leaf) => match leaf {
                Leaf::Undefined | Leaf::Null => Self::Null,
                Leaf::Bool(flag) => Self::Bool(*flag),
                Leaf::Number(number) => Self::Number(number.clone()),
                Leaf::String(text) => Self::String(text.clone()),
            },
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Self::from(&node)
    }
}

impl From<Sequence> for Node {
    fn from(seq: Sequence) -> Self {
        Self::Sequence(seq)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Self::Sequence(Sequence::new(items))
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<bool> for Node {
    fn from(flag: bool) -> Self {
        Self::Leaf(Leaf::Bool(flag))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Self::Leaf(Leaf::Number(Number::from(value)))
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Self::Leaf(Leaf::Number(Number::from(value)))
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Self::Leaf(Leaf::Number(Number::from(value)))
    }
}

/// Non-finite floats have no JSON representation and become `null`.
impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Leaf(Leaf::Null), |n| Self::Leaf(Leaf::Number(n)))
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Leaf(Leaf::String(text.to_owned()))
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Leaf(Leaf::String(text))
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Structure(map) => {
                let defined = map.iter().filter(|(_, child)| !child.is_undefined());
                let mut out = serializer.serialize_map(None)?;
                for (key, child) in defined {
                    out.serialize_entry(key, child)?;
                }
                out.end()
            }
            Self::Sequence(seq) => {
                let items = seq.borrow();
                let mut out = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    out.serialize_element(item)?;
                }
                out.end()
            }
            Self::Leaf(Leaf::Undefined | Leaf::Null) => serializer.serialize_unit(),
            Self::Leaf(Leaf::Bool(flag)) => serializer.serialize_bool(*flag),
            Self::Leaf(Leaf::Number(number)) => number.serialize(serializer),
            Self::Leaf(Leaf::String(text)) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}
