//! Value tree backing [`Json`](crate::Json).
//!
//! Composite nodes live behind `Rc<RefCell<..>>`, so a child handed out by
//! navigation keeps pointing at the same storage as its parent. Leaves are
//! plain values and are copied on navigation.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};
use serde_json::{Number, Value};

pub(crate) type Shared<T> = Rc<RefCell<T>>;
pub(crate) type ObjectMap = IndexMap<String, Node>;

/// The closed set of JSON value categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Object,
    Array,
    String,
    Bool,
    Number,
    Null,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::Null => "null",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Node {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Shared<Vec<Node>>),
    Object(Shared<ObjectMap>),
}

impl Node {
    pub(crate) fn empty_object() -> Self {
        Node::Object(Rc::new(RefCell::new(ObjectMap::new())))
    }

    pub(crate) fn kind(&self) -> Kind {
        match self {
            Node::Null => Kind::Null,
            Node::Bool(_) => Kind::Bool,
            Node::Number(_) => Kind::Number,
            Node::String(_) => Kind::String,
            Node::Array(_) => Kind::Array,
            Node::Object(_) => Kind::Object,
        }
    }

    /// Detached `serde_json` copy of this subtree.
    pub(crate) fn to_value(&self) -> Value {
        match self {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => Value::Number(n.clone()),
            Node::String(s) => Value::String(s.clone()),
            Node::Array(items) => Value::Array(items.borrow().iter().map(Node::to_value).collect()),
            Node::Object(map) => Value::Object(
                map.borrow()
                    .iter()
                    .map(|(key, node)| (key.clone(), node.to_value()))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(n),
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Array(Rc::new(RefCell::new(
                items.into_iter().map(Node::from).collect(),
            ))),
            Value::Object(map) => Node::Object(Rc::new(RefCell::new(
                map.into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ))),
        }
    }
}

// Structural equality. Object comparison ignores key order, as
// `serde_json::Value` does.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::Number(a), Node::Number(b)) => a == b,
            (Node::String(a), Node::String(b)) => a == b,
            (Node::Array(a), Node::Array(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Node::Object(a), Node::Object(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            _ => false,
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) => n.serialize(serializer),
            Node::String(s) => serializer.serialize_str(s),
            Node::Array(items) => {
                let items = items.borrow();
                serializer.collect_seq(items.iter())
            }
            Node::Object(map) => {
                let map = map.borrow();
                serializer.collect_map(map.iter())
            }
        }
    }
}
