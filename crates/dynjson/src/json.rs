//! The dynamic JSON wrapper.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;

use crate::error::JsonError;
use crate::node::{Kind, Node, ObjectMap, Shared};
use crate::pointer::{parse_index, parse_pointer};

/// A dynamically-typed JSON value.
///
/// Navigation hands out *views*: when the addressed child is an object or
/// array, the returned `Json` shares storage with its parent, so mutations
/// through either side are visible through both. Leaves are copied.
/// `Clone` makes another view of the same data; use [`Json::deep_clone`]
/// for a detached copy.
///
/// Mutators take `&self`. Views are single-threaded handles and the type is
/// neither `Send` nor `Sync`.
///
/// # Example
///
/// ```
/// use dynjson::Json;
///
/// let doc = Json::from_bytes(br#"{"user":{"name":"Ada","tags":["x","y"]}}"#)?;
/// assert_eq!(doc.get("user").get("name").as_string()?, "Ada");
///
/// let user = doc.get("user");
/// user.set("id", 7);
/// assert_eq!(doc.to_bytes()?, br#"{"user":{"name":"Ada","tags":["x","y"],"id":7}}"#);
/// # Ok::<(), dynjson::JsonError>(())
/// ```
#[derive(Clone)]
pub struct Json {
    pub(crate) data: Node,
}

impl Json {
    /// Decodes `body` as a single JSON document. Numbers keep their
    /// literal digits.
    pub fn from_bytes(body: &[u8]) -> Result<Self, JsonError> {
        let value: Value = serde_json::from_slice(body).map_err(|err| {
            tracing::debug!(error = %err, len = body.len(), "json decode failed");
            JsonError::Decode(err)
        })?;
        Ok(Self::from_value(value))
    }

    /// A wrapper over `{}`.
    pub fn empty() -> Self {
        Self::from_node(Node::empty_object())
    }

    pub fn from_value(value: Value) -> Self {
        Self::from_node(Node::from(value))
    }

    pub(crate) fn from_node(data: Node) -> Self {
        Self { data }
    }

    fn null() -> Self {
        Self::from_node(Node::Null)
    }

    /// Compact JSON encoding. Object keys come out in insertion order.
    pub fn to_bytes(&self) -> Result<Vec<u8>, JsonError> {
        serde_json::to_vec(&self.data).map_err(JsonError::Encode)
    }

    pub fn to_pretty_bytes(&self) -> Result<Vec<u8>, JsonError> {
        serde_json::to_vec_pretty(&self.data).map_err(JsonError::Encode)
    }

    /// Detached snapshot of the current value.
    pub fn to_value(&self) -> Value {
        self.data.to_value()
    }

    /// Copy that shares no storage with `self`.
    pub fn deep_clone(&self) -> Self {
        Self::from_value(self.to_value())
    }

    pub fn kind(&self) -> Kind {
        self.data.kind()
    }

    pub fn is_null(&self) -> bool {
        matches!(self.data, Node::Null)
    }

    /// Entry count for objects and arrays, `None` for everything else.
    pub fn len(&self) -> Option<usize> {
        match &self.data {
            Node::Object(map) => Some(map.borrow().len()),
            Node::Array(items) => Some(items.borrow().len()),
            _ => None,
        }
    }

    /// Object keys in insertion order; empty for non-objects.
    pub fn keys(&self) -> Vec<String> {
        match &self.data {
            Node::Object(map) => map.borrow().keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// View of the entry at `key`, or a null view when `self` is not an
    /// object or has no such key.
    ///
    /// Useful for chaining: `doc.get("top").get("dict").get("value")`.
    pub fn get(&self, key: &str) -> Json {
        self.check_get(key).unwrap_or_else(Json::null)
    }

    /// Like [`Json::get`], but reports absence instead of yielding null.
    pub fn check_get(&self, key: &str) -> Option<Json> {
        match &self.data {
            Node::Object(map) => map.borrow().get(key).cloned().map(Json::from_node),
            _ => None,
        }
    }

    /// View of the array element at `index`, or a null view.
    pub fn get_index(&self, index: usize) -> Json {
        match &self.data {
            Node::Array(items) => items
                .borrow()
                .get(index)
                .cloned()
                .map(Json::from_node)
                .unwrap_or_else(Json::null),
            _ => Json::null(),
        }
    }

    /// Chained [`Json::get`] over a branch of object keys.
    pub fn get_path<S: AsRef<str>>(&self, branch: &[S]) -> Json {
        branch
            .iter()
            .fold(self.clone(), |current, key| current.get(key.as_ref()))
    }

    /// Resolves an RFC 6901 pointer through objects and arrays. Yields a
    /// null view when the pointer is malformed or does not resolve.
    pub fn pointer(&self, pointer: &str) -> Json {
        let Some(path) = parse_pointer(pointer) else {
            return Json::null();
        };
        let mut current = self.data.clone();
        for step in &path {
            let next = match &current {
                Node::Object(map) => map.borrow().get(step.as_str()).cloned(),
                Node::Array(items) => {
                    parse_index(step).and_then(|index| items.borrow().get(index).cloned())
                }
                _ => None,
            };
            match next {
                Some(node) => current = node,
                None => return Json::null(),
            }
        }
        Json::from_node(current)
    }

    /// True iff `self` is an object holding `key`, whatever its value.
    pub fn has(&self, key: &str) -> bool {
        match &self.data {
            Node::Object(map) => map.borrow().contains_key(key),
            _ => false,
        }
    }

    /// Inserts or overwrites `key`. Does nothing when `self` is not an
    /// object; see [`Json::try_set`] for the strict form.
    pub fn set(&self, key: &str, value: impl Into<Value>) {
        match self.object() {
            Ok(map) => {
                map.borrow_mut().insert(key.to_owned(), Node::from(value.into()));
            }
            Err(err) => tracing::trace!(key, %err, "set ignored"),
        }
    }

    pub fn try_set(&self, key: &str, value: impl Into<Value>) -> Result<(), JsonError> {
        self.object()?
            .borrow_mut()
            .insert(key.to_owned(), Node::from(value.into()));
        Ok(())
    }

    /// Deletes `key`, keeping the order of the remaining entries. Does
    /// nothing when `self` is not an object or the key is absent.
    pub fn remove(&self, key: &str) {
        match self.object() {
            Ok(map) => {
                map.borrow_mut().shift_remove(key);
            }
            Err(err) => tracing::trace!(key, %err, "remove ignored"),
        }
    }

    /// Strict [`Json::remove`]; returns the removed value, if any.
    pub fn try_remove(&self, key: &str) -> Result<Option<Value>, JsonError> {
        let removed = self.object()?.borrow_mut().shift_remove(key);
        Ok(removed.map(|node| node.to_value()))
    }

    /// Sets a value deep inside an object, creating intermediate objects
    /// (and replacing non-object ones) along `branch`. Does nothing for an
    /// empty branch or a non-object receiver.
    pub fn set_path<S: AsRef<str>>(&self, branch: &[S], value: impl Into<Value>) {
        let Some((last, parents)) = branch.split_last() else {
            tracing::trace!("set_path ignored: empty branch");
            return;
        };
        let mut current = match self.object() {
            Ok(map) => Rc::clone(map),
            Err(err) => {
                tracing::trace!(%err, "set_path ignored");
                return;
            }
        };
        for key in parents {
            let next = child_object(&mut current.borrow_mut(), key.as_ref());
            current = next;
        }
        current
            .borrow_mut()
            .insert(last.as_ref().to_owned(), Node::from(value.into()));
    }

    /// Appends to an array. Does nothing when `self` is not an array.
    pub fn push(&self, value: impl Into<Value>) {
        match &self.data {
            Node::Array(items) => items.borrow_mut().push(Node::from(value.into())),
            other => tracing::trace!(found = %other.kind(), "push ignored: receiver is not an array"),
        }
    }

    fn object(&self) -> Result<&Shared<ObjectMap>, JsonError> {
        match &self.data {
            Node::Object(map) => Ok(map),
            other => Err(JsonError::NotAnObject {
                found: other.kind(),
            }),
        }
    }
}

fn child_object(map: &mut ObjectMap, key: &str) -> Shared<ObjectMap> {
    if let Some(Node::Object(child)) = map.get(key) {
        return Rc::clone(child);
    }
    let child: Shared<ObjectMap> = Rc::new(RefCell::new(ObjectMap::new()));
    map.insert(key.to_owned(), Node::Object(Rc::clone(&child)));
    child
}

impl Default for Json {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Json {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl fmt::Debug for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Json").field(&self.to_value()).finish()
    }
}

impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.data).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Json {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl Serialize for Json {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Json {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}
