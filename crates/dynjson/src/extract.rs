//! Typed extraction.
//!
//! Every `as_*` method checks the runtime kind of the wrapped value and
//! fails with [`JsonError::TypeMismatch`] when it does not hold. Nothing is
//! coerced: a numeric string is still a string.

use serde_json::{Map, Number, Value};

use crate::error::JsonError;
use crate::json::Json;
use crate::node::{Kind, Node};

impl Json {
    /// Snapshot of the object entries.
    pub fn as_map(&self) -> Result<Map<String, Value>, JsonError> {
        match &self.data {
            Node::Object(map) => Ok(map
                .borrow()
                .iter()
                .map(|(key, node)| (key.clone(), node.to_value()))
                .collect()),
            other => Err(JsonError::mismatch(Kind::Object, other.kind())),
        }
    }

    /// Snapshot of the array elements.
    pub fn as_array(&self) -> Result<Vec<Value>, JsonError> {
        match &self.data {
            Node::Array(items) => Ok(items.borrow().iter().map(Node::to_value).collect()),
            other => Err(JsonError::mismatch(Kind::Array, other.kind())),
        }
    }

    pub fn as_bool(&self) -> Result<bool, JsonError> {
        match &self.data {
            Node::Bool(b) => Ok(*b),
            other => Err(JsonError::mismatch(Kind::Bool, other.kind())),
        }
    }

    pub fn as_string(&self) -> Result<String, JsonError> {
        match &self.data {
            Node::String(s) => Ok(s.clone()),
            other => Err(JsonError::mismatch(Kind::String, other.kind())),
        }
    }

    /// Array whose elements are all strings. The error for a bad element
    /// carries its index.
    pub fn as_string_array(&self) -> Result<Vec<String>, JsonError> {
        let Node::Array(items) = &self.data else {
            return Err(JsonError::mismatch(Kind::Array, self.kind()));
        };
        let items = items.borrow();
        items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Node::String(s) => Ok(s.clone()),
                other => Err(JsonError::TypeMismatch {
                    expected: Kind::String,
                    found: other.kind(),
                    index: Some(index),
                }),
            })
            .collect()
    }

    /// The number exactly as written in the source document.
    pub fn as_number(&self) -> Result<Number, JsonError> {
        match &self.data {
            Node::Number(n) => Ok(n.clone()),
            other => Err(JsonError::mismatch(Kind::Number, other.kind())),
        }
    }

    pub fn as_i64(&self) -> Result<i64, JsonError> {
        let number = self.as_number()?;
        number.as_i64().ok_or_else(|| out_of_range(&number, "i64"))
    }

    pub fn as_u64(&self) -> Result<u64, JsonError> {
        let number = self.as_number()?;
        number.as_u64().ok_or_else(|| out_of_range(&number, "u64"))
    }

    pub fn as_f64(&self) -> Result<f64, JsonError> {
        let number = self.as_number()?;
        number.as_f64().ok_or_else(|| out_of_range(&number, "f64"))
    }

    fn require(&self, key: &str) -> Result<Json, JsonError> {
        self.check_get(key)
            .ok_or_else(|| JsonError::KeyNotFound(key.to_owned()))
    }

    pub fn get_map(&self, key: &str) -> Result<Map<String, Value>, JsonError> {
        self.require(key)?.as_map()
    }

    pub fn get_array(&self, key: &str) -> Result<Vec<Value>, JsonError> {
        self.require(key)?.as_array()
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, JsonError> {
        self.require(key)?.as_bool()
    }

    pub fn get_string(&self, key: &str) -> Result<String, JsonError> {
        self.require(key)?.as_string()
    }

    pub fn get_string_array(&self, key: &str) -> Result<Vec<String>, JsonError> {
        self.require(key)?.as_string_array()
    }

    pub fn get_i64(&self, key: &str) -> Result<i64, JsonError> {
        self.require(key)?.as_i64()
    }

    pub fn get_u64(&self, key: &str) -> Result<u64, JsonError> {
        self.require(key)?.as_u64()
    }

    pub fn get_f64(&self, key: &str) -> Result<f64, JsonError> {
        self.require(key)?.as_f64()
    }

    pub fn string_or(&self, default: &str) -> String {
        self.as_string().unwrap_or_else(|_| default.to_owned())
    }

    pub fn bool_or(&self, default: bool) -> bool {
        self.as_bool().unwrap_or(default)
    }

    pub fn i64_or(&self, default: i64) -> i64 {
        self.as_i64().unwrap_or(default)
    }

    pub fn u64_or(&self, default: u64) -> u64 {
        self.as_u64().unwrap_or(default)
    }

    pub fn f64_or(&self, default: f64) -> f64 {
        self.as_f64().unwrap_or(default)
    }

    pub fn string_array_or(&self, default: Vec<String>) -> Vec<String> {
        self.as_string_array().unwrap_or(default)
    }
}

fn out_of_range(number: &Number, target: &'static str) -> JsonError {
    JsonError::NumberOutOfRange {
        literal: number.to_string(),
        target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Json {
        Json::from_value(json!({
            "name": "Ada",
            "ok": true,
            "count": "3",
            "tags": ["x", "y"],
            "mixed": ["a", "b", 3],
            "obj": {"k": 1},
            "big": 12345678901234567890u64,
            "neg": -7,
            "ratio": 0.25,
            "nothing": null
        }))
    }

    #[test]
    fn test_as_kinds() {
        let j = sample();
        assert_eq!(j.get("name").as_string().unwrap(), "Ada");
        assert!(j.get("ok").as_bool().unwrap());
        assert_eq!(j.get("obj").as_map().unwrap(), *json!({"k": 1}).as_object().unwrap());
        assert_eq!(j.get("tags").as_array().unwrap(), vec![json!("x"), json!("y")]);
    }

    #[test]
    fn test_no_coercion() {
        let j = sample();
        assert!(matches!(
            j.get("count").as_i64(),
            Err(JsonError::TypeMismatch { expected: Kind::Number, found: Kind::String, index: None })
        ));
        assert!(matches!(
            j.get("ok").as_string(),
            Err(JsonError::TypeMismatch { expected: Kind::String, found: Kind::Bool, .. })
        ));
        assert!(matches!(
            j.get("nothing").as_bool(),
            Err(JsonError::TypeMismatch { found: Kind::Null, .. })
        ));
        assert!(matches!(
            j.get("tags").as_map(),
            Err(JsonError::TypeMismatch { expected: Kind::Object, found: Kind::Array, .. })
        ));
    }

    #[test]
    fn test_as_string_array() {
        let j = sample();
        assert_eq!(j.get("tags").as_string_array().unwrap(), vec!["x", "y"]);
        assert!(matches!(
            j.get("mixed").as_string_array(),
            Err(JsonError::TypeMismatch { expected: Kind::String, found: Kind::Number, index: Some(2) })
        ));
        assert!(matches!(
            j.get("name").as_string_array(),
            Err(JsonError::TypeMismatch { expected: Kind::Array, found: Kind::String, index: None })
        ));
        assert_eq!(
            Json::from_value(json!([])).as_string_array().unwrap(),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_numbers() {
        let j = sample();
        assert_eq!(j.get("big").as_u64().unwrap(), 12345678901234567890);
        assert!(matches!(
            j.get("big").as_i64(),
            Err(JsonError::NumberOutOfRange { target: "i64", .. })
        ));
        assert_eq!(j.get("neg").as_i64().unwrap(), -7);
        assert!(j.get("neg").as_u64().is_err());
        assert_eq!(j.get("ratio").as_f64().unwrap(), 0.25);
        assert_eq!(j.get("big").as_number().unwrap().to_string(), "12345678901234567890");
    }

    #[test]
    fn test_combinators() {
        let j = sample();
        assert_eq!(j.get_string("name").unwrap(), "Ada");
        assert!(j.get_bool("ok").unwrap());
        assert_eq!(j.get_string_array("tags").unwrap(), vec!["x", "y"]);
        assert_eq!(j.get_map("obj").unwrap().len(), 1);
        assert_eq!(j.get_array("mixed").unwrap().len(), 3);
        assert_eq!(j.get_i64("neg").unwrap(), -7);
        assert_eq!(j.get_f64("ratio").unwrap(), 0.25);
        assert_eq!(j.get_u64("big").unwrap(), 12345678901234567890);

        assert!(matches!(j.get_string("missing"), Err(JsonError::KeyNotFound(key)) if key == "missing"));
        assert!(matches!(j.get_bool("name"), Err(JsonError::TypeMismatch { .. })));
        // present-but-null is a type mismatch, not a missing key
        assert!(matches!(j.get_string("nothing"), Err(JsonError::TypeMismatch { .. })));
    }

    #[test]
    fn test_defaults() {
        let j = sample();
        assert_eq!(j.get("name").string_or("anon"), "Ada");
        assert_eq!(j.get("missing").string_or("anon"), "anon");
        assert!(j.get("missing").bool_or(true));
        assert_eq!(j.get("count").i64_or(0), 0);
        assert_eq!(j.get("neg").u64_or(1), 1);
        assert_eq!(j.get("ratio").f64_or(1.0), 0.25);
        assert_eq!(j.get("mixed").string_array_or(vec![]), Vec::<String>::new());
    }
}
