use thiserror::Error;

use crate::node::Kind;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("invalid JSON: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("cannot encode JSON: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("type assertion to {expected} failed: found {found}{}", at_index(.index))]
    TypeMismatch {
        expected: Kind,
        found: Kind,
        /// Position of the offending element when an array element failed.
        index: Option<usize>,
    },
    #[error("key `{0}` not found")]
    KeyNotFound(String),
    #[error("receiver is {found}, not an object")]
    NotAnObject { found: Kind },
    #[error("number {literal} does not fit in {target}")]
    NumberOutOfRange {
        literal: String,
        target: &'static str,
    },
}

impl JsonError {
    pub(crate) fn mismatch(expected: Kind, found: Kind) -> Self {
        JsonError::TypeMismatch {
            expected,
            found,
            index: None,
        }
    }
}

fn at_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {i}"),
        None => String::new(),
    }
}
