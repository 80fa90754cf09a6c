//! Dynamically-typed access to JSON documents.
//!
//! [`Json`] wraps a decoded JSON value and exposes chained, type-asserting
//! accessors, so nested data can be read without declaring intermediate
//! structs. Parsing and encoding are done by `serde_json`; numbers keep
//! their literal digits and objects keep their key order.
//!
//! # Example
//!
//! ```
//! use dynjson::{Json, JsonError};
//!
//! let doc = Json::from_bytes(br#"{"user":{"name":"Ada","tags":["x","y"]}}"#)?;
//!
//! assert_eq!(doc.get("user").get("name").as_string()?, "Ada");
//! assert_eq!(doc.get("user").get_string_array("tags")?, vec!["x", "y"]);
//! assert!(matches!(
//!     doc.get("user").get("missing").as_bool(),
//!     Err(JsonError::TypeMismatch { .. })
//! ));
//! assert!(matches!(
//!     doc.get_string("missing"),
//!     Err(JsonError::KeyNotFound(_))
//! ));
//! # Ok::<(), JsonError>(())
//! ```

mod error;
mod extract;
mod json;
mod node;
pub mod pointer;

pub use error::JsonError;
pub use json::Json;
pub use node::Kind;

/// Library version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), "0.5.0-alpha");
    }
}
