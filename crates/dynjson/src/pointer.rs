//! JSON Pointer (RFC 6901) parsing used by [`Json::pointer`](crate::Json::pointer).

/// Unescapes a pointer component: `~1` becomes `/`, `~0` becomes `~`.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a key for use as a pointer component.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Splits a pointer into unescaped components.
///
/// The empty pointer addresses the root and yields no components. Returns
/// `None` for a non-empty pointer without the leading `/`.
///
/// # Example
///
/// ```
/// use dynjson::pointer::parse_pointer;
///
/// assert_eq!(parse_pointer(""), Some(vec![]));
/// assert_eq!(parse_pointer("/a~1b/0"), Some(vec!["a/b".to_string(), "0".to_string()]));
/// assert_eq!(parse_pointer("a"), None);
/// ```
pub fn parse_pointer(pointer: &str) -> Option<Vec<String>> {
    if pointer.is_empty() {
        return Some(Vec::new());
    }
    let rest = pointer.strip_prefix('/')?;
    Some(rest.split('/').map(unescape_component).collect())
}

/// Joins keys into a pointer string.
pub fn format_pointer<S: AsRef<str>>(path: &[S]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component.as_ref()));
    }
    out
}

/// Parses an array step. Only canonical non-negative integers qualify:
/// no sign, no leading zeros, and never `-`.
pub fn parse_index(step: &str) -> Option<usize> {
    if step.is_empty() || !step.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if step.len() > 1 && step.starts_with('0') {
        return None;
    }
    step.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_component() {
        assert_eq!(unescape_component("a~0b"), "a~b");
        assert_eq!(unescape_component("c~1d"), "c/d");
        assert_eq!(unescape_component("~01"), "~1");
        assert_eq!(unescape_component("plain"), "plain");
    }

    #[test]
    fn test_parse_pointer() {
        assert_eq!(parse_pointer("/"), Some(vec![String::new()]));
        assert_eq!(
            parse_pointer("/foo//bar"),
            Some(vec!["foo".to_string(), String::new(), "bar".to_string()])
        );
        assert_eq!(parse_pointer("foo/bar"), None);
    }

    #[test]
    fn test_format_pointer() {
        assert_eq!(format_pointer::<&str>(&[]), "");
        assert_eq!(format_pointer(&["a/b", "c~d"]), "/a~1b/c~0d");
        let path = parse_pointer("/x~0/y~1").unwrap();
        assert_eq!(format_pointer(&path), "/x~0/y~1");
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index("01"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("-"), None);
        assert_eq!(parse_index("1.5"), None);
        assert_eq!(parse_index(""), None);
    }
}
