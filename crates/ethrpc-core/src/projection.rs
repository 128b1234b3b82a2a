//! Result projection — normalize any JSON result value into a string.
//!
//! Node implementations disagree on whether certain result fields come back
//! quoted. Callers that expect text get it either way: a JSON string passes
//! through verbatim, everything else is rendered as compact JSON.

use serde_json::Value;

/// Project a JSON result value to a string.
///
/// A string is returned as-is, without added quotes. Any other value is
/// serialized compactly — no indentation, no trailing newline — so the
/// projection is idempotent on its own output.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_passes_through() {
        assert_eq!(stringify(&json!("0x10")), "0x10");
    }

    #[test]
    fn object_renders_compact() {
        assert_eq!(stringify(&json!({"a":1})), r#"{"a":1}"#);
    }

    #[test]
    fn scalars_render_unquoted() {
        assert_eq!(stringify(&json!(false)), "false");
        assert_eq!(stringify(&json!(42)), "42");
        assert_eq!(stringify(&Value::Null), "null");
    }

    #[test]
    fn idempotent_on_own_output() {
        let once = stringify(&json!({"a":1}));
        let twice = stringify(&Value::String(once.clone()));
        assert_eq!(once, twice);
    }
}
