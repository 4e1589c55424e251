//! Failure message rendering.
//!
//! Messages use a two-part layout: the actual value, indented, followed by
//! the expectation. Actual values are rendered as pretty-printed JSON.

use serde::Serialize;

/// Placeholder shown when the actual value is null/absent or a matcher has
/// not run yet.
pub(crate) const ABSENT: &str = "<none>";

const INDENT: &str = "    ";

/// Render a value as pretty-printed JSON for display.
pub(crate) fn render<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "<unrenderable>".to_string())
}

/// `Expected\n    <actual>\n<expectation>`
pub(crate) fn message(actual: &str, expectation: &str) -> String {
    format!("Expected\n{}{expectation}", indent(actual))
}

/// `Expected\n    <actual>\n<verb>\n    <expected>`
pub(crate) fn message_with_value(actual: &str, verb: &str, expected: &str) -> String {
    format!("Expected\n{}{verb}\n{}", indent(actual), indent(expected))
}

fn indent(text: &str) -> String {
    let mut out = String::new();
    for line in text.lines() {
        out.push_str(INDENT);
        out.push_str(line);
        out.push('\n');
    }
    if text.is_empty() {
        out.push_str(INDENT);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_layout() {
        let rendered = message("actual", "to be something");
        assert_eq!(rendered, "Expected\n    actual\nto be something");
    }

    #[test]
    fn message_with_value_layout() {
        let rendered = message_with_value("1", "to be", "2");
        assert_eq!(rendered, "Expected\n    1\nto be\n    2");
    }

    #[test]
    fn multi_line_actual_is_fully_indented() {
        let rendered = message("{\n  \"k\": 1\n}", "to be empty");
        assert_eq!(rendered, "Expected\n    {\n      \"k\": 1\n    }\nto be empty");
    }

    #[test]
    fn render_is_pretty_json() {
        assert_eq!(render(&json!({"k": 1})), "{\n  \"k\": 1\n}");
        assert_eq!(render(&42), "42");
    }
}
