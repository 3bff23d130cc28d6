//! Swift source helpers.

/// Quote `value` as a Swift string literal.
///
/// Backslashes and quotes are escaped, which also keeps `\(` from opening an
/// interpolation. Line breaks, tabs and other control characters use Swift
/// escape sequences.
pub fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            '\0' => literal.push_str("\\0"),
            c if c.is_control() => literal.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_is_only_quoted() {
        assert_eq!(string_literal("./Sources"), "\"./Sources\"");
        assert_eq!(string_literal("1.2.3"), "\"1.2.3\"");
    }

    #[test]
    fn test_escapes_quotes_and_backslashes() {
        assert_eq!(string_literal("a\"b"), r#""a\"b""#);
        assert_eq!(string_literal(r"C:\apollo"), r#""C:\\apollo""#);
        assert_eq!(string_literal(r"\(evil)"), r#""\\(evil)""#);
    }

    #[test]
    fn test_escapes_control_characters() {
        assert_eq!(string_literal("a\nb\tc"), r#""a\nb\tc""#);
        assert_eq!(string_literal("bell\u{7}"), r#""bell\u{7}""#);
    }
}
