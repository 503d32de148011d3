//! Default/initial value formatting shared by fields, properties, and
//! parameters.

use sharpgen_core::LanguageSpec;

/// Format a default or initial value for the declared type.
///
/// String-typed values that are not already enclosed in a recognized literal
/// form are escaped and quoted; already-quoted values pass through unchanged.
/// For any other type the value passes through verbatim, except that the
/// empty string means "no value supplied" and renders nothing.
pub fn format_value(spec: &LanguageSpec, ty: &str, value: &str) -> Option<String> {
    if spec.is_string_type(ty) {
        if is_quoted_literal(value) {
            Some(value.to_string())
        } else {
            Some(quote(value))
        }
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Whether the value is fully enclosed in one of the recognized literal
/// quoting forms: plain, verbatim, interpolated, or combined prefixes.
fn is_quoted_literal(value: &str) -> bool {
    const OPENERS: [&str; 5] = ["\"", "@\"", "$\"", "$@\"", "@$\""];
    OPENERS.iter().any(|opener| {
        value.len() > opener.len() && value.starts_with(opener) && value.ends_with('"')
    })
}

/// Escape embedded quotes and wrap in quotes.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sharpgen_core::CSHARP;

    fn fmt(ty: &str, value: &str) -> Option<String> {
        format_value(&CSHARP, ty, value)
    }

    #[test]
    fn test_plain_string_gets_quoted() {
        assert_eq!(fmt("string", "hello").as_deref(), Some("\"hello\""));
        assert_eq!(fmt("System.String", "hello").as_deref(), Some("\"hello\""));
    }

    #[test]
    fn test_embedded_quotes_escaped() {
        assert_eq!(
            fmt("string", "test\"quote").as_deref(),
            Some("\"test\\\"quote\"")
        );
    }

    #[test]
    fn test_already_quoted_passes_through() {
        assert_eq!(fmt("string", "\"test\"").as_deref(), Some("\"test\""));
        assert_eq!(fmt("string", "@\"c:\\tmp\"").as_deref(), Some("@\"c:\\tmp\""));
        assert_eq!(fmt("string", "$\"{x}\"").as_deref(), Some("$\"{x}\""));
        assert_eq!(fmt("string", "$@\"{x}\\\"").as_deref(), Some("$@\"{x}\\\""));
        assert_eq!(fmt("string", "@$\"{x}\"").as_deref(), Some("@$\"{x}\""));
    }

    #[test]
    fn test_lone_quote_is_not_a_literal() {
        // A single '"' is an opener without a closer and must be escaped.
        assert_eq!(fmt("string", "\"").as_deref(), Some("\"\\\"\""));
    }

    #[test]
    fn test_empty_string_value_renders_empty_literal() {
        assert_eq!(fmt("string", "").as_deref(), Some("\"\""));
    }

    #[test]
    fn test_non_string_passes_verbatim() {
        assert_eq!(fmt("int", "42").as_deref(), Some("42"));
        assert_eq!(fmt("bool", "true").as_deref(), Some("true"));
        assert_eq!(
            fmt("List<int>", "new List<int>()").as_deref(),
            Some("new List<int>()")
        );
    }

    #[test]
    fn test_non_string_empty_means_no_value() {
        assert_eq!(fmt("int", ""), None);
    }
}
