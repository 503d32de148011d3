//! Identifier and namespace sanitization.
//!
//! Turns arbitrary strings into valid identifiers or dotted namespace paths
//! for a target language. Invalid characters are replaced with the language's
//! marker character and reserved words are escaped. Unusable input (empty)
//! yields `None` rather than an error.

use crate::language::LanguageSpec;

/// Convert an arbitrary string into a valid identifier.
///
/// The first character is kept if it may start an identifier; otherwise the
/// invalid-character marker is emitted and the original character is re-emitted
/// only when it would be accepted in a non-leading position. Every remaining
/// character is passed through or replaced by the marker. The combined result
/// is escaped once if it collides with a reserved word.
///
/// ```
/// use sharpgen_core::{CSHARP, to_valid_identifier};
///
/// assert_eq!(to_valid_identifier(&CSHARP, "1MyClass").as_deref(), Some("_1MyClass"));
/// assert_eq!(to_valid_identifier(&CSHARP, "class").as_deref(), Some("@class"));
/// assert_eq!(to_valid_identifier(&CSHARP, ""), None);
/// ```
pub fn to_valid_identifier(spec: &LanguageSpec, source: &str) -> Option<String> {
    let sanitized = sanitize_chars(spec, source, false)?;
    if spec.is_keyword(&sanitized) {
        Some(spec.escape_keyword(&sanitized))
    } else {
        Some(sanitized)
    }
}

/// Convert an arbitrary string into a valid dotted namespace path.
///
/// The segment separator survives sanitization; afterwards each segment is
/// independently checked against the reserved-word set and escaped on its own.
///
/// ```
/// use sharpgen_core::{CSHARP, to_valid_namespace};
///
/// assert_eq!(
///     to_valid_namespace(&CSHARP, "namespace.class.whatever").as_deref(),
///     Some("@namespace.@class.whatever"),
/// );
/// ```
pub fn to_valid_namespace(spec: &LanguageSpec, source: &str) -> Option<String> {
    let sanitized = sanitize_chars(spec, source, true)?;
    let separator = spec.namespace_separator.to_string();
    let escaped = sanitized
        .split(spec.namespace_separator)
        .map(|segment| {
            if spec.is_keyword(segment) {
                spec.escape_keyword(segment)
            } else {
                segment.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(&separator);
    Some(escaped)
}

/// Character-level pass shared by both variants.
///
/// Builds into a single buffer pre-sized for the worst case: the input length
/// plus one prepended marker.
fn sanitize_chars(spec: &LanguageSpec, source: &str, allow_separator: bool) -> Option<String> {
    let mut chars = source.chars();
    let first = chars.next()?;

    let is_part =
        |c: char| (spec.is_ident_part)(c) || (allow_separator && c == spec.namespace_separator);

    let mut out = String::with_capacity(source.len() + 1);
    if (spec.is_ident_start)(first) {
        out.push(first);
    } else {
        out.push(spec.invalid_marker);
        if is_part(first) {
            out.push(first);
        }
    }
    for c in chars {
        if is_part(c) {
            out.push(c);
        } else {
            out.push(spec.invalid_marker);
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::CSHARP;

    fn ident(source: &str) -> Option<String> {
        to_valid_identifier(&CSHARP, source)
    }

    fn namespace(source: &str) -> Option<String> {
        to_valid_namespace(&CSHARP, source)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(ident(""), None);
        assert_eq!(namespace(""), None);
    }

    #[test]
    fn test_valid_identifier_untouched() {
        assert_eq!(ident("MyClass").as_deref(), Some("MyClass"));
        assert_eq!(ident("_private").as_deref(), Some("_private"));
        assert_eq!(ident("x1").as_deref(), Some("x1"));
    }

    #[test]
    fn test_leading_digit_kept_after_marker() {
        assert_eq!(ident("1MyClass").as_deref(), Some("_1MyClass"));
    }

    #[test]
    fn test_leading_invalid_char_dropped() {
        // '$' is not valid anywhere in an identifier, so it is replaced wholesale.
        assert_eq!(ident("$MyClass").as_deref(), Some("_MyClass"));
    }

    #[test]
    fn test_interior_invalid_char_replaced() {
        assert_eq!(ident("My$Class").as_deref(), Some("My_Class"));
        assert_eq!(ident("My Class").as_deref(), Some("My_Class"));
    }

    #[test]
    fn test_keyword_escaped() {
        assert_eq!(ident("class").as_deref(), Some("@class"));
        assert_eq!(ident("namespace").as_deref(), Some("@namespace"));
    }

    #[test]
    fn test_dots_replaced_in_identifier() {
        // The plain variant does not accept dots, so a dotted input collapses
        // into a single identifier.
        assert_eq!(ident("My.Class").as_deref(), Some("My_Class"));
    }

    #[test]
    fn test_namespace_segments_escaped_independently() {
        assert_eq!(
            namespace("namespace.class.whatever").as_deref(),
            Some("@namespace.@class.whatever"),
        );
    }

    #[test]
    fn test_namespace_idempotent_on_valid_input() {
        let first = namespace("Valid.Name.Space").unwrap();
        assert_eq!(first, "Valid.Name.Space");
        assert_eq!(namespace(&first).unwrap(), first);
    }

    #[test]
    fn test_namespace_invalid_chars() {
        assert_eq!(namespace("My-App.Gen").as_deref(), Some("My_App.Gen"));
        assert_eq!(namespace("1App.Core").as_deref(), Some("_1App.Core"));
    }

    #[test]
    fn test_unicode_letters_accepted() {
        assert_eq!(ident("Größe").as_deref(), Some("Größe"));
    }
}
