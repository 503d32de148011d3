//! Target-language definitions for code emission.

use std::fmt;

/// Target language selector for generated output.
///
/// Only C# is implemented; Visual Basic is recognized so that hosts can pass
/// it through, but requesting language-specific behavior for it fails with an
/// unsupported-language error at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// C#.
    #[default]
    CSharp,
    /// Visual Basic (recognized, not implemented).
    VisualBasic,
}

impl Language {
    /// Language identifier (e.g. "csharp").
    pub fn name(&self) -> &'static str {
        match self {
            Self::CSharp => "csharp",
            Self::VisualBasic => "visualbasic",
        }
    }

    /// The language table, or `None` when the language is not implemented.
    pub fn spec(&self) -> Option<&'static LanguageSpec> {
        match self {
            Self::CSharp => Some(&CSHARP),
            Self::VisualBasic => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-language emission rules.
///
/// Everything here is plain data so that the sanitizer and the emitters stay
/// language-agnostic: keyword sets, identifier character predicates, escape
/// markers, file extensions, and the naming conventions the emitter consults.
#[derive(Debug, Clone, Copy)]
pub struct LanguageSpec {
    /// Language identifier.
    pub name: &'static str,
    /// Valid first character of an identifier.
    pub is_ident_start: fn(char) -> bool,
    /// Valid non-first character of an identifier.
    pub is_ident_part: fn(char) -> bool,
    /// Replacement for characters that cannot appear in an identifier.
    pub invalid_marker: char,
    /// Prefix that escapes a reserved word (e.g. `@class`).
    pub keyword_escape: &'static str,
    /// Separator between namespace segments.
    pub namespace_separator: char,
    /// Extension for plain source files.
    pub source_extension: &'static str,
    /// Extension for generated source files, including the generated marker.
    pub generated_extension: &'static str,
    /// Names that denote the language's string type (compared case-insensitively).
    pub string_type_names: &'static [&'static str],
    /// Method-name suffix that marks a method as asynchronous by convention.
    pub async_suffix: &'static str,
    /// Return-type prefixes recognized as asynchronous task families.
    pub async_return_types: &'static [&'static str],
    /// Reserved keywords (exact, case-sensitive).
    pub keywords: &'static [&'static str],
}

impl LanguageSpec {
    /// Check if a word is a reserved keyword.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(&word)
    }

    /// Escape a reserved word (e.g. "class" -> "@class").
    pub fn escape_keyword(&self, word: &str) -> String {
        format!("{}{}", self.keyword_escape, word)
    }

    /// Check if a type name denotes this language's string type.
    pub fn is_string_type(&self, ty: &str) -> bool {
        self.string_type_names
            .iter()
            .any(|name| name.eq_ignore_ascii_case(ty))
    }
}

fn csharp_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn csharp_ident_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// C# emission rules.
pub const CSHARP: LanguageSpec = LanguageSpec {
    name: "csharp",
    is_ident_start: csharp_ident_start,
    is_ident_part: csharp_ident_part,
    invalid_marker: '_',
    keyword_escape: "@",
    namespace_separator: '.',
    source_extension: ".cs",
    generated_extension: ".g.cs",
    string_type_names: &["string", "System.String"],
    async_suffix: "Async",
    async_return_types: &[
        "Task",
        "ValueTask",
        "System.Threading.Tasks.Task",
        "System.Threading.Tasks.ValueTask",
    ],
    keywords: &[
        "abstract",
        "as",
        "base",
        "bool",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "checked",
        "class",
        "const",
        "continue",
        "decimal",
        "default",
        "delegate",
        "do",
        "double",
        "else",
        "enum",
        "event",
        "explicit",
        "extern",
        "false",
        "finally",
        "fixed",
        "float",
        "for",
        "foreach",
        "goto",
        "if",
        "implicit",
        "in",
        "int",
        "interface",
        "internal",
        "is",
        "lock",
        "long",
        "namespace",
        "new",
        "null",
        "object",
        "operator",
        "out",
        "override",
        "params",
        "private",
        "protected",
        "public",
        "readonly",
        "ref",
        "return",
        "sbyte",
        "sealed",
        "short",
        "sizeof",
        "stackalloc",
        "static",
        "string",
        "struct",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "uint",
        "ulong",
        "unchecked",
        "unsafe",
        "ushort",
        "using",
        "virtual",
        "void",
        "volatile",
        "while",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_spec_lookup() {
        assert!(Language::CSharp.spec().is_some());
        assert!(Language::VisualBasic.spec().is_none());
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::CSharp.to_string(), "csharp");
        assert_eq!(Language::VisualBasic.to_string(), "visualbasic");
    }

    #[test]
    fn test_keywords() {
        assert!(CSHARP.is_keyword("class"));
        assert!(CSHARP.is_keyword("namespace"));
        assert!(CSHARP.is_keyword("void"));
        assert!(!CSHARP.is_keyword("Class"));
        assert!(!CSHARP.is_keyword("widget"));
    }

    #[test]
    fn test_escape_keyword() {
        assert_eq!(CSHARP.escape_keyword("class"), "@class");
    }

    #[test]
    fn test_string_type_detection() {
        assert!(CSHARP.is_string_type("string"));
        assert!(CSHARP.is_string_type("String"));
        assert!(CSHARP.is_string_type("System.String"));
        assert!(CSHARP.is_string_type("system.string"));
        assert!(!CSHARP.is_string_type("int"));
        assert!(!CSHARP.is_string_type("StringBuilder"));
    }

    #[test]
    fn test_ident_predicates() {
        assert!((CSHARP.is_ident_start)('_'));
        assert!((CSHARP.is_ident_start)('A'));
        assert!(!(CSHARP.is_ident_start)('1'));
        assert!((CSHARP.is_ident_part)('1'));
        assert!(!(CSHARP.is_ident_part)('$'));
        assert!(!(CSHARP.is_ident_part)('.'));
    }
}
