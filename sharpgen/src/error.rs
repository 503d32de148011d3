//! Error taxonomy for entity configuration and rendering.

use miette::Diagnostic;
use sharpgen_core::Language;
use thiserror::Error;

/// Result type for sharpgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or rendering an entity tree.
///
/// Every variant is a contract violation surfaced at the point of the
/// offending call, never deferred to render time. Rendering itself cannot
/// fail: a tree that was built successfully always emits.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{context} must not be empty or blank")]
    #[diagnostic(
        code(sharpgen::blank_name),
        help("primary identifiers (names, types) are validated at assignment; pass a non-blank string")
    )]
    BlankName {
        /// Which identifier was blank (e.g. "class name").
        context: &'static str,
    },

    #[error("the {what} of a partial method cannot be changed")]
    #[diagnostic(
        code(sharpgen::partial_method_frozen),
        help("partial methods keep the signature they were declared with; use a non-partial method if the signature must change")
    )]
    PartialMethodFrozen {
        /// Which part of the signature was mutated.
        what: &'static str,
    },

    #[error("code generation for {0} is not supported")]
    #[diagnostic(
        code(sharpgen::unsupported_language),
        help("only C# output is implemented")
    )]
    UnsupportedLanguage(Language),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::BlankName {
            context: "class name",
        };
        assert_eq!(err.to_string(), "class name must not be empty or blank");

        let err = Error::PartialMethodFrozen {
            what: "return type",
        };
        assert_eq!(
            err.to_string(),
            "the return type of a partial method cannot be changed"
        );

        let err = Error::UnsupportedLanguage(Language::VisualBasic);
        assert_eq!(
            err.to_string(),
            "code generation for visualbasic is not supported"
        );
    }
}
