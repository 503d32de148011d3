//! Language tables and identifier sanitization for the sharpgen emitter.
//!
//! This crate owns the data that is specific to a target language but not to
//! any particular piece of generated code: reserved-keyword sets, the
//! identifier character rules, escape markers, and file extensions. The
//! emission crate (`sharpgen`) consumes these tables so that supporting a new
//! language means adding a table here, not a new dependency there.

pub mod language;
pub mod sanitize;

pub use language::{CSHARP, Language, LanguageSpec};
pub use sanitize::{to_valid_identifier, to_valid_namespace};
