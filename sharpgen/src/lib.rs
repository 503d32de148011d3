//! C# source emission for generator hosts.
//!
//! Builds C# source text from a small syntax-entity model: a
//! [`CompilationUnit`] owns [`Class`]es, which own fields, properties, and
//! methods. Entities are assembled with builder-style calls and rendered
//! through the [`Emit`] trait into a [`SourceWriter`].
//!
//! # Usage
//!
//! ```
//! use sharpgen::{Class, GeneratorOptions, Property};
//!
//! # fn main() -> sharpgen::Result<()> {
//! let options = GeneratorOptions::csharp().nullable(true);
//! let unit = options
//!     .compilation_unit("Widgets")?
//!     .with_namespace("My.App")
//!     .with_class(
//!         Class::new("Widget")?
//!             .partial()
//!             .with_property(Property::new("string", "Name")?.with_value("none")),
//!     );
//!
//! let source = unit.render();
//! let hint = options.hint_name(unit.name());
//! assert_eq!(hint, "Widgets.g.cs");
//! # assert!(source.contains("public partial class Widget"));
//! # Ok(())
//! # }
//! ```
//!
//! Identifier sanitization and the per-language keyword tables live in
//! [`sharpgen_core`], re-exported here for convenience.

mod docs;
mod literal;

pub mod error;
pub mod generator;
pub mod lines;
pub mod model;
pub mod writer;

pub use error::{Error, Result};
pub use generator::{GeneratorOptions, ToolInfo};
pub use lines::CodeLines;
pub use model::{
    Access, Accessor, Attribute, AttributeArgument, Class, CompilationUnit, Field, Method,
    Parameter, ParameterKind, Property,
};
pub use sharpgen_core::{CSHARP, Language, LanguageSpec, to_valid_identifier, to_valid_namespace};
pub use writer::{Emit, Indent, SourceWriter};
