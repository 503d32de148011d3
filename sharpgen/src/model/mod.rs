//! Syntax-entity descriptors for generated C# source.
//!
//! Entities form a shallow, strictly tree-owned object graph: a
//! [`CompilationUnit`] owns [`Class`]es, which own [`Field`]s,
//! [`Property`]s, and [`Method`]s. Every entity renders itself through the
//! [`Emit`](crate::writer::Emit) capability trait.

mod attribute;
mod class;
mod compilation;
mod field;
mod method;
mod parameter;
mod property;

pub use attribute::{Attribute, AttributeArgument};
pub use class::Class;
pub use compilation::CompilationUnit;
pub use field::Field;
pub use method::Method;
pub use parameter::{Parameter, ParameterKind};
pub use property::{Accessor, Property};

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::writer::SourceWriter;

/// Access levels for C# types and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Access {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
    ProtectedInternal,
    PrivateProtected,
}

impl Access {
    /// The modifier keyword text.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::ProtectedInternal => "protected internal",
            Self::PrivateProtected => "private protected",
        }
    }
}

/// A generic type parameter's constraints and documentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericParam {
    /// Constraint expressions for the parameter's `where` clause.
    pub constraints: Vec<String>,
    /// Documentation for the `<typeparam>` tag.
    pub doc: Option<String>,
}

/// Insertion-ordered mapping of generic-parameter name to its details.
pub(crate) type GenericParams = IndexMap<String, GenericParam>;

/// Validate a required name or type string at assignment time.
pub(crate) fn require_name(context: &'static str, value: impl Into<String>) -> Result<String> {
    let value = value.into();
    if value.trim().is_empty() {
        Err(Error::BlankName { context })
    } else {
        Ok(value)
    }
}

/// Angle-bracket parameter list in insertion order, or empty.
pub(crate) fn generic_arg_list(params: &GenericParams) -> String {
    if params.is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = params.keys().map(String::as_str).collect();
        format!("<{}>", names.join(", "))
    }
}

/// One indented `where` line per constrained parameter, in insertion order.
pub(crate) fn emit_where_clauses(w: &mut SourceWriter, params: &GenericParams) {
    w.indent();
    for (name, param) in params {
        if !param.constraints.is_empty() {
            w.line(&format!("where {} : {}", name, param.constraints.join(", ")));
        }
    }
    w.dedent();
}

/// Inline `where` clauses for single-line signatures.
pub(crate) fn inline_where_clauses(params: &GenericParams) -> String {
    let mut out = String::new();
    for (name, param) in params {
        if !param.constraints.is_empty() {
            out.push_str(&format!(
                " where {} : {}",
                name,
                param.constraints.join(", ")
            ));
        }
    }
    out
}

/// `(name, doc)` pairs for the documented generic parameters.
pub(crate) fn typeparam_docs(params: &GenericParams) -> Vec<(&str, &str)> {
    params
        .iter()
        .filter_map(|(name, param)| param.doc.as_deref().map(|doc| (name.as_str(), doc)))
        .collect()
}
