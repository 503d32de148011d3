//! Method parameter descriptors.

use sharpgen_core::CSHARP;

use crate::error::Result;
use crate::literal::format_value;
use crate::model::require_name;
use crate::writer::{Emit, SourceWriter};

/// Passing mode of a method parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterKind {
    #[default]
    Ordinary,
    Out,
    Ref,
    Params,
}

impl ParameterKind {
    fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Ordinary => None,
            Self::Out => Some("out"),
            Self::Ref => Some("ref"),
            Self::Params => Some("params"),
        }
    }
}

/// A single method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    kind: ParameterKind,
    ty: String,
    name: String,
    default_value: Option<String>,
}

impl Parameter {
    /// Create an ordinary parameter.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            kind: ParameterKind::Ordinary,
            ty: require_name("parameter type", ty)?,
            name: require_name("parameter name", name)?,
            default_value: None,
        })
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// Set the passing mode.
    pub fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark as an `out` parameter.
    pub fn out(self) -> Self {
        self.with_kind(ParameterKind::Out)
    }

    /// Mark as a `ref` parameter.
    pub fn by_ref(self) -> Self {
        self.with_kind(ParameterKind::Ref)
    }

    /// Mark as a `params` array parameter.
    pub fn params(self) -> Self {
        self.with_kind(ParameterKind::Params)
    }

    /// Set the default value; string-typed values are quoted as needed.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// The signature fragment, with the extension-method marker when this is
    /// the receiver of an extension method.
    pub(crate) fn signature(&self, extension_receiver: bool) -> String {
        let mut out = String::new();
        if extension_receiver {
            out.push_str("this ");
        }
        if let Some(keyword) = self.kind.keyword() {
            out.push_str(keyword);
            out.push(' ');
        }
        out.push_str(&self.ty);
        out.push(' ');
        out.push_str(&self.name);
        if let Some(value) = &self.default_value {
            if let Some(rendered) = format_value(&CSHARP, &self.ty, value) {
                out.push_str(" = ");
                out.push_str(&rendered);
            }
        }
        out
    }
}

impl Emit for Parameter {
    fn emit(&self, w: &mut SourceWriter) {
        w.raw(&self.signature(false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        assert!(Parameter::new("", "count").is_err());
        assert!(Parameter::new("int", " ").is_err());
        let param = Parameter::new("int", "count").unwrap();
        assert_eq!(param.name(), "count");
        assert_eq!(param.ty(), "int");
    }

    #[test]
    fn test_ordinary_signature() {
        let param = Parameter::new("int", "count").unwrap();
        assert_eq!(param.signature(false), "int count");
    }

    #[test]
    fn test_kind_keywords() {
        assert_eq!(
            Parameter::new("int", "count").unwrap().out().signature(false),
            "out int count"
        );
        assert_eq!(
            Parameter::new("int", "count")
                .unwrap()
                .by_ref()
                .signature(false),
            "ref int count"
        );
        assert_eq!(
            Parameter::new("int[]", "values")
                .unwrap()
                .params()
                .signature(false),
            "params int[] values"
        );
    }

    #[test]
    fn test_extension_receiver() {
        let param = Parameter::new("string", "source").unwrap();
        assert_eq!(param.signature(true), "this string source");
    }

    #[test]
    fn test_string_default_quoted() {
        let param = Parameter::new("string", "name")
            .unwrap()
            .with_default("none");
        assert_eq!(param.signature(false), "string name = \"none\"");
    }

    #[test]
    fn test_quoted_default_passes_through() {
        let param = Parameter::new("string", "name")
            .unwrap()
            .with_default("\"none\"");
        assert_eq!(param.signature(false), "string name = \"none\"");
    }

    #[test]
    fn test_non_string_empty_default_omitted() {
        let param = Parameter::new("int", "count").unwrap().with_default("");
        assert_eq!(param.signature(false), "int count");
    }
}
