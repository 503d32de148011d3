//! Attribute descriptors.

use crate::error::Result;
use crate::model::require_name;
use crate::writer::{Emit, SourceWriter};

/// A constructor argument of an attribute, optionally passed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeArgument {
    /// Parameter name for `name: value` style, or `None` for positional.
    pub name: Option<String>,
    /// The rendered argument value, verbatim.
    pub value: String,
}

/// An attribute applied to a type or member, e.g. `[Obsolete("reason")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    arguments: Vec<AttributeArgument>,
    properties: Vec<(String, String)>,
}

impl Attribute {
    /// Create an attribute with the given name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: require_name("attribute name", name)?,
            arguments: Vec::new(),
            properties: Vec::new(),
        })
    }

    /// The attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a positional constructor argument.
    pub fn with_argument(mut self, value: impl Into<String>) -> Self {
        self.arguments.push(AttributeArgument {
            name: None,
            value: value.into(),
        });
        self
    }

    /// Add a named constructor argument (`name: value`).
    pub fn with_named_argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.arguments.push(AttributeArgument {
            name: Some(name.into()),
            value: value.into(),
        });
        self
    }

    /// Add a named property assignment (`Name = Value`).
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    /// The bracketed attribute text, e.g. `[Obsolete("reason", error: true)]`.
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = self
            .arguments
            .iter()
            .map(|arg| match &arg.name {
                Some(name) => format!("{}: {}", name, arg.value),
                None => arg.value.clone(),
            })
            .collect();
        parts.extend(
            self.properties
                .iter()
                .map(|(name, value)| format!("{name} = {value}")),
        );
        if parts.is_empty() {
            format!("[{}]", self.name)
        } else {
            format!("[{}({})]", self.name, parts.join(", "))
        }
    }
}

impl Emit for Attribute {
    fn emit(&self, w: &mut SourceWriter) {
        w.line(&self.render());
    }
}
