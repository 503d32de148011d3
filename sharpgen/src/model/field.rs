//! Field descriptors.

use sharpgen_core::CSHARP;

use crate::docs::DocComment;
use crate::error::Result;
use crate::literal::format_value;
use crate::model::{Access, require_name};
use crate::writer::{Emit, SourceWriter};

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    ty: String,
    name: String,
    access: Access,
    initial_value: Option<String>,
    doc: DocComment,
}

impl Field {
    /// Create a private field.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            ty: require_name("field type", ty)?,
            name: require_name("field name", name)?,
            access: Access::Private,
            initial_value: None,
            doc: DocComment::new(),
        })
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the field.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = require_name("field name", name)?;
        Ok(())
    }

    /// The declared type.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// Change the declared type.
    pub fn set_ty(&mut self, ty: impl Into<String>) -> Result<()> {
        self.ty = require_name("field type", ty)?;
        Ok(())
    }

    /// Set the access level.
    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Set the initial value; string-typed values are quoted as needed.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    /// Set the documentation summary.
    pub fn with_doc(mut self, text: impl Into<String>) -> Self {
        self.doc.set_summary(text);
        self
    }
}

impl Emit for Field {
    fn emit(&self, w: &mut SourceWriter) {
        self.doc.emit(w);
        let mut line = format!("{} {} {}", self.access.keyword(), self.ty, self.name);
        if let Some(value) = &self.initial_value {
            if let Some(rendered) = format_value(&CSHARP, &self.ty, value) {
                line.push_str(" = ");
                line.push_str(&rendered);
            }
        }
        line.push(';');
        w.line(&line);
    }
}
