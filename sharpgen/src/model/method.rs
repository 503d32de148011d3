//! Method descriptors.

use sharpgen_core::CSHARP;

use crate::docs::DocComment;
use crate::error::{Error, Result};
use crate::lines::CodeLines;
use crate::model::{
    Access, Attribute, GenericParam, GenericParams, Parameter, emit_where_clauses,
    generic_arg_list, inline_where_clauses, require_name, typeparam_docs,
};
use crate::writer::{Emit, SourceWriter};

/// A method declaration.
///
/// Partial methods are a construction-time variant: they freeze the return
/// type and access level, render no access modifier, and emit a
/// semicolon-terminated signature when no body was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    access: Access,
    is_static: bool,
    is_extension: bool,
    is_partial: bool,
    explicit_async: Option<bool>,
    return_type: String,
    name: String,
    parameters: Vec<Parameter>,
    generics: GenericParams,
    body: CodeLines,
    attributes: Vec<Attribute>,
    doc: DocComment,
}

impl Method {
    /// Create a public `void` method.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            access: Access::Public,
            is_static: false,
            is_extension: false,
            is_partial: false,
            explicit_async: None,
            return_type: "void".to_string(),
            name: require_name("method name", name)?,
            parameters: Vec::new(),
            generics: GenericParams::default(),
            body: CodeLines::new(),
            attributes: Vec::new(),
            doc: DocComment::new(),
        })
    }

    /// Create a partial method with a frozen signature.
    pub fn partial(return_type: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let mut method = Self::new(name)?;
        method.return_type = normalize_return_type(return_type);
        method.is_partial = true;
        Ok(method)
    }

    /// The method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the method; async inference follows the new name unless the
    /// flag was set explicitly.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = require_name("method name", name)?;
        Ok(())
    }

    /// The return type.
    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    /// Change the return type; blank normalizes to `void`. Fails on partial
    /// methods, whose signature is frozen.
    pub fn set_return_type(&mut self, return_type: impl Into<String>) -> Result<()> {
        if self.is_partial {
            return Err(Error::PartialMethodFrozen {
                what: "return type",
            });
        }
        self.return_type = normalize_return_type(return_type);
        Ok(())
    }

    /// Set the return type (fluent form).
    pub fn returns(mut self, return_type: impl Into<String>) -> Result<Self> {
        self.set_return_type(return_type)?;
        Ok(self)
    }

    /// The access level.
    pub fn access(&self) -> Access {
        self.access
    }

    /// Change the access level. Fails on partial methods.
    pub fn set_access(&mut self, access: Access) -> Result<()> {
        if self.is_partial {
            return Err(Error::PartialMethodFrozen {
                what: "access level",
            });
        }
        self.access = access;
        Ok(())
    }

    /// Set the access level (fluent form).
    pub fn with_access(mut self, access: Access) -> Result<Self> {
        self.set_access(access)?;
        Ok(self)
    }

    /// Mark the method `static`.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark the method as an extension method (implies `static`; the first
    /// parameter becomes the receiver).
    pub fn extension(mut self) -> Self {
        self.is_extension = true;
        self.is_static = true;
        self
    }

    /// Explicitly set the async flag, overriding name-based inference in
    /// either direction, no matter when it is called.
    pub fn set_async(&mut self, is_async: bool) {
        self.explicit_async = Some(is_async);
    }

    /// Explicitly set the async flag (fluent form).
    pub fn with_async(mut self, is_async: bool) -> Self {
        self.set_async(is_async);
        self
    }

    /// Whether the method renders `async`: the explicit flag when one was
    /// ever assigned, otherwise inferred from the `Async` name suffix plus a
    /// `void`/task-family return type.
    pub fn is_async(&self) -> bool {
        match self.explicit_async {
            Some(explicit) => explicit,
            None => {
                self.name.ends_with(CSHARP.async_suffix)
                    && (self.return_type == "void"
                        || CSHARP
                            .async_return_types
                            .iter()
                            .any(|ty| self.return_type.starts_with(ty)))
            }
        }
    }

    /// Whether this is the partial variant.
    pub fn is_partial(&self) -> bool {
        self.is_partial
    }

    /// Append a parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add a generic type parameter.
    pub fn with_generic(mut self, name: impl Into<String>) -> Self {
        self.generics.entry(name.into()).or_default();
        self
    }

    /// Append a constraint to a generic type parameter, adding it if new.
    pub fn with_generic_constraint(
        mut self,
        name: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        self.generics
            .entry(name.into())
            .or_insert_with(GenericParam::default)
            .constraints
            .push(constraint.into());
        self
    }

    /// Set the documentation for a generic type parameter, adding it if new.
    pub fn with_generic_doc(mut self, name: impl Into<String>, doc: impl Into<String>) -> Self {
        self.generics.entry(name.into()).or_default().doc = Some(doc.into());
        self
    }

    /// Mutable access to the body lines.
    pub fn body(&mut self) -> &mut CodeLines {
        &mut self.body
    }

    /// Append body text (fluent form).
    pub fn with_body(mut self, text: impl AsRef<str>) -> Self {
        self.body.push(text);
        self
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set the documentation summary.
    pub fn with_doc(mut self, text: impl Into<String>) -> Self {
        self.doc.set_summary(text);
        self
    }

    /// Append a pre-tagged documentation line.
    pub fn with_doc_line(mut self, line: impl Into<String>) -> Self {
        self.doc.add_line(line);
        self
    }

    /// Document with a single inherit marker.
    pub fn inherit_doc(mut self) -> Self {
        self.doc.set_inherit(true);
        self
    }

    fn signature(&self) -> String {
        let mut out = String::new();
        if !self.is_partial {
            out.push_str(self.access.keyword());
            out.push(' ');
        }
        if self.is_static {
            out.push_str("static ");
        }
        if self.is_async() {
            out.push_str("async ");
        }
        if self.is_partial {
            out.push_str("partial ");
        }
        out.push_str(&self.return_type);
        out.push(' ');
        out.push_str(&self.name);
        out.push_str(&generic_arg_list(&self.generics));
        out.push('(');
        let params: Vec<String> = self
            .parameters
            .iter()
            .enumerate()
            .map(|(index, parameter)| parameter.signature(self.is_extension && index == 0))
            .collect();
        out.push_str(&params.join(", "));
        out.push(')');
        out
    }
}

fn normalize_return_type(return_type: impl Into<String>) -> String {
    let return_type = return_type.into();
    if return_type.trim().is_empty() {
        "void".to_string()
    } else {
        return_type
    }
}

impl Emit for Method {
    fn emit(&self, w: &mut SourceWriter) {
        self.doc
            .emit_with_typeparams(w, &typeparam_docs(&self.generics));
        for attribute in &self.attributes {
            attribute.emit(w);
        }

        if self.is_partial && self.body.is_empty() {
            // Declaration-only partials fold the constraints into one line
            // ahead of the terminating semicolon.
            let mut line = self.signature();
            line.push_str(&inline_where_clauses(&self.generics));
            line.push(';');
            w.line(&line);
            return;
        }

        w.line(&self.signature());
        emit_where_clauses(w, &self.generics);
        w.line("{");
        w.indent();
        self.body.emit(w);
        w.dedent();
        w.line("}");
    }
}
