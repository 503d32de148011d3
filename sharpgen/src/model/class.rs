//! Class descriptors.

use indexmap::IndexSet;

use crate::docs::DocComment;
use crate::error::Result;
use crate::lines::CodeLines;
use crate::model::{
    Access, Attribute, Field, GenericParam, GenericParams, Method, Property, emit_where_clauses,
    generic_arg_list, require_name, typeparam_docs,
};
use crate::writer::{Emit, SourceWriter};

/// A class declaration owning its members.
///
/// Members render in a fixed order: fields, backing fields synthesized for
/// extended properties, properties, methods, then manually injected trailing
/// lines, with one blank separator between non-empty groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    name: String,
    access: Access,
    base_type: Option<String>,
    interfaces: IndexSet<String>,
    generics: GenericParams,
    is_partial: bool,
    is_static: bool,
    is_sealed: bool,
    fields: Vec<Field>,
    properties: Vec<Property>,
    methods: Vec<Method>,
    extra_lines: CodeLines,
    attributes: Vec<Attribute>,
    doc: DocComment,
}

impl Class {
    /// Create a public class.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: require_name("class name", name)?,
            access: Access::Public,
            base_type: None,
            interfaces: IndexSet::new(),
            generics: GenericParams::default(),
            is_partial: false,
            is_static: false,
            is_sealed: false,
            fields: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            extra_lines: CodeLines::new(),
            attributes: Vec::new(),
            doc: DocComment::new(),
        })
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the class.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = require_name("class name", name)?;
        Ok(())
    }

    /// Set the access level.
    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Set the base type; a blank value normalizes to "no base type".
    pub fn with_base(mut self, base_type: impl AsRef<str>) -> Self {
        let base_type = base_type.as_ref().trim();
        self.base_type = if base_type.is_empty() {
            None
        } else {
            Some(base_type.to_string())
        };
        self
    }

    /// Add an implemented interface; blank names are silently ignored and
    /// duplicates collapse, preserving first-insertion order.
    pub fn with_interface(mut self, name: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim();
        if !name.is_empty() {
            self.interfaces.insert(name.to_string());
        }
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

    /// Mark the class `partial`.
    pub fn partial(mut self) -> Self {
        self.is_partial = true;
        self
    }

    /// Mark the class `static`.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark the class `sealed`.
    pub fn sealed(mut self) -> Self {
        self.is_sealed = true;
        self
    }

    /// Add a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a field (mutable form).
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Add a property.
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a property (mutable form).
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Add a method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Add a method (mutable form).
    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    /// Mutable access to the trailing free-form member lines.
    pub fn lines(&mut self) -> &mut CodeLines {
        &mut self.extra_lines
    }

    /// Append trailing free-form member text (fluent form).
    pub fn with_lines(mut self, text: impl AsRef<str>) -> Self {
        self.extra_lines.push(text);
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

    fn declaration(&self) -> String {
        let mut out = String::from(self.access.keyword());
        out.push(' ');
        if self.is_static {
            out.push_str("static ");
        }
        if self.is_sealed {
            out.push_str("sealed ");
        }
        if self.is_partial {
            out.push_str("partial ");
        }
        out.push_str("class ");
        out.push_str(&self.name);
        out.push_str(&generic_arg_list(&self.generics));

        let mut ancestry: Vec<&str> = Vec::new();
        if let Some(base_type) = &self.base_type {
            ancestry.push(base_type);
        }
        ancestry.extend(self.interfaces.iter().map(String::as_str));
        if !ancestry.is_empty() {
            out.push_str(" : ");
            out.push_str(&ancestry.join(", "));
        }
        out
    }

    /// Backing fields required by extended properties, minus the ones the
    /// caller already declared explicitly.
    fn synthesized_backing_fields(&self) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|property| property.needs_backing_field())
            .filter(|property| {
                let name = property.backing_field_name();
                !self.fields.iter().any(|field| field.name() == name)
            })
            .collect()
    }
}

impl Emit for Class {
    fn emit(&self, w: &mut SourceWriter) {
        self.doc
            .emit_with_typeparams(w, &typeparam_docs(&self.generics));
        if let Some(tool) = w.attribution().cloned() {
            w.line(&format!(
                "[global::System.CodeDom.Compiler.GeneratedCodeAttribute(\"{}\", \"{}\")]",
                tool.name, tool.version
            ));
        }
        for attribute in &self.attributes {
            attribute.emit(w);
        }
        w.line(&self.declaration());
        emit_where_clauses(w, &self.generics);
        w.line("{");
        w.indent();

        let mut separated = false;
        let separate = |w: &mut SourceWriter, separated: &mut bool| {
            if *separated {
                w.blank();
            }
            *separated = true;
        };

        if !self.fields.is_empty() {
            separate(w, &mut separated);
            for field in &self.fields {
                field.emit(w);
            }
        }

        let backing = self.synthesized_backing_fields();
        if !backing.is_empty() {
            separate(w, &mut separated);
            for property in backing {
                let mut line = format!(
                    "private {} {}",
                    property.ty(),
                    property.backing_field_name()
                );
                if let Some(value) = property.rendered_value() {
                    line.push_str(&format!(" = {value}"));
                }
                line.push(';');
                w.line(&line);
            }
        }

        for property in &self.properties {
            separate(w, &mut separated);
            property.emit(w);
        }

        for method in &self.methods {
            separate(w, &mut separated);
            method.emit(w);
        }

        if !self.extra_lines.is_empty() {
            separate(w, &mut separated);
            self.extra_lines.emit(w);
        }

        w.dedent();
        w.line("}");
    }
}
