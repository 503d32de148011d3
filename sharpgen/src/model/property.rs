//! Property descriptors and the accessor state machine.

use sharpgen_core::CSHARP;

use crate::docs::DocComment;
use crate::error::Result;
use crate::lines::CodeLines;
use crate::literal::format_value;
use crate::model::{Access, Attribute, require_name};
use crate::writer::{Emit, SourceWriter};

/// State of one property accessor.
///
/// `Auto` renders as a compiler-synthesized accessor; appending body lines
/// transitions to `Extended`, which forces the whole property into the
/// backing-field form. Disabling an accessor discards any body it had;
/// re-enabling restores `Auto`, not the old body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Accessor {
    Disabled,
    #[default]
    Auto,
    Extended(CodeLines),
}

impl Accessor {
    /// Whether the accessor participates in the property at all.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Whether the accessor carries an explicit body.
    pub fn is_extended(&self) -> bool {
        matches!(self, Self::Extended(_))
    }

    /// The explicit body, if any.
    pub fn body(&self) -> Option<&CodeLines> {
        match self {
            Self::Extended(body) => Some(body),
            _ => None,
        }
    }

    /// Mutable access to the body, transitioning to `Extended` as needed.
    pub fn body_mut(&mut self) -> &mut CodeLines {
        if !self.is_extended() {
            *self = Self::Extended(CodeLines::new());
        }
        match self {
            Self::Extended(body) => body,
            _ => unreachable!("accessor was just made extended"),
        }
    }

    fn enable(&mut self) {
        if matches!(self, Self::Disabled) {
            *self = Self::Auto;
        }
    }
}

/// A property declaration.
///
/// Starts as a single-line auto-property. A non-empty accessor body or an
/// explicit backing-field name switches rendering to the extended form, in
/// which the owning class also synthesizes the backing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    ty: String,
    name: String,
    access: Access,
    is_static: bool,
    getter: Accessor,
    setter: Accessor,
    backing_field: Option<String>,
    initial_value: Option<String>,
    required: bool,
    attributes: Vec<Attribute>,
    doc: DocComment,
}

impl Property {
    /// Create a public auto-property with getter and setter.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            ty: require_name("property type", ty)?,
            name: require_name("property name", name)?,
            access: Access::Public,
            is_static: false,
            getter: Accessor::Auto,
            setter: Accessor::Auto,
            backing_field: None,
            initial_value: None,
            required: false,
            attributes: Vec::new(),
            doc: DocComment::new(),
        })
    }

    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the property; the computed backing-field name follows.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = require_name("property name", name)?;
        Ok(())
    }

    /// The declared type.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// Change the declared type.
    pub fn set_ty(&mut self, ty: impl Into<String>) -> Result<()> {
        self.ty = require_name("property type", ty)?;
        Ok(())
    }

    /// Set the access level.
    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Mark the property `static`.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Enable or disable the getter; disabling discards its body.
    pub fn with_getter(mut self, enabled: bool) -> Self {
        if enabled {
            self.getter.enable();
        } else {
            self.getter = Accessor::Disabled;
        }
        self
    }

    /// Enable or disable the setter; disabling discards its body.
    pub fn with_setter(mut self, enabled: bool) -> Self {
        if enabled {
            self.setter.enable();
        } else {
            self.setter = Accessor::Disabled;
        }
        self
    }

    /// Whether the property has a getter.
    pub fn has_getter(&self) -> bool {
        self.getter.is_enabled()
    }

    /// Whether the property has a setter.
    pub fn has_setter(&self) -> bool {
        self.setter.is_enabled()
    }

    /// The getter state.
    pub fn getter(&self) -> &Accessor {
        &self.getter
    }

    /// The setter state.
    pub fn setter(&self) -> &Accessor {
        &self.setter
    }

    /// Mutable getter body; switches the property to the extended form.
    pub fn getter_body(&mut self) -> &mut CodeLines {
        self.getter.body_mut()
    }

    /// Mutable setter body; switches the property to the extended form.
    pub fn setter_body(&mut self) -> &mut CodeLines {
        self.setter.body_mut()
    }

    /// Append getter body text.
    pub fn with_getter_body(mut self, text: impl AsRef<str>) -> Self {
        self.getter_body().push(text);
        self
    }

    /// Append setter body text.
    pub fn with_setter_body(mut self, text: impl AsRef<str>) -> Self {
        self.setter_body().push(text);
        self
    }

    /// Override the backing-field name; a blank value reverts to the
    /// computed default without leaving the extended form.
    pub fn set_backing_field(&mut self, name: impl AsRef<str>) {
        let name = name.as_ref().trim();
        self.backing_field = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
    }

    /// Override the backing-field name (fluent form).
    pub fn with_backing_field(mut self, name: impl AsRef<str>) -> Self {
        self.set_backing_field(name);
        self
    }

    /// The backing-field name: the explicit override, or `_name` derived
    /// from the property name.
    pub fn backing_field_name(&self) -> String {
        match &self.backing_field {
            Some(name) => name.clone(),
            None => {
                let mut chars = self.name.chars();
                let mut derived = String::with_capacity(self.name.len() + 1);
                derived.push('_');
                if let Some(first) = chars.next() {
                    derived.extend(first.to_lowercase());
                }
                derived.extend(chars);
                derived
            }
        }
    }

    /// Set the initial value; string-typed values are quoted as needed.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    /// Mark the property `required`.
    pub fn required(mut self) -> Self {
        self.required = true;
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

    /// Document with a single inherit marker.
    pub fn inherit_doc(mut self) -> Self {
        self.doc.set_inherit(true);
        self
    }

    /// Whether the extended (backing-field) form is in effect.
    pub fn is_extended(&self) -> bool {
        self.getter.is_extended() || self.setter.is_extended() || self.backing_field.is_some()
    }

    /// Whether the owning class must synthesize a backing field.
    pub(crate) fn needs_backing_field(&self) -> bool {
        self.is_extended()
    }

    /// The formatted initial value, if one renders.
    pub(crate) fn rendered_value(&self) -> Option<String> {
        self.initial_value
            .as_deref()
            .and_then(|value| format_value(&CSHARP, &self.ty, value))
    }

    fn header(&self) -> String {
        let mut out = String::from(self.access.keyword());
        out.push(' ');
        if self.is_static {
            out.push_str("static ");
        }
        if self.required {
            out.push_str("required ");
        }
        out.push_str(&self.ty);
        out.push(' ');
        out.push_str(&self.name);
        out
    }

    fn emit_auto(&self, w: &mut SourceWriter, has_getter: bool, has_setter: bool) {
        let mut accessors = String::from("{ ");
        if has_getter {
            accessors.push_str("get; ");
        }
        if has_setter {
            accessors.push_str("set; ");
        }
        accessors.push('}');

        let mut line = format!("{} {}", self.header(), accessors);
        if let Some(value) = self.rendered_value() {
            line.push_str(&format!(" = {value};"));
        }
        w.line(&line);
    }

    fn emit_extended(&self, w: &mut SourceWriter, has_getter: bool, has_setter: bool) {
        let field = self.backing_field_name();
        w.line(&self.header());
        w.line("{");
        w.indent();
        if has_getter {
            w.line("get");
            w.line("{");
            w.indent();
            match self.getter.body() {
                Some(body) if !body.is_empty() => body.emit(w),
                _ => {
                    w.line(&format!("return this.{field};"));
                }
            }
            w.dedent();
            w.line("}");
        }
        if has_setter {
            w.line("set");
            w.line("{");
            w.indent();
            match self.setter.body() {
                Some(body) if !body.is_empty() => body.emit(w),
                _ => {
                    w.line(&format!("if (this.{field} != value)"));
                    w.line("{");
                    w.indent();
                    w.line(&format!("this.{field} = value;"));
                    w.dedent();
                    w.line("}");
                }
            }
            w.dedent();
            w.line("}");
        }
        w.dedent();
        w.line("}");
    }
}

impl Emit for Property {
    fn emit(&self, w: &mut SourceWriter) {
        self.doc.emit(w);
        for attribute in &self.attributes {
            attribute.emit(w);
        }

        // A property with neither accessor is meaningless; render both as
        // auto in that case.
        let both_disabled = !self.has_getter() && !self.has_setter();
        let has_getter = self.has_getter() || both_disabled;
        let has_setter = self.has_setter() || both_disabled;

        if self.is_extended() {
            self.emit_extended(w, has_getter, has_setter);
        } else {
            self.emit_auto(w, has_getter, has_setter);
        }
    }
}
