//! Compilation unit descriptors.

use sharpgen_core::{CSHARP, to_valid_namespace};

use crate::error::Result;
use crate::generator::ToolInfo;
use crate::model::{Class, require_name};
use crate::writer::{Emit, Indent, SourceWriter};

/// The root of an emitted source file.
///
/// Owns the classes it renders and the file-level concerns around them: the
/// auto-generated banner, the nullable-context wrapper, and the optional
/// namespace block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    name: String,
    namespace: Option<String>,
    nullable: bool,
    generated: bool,
    tool: Option<ToolInfo>,
    classes: Vec<Class>,
}

impl CompilationUnit {
    /// Create a compilation unit.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: require_name("compilation name", name)?,
            namespace: None,
            nullable: false,
            generated: false,
            tool: None,
            classes: Vec::new(),
        })
    }

    /// The compilation name, used for hint-name derivation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the compilation unit.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = require_name("compilation name", name)?;
        Ok(())
    }

    /// Set the namespace, sanitizing it into a valid dotted path. Blank
    /// segments are skipped; a wholly blank value removes the namespace.
    pub fn set_namespace(&mut self, namespace: impl AsRef<str>) {
        let joined = namespace
            .as_ref()
            .split(CSHARP.namespace_separator)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(&CSHARP.namespace_separator.to_string());
        self.namespace = to_valid_namespace(&CSHARP, &joined);
    }

    /// Set the namespace (fluent form).
    pub fn with_namespace(mut self, namespace: impl AsRef<str>) -> Self {
        self.set_namespace(namespace);
        self
    }

    /// The sanitized namespace, if one is set.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Enable or disable the `#nullable` context wrapper.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Mark the output as generated code: adds the auto-generated banner and
    /// stamps every class with a generated-code attribute naming the tool.
    pub fn mark_generated(&mut self, tool: ToolInfo) {
        self.generated = true;
        self.tool = Some(tool);
    }

    /// Mark the output as generated code (fluent form).
    pub fn generated(mut self, tool: ToolInfo) -> Self {
        self.mark_generated(tool);
        self
    }

    /// Add a class.
    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    /// Add a class (mutable form).
    pub fn add_class(&mut self, class: Class) {
        self.classes.push(class);
    }

    /// Render the complete source file.
    pub fn render(&self) -> String {
        let mut w = SourceWriter::new(Indent::CSHARP);
        self.emit(&mut w);
        w.into_string()
    }
}

impl Emit for CompilationUnit {
    fn emit(&self, w: &mut SourceWriter) {
        if let Some(tool) = &self.tool {
            w.set_attribution(tool.clone());
        }

        let mut wrote_header = false;
        if self.generated {
            w.line("// <auto-generated>");
            if let Some(tool) = &self.tool {
                w.line(&format!(
                    "// This code was generated by {} {}.",
                    tool.name, tool.version
                ));
            }
            w.line("// Changes to this file may be lost when the code is regenerated.");
            w.line("// </auto-generated>");
            wrote_header = true;
        }
        if self.nullable {
            w.line("#nullable enable");
            wrote_header = true;
        }
        if wrote_header && !self.classes.is_empty() {
            w.blank();
        }

        let emit_classes = |w: &mut SourceWriter| {
            for (index, class) in self.classes.iter().enumerate() {
                if index > 0 {
                    w.blank();
                }
                class.emit(w);
            }
        };

        match &self.namespace {
            Some(namespace) => {
                w.line(&format!("namespace {namespace}"));
                w.line("{");
                w.indent();
                emit_classes(w);
                w.dedent();
                w.line("}");
            }
            None => emit_classes(w),
        }

        if self.nullable {
            w.blank();
            w.line("#nullable restore");
        }
    }
}
