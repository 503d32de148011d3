//! Host-pipeline glue: per-compilation settings and output naming.

use sharpgen_core::{Language, LanguageSpec};

use crate::error::{Error, Result};
use crate::model::CompilationUnit;

/// Identity stamped into generated-code attributes and banners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    /// Create an attribution for an arbitrary tool.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for ToolInfo {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

/// Settings a host supplies once per compilation.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    language: Language,
    spec: &'static LanguageSpec,
    language_version: Option<String>,
    nullable: bool,
    tool: ToolInfo,
}

impl GeneratorOptions {
    /// Create options for the given output language.
    pub fn new(language: Language) -> Result<Self> {
        let spec = language
            .spec()
            .ok_or(Error::UnsupportedLanguage(language))?;
        Ok(Self {
            language,
            spec,
            language_version: None,
            nullable: false,
            tool: ToolInfo::default(),
        })
    }

    /// Options for C#, the supported output language.
    pub fn csharp() -> Self {
        Self {
            language: Language::CSharp,
            spec: &sharpgen_core::CSHARP,
            language_version: None,
            nullable: false,
            tool: ToolInfo::default(),
        }
    }

    /// The output language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Pin a language version the host compiles against.
    pub fn with_language_version(mut self, version: impl Into<String>) -> Self {
        self.language_version = Some(version.into());
        self
    }

    /// The pinned language version, if any.
    pub fn language_version(&self) -> Option<&str> {
        self.language_version.as_deref()
    }

    /// Enable or disable the nullable context in emitted files.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Override the tool attribution.
    pub fn with_tool(mut self, tool: ToolInfo) -> Self {
        self.tool = tool;
        self
    }

    /// The tool attribution.
    pub fn tool(&self) -> &ToolInfo {
        &self.tool
    }

    /// Create a compilation unit pre-configured with these settings.
    pub fn compilation_unit(&self, name: impl Into<String>) -> Result<CompilationUnit> {
        let mut unit = CompilationUnit::new(name)?.with_nullable(self.nullable);
        unit.mark_generated(self.tool.clone());
        Ok(unit)
    }

    /// Derive the output file name for a compilation, appending the
    /// generated-source extension without doubling any part of it.
    pub fn hint_name(&self, name: &str) -> String {
        let generated = self.spec.generated_extension;
        if name.ends_with(generated) {
            return name.to_string();
        }
        if let Some(stem) = name.strip_suffix(self.spec.source_extension) {
            return format!("{stem}{generated}");
        }
        if let Some(marker) = generated.strip_suffix(self.spec.source_extension) {
            if name.ends_with(marker) {
                return format!("{name}{}", self.spec.source_extension);
            }
        }
        format!("{name}{generated}")
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::csharp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_basic_is_unsupported() {
        let err = GeneratorOptions::new(Language::VisualBasic).unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_csharp_is_supported() {
        let options = GeneratorOptions::new(Language::CSharp).unwrap();
        assert_eq!(options.language(), Language::CSharp);
    }

    #[test]
    fn test_default_tool_is_this_crate() {
        let tool = ToolInfo::default();
        assert_eq!(tool.name, env!("CARGO_PKG_NAME"));
        assert_eq!(tool.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_hint_name_plain() {
        let options = GeneratorOptions::csharp();
        assert_eq!(options.hint_name("Widgets"), "Widgets.g.cs");
    }

    #[test]
    fn test_hint_name_never_doubles_suffixes() {
        let options = GeneratorOptions::csharp();
        assert_eq!(options.hint_name("Widgets.g.cs"), "Widgets.g.cs");
        assert_eq!(options.hint_name("Widgets.cs"), "Widgets.g.cs");
        assert_eq!(options.hint_name("Widgets.g"), "Widgets.g.cs");
    }

    #[test]
    fn test_compilation_unit_carries_settings() {
        let options = GeneratorOptions::csharp()
            .nullable(true)
            .with_tool(ToolInfo::new("gentool", "2.0.0"));
        let unit = options.compilation_unit("Widgets").unwrap();
        let out = unit.render();
        assert!(out.contains("#nullable enable"));
        assert!(out.contains("generated by gentool 2.0.0"));
    }

    #[test]
    fn test_compilation_unit_rejects_blank_name() {
        let options = GeneratorOptions::csharp();
        assert!(options.compilation_unit("  ").is_err());
    }
}
