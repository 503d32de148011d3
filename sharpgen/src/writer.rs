//! Indented text output.

/// Indentation unit applied once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the C# convention.
    pub const CSHARP: Self = Self::Spaces(4);

    /// The string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}

/// Accumulates generated source text with level-tracked indentation.
///
/// The padding for the current level is cached so nested emitters never
/// recompute it per line. Lines are terminated with `\n`; blank lines carry
/// no padding.
#[derive(Debug, Clone, Default)]
pub struct SourceWriter {
    buffer: String,
    level: usize,
    unit: Indent,
    padding: String,
    attribution: Option<crate::generator::ToolInfo>,
}

impl SourceWriter {
    /// Create a writer starting at level zero.
    pub fn new(unit: Indent) -> Self {
        Self {
            buffer: String::new(),
            level: 0,
            unit,
            padding: String::new(),
            attribution: None,
        }
    }

    /// Create a writer seeded at a non-zero starting level, for emitting a
    /// subtree that will be spliced into surrounding text.
    pub fn with_level(unit: Indent, level: usize) -> Self {
        let mut writer = Self::new(unit);
        writer.level = level;
        writer.refresh_padding();
        writer
    }

    /// Append one line at the current indentation.
    pub fn line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.buffer.push_str(&self.padding);
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Append a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Append raw text without indentation or newline.
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase the indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self.refresh_padding();
        self
    }

    /// Decrease the indentation level.
    pub fn dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self.refresh_padding();
        self
    }

    /// The current indentation level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Generated-code attribution carried through the traversal, when the
    /// compilation unit asked for its classes to be marked.
    pub fn attribution(&self) -> Option<&crate::generator::ToolInfo> {
        self.attribution.as_ref()
    }

    /// Set the attribution consulted by class emitters.
    pub fn set_attribution(&mut self, tool: crate::generator::ToolInfo) {
        self.attribution = Some(tool);
    }

    /// The buffer contents so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the generated text.
    pub fn into_string(self) -> String {
        self.buffer
    }

    fn refresh_padding(&mut self) {
        self.padding = self.unit.as_str().repeat(self.level);
    }
}

/// Capability implemented by every syntax entity that can render itself.
///
/// Emission is a depth-first pre-order walk: each entity appends its own text
/// and then its children's, adjusting the writer's level around nested
/// content.
pub trait Emit {
    /// Append this entity's source text to the writer.
    fn emit(&self, w: &mut SourceWriter);
}

impl<T: Emit + ?Sized> Emit for &T {
    fn emit(&self, w: &mut SourceWriter) {
        (*self).emit(w);
    }
}

impl<T: Emit + ?Sized> Emit for Box<T> {
    fn emit(&self, w: &mut SourceWriter) {
        self.as_ref().emit(w);
    }
}
