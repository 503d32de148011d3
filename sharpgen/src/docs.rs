//! XML documentation-comment synthesis.

use crate::writer::SourceWriter;

/// Documentation attached to an entity.
///
/// Renders a `<summary>` block plus any caller-supplied extra tagged lines,
/// or a single `<inheritdoc />` line when inheriting. Generic-parameter tags
/// are supplied by the owning entity, which knows its parameter list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    summary: Option<String>,
    extra: Vec<String>,
    inherit: bool,
}

impl DocComment {
    /// Create an empty doc comment (renders nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the summary text; multi-line text becomes one comment line each.
    pub fn set_summary(&mut self, text: impl Into<String>) {
        self.summary = Some(text.into());
    }

    /// Append a pre-tagged extra line (e.g. `<remarks>...</remarks>`).
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.extra.push(line.into());
    }

    /// Replace the whole comment with a single inherit marker.
    pub fn set_inherit(&mut self, inherit: bool) {
        self.inherit = inherit;
    }

    /// Whether anything would be rendered.
    pub fn is_empty(&self) -> bool {
        !self.inherit && self.summary.is_none() && self.extra.is_empty()
    }

    /// Emit without generic-parameter tags.
    pub fn emit(&self, w: &mut SourceWriter) {
        self.emit_with_typeparams(w, &[]);
    }

    /// Emit with `<typeparam>` tags between the summary and the extra lines.
    pub(crate) fn emit_with_typeparams(&self, w: &mut SourceWriter, typeparams: &[(&str, &str)]) {
        if self.inherit {
            w.line("/// <inheritdoc />");
            return;
        }
        if let Some(summary) = &self.summary {
            w.line("/// <summary>");
            for line in summary.lines() {
                w.line(&format!("/// {line}"));
            }
            w.line("/// </summary>");
        }
        for (name, doc) in typeparams {
            w.line(&format!("/// <typeparam name=\"{name}\">{doc}</typeparam>"));
        }
        for line in &self.extra {
            w.line(&format!("/// {line}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::Indent;

    fn render(doc: &DocComment, typeparams: &[(&str, &str)]) -> String {
        let mut w = SourceWriter::new(Indent::CSHARP);
        doc.emit_with_typeparams(&mut w, typeparams);
        w.into_string()
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(render(&DocComment::new(), &[]), "");
        assert!(DocComment::new().is_empty());
    }

    #[test]
    fn test_summary_block() {
        let mut doc = DocComment::new();
        doc.set_summary("A widget.");
        assert_eq!(
            render(&doc, &[]),
            "/// <summary>\n/// A widget.\n/// </summary>\n"
        );
    }

    #[test]
    fn test_multi_line_summary() {
        let mut doc = DocComment::new();
        doc.set_summary("First.\nSecond.");
        assert_eq!(
            render(&doc, &[]),
            "/// <summary>\n/// First.\n/// Second.\n/// </summary>\n"
        );
    }

    #[test]
    fn test_typeparam_tags() {
        let mut doc = DocComment::new();
        doc.set_summary("Maps keys.");
        let out = render(&doc, &[("TKey", "The key type.")]);
        assert!(out.ends_with("/// <typeparam name=\"TKey\">The key type.</typeparam>\n"));
    }

    #[test]
    fn test_extra_lines_after_summary() {
        let mut doc = DocComment::new();
        doc.set_summary("A widget.");
        doc.add_line("<remarks>Generated.</remarks>");
        assert!(render(&doc, &[]).ends_with("/// <remarks>Generated.</remarks>\n"));
    }

    #[test]
    fn test_inherit_overrides_everything() {
        let mut doc = DocComment::new();
        doc.set_summary("Ignored.");
        doc.set_inherit(true);
        assert_eq!(render(&doc, &[("T", "Ignored too.")]), "/// <inheritdoc />\n");
    }
}
