//! Context types for rule execution.

use crate::config::RuleConfig;
use crate::ontology::Ontology;
use crate::template::Span;
use crate::types::Location;
use std::path::{Path, PathBuf};

/// Context for one analyzed file.
///
/// Owns the line index so byte spans from templates and decorator metadata
/// convert to 1-indexed line/column locations without rescanning the file
/// per violation.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    /// Byte offsets of line starts, first entry always 0.
    line_starts: Vec<usize>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        Self {
            path,
            content,
            relative_path,
            line_starts: line_starts(content),
        }
    }

    /// Line and column (both 1-indexed) for a byte offset.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        let line_start = self.line_starts[line_idx];
        let column = self.content[line_start..offset.min(self.content.len())]
            .chars()
            .count();
        (line_idx + 1, column + 1)
    }

    /// Location for a byte span, relative path and line/column filled in.
    #[must_use]
    pub fn location(&self, span: Span) -> Location {
        let (line, column) = self.line_col(span.start);
        Location::new(self.relative_path.clone(), line, column).with_span(span.start, span.len())
    }
}

fn line_starts(content: &str) -> Vec<usize> {
    let mut starts = vec![0];
    starts.extend(
        content
            .bytes()
            .enumerate()
            .filter(|(_, b)| *b == b'\n')
            .map(|(i, _)| i + 1),
    );
    starts
}

/// Context handed to rules: the file being checked, the shared ontology and
/// the rule's own configuration section (when the config file has one).
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// File under analysis.
    pub file: &'a FileContext<'a>,
    /// Shared accessibility ontology.
    pub ontology: &'a Ontology,
    /// This rule's `[rules.<name>]` options, if configured.
    pub options: Option<&'a RuleConfig>,
}

impl<'a> RuleContext<'a> {
    /// Creates a context without rule options.
    #[must_use]
    pub fn new(file: &'a FileContext<'a>, ontology: &'a Ontology) -> Self {
        Self {
            file,
            ontology,
            options: None,
        }
    }

    /// Attaches the rule's configuration section.
    #[must_use]
    pub fn with_options(mut self, options: Option<&'a RuleConfig>) -> Self {
        self.options = options;
        self
    }

    /// Location for a byte span in the current file.
    #[must_use]
    pub fn location(&self, span: Span) -> Location {
        self.file.location(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_col_walks_lines() {
        let content = "line1\nline2\nline3";
        let ctx = FileContext::new(Path::new("/p/a.html"), content, Path::new("/p"));

        assert_eq!(ctx.line_col(0), (1, 1));
        assert_eq!(ctx.line_col(6), (2, 1));
        assert_eq!(ctx.line_col(8), (2, 3));
        assert_eq!(ctx.line_col(12), (3, 1));
    }

    #[test]
    fn line_col_counts_chars_not_bytes() {
        let content = "héllo\n<div>";
        let ctx = FileContext::new(Path::new("/p/a.html"), content, Path::new("/p"));
        // '<' is the first char of line 2
        assert_eq!(ctx.line_col(content.find('<').unwrap()), (2, 1));
    }

    #[test]
    fn location_is_root_relative() {
        let ctx = FileContext::new(
            Path::new("/project/src/app/app.component.html"),
            "<div></div>",
            Path::new("/project"),
        );
        let location = ctx.location(Span::new(0, 5));
        assert_eq!(
            location.file,
            PathBuf::from("src/app/app.component.html")
        );
        assert_eq!(location.line, 1);
        assert_eq!(location.offset, 0);
        assert_eq!(location.length, 5);
    }

    #[test]
    fn foreign_path_is_kept_verbatim() {
        let ctx = FileContext::new(Path::new("/elsewhere/a.html"), "", Path::new("/project"));
        assert_eq!(ctx.relative_path, PathBuf::from("/elsewhere/a.html"));
    }
}
