//! Rule to forbid the `autofocus` attribute.
//!
//! # Rationale
//!
//! Autofocus steals focus on page load, which disorients screen reader and
//! keyboard users and scrolls the page unpredictably on small viewports.
//!
//! # Suppression
//!
//! - `<!-- tpl-lint: allow(no-autofocus) reason="..." -->` comment

use tpl_lint_core::{
    Replacement, RuleContext, Severity, Suggestion, Template, TemplateRule, Violation,
};

/// Rule code for no-autofocus.
pub const CODE: &str = "TL004";

/// Rule name for no-autofocus.
pub const NAME: &str = "no-autofocus";

/// Forbids the `autofocus` attribute in any of its binding forms.
#[derive(Debug, Clone)]
pub struct NoAutofocus {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoAutofocus {
    fn default() -> Self {
        Self::new()
    }
}

impl NoAutofocus {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl TemplateRule for NoAutofocus {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids the autofocus attribute"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, template: &Template) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (_, element) in template.elements() {
            for attr in element.attribute_bag() {
                if attr.original_name() != "autofocus" {
                    continue;
                }
                let location = ctx.location(attr.span());
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        location.clone(),
                        "autofocus steals focus on load; let users control focus",
                    )
                    .with_fix(Replacement::delete(location.clone()))
                    .with_suggestion(Suggestion::with_fix(
                        "Remove the autofocus attribute",
                        Replacement::delete(location),
                    )),
                );
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tpl_lint_core::{parse_template, FileContext, Ontology};

    fn check(source: &str) -> Vec<Violation> {
        let template = parse_template(source).expect("Failed to parse");
        let file = FileContext::new(Path::new("test.html"), source, Path::new("."));
        let ctx = RuleContext::new(&file, Ontology::global());
        NoAutofocus::new().check(&ctx, &template)
    }

    #[test]
    fn test_detects_static_autofocus() {
        let violations = check("<input autofocus>");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert!(violations[0].fix.is_some());
    }

    #[test]
    fn test_detects_bound_autofocus() {
        let violations = check(r#"<input [autofocus]="true">"#);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_detects_attr_namespace_form() {
        let violations = check(r#"<input [attr.autofocus]="cond">"#);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_ignores_other_attributes() {
        let violations = check(r#"<input type="text" [disabled]="x">"#);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_fix_deletes_the_attribute() {
        let source = "<input autofocus>";
        let violations = check(source);
        let fix = violations[0].fix.as_ref().unwrap();
        assert_eq!(fix.new_text, "");
        let span = &source[fix.location.offset..fix.location.offset + fix.location.length];
        assert_eq!(span, "autofocus");
    }
}
