//! Rule to forbid positive `tabindex` values.
//!
//! # Rationale
//!
//! A positive tabindex overrides the natural tab order and creates focus
//! traps that are hard to maintain; `0` and `-1` cover every legitimate
//! need.

use tpl_lint_core::{RuleContext, Severity, Suggestion, Template, TemplateRule, Violation};

/// Rule code for no-positive-tabindex.
pub const CODE: &str = "TL007";

/// Rule name for no-positive-tabindex.
pub const NAME: &str = "no-positive-tabindex";

/// Forbids `tabindex` values greater than zero.
#[derive(Debug, Clone)]
pub struct NoPositiveTabindex {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoPositiveTabindex {
    fn default() -> Self {
        Self::new()
    }
}

impl NoPositiveTabindex {
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

impl TemplateRule for NoPositiveTabindex {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids tabindex values greater than zero"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, template: &Template) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (_, element) in template.elements() {
            for attr in element.attribute_bag() {
                if attr.original_name() != "tabindex" {
                    continue;
                }
                // Dynamic values are unknowable; literal strings and numbers
                // both parse through as_int.
                let positive = attr
                    .resolved_value()
                    .and_then(|value| value.as_int())
                    .is_some_and(|index| index > 0);
                if !positive {
                    continue;
                }
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        ctx.location(attr.span()),
                        "tabindex greater than zero breaks the natural tab order",
                    )
                    .with_suggestion(Suggestion::new(
                        "Use tabindex=\"0\" to join the tab order or tabindex=\"-1\" to leave it",
                    )),
                );
            }
        }

        violations
    }
}
