//! Rule against promoting non-interactive elements with interactive roles.
//!
//! # Rationale
//!
//! `<div role="button">` announces as a button but brings none of a
//! button's behavior; assistive technology users are promised interaction
//! the element cannot deliver. Markup that natively carries the role (for
//! example `<input type="checkbox" role="checkbox">`) is redundant, not
//! wrong, and stays exempt.

use tpl_lint_core::a11y::is_semantic_role_element;
use tpl_lint_core::attributes::AttributeValue;
use tpl_lint_core::{RuleContext, Severity, Suggestion, Template, TemplateRule, Violation};

/// Rule code for no-noninteractive-element-to-interactive-role.
pub const CODE: &str = "TL008";

/// Rule name for no-noninteractive-element-to-interactive-role.
pub const NAME: &str = "no-noninteractive-element-to-interactive-role";

/// Forbids interactive roles on non-interactive DOM elements.
#[derive(Debug, Clone)]
pub struct NoNoninteractiveElementToInteractiveRole {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoNoninteractiveElementToInteractiveRole {
    fn default() -> Self {
        Self::new()
    }
}

impl NoNoninteractiveElementToInteractiveRole {
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

impl TemplateRule for NoNoninteractiveElementToInteractiveRole {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids interactive roles on non-interactive elements"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, template: &Template) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (_, element) in template.elements() {
            if !ctx.ontology.is_dom_element(&element.name) {
                continue;
            }

            // Dynamic role values are unknowable; only literal roles report.
            let Some(role) = element
                .attribute_value("role")
                .as_ref()
                .and_then(AttributeValue::as_str)
                .map(str::to_owned)
            else {
                continue;
            };
            if !ctx.ontology.is_interactive_role(&role) {
                continue;
            }

            if tpl_lint_core::a11y::is_interactive_element(ctx.ontology, element) {
                continue;
            }
            if is_semantic_role_element(ctx.ontology, element, &role) {
                continue;
            }

            let role_attr = element
                .bag_attribute("role")
                .map_or(element.start_span, |attr| attr.span());
            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location(role_attr),
                    format!(
                        "Non-interactive <{}> should not be given the interactive role '{role}'",
                        element.name
                    ),
                )
                .with_suggestion(Suggestion::new(
                    "Use an element that implements the role natively",
                )),
            );
        }

        violations
    }
}
