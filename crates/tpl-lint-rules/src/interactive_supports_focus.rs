//! Rule requiring focusability on elements given interactive behavior.
//!
//! # Rationale
//!
//! A `<div role="button" (click)="...">` looks and acts like a button but
//! can never receive keyboard focus without a `tabindex`. Natively
//! interactive elements are focusable by themselves and are exempt.

use tpl_lint_core::a11y::{
    is_content_editable, is_disabled_element, is_hidden_from_screen_reader,
    is_interactive_element, is_presentation_role, DynamicRolePolicy,
};
use tpl_lint_core::attributes::AttributeValue;
use tpl_lint_core::{
    AttributeRef, RuleContext, Severity, Suggestion, Template, TemplateRule, Violation,
};

/// Rule code for interactive-supports-focus.
pub const CODE: &str = "TL002";

/// Rule name for interactive-supports-focus.
pub const NAME: &str = "interactive-supports-focus";

/// Handler names that signal interactive behavior.
const INTERACTIVE_HANDLERS: &[&str] = &["click", "keyup", "keydown", "keypress"];

/// Requires `tabindex` on elements with interactive roles and handlers.
#[derive(Debug, Clone)]
pub struct InteractiveSupportsFocus {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for InteractiveSupportsFocus {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractiveSupportsFocus {
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

impl TemplateRule for InteractiveSupportsFocus {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires tabindex on elements with interactive roles and event handlers"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, template: &Template) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (id, element) in template.elements() {
            if !ctx.ontology.is_dom_element(&element.name) {
                continue;
            }

            let has_handler = element.outputs.iter().any(|o| {
                INTERACTIVE_HANDLERS.contains(&AttributeRef::Event(o).original_name())
            });
            if !has_handler {
                continue;
            }

            if is_disabled_element(element)
                || is_hidden_from_screen_reader(template, id)
                || is_presentation_role(element, DynamicRolePolicy::Conservative)
            {
                continue;
            }

            // Natively interactive elements are focusable on their own.
            if is_interactive_element(ctx.ontology, element) {
                continue;
            }

            let has_interactive_role = element
                .attribute_value("role")
                .as_ref()
                .and_then(AttributeValue::as_str)
                .is_some_and(|role| ctx.ontology.is_interactive_role(role));
            if !has_interactive_role && !is_content_editable(element) {
                continue;
            }

            // Any tabindex counts, a dynamic binding included.
            if element.has_bag_attribute("tabindex") {
                continue;
            }

            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location(element.start_span),
                    format!(
                        "<{}> has interactive behavior but cannot receive focus",
                        element.name
                    ),
                )
                .with_suggestion(Suggestion::new(
                    "Add tabindex=\"0\", or use a natively focusable element",
                )),
            );
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
        InteractiveSupportsFocus::new().check(&ctx, &template)
    }

    #[test]
    fn test_role_button_div_needs_tabindex() {
        let violations = check(r#"<div role="button" (click)="go()"></div>"#);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
    }

    #[test]
    fn test_tabindex_satisfies() {
        assert!(check(r#"<div role="button" tabindex="0" (click)="go()"></div>"#).is_empty());
        // dynamic tabindex counts as present
        assert!(check(r#"<div role="button" [tabindex]="idx" (click)="go()"></div>"#).is_empty());
    }

    #[test]
    fn test_native_button_is_exempt() {
        assert!(check(r#"<button (click)="go()"></button>"#).is_empty());
    }

    #[test]
    fn test_non_interactive_role_is_out_of_scope() {
        assert!(check(r#"<div role="article" (click)="go()"></div>"#).is_empty());
    }

    #[test]
    fn test_contenteditable_counts_as_interactive() {
        let violations = check(r#"<div contenteditable (keydown)="edit()"></div>"#);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_disabled_and_hidden_are_exempt() {
        assert!(check(r#"<div role="button" disabled (click)="go()"></div>"#).is_empty());
        assert!(check(r#"<div role="button" hidden (click)="go()"></div>"#).is_empty());
    }

    #[test]
    fn test_handlerless_elements_are_out_of_scope() {
        assert!(check(r#"<div role="button"></div>"#).is_empty());
    }

    #[test]
    fn test_dynamic_role_is_conservative() {
        // dynamic role is not provably interactive; no report
        assert!(check(r#"<div [attr.role]="r" (click)="go()"></div>"#).is_empty());
    }
}
