//! Rule pairing `click` handlers with keyboard handlers.
//!
//! # Rationale
//!
//! A `(click)` handler on a non-interactive element is mouse-only; keyboard
//! users need `keyup`, `keydown` or `keypress` to trigger the same action.
//! Natively interactive elements (buttons, links with href, inputs) fire
//! click from the keyboard already and are exempt, as are elements hidden
//! from assistive technology or marked presentational.

use tpl_lint_core::a11y::{
    is_hidden_from_screen_reader, is_interactive_element, is_presentation_role, DynamicRolePolicy,
};
use tpl_lint_core::{
    AttributeRef, RuleContext, Severity, Suggestion, Template, TemplateRule, Violation,
};

/// Rule code for click-events-have-key-events.
pub const CODE: &str = "TL001";

/// Rule name for click-events-have-key-events.
pub const NAME: &str = "click-events-have-key-events";

/// Requires a keyboard handler wherever a click handler is attached to a
/// non-interactive DOM element.
#[derive(Debug, Clone)]
pub struct ClickEventsHaveKeyEvents {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ClickEventsHaveKeyEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickEventsHaveKeyEvents {
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

fn is_key_event(name: &str) -> bool {
    for base in ["keyup", "keydown", "keypress"] {
        if name == base {
            return true;
        }
        // (keydown.enter) and friends count
        if name.starts_with(base) && name[base.len()..].starts_with('.') {
            return true;
        }
    }
    false
}

impl TemplateRule for ClickEventsHaveKeyEvents {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires key events alongside click events on non-interactive elements"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, template: &Template) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (id, element) in template.elements() {
            // Custom components receive (click) as an output binding, not a
            // DOM listener; only native elements are in scope.
            if !ctx.ontology.is_dom_element(&element.name) {
                continue;
            }

            let Some(click) = element
                .outputs
                .iter()
                .find(|o| AttributeRef::Event(o).original_name() == "click")
            else {
                continue;
            };

            let has_key_event = element
                .outputs
                .iter()
                .any(|o| is_key_event(AttributeRef::Event(o).original_name()));
            if has_key_event {
                continue;
            }

            if is_interactive_element(ctx.ontology, element)
                || is_presentation_role(element, DynamicRolePolicy::Permissive)
                || is_hidden_from_screen_reader(template, id)
            {
                continue;
            }

            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location(click.span),
                    "(click) must be accompanied by (keyup), (keydown) or (keypress)",
                )
                .with_suggestion(Suggestion::new(
                    "Add a keyboard handler, or use a natively interactive element like <button>",
                )),
            );
        }

        violations
    }
}
