//! Rule validating `aria-*` attribute names and values.
//!
//! # Rationale
//!
//! A misspelled `aria-labeledby` or an `aria-hidden="yes"` is silently
//! ignored by assistive technology; the markup looks accessible and is
//! not. Names are checked against the attribute table, literal values
//! against the attribute's value typing. Dynamic bindings pass: the value
//! is unknowable at lint time.

use tpl_lint_core::attributes::AttributeValue;
use tpl_lint_core::{RuleContext, Severity, Suggestion, Template, TemplateRule, Violation};

/// Rule code for valid-aria.
pub const CODE: &str = "TL010";

/// Rule name for valid-aria.
pub const NAME: &str = "valid-aria";

/// Validates `aria-*` attribute names and literal values.
#[derive(Debug, Clone)]
pub struct ValidAria {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ValidAria {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidAria {
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

impl TemplateRule for ValidAria {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Validates aria-* attribute names and values"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, template: &Template) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (_, element) in template.elements() {
            for attr in element.attribute_bag() {
                let name = attr.original_name();
                if !name.starts_with("aria-") {
                    continue;
                }

                let Some(definition) = ctx.ontology.aria_property(name) else {
                    violations.push(
                        Violation::new(
                            CODE,
                            NAME,
                            self.severity,
                            ctx.location(attr.key_span()),
                            format!("'{name}' is not a valid aria attribute"),
                        )
                        .with_suggestion(Suggestion::new(
                            "Check the spelling against the WAI-ARIA attribute list",
                        )),
                    );
                    continue;
                };

                let Some(value) = attr.resolved_value() else {
                    continue;
                };
                let valid = match &value {
                    AttributeValue::Dynamic => true,
                    AttributeValue::Literal(literal) => definition.accepts_literal(literal),
                };
                if valid {
                    continue;
                }

                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        ctx.location(attr.span()),
                        format!("Invalid value for '{name}'"),
                    )
                    .with_suggestion(Suggestion::new(format!(
                        "Use a value matching the {:?} typing of '{name}'",
                        definition.value_type
                    ))),
                );
            }
        }

        violations
    }
}
