//! Rule requiring the `aria-*` attributes a role mandates.
//!
//! # Rationale
//!
//! Some roles are incomplete without state: a `checkbox` must expose
//! `aria-checked`, a `slider` its value range. A role without its required
//! properties announces broken semantics.

use tpl_lint_core::attributes::AttributeValue;
use tpl_lint_core::{RuleContext, Severity, Suggestion, Template, TemplateRule, Violation};

/// Rule code for role-has-required-aria.
pub const CODE: &str = "TL009";

/// Rule name for role-has-required-aria.
pub const NAME: &str = "role-has-required-aria";

/// Requires role-mandated `aria-*` attributes to be present.
#[derive(Debug, Clone)]
pub struct RoleHasRequiredAria {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for RoleHasRequiredAria {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleHasRequiredAria {
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

impl TemplateRule for RoleHasRequiredAria {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the aria attributes mandated by an element's role"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, template: &Template) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (_, element) in template.elements() {
            let Some(role) = element
                .attribute_value("role")
                .as_ref()
                .and_then(AttributeValue::as_str)
                .map(str::to_owned)
            else {
                continue;
            };
            // Unknown roles have no definition to enforce; valid-aria owns
            // complaining about them.
            let Some(definition) = ctx.ontology.aria_role(&role) else {
                continue;
            };

            let missing: Vec<&str> = definition
                .required_properties
                .iter()
                .copied()
                .filter(|prop| !element.has_bag_attribute(prop))
                .collect();
            if missing.is_empty() {
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
                        "Role '{role}' requires the missing attribute(s): {}",
                        missing.join(", ")
                    ),
                )
                .with_suggestion(Suggestion::new(format!(
                    "Add {} to complete the role's semantics",
                    missing.join(" and ")
                ))),
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
        RoleHasRequiredAria::new().check(&ctx, &template)
    }

    #[test]
    fn test_checkbox_requires_aria_checked() {
        let violations = check(r#"<div role="checkbox"></div>"#);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("aria-checked"));
    }

    #[test]
    fn test_satisfied_requirement_passes() {
        assert!(check(r#"<div role="checkbox" aria-checked="false"></div>"#).is_empty());
        // a bound form satisfies presence too
        assert!(check(r#"<div role="checkbox" [attr.aria-checked]="state"></div>"#).is_empty());
    }

    #[test]
    fn test_heading_requires_level() {
        let violations = check(r#"<div role="heading"></div>"#);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("aria-level"));
    }

    #[test]
    fn test_unknown_role_is_skipped() {
        assert!(check(r#"<div role="sparkle"></div>"#).is_empty());
    }

    #[test]
    fn test_dynamic_role_is_skipped() {
        assert!(check(r#"<div [attr.role]="r"></div>"#).is_empty());
    }

    #[test]
    fn test_role_without_requirements_passes() {
        assert!(check(r#"<div role="article"></div>"#).is_empty());
    }
}
