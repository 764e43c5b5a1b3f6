//! Rule pairing mouse-hover events with their keyboard-focus equivalents.
//!
//! # Rationale
//!
//! Functionality revealed on `mouseover`/`mouseout` is unreachable for
//! keyboard users unless the element also reacts to `focus`/`blur`.

use tpl_lint_core::{RuleContext, Severity, Suggestion, Template, TemplateRule, Violation};

/// Rule code for mouse-events-have-key-events.
pub const CODE: &str = "TL003";

/// Rule name for mouse-events-have-key-events.
pub const NAME: &str = "mouse-events-have-key-events";

/// Requires `focus` with `mouseover` and `blur` with `mouseout`.
#[derive(Debug, Clone)]
pub struct MouseEventsHaveKeyEvents {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MouseEventsHaveKeyEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseEventsHaveKeyEvents {
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

/// Mouse event and the keyboard event that must accompany it.
const PAIRS: &[(&str, &str)] = &[("mouseover", "focus"), ("mouseout", "blur")];

impl TemplateRule for MouseEventsHaveKeyEvents {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires focus/blur alongside mouseover/mouseout"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, template: &Template) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (_, element) in template.elements() {
            let outputs: Vec<_> = element
                .outputs
                .iter()
                .map(|o| (tpl_lint_core::AttributeRef::Event(o).original_name(), o))
                .collect();

            for (mouse, key) in PAIRS {
                let Some((_, output)) = outputs.iter().find(|(name, _)| name == mouse) else {
                    continue;
                };
                if outputs.iter().any(|(name, _)| name == key) {
                    continue;
                }
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        ctx.location(output.span),
                        format!("({mouse}) must be accompanied by ({key}) for keyboard users"),
                    )
                    .with_suggestion(Suggestion::new(format!(
                        "Add a ({key}) handler mirroring the ({mouse}) behavior"
                    ))),
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
        MouseEventsHaveKeyEvents::new().check(&ctx, &template)
    }

    #[test]
    fn test_mouseover_without_focus() {
        let violations = check(r#"<div (mouseover)="show()"></div>"#);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("focus"));
    }

    #[test]
    fn test_mouseout_without_blur() {
        let violations = check(r#"<div (mouseout)="hide()"></div>"#);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("blur"));
    }

    #[test]
    fn test_paired_handlers_pass() {
        let violations = check(
            r#"<div (mouseover)="show()" (focus)="show()" (mouseout)="hide()" (blur)="hide()"></div>"#,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_both_missing_reports_both() {
        let violations = check(r#"<div (mouseover)="s()" (mouseout)="h()"></div>"#);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_canonical_on_prefix_counts() {
        let violations = check(r#"<div on-mouseover="show()" on-focus="show()"></div>"#);
        assert!(violations.is_empty());
    }
}
