//! Rule against naming outputs after native DOM events.
//!
//! # Rationale
//!
//! An output named `change` or `click` shadows the native event of the
//! same name: `(change)` on the host element now fires for both, and
//! listeners cannot tell them apart.

use tpl_lint_core::{
    DirectiveMetadata, DirectiveRule, RuleContext, Severity, Suggestion, Violation,
};

/// Rule code for no-output-native.
pub const CODE: &str = "TL013";

/// Rule name for no-output-native.
pub const NAME: &str = "no-output-native";

/// Forbids output names that collide with native DOM events.
#[derive(Debug, Clone)]
pub struct NoOutputNative {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoOutputNative {
    fn default() -> Self {
        Self::new()
    }
}

impl NoOutputNative {
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

impl DirectiveRule for NoOutputNative {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids output names that collide with native DOM events"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_directive(
        &self,
        ctx: &RuleContext<'_>,
        directive: &DirectiveMetadata,
    ) -> Vec<Violation> {
        directive
            .outputs
            .iter()
            .filter(|output| ctx.ontology.is_native_event(&output.name))
            .map(|output| {
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location(output.span),
                    format!("Output '{}' shadows a native DOM event", output.name),
                )
                .with_suggestion(Suggestion::new(
                    "Rename the output or alias it to a non-native name",
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tpl_lint_core::{extract_directives, FileContext, Ontology};

    fn check(source: &str) -> Vec<Violation> {
        let file = FileContext::new(Path::new("test.component.ts"), source, Path::new("."));
        let ctx = RuleContext::new(&file, Ontology::global());
        extract_directives(source)
            .iter()
            .flat_map(|d| NoOutputNative::new().check_directive(&ctx, d))
            .collect()
    }

    #[test]
    fn test_native_name_via_decorator() {
        let violations = check(
            "@Component({ selector: 'app-x' })\nexport class X {\n  @Output() change = new EventEmitter<void>();\n}\n",
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("change"));
    }

    #[test]
    fn test_native_name_via_alias() {
        let violations = check(
            "@Component({ selector: 'app-x' })\nexport class X {\n  @Output('click') pressed = new EventEmitter<void>();\n}\n",
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("click"));
    }

    #[test]
    fn test_native_name_via_outputs_array() {
        let violations = check(
            "@Directive({ selector: '[appX]', outputs: ['valueChange: focus'] })\nexport class X {}\n",
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("focus"));
    }

    #[test]
    fn test_custom_names_pass() {
        let violations = check(
            "@Component({ selector: 'app-x' })\nexport class X {\n  @Output() valueChange = new EventEmitter<number>();\n  @Output() saved = new EventEmitter<void>();\n}\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_alias_rescues_native_property_name() {
        let violations = check(
            "@Component({ selector: 'app-x' })\nexport class X {\n  @Output('appChange') change = new EventEmitter<void>();\n}\n",
        );
        assert!(violations.is_empty());
    }
}
