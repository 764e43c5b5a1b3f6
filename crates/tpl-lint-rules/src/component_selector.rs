//! Rule enforcing component selector conventions.
//!
//! # Rationale
//!
//! Component selectors should be elements, carry the application prefix
//! and use kebab-case, so `<app-user-card>` is recognizably first-party
//! and cannot collide with future HTML element names.
//!
//! # Configuration
//!
//! - `type`: `"element"` / `"attribute"` or an array of both
//!   (default: `["element"]`)
//! - `prefix`: accepted prefix or array of prefixes (default: `["app"]`)
//! - `style`: `"kebab-case"` or `"camelCase"` (default: `"kebab-case"`)

use tpl_lint_core::selector::{
    check_selector, check_valid_options, SelectorStyle, SelectorType,
};
use tpl_lint_core::{
    DirectiveKind, DirectiveMetadata, DirectiveRule, RuleContext, Severity, Suggestion, Violation,
};

/// Rule code for component-selector.
pub const CODE: &str = "TL011";

/// Rule name for component-selector.
pub const NAME: &str = "component-selector";

/// Enforces type, prefix and style constraints on component selectors.
#[derive(Debug, Clone)]
pub struct ComponentSelector {
    /// Requested selector types.
    pub types: Vec<String>,
    /// Accepted prefixes.
    pub prefixes: Vec<String>,
    /// Naming style.
    pub style: String,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ComponentSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentSelector {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: vec!["element".to_string()],
            prefixes: vec!["app".to_string()],
            style: "kebab-case".to_string(),
            severity: Severity::Error,
        }
    }

    /// Sets the requested selector types.
    #[must_use]
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the accepted prefixes.
    #[must_use]
    pub fn prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the naming style.
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl DirectiveRule for ComponentSelector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces component selector type, prefix and style"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_directive(
        &self,
        ctx: &RuleContext<'_>,
        directive: &DirectiveMetadata,
    ) -> Vec<Violation> {
        if directive.kind != DirectiveKind::Component {
            return Vec::new();
        }

        let types = ctx
            .options
            .and_then(|o| o.get_str_or_array("type"))
            .unwrap_or_else(|| self.types.clone());
        let prefixes = ctx
            .options
            .and_then(|o| o.get_str_or_array("prefix"))
            .unwrap_or_else(|| self.prefixes.clone());
        let style = ctx
            .options
            .map_or(self.style.clone(), |o| {
                o.get_str("style", &self.style).to_string()
            });

        if !check_valid_options(&types, &prefixes, &style) {
            return vec![Violation::new(
                CODE,
                NAME,
                self.severity,
                ctx.location(directive.span),
                format!("Invalid configuration for '{NAME}': check type, prefix and style options"),
            )];
        }

        let Some(selector) = &directive.selector else {
            return Vec::new();
        };
        let parsed_types: Vec<SelectorType> =
            types.iter().filter_map(|t| SelectorType::parse(t)).collect();
        let Some(parsed_style) = SelectorStyle::parse(&style) else {
            return Vec::new();
        };
        let Some(result) = check_selector(&selector.value, &parsed_types, &prefixes, parsed_style)
        else {
            return Vec::new();
        };
        if result.is_valid() {
            return Vec::new();
        }

        // First failing constraint wins, in fixed order.
        let message = if !result.has_expected_type {
            format!("Selector should be applied as {}", types.join(" or "))
        } else if !result.has_expected_style {
            format!("Selector should be named in {style}")
        } else {
            format!(
                "Selector should be prefixed by one of: {}",
                prefixes.join(", ")
            )
        };

        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            ctx.location(selector.span),
            message,
        )
        .with_suggestion(Suggestion::new(format!(
            "Use a {style} element selector starting with '{}'",
            prefixes.join("' or '")
        )))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tpl_lint_core::{extract_directives, FileContext, Ontology};

    fn check_with(source: &str, rule: ComponentSelector) -> Vec<Violation> {
        let file = FileContext::new(Path::new("test.component.ts"), source, Path::new("."));
        let ctx = RuleContext::new(&file, Ontology::global());
        extract_directives(source)
            .iter()
            .flat_map(|d| rule.check_directive(&ctx, d))
            .collect()
    }

    fn check(source: &str) -> Vec<Violation> {
        check_with(source, ComponentSelector::new())
    }

    fn component(selector: &str) -> String {
        format!("@Component({{ selector: '{selector}' }})\nexport class X {{}}\n")
    }

    #[test]
    fn test_conforming_selector_passes() {
        assert!(check(&component("app-user-card")).is_empty());
    }

    #[test]
    fn test_wrong_prefix_reports_prefix() {
        let violations = check(&component("admin-user-card"));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("prefixed"));
    }

    #[test]
    fn test_missing_hyphen_reports_style() {
        let violations = check(&component("app"));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("kebab-case"));
    }

    #[test]
    fn test_attribute_selector_reports_type() {
        let violations = check(&component("[appCard]"));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("element"));
    }

    #[test]
    fn test_type_failure_outranks_style_and_prefix() {
        // fails every constraint; type is reported first
        let violations = check(&component("[adminCard]"));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("element"));
    }

    #[test]
    fn test_custom_prefixes() {
        let rule = ComponentSelector::new().prefixes(["ui", "app"]);
        assert!(check_with(&component("ui-button"), rule).is_empty());
    }

    #[test]
    fn test_prefix_boundary_is_enforced() {
        let violations = check(&component("application-card"));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("prefixed"));
    }

    #[test]
    fn test_directives_are_out_of_scope() {
        let source = "@Directive({ selector: '[whatever]' })\nexport class X {}\n";
        assert!(check(source).is_empty());
    }

    #[test]
    fn test_missing_selector_is_skipped() {
        let source = "@Component({ template: '<div></div>' })\nexport class X {}\n";
        assert!(check(source).is_empty());
    }

    #[test]
    fn test_invalid_options_report_configuration() {
        let rule = ComponentSelector::new().style("snake_case");
        let violations = check_with(&component("app-card"), rule);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Invalid configuration"));
    }
}
