//! Rule enforcing directive selector conventions.
//!
//! # Rationale
//!
//! Attribute directives should be camelCase attribute selectors carrying
//! the application prefix (`[appHighlight]`), mirroring how the framework
//! itself names its directives.
//!
//! # Configuration
//!
//! - `type`: `"attribute"` / `"element"` or an array of both
//!   (default: `["attribute"]`)
//! - `prefix`: accepted prefix or array of prefixes (default: `["app"]`)
//! - `style`: `"camelCase"` or `"kebab-case"` (default: `"camelCase"`)

use tpl_lint_core::selector::{
    check_selector, check_valid_options, SelectorStyle, SelectorType,
};
use tpl_lint_core::{
    DirectiveKind, DirectiveMetadata, DirectiveRule, RuleContext, Severity, Suggestion, Violation,
};

/// Rule code for directive-selector.
pub const CODE: &str = "TL012";

/// Rule name for directive-selector.
pub const NAME: &str = "directive-selector";

/// Enforces type, prefix and style constraints on directive selectors.
#[derive(Debug, Clone)]
pub struct DirectiveSelector {
    /// Requested selector types.
    pub types: Vec<String>,
    /// Accepted prefixes.
    pub prefixes: Vec<String>,
    /// Naming style.
    pub style: String,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for DirectiveSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveSelector {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: vec!["attribute".to_string()],
            prefixes: vec!["app".to_string()],
            style: "camelCase".to_string(),
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

impl DirectiveRule for DirectiveSelector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces directive selector type, prefix and style"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_directive(
        &self,
        ctx: &RuleContext<'_>,
        directive: &DirectiveMetadata,
    ) -> Vec<Violation> {
        if directive.kind != DirectiveKind::Directive {
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
            "Use a {style} attribute selector starting with '{}'",
            prefixes.join("' or '")
        )))]
    }
}
