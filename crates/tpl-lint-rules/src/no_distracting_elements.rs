//! Rule to forbid distracting elements such as `<marquee>` and `<blink>`.
//!
//! # Rationale
//!
//! Scrolling and blinking content cannot be paused, distracts users with
//! attention deficits and is deprecated markup to begin with.
//!
//! # Configuration
//!
//! - `elements`: element names to forbid (default: `["marquee", "blink"]`)

use tpl_lint_core::utils::tree::to_pattern;
use tpl_lint_core::{Replacement, RuleContext, Severity, Template, TemplateRule, Violation};
use tracing::warn;

/// Rule code for no-distracting-elements.
pub const CODE: &str = "TL005";

/// Rule name for no-distracting-elements.
pub const NAME: &str = "no-distracting-elements";

/// Forbids a configurable set of distracting element names.
#[derive(Debug, Clone)]
pub struct NoDistractingElements {
    /// Element names to forbid.
    pub elements: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoDistractingElements {
    fn default() -> Self {
        Self::new()
    }
}

impl NoDistractingElements {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: vec!["marquee".to_string(), "blink".to_string()],
            severity: Severity::Error,
        }
    }

    /// Sets the forbidden element names.
    #[must_use]
    pub fn elements<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements = elements.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl TemplateRule for NoDistractingElements {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids distracting elements like <marquee> and <blink>"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, template: &Template) -> Vec<Violation> {
        let elements = ctx
            .options
            .and_then(|o| o.get_str_or_array("elements"))
            .unwrap_or_else(|| self.elements.clone());

        let pattern = match to_pattern(&elements) {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!("Unusable element list for {NAME}: {e}");
                return Vec::new();
            }
        };

        template
            .elements()
            .filter(|(_, el)| pattern.is_match(&el.name))
            .map(|(_, el)| {
                let location = ctx.location(el.span);
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    location.clone(),
                    format!("<{}> is distracting and must not be used", el.name),
                )
                .with_fix(Replacement::delete(location))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tpl_lint_core::{parse_template, FileContext, Ontology};

    fn check_with(source: &str, rule: NoDistractingElements) -> Vec<Violation> {
        let template = parse_template(source).expect("Failed to parse");
        let file = FileContext::new(Path::new("test.html"), source, Path::new("."));
        let ctx = RuleContext::new(&file, Ontology::global());
        rule.check(&ctx, &template)
    }

    fn check(source: &str) -> Vec<Violation> {
        check_with(source, NoDistractingElements::new())
    }

    #[test]
    fn test_detects_marquee_and_blink() {
        let violations = check("<div><marquee>hi</marquee><blink>ho</blink></div>");
        assert_eq!(violations.len(), 2);
        assert!(violations[0].message.contains("marquee"));
    }

    #[test]
    fn test_ignores_ordinary_elements() {
        assert!(check("<div><span>ok</span></div>").is_empty());
    }

    #[test]
    fn test_name_match_is_exact() {
        // anchored alternation, not substring
        assert!(check("<marqueex></marqueex>").is_empty());
    }

    #[test]
    fn test_custom_element_list() {
        let rule = NoDistractingElements::new().elements(["center"]);
        let violations = check_with("<center></center><marquee></marquee>", rule);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("center"));
    }

    #[test]
    fn test_fix_removes_the_element() {
        let source = "<p>a</p><marquee>sale</marquee>";
        let violations = check(source);
        let fix = violations[0].fix.as_ref().unwrap();
        let removed = &source[fix.location.offset..fix.location.offset + fix.location.length];
        assert_eq!(removed, "<marquee>sale</marquee>");
    }
}
