//! Comment-based allowance directives.
//!
//! Supports directives in template HTML comments and TypeScript line
//! comments:
//! ```text
//! <!-- tpl-lint: allow(no-autofocus) reason="dialog entry field" -->
//! // tpl-lint: allow(no-output-native) reason="intercepts the native event"
//! ```
//!
//! A directive suppresses matching violations on its own line or the line
//! below. The analyzer applies suppression centrally, so predicates and
//! rules stay pure.

use std::collections::HashSet;

/// Result of checking for an allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone)]
struct AllowDirective {
    /// Rule names that are allowed.
    rules: HashSet<String>,
    /// Optional reason for the allowance.
    reason: Option<String>,
}

/// Checks source content for an allowance directive covering `rule_name`
/// at `line` (1-indexed). The directive may sit on the violation line
/// itself or on the line above.
#[must_use]
pub fn check_allow_with_reason(content: &str, line: usize, rule_name: &str) -> AllowCheck {
    let lines: Vec<&str> = content.lines().collect();

    for check_line in [line.saturating_sub(1), line] {
        if check_line == 0 || check_line > lines.len() {
            continue;
        }

        let line_content = lines[check_line - 1];
        if let Some(directive) = parse_allow_directive(line_content) {
            if directive.rules.contains(rule_name) || directive.rules.contains("all") {
                return AllowCheck::Allowed {
                    reason: directive.reason,
                };
            }
        }
    }

    AllowCheck::Denied
}

/// Parses an allowance directive out of a line. The `tpl-lint:` marker must
/// appear inside a comment: `<!-- -->` for templates, `//` for TypeScript.
fn parse_allow_directive(line: &str) -> Option<AllowDirective> {
    let marker_at = line.find("tpl-lint:")?;
    let before = &line[..marker_at];
    let in_comment = before.trim_end().ends_with("<!--")
        || before.contains("//")
        || before.trim_end().ends_with("/*");
    if !in_comment {
        return None;
    }

    let directive = line[marker_at + "tpl-lint:".len()..].trim_start();
    let allow_content = directive.strip_prefix("allow(")?.trim();

    let paren_end = allow_content.find(')')?;
    let rules_str = &allow_content[..paren_end];

    let rules: HashSet<String> = rules_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if rules.is_empty() {
        return None;
    }

    let rest = allow_content[paren_end + 1..].trim();
    let reason = rest.strip_prefix("reason=").and_then(|reason_part| {
        let reason_part = reason_part.trim();
        let inner = reason_part.strip_prefix('"')?;
        let end = inner.find('"')?;
        Some(inner[..end].to_string())
    });

    Some(AllowDirective { rules, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_comment_directive_parses() {
        let directive =
            parse_allow_directive("  <!-- tpl-lint: allow(no-autofocus) -->").unwrap();
        assert!(directive.rules.contains("no-autofocus"));
        assert!(directive.reason.is_none());
    }

    #[test]
    fn line_comment_directive_with_reason() {
        let directive = parse_allow_directive(
            "// tpl-lint: allow(no-output-native) reason=\"wraps the native event\"",
        )
        .unwrap();
        assert!(directive.rules.contains("no-output-native"));
        assert_eq!(directive.reason.as_deref(), Some("wraps the native event"));
    }

    #[test]
    fn marker_outside_a_comment_is_ignored() {
        assert!(parse_allow_directive("<div title=\"tpl-lint: allow(x)\">").is_none());
    }

    #[test]
    fn multiple_rules_parse() {
        let directive =
            parse_allow_directive("<!-- tpl-lint: allow(rule-a, rule-b) -->").unwrap();
        assert!(directive.rules.contains("rule-a"));
        assert!(directive.rules.contains("rule-b"));
    }

    #[test]
    fn directive_on_previous_line_applies() {
        let content = "<div>\n  <!-- tpl-lint: allow(no-autofocus) reason=\"entry field\" -->\n  <input autofocus>\n</div>";
        let result = check_allow_with_reason(content, 3, "no-autofocus");
        assert!(result.is_allowed());
        assert_eq!(result.reason(), Some("entry field"));
    }

    #[test]
    fn directive_on_same_line_applies() {
        let content = "<input autofocus> <!-- tpl-lint: allow(no-autofocus) -->";
        assert!(check_allow_with_reason(content, 1, "no-autofocus").is_allowed());
    }

    #[test]
    fn other_rules_stay_denied() {
        let content = "<!-- tpl-lint: allow(no-autofocus) -->\n<input autofocus>";
        assert_eq!(
            check_allow_with_reason(content, 2, "no-positive-tabindex"),
            AllowCheck::Denied
        );
    }

    #[test]
    fn allow_all_covers_every_rule() {
        let content = "<!-- tpl-lint: allow(all) reason=\"generated markup\" -->\n<marquee></marquee>";
        assert!(check_allow_with_reason(content, 2, "no-distracting-elements").is_allowed());
    }

    #[test]
    fn missing_reason_is_surfaced_as_none() {
        let content = "// tpl-lint: allow(component-selector)\nconst x = 1;";
        let result = check_allow_with_reason(content, 2, "component-selector");
        assert!(result.is_allowed());
        assert_eq!(result.reason(), None);
    }
}
