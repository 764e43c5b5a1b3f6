//! Selector grammar validation.
//!
//! Validates component/directive selector strings against configured
//! type / prefix / style constraints. The three resulting booleans are
//! independent ANY-semantics across the parsed fragments, so an array-form
//! selector (`app-foo, [appFoo]`) can satisfy each constraint through a
//! different fragment.

mod parser;

pub use parser::{parse_selector, SelectorFragment};

use regex::Regex;
use std::sync::LazyLock;

/// Kind of selector fragment a rule constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorType {
    /// Element selectors (`app-foo`).
    Element,
    /// Attribute selectors (`[appFoo]`).
    Attribute,
}

impl SelectorType {
    /// Parses a configured type name. Anything but `element` / `attribute`
    /// is invalid configuration.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "element" => Some(Self::Element),
            "attribute" => Some(Self::Attribute),
            _ => None,
        }
    }
}

/// Naming style for selector fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorStyle {
    /// `appFoo`.
    CamelCase,
    /// `app-foo`; at least one hyphen is required.
    KebabCase,
}

impl SelectorStyle {
    /// Parses a configured style name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "camelCase" => Some(Self::CamelCase),
            "kebab-case" => Some(Self::KebabCase),
            _ => None,
        }
    }
}

/// Per-constraint outcome of [`check_selector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConstraintResult {
    /// Some fragment is of a requested type.
    pub has_expected_type: bool,
    /// Some type-matching fragment carries a configured prefix.
    pub has_expected_prefix: bool,
    /// Some type-matching fragment passes the style validator.
    pub has_expected_style: bool,
}

impl SelectorConstraintResult {
    /// Returns `true` when every constraint is satisfied.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.has_expected_type && self.has_expected_prefix && self.has_expected_style
    }
}

static CAMEL_CASE: LazyLock<Regex> = LazyLock::new(|| {
    // Brackets are tolerated so raw `[appFoo]` fragment text validates.
    #[allow(clippy::unwrap_used)] // pattern is a literal
    Regex::new(r"^[a-zA-Z0-9\[\]]+$").unwrap()
});

static KEBAB_CASE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // pattern is a literal
    Regex::new(r"^[a-z0-9-]+-[a-z0-9-]+$").unwrap()
});

/// Fragment-text validators for the selector naming styles.
pub struct SelectorValidator;

impl SelectorValidator {
    /// camelCase fragment text, brackets tolerated.
    #[must_use]
    pub fn camel_case(text: &str) -> bool {
        CAMEL_CASE.is_match(text)
    }

    /// kebab-case fragment text. A hyphen is required: `app-foo` passes,
    /// a bare `app` does not.
    #[must_use]
    pub fn kebab_case(text: &str) -> bool {
        KEBAB_CASE.is_match(text)
    }

    /// Whether `text` validates under `style`.
    #[must_use]
    pub fn style(text: &str, style: SelectorStyle) -> bool {
        match style {
            SelectorStyle::CamelCase => Self::camel_case(text),
            SelectorStyle::KebabCase => Self::kebab_case(text),
        }
    }

    /// Whether `text` starts with one of `prefixes` followed by a
    /// style-consistent boundary.
    ///
    /// The suffix after the prefix must be empty, start uppercase
    /// (camelCase) or start with `-` (kebab-case). So prefix `app` accepts
    /// `app-foo` and `appFoo` but rejects `application-foo` and `apple`.
    #[must_use]
    pub fn prefix(text: &str, prefixes: &[String], style: SelectorStyle) -> bool {
        let escaped: Vec<String> = prefixes.iter().map(|p| regex::escape(p)).collect();
        let Ok(pattern) = Regex::new(&format!(r"^\[?({})", escaped.join("|"))) else {
            return false;
        };
        let Some(matched) = pattern.find(text) else {
            return false;
        };
        let suffix = &text[matched.end()..];
        let suffix = suffix.strip_suffix(']').unwrap_or(suffix);
        match style {
            SelectorStyle::CamelCase => suffix
                .chars()
                .next()
                .map_or(true, |c| c.is_ascii_uppercase()),
            SelectorStyle::KebabCase => suffix.is_empty() || suffix.starts_with('-'),
        }
    }
}

/// Validates a selector rule's configuration.
///
/// `types` must be non-empty with every entry `element` or `attribute`,
/// `prefixes` must be non-empty, and `style` must be `camelCase` or
/// `kebab-case`. A rule with invalid options reports a single
/// configuration-invalid violation and performs no per-selector analysis.
#[must_use]
pub fn check_valid_options(types: &[String], prefixes: &[String], style: &str) -> bool {
    !types.is_empty()
        && types.iter().all(|t| SelectorType::parse(t).is_some())
        && !prefixes.is_empty()
        && SelectorStyle::parse(style).is_some()
}

/// Checks a selector literal against type / prefix / style constraints.
///
/// Returns `None` when the text parses to no usable fragment; the caller
/// skips silently (a dynamic or empty selector is not a naming violation).
#[must_use]
pub fn check_selector(
    text: &str,
    types: &[SelectorType],
    prefixes: &[String],
    style: SelectorStyle,
) -> Option<SelectorConstraintResult> {
    let fragments = parse_selector(text);
    if fragments.is_empty() {
        return None;
    }

    // Fragment texts restricted to the requested types; attribute names are
    // bracket-wrapped so validators see what the author wrote.
    let mut typed_texts: Vec<String> = Vec::new();
    for fragment in &fragments {
        if types.contains(&SelectorType::Element) {
            if let Some(element) = &fragment.element {
                if element != "*" {
                    typed_texts.push(element.clone());
                }
            }
        }
        if types.contains(&SelectorType::Attribute) {
            typed_texts.extend(fragment.attrs.iter().map(|attr| format!("[{attr}]")));
        }
    }

    Some(SelectorConstraintResult {
        has_expected_type: !typed_texts.is_empty(),
        has_expected_prefix: typed_texts
            .iter()
            .any(|t| SelectorValidator::prefix(t, prefixes, style)),
        has_expected_style: typed_texts
            .iter()
            .any(|t| SelectorValidator::style(t, style)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    // --- style validators ---

    #[test]
    fn kebab_case_requires_a_hyphen() {
        assert!(SelectorValidator::kebab_case("foo-bar"));
        assert!(SelectorValidator::kebab_case("app-x-y"));
        assert!(!SelectorValidator::kebab_case("foo"));
        assert!(!SelectorValidator::kebab_case("fooBar"));
    }

    #[test]
    fn camel_case_rejects_hyphens_but_tolerates_brackets() {
        assert!(SelectorValidator::camel_case("fooBar"));
        assert!(SelectorValidator::camel_case("[appFoo]"));
        assert!(!SelectorValidator::camel_case("foo-bar"));
    }

    // --- prefix checks ---

    #[test]
    fn prefix_respects_kebab_boundary() {
        let p = prefixes(&["app"]);
        assert!(SelectorValidator::prefix("app-test", &p, SelectorStyle::KebabCase));
        assert!(SelectorValidator::prefix("app", &p, SelectorStyle::KebabCase));
        assert!(!SelectorValidator::prefix("apptest", &p, SelectorStyle::KebabCase));
        assert!(!SelectorValidator::prefix("application-foo", &p, SelectorStyle::KebabCase));
    }

    #[test]
    fn prefix_respects_camel_boundary() {
        let p = prefixes(&["app"]);
        assert!(SelectorValidator::prefix("appTest", &p, SelectorStyle::CamelCase));
        assert!(SelectorValidator::prefix("app", &p, SelectorStyle::CamelCase));
        assert!(SelectorValidator::prefix("[appTest]", &p, SelectorStyle::CamelCase));
        assert!(!SelectorValidator::prefix("apptest", &p, SelectorStyle::CamelCase));
        assert!(!SelectorValidator::prefix("apple", &p, SelectorStyle::CamelCase));
    }

    #[test]
    fn prefix_accepts_any_of_several() {
        let p = prefixes(&["app", "ng"]);
        assert!(SelectorValidator::prefix("ng-zone", &p, SelectorStyle::KebabCase));
        assert!(SelectorValidator::prefix("app-zone", &p, SelectorStyle::KebabCase));
        assert!(!SelectorValidator::prefix("lib-zone", &p, SelectorStyle::KebabCase));
    }

    #[test]
    fn prefix_with_regex_metacharacters_is_inert() {
        let p = prefixes(&["a.b"]);
        assert!(!SelectorValidator::prefix("axb-foo", &p, SelectorStyle::KebabCase));
        assert!(SelectorValidator::prefix("a.b-foo", &p, SelectorStyle::KebabCase));
    }

    // --- option validation ---

    #[test]
    fn valid_options_need_known_types_and_style() {
        let types = prefixes(&["element"]);
        let pfx = prefixes(&["app"]);
        assert!(check_valid_options(&types, &pfx, "kebab-case"));
        assert!(check_valid_options(&types, &pfx, "camelCase"));
        assert!(!check_valid_options(&types, &pfx, "snake_case"));
        assert!(!check_valid_options(&[], &pfx, "kebab-case"));
        assert!(!check_valid_options(&types, &[], "kebab-case"));
        assert!(!check_valid_options(&prefixes(&["pseudo"]), &pfx, "kebab-case"));
    }

    // --- check_selector ---

    #[test]
    fn element_selector_full_pass() {
        let result = check_selector(
            "app-test",
            &[SelectorType::Element],
            &prefixes(&["app"]),
            SelectorStyle::KebabCase,
        )
        .unwrap();
        assert!(result.has_expected_type);
        assert!(result.has_expected_prefix);
        assert!(result.has_expected_style);
        assert!(result.is_valid());
    }

    #[test]
    fn wrong_prefix_fails_only_prefix() {
        let result = check_selector(
            "test-component",
            &[SelectorType::Element],
            &prefixes(&["app"]),
            SelectorStyle::KebabCase,
        )
        .unwrap();
        assert!(result.has_expected_type);
        assert!(!result.has_expected_prefix);
        assert!(result.has_expected_style);
    }

    #[test]
    fn attribute_selector_camel_case() {
        let result = check_selector(
            "[appHighlight]",
            &[SelectorType::Attribute],
            &prefixes(&["app"]),
            SelectorStyle::CamelCase,
        )
        .unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn any_semantics_across_fragments() {
        // The element fragment satisfies type+style, the attribute fragment
        // satisfies the prefix; constraints are independent.
        let result = check_selector(
            "test-thing, [appThing]",
            &[SelectorType::Element, SelectorType::Attribute],
            &prefixes(&["app"]),
            SelectorStyle::KebabCase,
        )
        .unwrap();
        assert!(result.has_expected_type);
        assert!(result.has_expected_prefix);
        assert!(result.has_expected_style);
    }

    #[test]
    fn type_mismatch_reports_missing_type() {
        let result = check_selector(
            "[appHighlight]",
            &[SelectorType::Element],
            &prefixes(&["app"]),
            SelectorStyle::KebabCase,
        )
        .unwrap();
        assert!(!result.has_expected_type);
    }

    #[test]
    fn unparseable_selector_yields_none() {
        assert!(check_selector(
            "   ",
            &[SelectorType::Element],
            &prefixes(&["app"]),
            SelectorStyle::KebabCase,
        )
        .is_none());
    }
}
