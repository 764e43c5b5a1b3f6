//! Rule presets for common configurations.

use crate::{
    ClickEventsHaveKeyEvents, ComponentSelector, DirectiveSelector, InteractiveSupportsFocus,
    MouseEventsHaveKeyEvents, NoAutofocus, NoDistractingElements, NoDuplicateAttributes,
    NoNoninteractiveElementToInteractiveRole, NoOutputNative, NoPositiveTabindex,
    RoleHasRequiredAria, ValidAria,
};
use tpl_lint_core::{DirectiveRuleBox, TemplateRuleBox};

/// A set of rules, split by the trait each rule implements.
#[derive(Default)]
pub struct RuleSet {
    /// Rules running over parsed templates.
    pub template_rules: Vec<TemplateRuleBox>,
    /// Rules running over extracted directive metadata.
    pub directive_rules: Vec<DirectiveRuleBox>,
}

impl RuleSet {
    /// Total number of rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.template_rules.len() + self.directive_rules.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.template_rules.is_empty() && self.directive_rules.is_empty()
    }
}

/// Preset configurations for tpl-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// Strict rules: everything, selector conventions included.
    Strict,
    /// Minimal rules for gradual adoption.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> RuleSet {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Minimal => minimal_rules(),
        }
    }
}

/// Returns the recommended set of rules: the full accessibility set.
///
/// Selector naming rules are left out; their prefixes are project-specific
/// and belong in explicit configuration (or the `strict` preset).
#[must_use]
pub fn recommended_rules() -> RuleSet {
    RuleSet {
        template_rules: vec![
            Box::new(ClickEventsHaveKeyEvents::new()),
            Box::new(InteractiveSupportsFocus::new()),
            Box::new(MouseEventsHaveKeyEvents::new()),
            Box::new(NoAutofocus::new()),
            Box::new(NoDistractingElements::new()),
            Box::new(NoDuplicateAttributes::new()),
            Box::new(NoPositiveTabindex::new()),
            Box::new(NoNoninteractiveElementToInteractiveRole::new()),
            Box::new(RoleHasRequiredAria::new()),
            Box::new(ValidAria::new()),
        ],
        directive_rules: vec![Box::new(NoOutputNative::new())],
    }
}

/// Returns the strict set of rules.
///
/// Everything in recommended plus the selector convention rules with their
/// default `app` prefix.
#[must_use]
pub fn strict_rules() -> RuleSet {
    let mut set = recommended_rules();
    set.directive_rules.push(Box::new(ComponentSelector::new()));
    set.directive_rules.push(Box::new(DirectiveSelector::new()));
    set
}

/// Returns the minimal set of rules.
///
/// For gradual adoption: the purely mechanical template checks that never
/// need project knowledge.
#[must_use]
pub fn minimal_rules() -> RuleSet {
    RuleSet {
        template_rules: vec![
            Box::new(NoAutofocus::new()),
            Box::new(NoDistractingElements::new()),
            Box::new(NoPositiveTabindex::new()),
        ],
        directive_rules: Vec::new(),
    }
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> RuleSet {
    strict_rules()
}
