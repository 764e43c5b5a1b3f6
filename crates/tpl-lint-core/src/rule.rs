//! Rule traits for defining lint rules.

use crate::context::RuleContext;
use crate::metadata::DirectiveMetadata;
use crate::template::Template;
use crate::types::{Severity, Violation};

/// A per-template lint rule.
///
/// Implement this trait to create rules that analyze parsed templates,
/// whether they come from a standalone `.html` file or from an inline
/// `template:` property of a component decorator.
///
/// # Example
///
/// ```ignore
/// use tpl_lint_core::{TemplateRule, RuleContext, Template, Violation, Severity};
///
/// pub struct NoMarquee;
///
/// impl TemplateRule for NoMarquee {
///     fn name(&self) -> &'static str { "no-marquee" }
///     fn code(&self) -> &'static str { "TL999" }
///
///     fn check(&self, ctx: &RuleContext, template: &Template) -> Vec<Violation> {
///         template
///             .elements()
///             .filter(|(_, el)| el.name == "marquee")
///             .map(|(_, el)| {
///                 Violation::new(
///                     self.code(),
///                     self.name(),
///                     self.default_severity(),
///                     ctx.location(el.span),
///                     "<marquee> is distracting",
///                 )
///             })
///             .collect()
///     }
/// }
/// ```
pub trait TemplateRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-autofocus").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "TL004").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether this rule requires a reason when using allow directives.
    ///
    /// By default, rules with `Severity::Error` require a reason.
    /// Override this to customize the requirement.
    fn requires_allow_reason(&self) -> bool {
        self.default_severity() == Severity::Error
    }

    /// Checks a parsed template and returns any violations found.
    fn check(&self, ctx: &RuleContext<'_>, template: &Template) -> Vec<Violation>;
}

/// Type alias for boxed [`TemplateRule`] trait objects.
pub type TemplateRuleBox = Box<dyn TemplateRule>;

/// A per-directive lint rule.
///
/// Implement this trait to create rules that analyze the metadata extracted
/// from a `@Component` or `@Directive` decorator: selector literals, output
/// declarations and the inline template text.
pub trait DirectiveRule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "TL011").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether this rule requires a reason when using allow directives.
    ///
    /// By default, rules with `Severity::Error` require a reason.
    /// Override this to customize the requirement.
    fn requires_allow_reason(&self) -> bool {
        self.default_severity() == Severity::Error
    }

    /// Checks one extracted directive and returns any violations found.
    fn check_directive(
        &self,
        ctx: &RuleContext<'_>,
        directive: &DirectiveMetadata,
    ) -> Vec<Violation>;
}

/// Type alias for boxed [`DirectiveRule`] trait objects.
pub type DirectiveRuleBox = Box<dyn DirectiveRule>;
