//! Rule to forbid duplicated attributes on one element.
//!
//! # Rationale
//!
//! When the same attribute appears twice the framework silently keeps one
//! of them; the other is dead markup and usually a merge accident. Names
//! are compared by what the author wrote, so `[(ngModel)]` and `[ngModel]`
//! collide while `[(ngModel)]` and `(ngModelChange)` do not (the two-way
//! sugar owns its change output).
//!
//! # Configuration
//!
//! - `allow_two_way_data_binding`: treat the output synthesized by
//!   `[(x)]` as distinct from an explicit `(xChange)` (default: true)
//! - `ignore`: attribute names to skip entirely (default: empty)

use std::collections::HashMap;
use tpl_lint_core::{
    AttributeRef, Replacement, RuleContext, Severity, Suggestion, Template, TemplateRule,
    Violation,
};

/// Rule code for no-duplicate-attributes.
pub const CODE: &str = "TL006";

/// Rule name for no-duplicate-attributes.
pub const NAME: &str = "no-duplicate-attributes";

/// Forbids duplicate attributes, inputs and outputs on an element.
#[derive(Debug, Clone)]
pub struct NoDuplicateAttributes {
    /// Whether `[(x)]` coexists with an explicit `(xChange)`.
    pub allow_two_way_data_binding: bool,
    /// Attribute names exempt from the check.
    pub ignore: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoDuplicateAttributes {
    fn default() -> Self {
        Self::new()
    }
}

impl NoDuplicateAttributes {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_two_way_data_binding: true,
            ignore: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Sets whether two-way bindings may coexist with explicit change
    /// outputs.
    #[must_use]
    pub fn allow_two_way_data_binding(mut self, allow: bool) -> Self {
        self.allow_two_way_data_binding = allow;
        self
    }

    /// Sets the exempt attribute names.
    #[must_use]
    pub fn ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl TemplateRule for NoDuplicateAttributes {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids duplicate attributes on one element"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, template: &Template) -> Vec<Violation> {
        let allow_two_way = ctx.options.map_or(self.allow_two_way_data_binding, |o| {
            o.get_bool("allow_two_way_data_binding", self.allow_two_way_data_binding)
        });
        let ignore = ctx
            .options
            .and_then(|o| o.get_str_or_array("ignore"))
            .unwrap_or_else(|| self.ignore.clone());

        let mut violations = Vec::new();

        for (_, element) in template.elements() {
            // The bag (static attributes + inputs) is one namespace,
            // outputs another; a (click) never collides with a click="...".
            let mut groups: HashMap<(bool, &str), Vec<AttributeRef<'_>>> = HashMap::new();

            for attr in element.attribute_bag() {
                groups
                    .entry((false, attr.original_name()))
                    .or_default()
                    .push(attr);
            }
            for output in &element.outputs {
                let attr = AttributeRef::Event(output);
                // Under allow_two_way the synthesized output keeps its
                // written name (`ngModel`); otherwise it collides with an
                // explicit handler under its internal name (`ngModelChange`).
                let key = if allow_two_way {
                    attr.original_name()
                } else {
                    attr.name()
                };
                groups.entry((true, key)).or_default().push(attr);
            }

            let mut duplicated: Vec<(&str, Vec<AttributeRef<'_>>)> = groups
                .into_iter()
                .filter(|((_, name), attrs)| {
                    attrs.len() > 1 && !ignore.iter().any(|i| i == name)
                })
                .map(|((_, name), attrs)| (name, attrs))
                .collect();
            duplicated.sort_by_key(|(_, attrs)| attrs[0].span().start);

            for (name, attrs) in duplicated {
                for (idx, attr) in attrs.iter().enumerate() {
                    let location = ctx.location(attr.span());
                    let mut violation = Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        location.clone(),
                        format!("Duplicate attribute '{name}'"),
                    )
                    .with_suggestion(Suggestion::with_fix(
                        "Remove this occurrence",
                        Replacement::delete(location),
                    ));
                    for (other_idx, other) in attrs.iter().enumerate() {
                        if other_idx == idx {
                            continue;
                        }
                        violation = violation.with_suggestion(Suggestion::with_fix(
                            "Remove the other occurrence",
                            Replacement::delete(ctx.location(other.span())),
                        ));
                    }
                    violations.push(violation);
                }
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

    fn check_with(source: &str, rule: NoDuplicateAttributes) -> Vec<Violation> {
        let template = parse_template(source).expect("Failed to parse");
        let file = FileContext::new(Path::new("test.html"), source, Path::new("."));
        let ctx = RuleContext::new(&file, Ontology::global());
        rule.check(&ctx, &template)
    }

    fn check(source: &str) -> Vec<Violation> {
        check_with(source, NoDuplicateAttributes::new())
    }

    #[test]
    fn test_duplicate_static_attribute() {
        let violations = check(r#"<div class="a" class="b"></div>"#);
        assert_eq!(violations.len(), 2);
        assert!(violations[0].message.contains("class"));
        // every occurrence carries its own and the other removal
        assert_eq!(violations[0].suggestions.len(), 2);
    }

    #[test]
    fn test_static_and_bound_forms_collide() {
        let violations = check(r#"<div title="a" [title]="b"></div>"#);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_way_collides_with_plain_input() {
        let violations = check(r#"<input [(ngModel)]="x" [ngModel]="y">"#);
        assert_eq!(violations.len(), 2);
        assert!(violations[0].message.contains("ngModel"));
    }

    #[test]
    fn test_two_way_with_explicit_change_is_allowed_by_default() {
        assert!(check(r#"<input [(ngModel)]="x" (ngModelChange)="f($event)">"#).is_empty());
    }

    #[test]
    fn test_two_way_with_explicit_change_collides_when_disallowed() {
        let rule = NoDuplicateAttributes::new().allow_two_way_data_binding(false);
        let violations = check_with(r#"<input [(ngModel)]="x" (ngModelChange)="f($event)">"#, rule);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_duplicate_outputs() {
        let violations = check(r#"<div (click)="a()" (click)="b()"></div>"#);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_output_does_not_collide_with_bag() {
        assert!(check(r#"<div click="x" (click)="a()"></div>"#).is_empty());
    }

    #[test]
    fn test_ignore_list() {
        let rule = NoDuplicateAttributes::new().ignore(["class"]);
        assert!(check_with(r#"<div class="a" class="b"></div>"#, rule).is_empty());
    }

    #[test]
    fn test_distinct_attributes_pass() {
        assert!(check(r#"<div class="a" id="b" [title]="c"></div>"#).is_empty());
    }
}
