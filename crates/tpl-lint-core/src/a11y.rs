//! Accessibility classification predicates.
//!
//! Independent, composable predicates over element nodes. Each is a pure
//! function of the ontology, the template and the node; rules combine them
//! with plain boolean logic. All of them are total over well-formed
//! templates and resolve names through
//! [`original_name`](crate::attributes::AttributeRef::original_name).

use crate::attributes::AttributeValue;
use crate::ontology::{AttributeRequirement, ElementSchema, Ontology};
use crate::template::expression::LiteralValue;
use crate::template::{Element, NodeId, Template};

/// How a predicate treats a `role` attribute bound to a dynamic expression.
///
/// The value is unknowable at lint time. `Permissive` counts it as
/// possibly-presentation and suppresses warnings; `Conservative` does not.
/// Each rule picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicRolePolicy {
    /// A dynamic role value is never presentation.
    Conservative,
    /// A dynamic role value counts as possibly-presentation.
    Permissive,
}

/// Whether the element is invisible to assistive technology.
///
/// True iff the element or any ancestor element is locally hidden: an
/// `aria-hidden`/`hidden` attribute resolving to set-or-`"true"`, an
/// `ngStyle` literal map or `style.*` binding collapsing the element, a
/// static `style` text containing `display: none` or `visibility: hidden`,
/// or `<input type="hidden">`. Dynamic `aria-hidden`/`hidden` bindings are
/// not treated as hidden; the value cannot be proven at lint time.
#[must_use]
pub fn is_hidden_from_screen_reader(template: &Template, id: NodeId) -> bool {
    template
        .self_and_ancestors(id)
        .filter_map(|ancestor| template.element(ancestor))
        .any(is_locally_hidden)
}

fn is_locally_hidden(element: &Element) -> bool {
    if hidden_flag_set(element, "aria-hidden") || hidden_flag_set(element, "hidden") {
        return true;
    }
    if ng_style_hides(element) || style_binding_hides(element) || style_text_hides(element) {
        return true;
    }
    element.name.eq_ignore_ascii_case("input")
        && element
            .attribute_value("type")
            .as_ref()
            .and_then(AttributeValue::as_str)
            .is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
}

/// Set-or-`"true"` reading of a boolean-ish attribute. Bare attributes
/// resolve to the empty string, which counts as set.
fn hidden_flag_set(element: &Element, name: &str) -> bool {
    match element.attribute_value(name) {
        Some(AttributeValue::Literal(LiteralValue::Str(s))) => {
            s.is_empty() || s.eq_ignore_ascii_case("true")
        }
        Some(AttributeValue::Literal(ref v)) => v.is_true_like(),
        Some(AttributeValue::Dynamic) | None => false,
    }
}

fn ng_style_hides(element: &Element) -> bool {
    let Some(map) = element
        .inputs
        .iter()
        .find(|input| input.name == "ngStyle")
        .and_then(|input| input.value.as_literal())
    else {
        return false;
    };
    literal_eq(map.map_get("display"), "none") || literal_eq(map.map_get("visibility"), "hidden")
}

fn style_binding_hides(element: &Element) -> bool {
    element.inputs.iter().any(|input| {
        let original = crate::attributes::AttributeRef::Bound(input).original_name();
        match original {
            "style.display" => literal_eq(input.value.as_literal(), "none"),
            "style.visibility" => literal_eq(input.value.as_literal(), "hidden"),
            "style.display.none" | "style.visibility.hidden" => input
                .value
                .as_literal()
                .is_some_and(LiteralValue::is_true_like),
            _ => false,
        }
    })
}

fn style_text_hides(element: &Element) -> bool {
    let Some(style) = element.attributes.iter().find(|a| a.name == "style") else {
        return false;
    };
    let compact: String = style
        .value
        .to_ascii_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '"' && *c != '\'')
        .collect();
    compact.contains("display:none") || compact.contains("visibility:hidden")
}

fn literal_eq(value: Option<&LiteralValue>, expected: &str) -> bool {
    value
        .and_then(LiteralValue::as_str)
        .is_some_and(|s| s.eq_ignore_ascii_case(expected))
}

/// Whether the element is disabled.
///
/// Native `disabled` semantics are presence-based: any `disabled` bag
/// entry counts, dynamic values included. `aria-disabled` instead needs a
/// provable `"true"` (or bare attribute); a dynamic binding is not
/// considered disabled.
#[must_use]
pub fn is_disabled_element(element: &Element) -> bool {
    if element.has_bag_attribute("disabled") {
        return true;
    }
    hidden_flag_set(element, "aria-disabled")
}

/// Whether the element is content-editable: a `contenteditable` bag entry
/// whose resolved value is empty or `"true"` (case-insensitive).
#[must_use]
pub fn is_content_editable(element: &Element) -> bool {
    element
        .bag_attribute("contenteditable")
        .and_then(|attr| attr.resolved_value())
        .is_some_and(|value| match value {
            AttributeValue::Literal(LiteralValue::Str(s)) => {
                s.is_empty() || s.eq_ignore_ascii_case("true")
            }
            AttributeValue::Literal(ref v) => v.is_true_like(),
            AttributeValue::Dynamic => false,
        })
}

/// Whether the element's `role` resolves to `presentation` or `none`.
#[must_use]
pub fn is_presentation_role(element: &Element, policy: DynamicRolePolicy) -> bool {
    match element.attribute_value("role") {
        None => false,
        Some(AttributeValue::Dynamic) => policy == DynamicRolePolicy::Permissive,
        Some(ref value) => value
            .as_str()
            .is_some_and(|role| role.eq_ignore_ascii_case("presentation") || role.eq_ignore_ascii_case("none")),
    }
}

/// Whether a single attribute requirement is satisfied by the element's
/// bag.
///
/// The name is compared against original names. When the requirement
/// carries a literal value, the attribute's resolved value must equal it
/// after boolean coercion; a dynamic value never equals anything. On an
/// `<a>` element, a `routerLink` binding satisfies an `href` requirement
/// (router links carry implicit href semantics).
#[must_use]
pub fn satisfies(requirement: &AttributeRequirement, element: &Element) -> bool {
    if requirement.name == "href"
        && element.name.eq_ignore_ascii_case("a")
        && element
            .attribute_bag()
            .any(|attr| attr.original_name() == "routerLink")
    {
        return true;
    }
    let Some(attr) = element.bag_attribute(requirement.name) else {
        return false;
    };
    match requirement.value {
        None => true,
        Some(expected) => attr
            .resolved_value()
            .is_some_and(|value| coerced_eq(&value, expected)),
    }
}

/// Equality after boolean coercion: `"true"`/`"false"` strings compare
/// equal to real booleans.
fn coerced_eq(value: &AttributeValue, expected: &str) -> bool {
    match value.as_literal() {
        Some(LiteralValue::Str(s)) => s.eq_ignore_ascii_case(expected),
        Some(LiteralValue::Bool(b)) => {
            expected.eq_ignore_ascii_case(if *b { "true" } else { "false" })
        }
        _ => false,
    }
}

/// Whether every requirement of a schema is satisfied by the element.
#[must_use]
pub fn attributes_match(element: &Element, requirements: &[AttributeRequirement]) -> bool {
    requirements
        .iter()
        .all(|requirement| satisfies(requirement, element))
}

fn matches_schema(element: &Element, schema: &ElementSchema) -> bool {
    element.name.eq_ignore_ascii_case(schema.element)
        && attributes_match(element, schema.requirements)
}

fn matches_any(element: &Element, schemas: &[ElementSchema]) -> bool {
    schemas.iter().any(|schema| matches_schema(element, schema))
}

/// Whether the element is interactive by schema.
///
/// Consultation order is significant and first match wins: interactive
/// role schemas, then non-interactive role schemas (which short-circuit to
/// NOT interactive), then widget AX-object schemas, then the
/// non-interactive default.
#[must_use]
pub fn is_interactive_element(ontology: &Ontology, element: &Element) -> bool {
    if matches_any(element, ontology.interactive_element_role_schemas()) {
        return true;
    }
    if matches_any(element, ontology.non_interactive_element_role_schemas()) {
        return false;
    }
    matches_any(element, ontology.interactive_element_ax_schemas())
}

/// Whether the element natively implies the given ARIA role through its AX
/// object.
///
/// Suppresses "non-interactive element given an interactive role" reports
/// for semantically equivalent markup such as
/// `<input type="checkbox" role="checkbox">`.
#[must_use]
pub fn is_semantic_role_element(ontology: &Ontology, element: &Element, role: &str) -> bool {
    ontology.ax_objects().iter().any(|object| {
        object
            .related_roles
            .iter()
            .any(|related| related.eq_ignore_ascii_case(role))
            && object
                .concepts
                .iter()
                .any(|schema| matches_schema(element, schema))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::parse_template;

    fn template_of(source: &str) -> Template {
        parse_template(source).expect("test template parses")
    }

    fn first_element_id(template: &Template) -> NodeId {
        template.elements().next().map(|(id, _)| id).unwrap()
    }

    fn first_element(template: &Template) -> &Element {
        template.elements().next().map(|(_, el)| el).unwrap()
    }

    // --- hidden ---

    #[test]
    fn bare_and_true_aria_hidden_hide() {
        for source in [
            "<div aria-hidden></div>",
            r#"<div aria-hidden="true"></div>"#,
            r#"<div [attr.aria-hidden]="true"></div>"#,
        ] {
            let t = template_of(source);
            assert!(is_hidden_from_screen_reader(&t, first_element_id(&t)), "{source}");
        }
    }

    #[test]
    fn dynamic_aria_hidden_is_not_speculated() {
        let t = template_of(r#"<div [attr.aria-hidden]="maybe"></div>"#);
        assert!(!is_hidden_from_screen_reader(&t, first_element_id(&t)));
    }

    #[test]
    fn hiddenness_is_inherited_from_ancestors() {
        let t = template_of(r#"<div aria-hidden="true"><span><button></button></span></div>"#);
        let button = t
            .elements()
            .find(|(_, el)| el.name == "button")
            .map(|(id, _)| id)
            .unwrap();
        assert!(is_hidden_from_screen_reader(&t, button));
    }

    #[test]
    fn visible_element_has_no_hidden_ancestor() {
        let t = template_of("<div><span></span></div>");
        let span = t
            .elements()
            .find(|(_, el)| el.name == "span")
            .map(|(id, _)| id)
            .unwrap();
        assert!(!is_hidden_from_screen_reader(&t, span));
    }

    #[test]
    fn ng_style_literal_map_hides() {
        let t = template_of(r#"<div [ngStyle]="{ display: 'none' }"></div>"#);
        assert!(is_hidden_from_screen_reader(&t, first_element_id(&t)));
        let t = template_of(r#"<div [ngStyle]="{ visibility: 'hidden' }"></div>"#);
        assert!(is_hidden_from_screen_reader(&t, first_element_id(&t)));
        let t = template_of(r#"<div [ngStyle]="{ display: expr }"></div>"#);
        assert!(!is_hidden_from_screen_reader(&t, first_element_id(&t)));
    }

    #[test]
    fn style_dot_bindings_hide() {
        for source in [
            r#"<div [style.display]="'none'"></div>"#,
            r#"<div [style.display.none]="true"></div>"#,
            r#"<div [style.visibility]="'hidden'"></div>"#,
            r#"<div [style.visibility.hidden]="true"></div>"#,
        ] {
            let t = template_of(source);
            assert!(is_hidden_from_screen_reader(&t, first_element_id(&t)), "{source}");
        }
        let t = template_of(r#"<div [style.display]="mode"></div>"#);
        assert!(!is_hidden_from_screen_reader(&t, first_element_id(&t)));
    }

    #[test]
    fn static_style_text_hides() {
        let t = template_of(r#"<div style="color: red; display : none"></div>"#);
        assert!(is_hidden_from_screen_reader(&t, first_element_id(&t)));
        let t = template_of(r#"<div style="display: block"></div>"#);
        assert!(!is_hidden_from_screen_reader(&t, first_element_id(&t)));
    }

    #[test]
    fn hidden_input_is_hidden() {
        let t = template_of(r#"<input type="hidden">"#);
        assert!(is_hidden_from_screen_reader(&t, first_element_id(&t)));
        let t = template_of(r#"<input [type]="kind">"#);
        assert!(!is_hidden_from_screen_reader(&t, first_element_id(&t)));
    }

    // --- disabled / contenteditable / presentation ---

    #[test]
    fn disabled_is_presence_based() {
        assert!(is_disabled_element(first_element(&template_of(
            "<button disabled></button>"
        ))));
        assert!(is_disabled_element(first_element(&template_of(
            r#"<button [disabled]="cond"></button>"#
        ))));
        assert!(!is_disabled_element(first_element(&template_of(
            "<button></button>"
        ))));
    }

    #[test]
    fn aria_disabled_needs_provable_true() {
        assert!(is_disabled_element(first_element(&template_of(
            r#"<div aria-disabled="true"></div>"#
        ))));
        assert!(!is_disabled_element(first_element(&template_of(
            r#"<div [attr.aria-disabled]="cond"></div>"#
        ))));
    }

    #[test]
    fn contenteditable_variants() {
        assert!(is_content_editable(first_element(&template_of(
            r#"<div contenteditable></div>"#
        ))));
        assert!(is_content_editable(first_element(&template_of(
            r#"<div contenteditable="TRUE"></div>"#
        ))));
        assert!(!is_content_editable(first_element(&template_of(
            r#"<div contenteditable="false"></div>"#
        ))));
        assert!(!is_content_editable(first_element(&template_of(
            r#"<div [attr.contenteditable]="flag"></div>"#
        ))));
    }

    #[test]
    fn presentation_role_literals() {
        for source in [
            r#"<img role="presentation">"#,
            r#"<img role="none">"#,
            r#"<img [attr.role]="'presentation'">"#,
        ] {
            let el = &template_of(source);
            assert!(
                is_presentation_role(first_element(el), DynamicRolePolicy::Conservative),
                "{source}"
            );
        }
    }

    #[test]
    fn dynamic_role_follows_policy() {
        let t = template_of(r#"<img [attr.role]="computed">"#);
        let el = first_element(&t);
        assert!(is_presentation_role(el, DynamicRolePolicy::Permissive));
        assert!(!is_presentation_role(el, DynamicRolePolicy::Conservative));
    }

    // --- requirements / schemas ---

    #[test]
    fn requirement_value_uses_boolean_coercion() {
        let req = AttributeRequirement {
            name: "checked",
            value: Some("true"),
        };
        let t = template_of(r#"<input [checked]="true">"#);
        assert!(satisfies(&req, first_element(&t)));
        let t = template_of(r#"<input checked="true">"#);
        assert!(satisfies(&req, first_element(&t)));
        let t = template_of(r#"<input [checked]="anything">"#);
        assert!(!satisfies(&req, first_element(&t)));
    }

    #[test]
    fn router_link_satisfies_href_on_anchor() {
        let req = AttributeRequirement {
            name: "href",
            value: None,
        };
        let t = template_of(r#"<a routerLink="/home">Home</a>"#);
        assert!(satisfies(&req, first_element(&t)));
        let t = template_of(r#"<span routerLink="/home"></span>"#);
        assert!(!satisfies(&req, first_element(&t)));
    }

    #[test]
    fn interactive_by_role_schema() {
        let ontology = Ontology::new();
        assert!(is_interactive_element(
            &ontology,
            first_element(&template_of("<button></button>"))
        ));
        assert!(is_interactive_element(
            &ontology,
            first_element(&template_of(r#"<input type="checkbox">"#))
        ));
        assert!(is_interactive_element(
            &ontology,
            first_element(&template_of(r#"<a href="/x">x</a>"#))
        ));
    }

    #[test]
    fn non_interactive_schema_short_circuits_ax() {
        let ontology = Ontology::new();
        // article has a non-interactive role schema; no AX widget may override
        assert!(!is_interactive_element(
            &ontology,
            first_element(&template_of("<article></article>"))
        ));
        assert!(!is_interactive_element(
            &ontology,
            first_element(&template_of("<div></div>"))
        ));
    }

    #[test]
    fn summary_is_interactive_through_ax_only() {
        let ontology = Ontology::new();
        assert!(is_interactive_element(
            &ontology,
            first_element(&template_of("<summary></summary>"))
        ));
    }

    #[test]
    fn router_link_anchor_is_interactive() {
        let ontology = Ontology::new();
        assert!(is_interactive_element(
            &ontology,
            first_element(&template_of(r#"<a routerLink="/home">Home</a>"#))
        ));
        assert!(!is_interactive_element(
            &ontology,
            first_element(&template_of("<a>plain</a>"))
        ));
    }

    #[test]
    fn semantic_role_element_suppression() {
        let ontology = Ontology::new();
        let t = template_of(r#"<input type="checkbox" role="checkbox">"#);
        assert!(is_semantic_role_element(
            &ontology,
            first_element(&t),
            "checkbox"
        ));
        let t = template_of(r#"<div role="checkbox"></div>"#);
        assert!(!is_semantic_role_element(
            &ontology,
            first_element(&t),
            "checkbox"
        ));
    }
}
