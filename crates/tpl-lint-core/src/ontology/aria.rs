//! ARIA role and attribute definition tables.
//!
//! Role rows carry the superclass chains used to derive the
//! interactive/non-interactive partitions, the properties a role requires,
//! and the HTML element concepts the role maps to. Attribute rows carry the
//! value typing used to validate `aria-*` values.

use super::{AttributeRequirement, ElementSchema};
use crate::template::expression::LiteralValue;

/// Abstract roles: valid in the ontology, never valid in markup.
pub(crate) const ABSTRACT_ROLES: &[&str] = &[
    "command",
    "composite",
    "input",
    "landmark",
    "range",
    "roletype",
    "section",
    "sectionhead",
    "select",
    "structure",
    "widget",
    "window",
];

/// Role name to superclass chains, sorted by name.
///
/// A role is a widget iff any chain contains `widget`. Presence in this
/// table is what makes a role name known.
pub(crate) const ROLE_SUPERCLASSES: &[(&str, &[&[&str]])] = &[
    ("alert", &[&["roletype", "structure", "section"]]),
    (
        "alertdialog",
        &[
            &["roletype", "structure", "section", "alert"],
            &["roletype", "window", "dialog"],
        ],
    ),
    ("application", &[&["roletype", "structure"]]),
    ("article", &[&["roletype", "structure", "document"]]),
    ("banner", &[&["roletype", "structure", "section", "landmark"]]),
    ("button", &[&["roletype", "widget", "command"]]),
    ("caption", &[&["roletype", "structure", "section"]]),
    ("cell", &[&["roletype", "structure", "section"]]),
    ("checkbox", &[&["roletype", "widget", "input"]]),
    (
        "columnheader",
        &[
            &["roletype", "structure", "section", "cell"],
            &["roletype", "widget", "gridcell"],
            &["roletype", "structure", "sectionhead"],
        ],
    ),
    ("combobox", &[&["roletype", "widget", "input"]]),
    (
        "command",
        &[&["roletype", "widget"]],
    ),
    (
        "complementary",
        &[&["roletype", "structure", "section", "landmark"]],
    ),
    ("composite", &[&["roletype", "widget"]]),
    (
        "contentinfo",
        &[&["roletype", "structure", "section", "landmark"]],
    ),
    ("definition", &[&["roletype", "structure", "section"]]),
    ("dialog", &[&["roletype", "window"]]),
    ("directory", &[&["roletype", "structure", "section", "list"]]),
    ("document", &[&["roletype", "structure"]]),
    ("feed", &[&["roletype", "structure", "section", "list"]]),
    ("figure", &[&["roletype", "structure", "section"]]),
    ("form", &[&["roletype", "structure", "section", "landmark"]]),
    ("generic", &[&["roletype", "structure"]]),
    (
        "grid",
        &[
            &["roletype", "widget", "composite"],
            &["roletype", "structure", "section", "table"],
        ],
    ),
    (
        "gridcell",
        &[
            &["roletype", "structure", "section", "cell"],
            &["roletype", "widget"],
        ],
    ),
    ("group", &[&["roletype", "structure", "section"]]),
    ("heading", &[&["roletype", "structure", "sectionhead"]]),
    ("img", &[&["roletype", "structure", "section"]]),
    ("input", &[&["roletype", "widget"]]),
    ("landmark", &[&["roletype", "structure", "section"]]),
    ("link", &[&["roletype", "widget", "command"]]),
    ("list", &[&["roletype", "structure", "section"]]),
    (
        "listbox",
        &[
            &["roletype", "widget", "composite", "select"],
            &["roletype", "structure", "section", "group", "select"],
        ],
    ),
    ("listitem", &[&["roletype", "structure", "section"]]),
    ("log", &[&["roletype", "structure", "section"]]),
    ("main", &[&["roletype", "structure", "section", "landmark"]]),
    ("marquee", &[&["roletype", "structure", "section"]]),
    ("math", &[&["roletype", "structure", "section"]]),
    (
        "menu",
        &[
            &["roletype", "widget", "composite", "select"],
            &["roletype", "structure", "section", "group", "select"],
        ],
    ),
    (
        "menubar",
        &[&["roletype", "widget", "composite", "select", "menu"]],
    ),
    ("menuitem", &[&["roletype", "widget", "command"]]),
    (
        "menuitemcheckbox",
        &[
            &["roletype", "widget", "input", "checkbox"],
            &["roletype", "widget", "command", "menuitem"],
        ],
    ),
    (
        "menuitemradio",
        &[
            &["roletype", "widget", "input", "radio"],
            &["roletype", "widget", "command", "menuitem"],
        ],
    ),
    ("meter", &[&["roletype", "structure", "range"]]),
    (
        "navigation",
        &[&["roletype", "structure", "section", "landmark"]],
    ),
    ("none", &[&["roletype", "structure"]]),
    ("note", &[&["roletype", "structure", "section"]]),
    ("option", &[&["roletype", "widget", "input"]]),
    ("presentation", &[&["roletype", "structure"]]),
    (
        "progressbar",
        &[
            &["roletype", "structure", "range"],
            &["roletype", "widget"],
        ],
    ),
    ("radio", &[&["roletype", "widget", "input"]]),
    (
        "radiogroup",
        &[
            &["roletype", "widget", "composite", "select"],
            &["roletype", "structure", "section", "group", "select"],
        ],
    ),
    ("range", &[&["roletype", "structure"]]),
    ("region", &[&["roletype", "structure", "section", "landmark"]]),
    ("roletype", &[]),
    (
        "row",
        &[
            &["roletype", "structure", "section", "group"],
            &["roletype", "widget"],
        ],
    ),
    ("rowgroup", &[&["roletype", "structure"]]),
    (
        "rowheader",
        &[
            &["roletype", "structure", "section", "cell"],
            &["roletype", "widget", "gridcell"],
            &["roletype", "structure", "sectionhead"],
        ],
    ),
    (
        "scrollbar",
        &[
            &["roletype", "structure", "range"],
            &["roletype", "widget"],
        ],
    ),
    ("search", &[&["roletype", "structure", "section", "landmark"]]),
    ("searchbox", &[&["roletype", "widget", "input", "textbox"]]),
    ("section", &[&["roletype", "structure"]]),
    ("sectionhead", &[&["roletype", "structure"]]),
    (
        "select",
        &[
            &["roletype", "widget", "composite"],
            &["roletype", "structure", "section", "group"],
        ],
    ),
    ("separator", &[&["roletype", "structure"]]),
    (
        "slider",
        &[
            &["roletype", "widget", "input"],
            &["roletype", "structure", "range"],
        ],
    ),
    (
        "spinbutton",
        &[
            &["roletype", "widget", "composite"],
            &["roletype", "widget", "input"],
            &["roletype", "structure", "range"],
        ],
    ),
    ("status", &[&["roletype", "structure", "section"]]),
    ("structure", &[&["roletype"]]),
    ("switch", &[&["roletype", "widget", "input", "checkbox"]]),
    (
        "tab",
        &[
            &["roletype", "structure", "sectionhead"],
            &["roletype", "widget"],
        ],
    ),
    ("table", &[&["roletype", "structure", "section"]]),
    ("tablist", &[&["roletype", "widget", "composite"]]),
    ("tabpanel", &[&["roletype", "structure", "section"]]),
    ("term", &[&["roletype", "structure", "section"]]),
    ("textbox", &[&["roletype", "widget", "input"]]),
    ("timer", &[&["roletype", "structure", "section", "status"]]),
    ("toolbar", &[&["roletype", "structure", "section", "group"]]),
    ("tooltip", &[&["roletype", "structure", "section"]]),
    (
        "tree",
        &[
            &["roletype", "widget", "composite", "select"],
            &["roletype", "structure", "section", "group", "select"],
        ],
    ),
    ("treegrid", &[&["roletype", "widget", "composite", "grid"]]),
    (
        "treeitem",
        &[
            &["roletype", "structure", "section", "listitem"],
            &["roletype", "widget", "input", "option"],
        ],
    ),
    ("widget", &[&["roletype"]]),
    ("window", &[&["roletype"]]),
];

/// Properties a role requires, sorted by role name. Roles absent here
/// require nothing.
pub(crate) const ROLE_REQUIRED_PROPERTIES: &[(&str, &[&str])] = &[
    ("checkbox", &["aria-checked"]),
    ("combobox", &["aria-expanded"]),
    ("heading", &["aria-level"]),
    ("menuitemcheckbox", &["aria-checked"]),
    ("menuitemradio", &["aria-checked"]),
    ("meter", &["aria-valuenow"]),
    ("option", &["aria-selected"]),
    ("radio", &["aria-checked"]),
    ("scrollbar", &["aria-controls", "aria-valuenow"]),
    ("slider", &["aria-valuenow"]),
    ("switch", &["aria-checked"]),
];

/// HTML element concepts per role, sorted by role name.
///
/// A concept is the element shape that natively carries the role;
/// `input[type=checkbox]` carries `checkbox`. Roles absent here have no
/// element-level equivalent.
pub(crate) const ROLE_CONCEPTS: &[(&str, &[ElementSchema])] = &[
    ("article", &[ElementSchema::of("article", &[])]),
    ("banner", &[ElementSchema::of("header", &[])]),
    (
        "button",
        &[
            ElementSchema::of("button", &[]),
            ElementSchema::of("input", &[AttributeRequirement::value("type", "button")]),
            ElementSchema::of("input", &[AttributeRequirement::value("type", "image")]),
            ElementSchema::of("input", &[AttributeRequirement::value("type", "reset")]),
            ElementSchema::of("input", &[AttributeRequirement::value("type", "submit")]),
        ],
    ),
    ("cell", &[ElementSchema::of("td", &[])]),
    (
        "checkbox",
        &[ElementSchema::of(
            "input",
            &[AttributeRequirement::value("type", "checkbox")],
        )],
    ),
    ("columnheader", &[ElementSchema::of("th", &[])]),
    ("combobox", &[ElementSchema::of("select", &[])]),
    ("complementary", &[ElementSchema::of("aside", &[])]),
    ("contentinfo", &[ElementSchema::of("footer", &[])]),
    ("definition", &[ElementSchema::of("dd", &[])]),
    ("dialog", &[ElementSchema::of("dialog", &[])]),
    ("figure", &[ElementSchema::of("figure", &[])]),
    ("form", &[ElementSchema::of("form", &[])]),
    ("gridcell", &[ElementSchema::of("td", &[])]),
    (
        "group",
        &[
            ElementSchema::of("address", &[]),
            ElementSchema::of("details", &[]),
            ElementSchema::of("fieldset", &[]),
            ElementSchema::of("optgroup", &[]),
        ],
    ),
    (
        "heading",
        &[
            ElementSchema::of("h1", &[]),
            ElementSchema::of("h2", &[]),
            ElementSchema::of("h3", &[]),
            ElementSchema::of("h4", &[]),
            ElementSchema::of("h5", &[]),
            ElementSchema::of("h6", &[]),
        ],
    ),
    ("img", &[ElementSchema::of("img", &[])]),
    (
        "link",
        &[
            ElementSchema::of("a", &[AttributeRequirement::present("href")]),
            ElementSchema::of("area", &[AttributeRequirement::present("href")]),
        ],
    ),
    (
        "list",
        &[
            ElementSchema::of("menu", &[]),
            ElementSchema::of("ol", &[]),
            ElementSchema::of("ul", &[]),
        ],
    ),
    ("listbox", &[ElementSchema::of("datalist", &[])]),
    ("listitem", &[ElementSchema::of("li", &[])]),
    ("main", &[ElementSchema::of("main", &[])]),
    ("marquee", &[ElementSchema::of("marquee", &[])]),
    ("math", &[ElementSchema::of("math", &[])]),
    ("meter", &[ElementSchema::of("meter", &[])]),
    ("navigation", &[ElementSchema::of("nav", &[])]),
    ("option", &[ElementSchema::of("option", &[])]),
    ("progressbar", &[ElementSchema::of("progress", &[])]),
    (
        "radio",
        &[ElementSchema::of(
            "input",
            &[AttributeRequirement::value("type", "radio")],
        )],
    ),
    ("region", &[ElementSchema::of("section", &[])]),
    ("row", &[ElementSchema::of("tr", &[])]),
    (
        "rowgroup",
        &[
            ElementSchema::of("tbody", &[]),
            ElementSchema::of("tfoot", &[]),
            ElementSchema::of("thead", &[]),
        ],
    ),
    (
        "rowheader",
        &[ElementSchema::of(
            "th",
            &[AttributeRequirement::value("scope", "row")],
        )],
    ),
    (
        "searchbox",
        &[ElementSchema::of(
            "input",
            &[AttributeRequirement::value("type", "search")],
        )],
    ),
    ("separator", &[ElementSchema::of("hr", &[])]),
    (
        "slider",
        &[ElementSchema::of(
            "input",
            &[AttributeRequirement::value("type", "range")],
        )],
    ),
    (
        "spinbutton",
        &[ElementSchema::of(
            "input",
            &[AttributeRequirement::value("type", "number")],
        )],
    ),
    ("status", &[ElementSchema::of("output", &[])]),
    ("table", &[ElementSchema::of("table", &[])]),
    (
        "term",
        &[ElementSchema::of("dfn", &[]), ElementSchema::of("dt", &[])],
    ),
    (
        "textbox",
        &[
            ElementSchema::of("input", &[AttributeRequirement::value("type", "text")]),
            ElementSchema::of("textarea", &[]),
        ],
    ),
];

/// Value typing for an `aria-*` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaValueType {
    /// `true` / `false`.
    Boolean,
    /// `true` / `false` / `mixed`.
    Tristate,
    /// Single element id reference.
    Id,
    /// Space-separated id references.
    IdList,
    /// Integer value.
    Integer,
    /// Numeric value.
    Number,
    /// Unconstrained string.
    String,
    /// One of a fixed token set.
    Token,
    /// Space-separated subset of a fixed token set.
    TokenList,
}

/// Definition of a single `aria-*` attribute.
#[derive(Debug, Clone, Copy)]
pub struct AriaPropertyDefinition {
    /// Attribute name, including the `aria-` prefix.
    pub name: &'static str,
    /// Value typing.
    pub value_type: AriaValueType,
    /// Whether `undefined` (and a bare attribute) is an accepted value.
    pub allow_undefined: bool,
    /// Accepted tokens for [`AriaValueType::Token`] / [`AriaValueType::TokenList`].
    pub allowed_values: &'static [&'static str],
}

impl AriaPropertyDefinition {
    const fn typed(name: &'static str, value_type: AriaValueType) -> Self {
        Self {
            name,
            value_type,
            allow_undefined: false,
            allowed_values: &[],
        }
    }

    const fn tokens(name: &'static str, allowed_values: &'static [&'static str]) -> Self {
        Self {
            name,
            value_type: AriaValueType::Token,
            allow_undefined: false,
            allowed_values,
        }
    }

    const fn token_list(name: &'static str, allowed_values: &'static [&'static str]) -> Self {
        Self {
            name,
            value_type: AriaValueType::TokenList,
            allow_undefined: false,
            allowed_values,
        }
    }

    const fn undefinable(mut self) -> Self {
        self.allow_undefined = true;
        self
    }

    /// Whether a resolved literal is an acceptable value for this attribute.
    ///
    /// Dynamic bindings never reach this check; callers skip them as
    /// unknowable.
    #[must_use]
    pub fn accepts_literal(&self, value: &LiteralValue) -> bool {
        if self.allow_undefined && matches!(value, LiteralValue::Undefined) {
            return true;
        }
        if let LiteralValue::Str(s) = value {
            if s.is_empty() {
                return self.allow_undefined
                    || matches!(
                        self.value_type,
                        AriaValueType::String | AriaValueType::Id | AriaValueType::IdList
                    );
            }
        }
        match self.value_type {
            AriaValueType::Boolean => {
                matches!(token_text(value).as_deref(), Some("true" | "false"))
            }
            AriaValueType::Tristate => {
                matches!(token_text(value).as_deref(), Some("true" | "false" | "mixed"))
            }
            AriaValueType::Integer => value.as_int().is_some(),
            AriaValueType::Number => match value {
                LiteralValue::Number(_) => true,
                LiteralValue::Str(s) => s.trim().parse::<f64>().is_ok(),
                _ => false,
            },
            AriaValueType::Id | AriaValueType::IdList | AriaValueType::String => {
                matches!(value, LiteralValue::Str(_))
            }
            AriaValueType::Token => token_text(value)
                .is_some_and(|t| self.allowed_values.contains(&t.as_str())),
            AriaValueType::TokenList => match value {
                LiteralValue::Str(s) => {
                    let mut seen = false;
                    for token in s.split_whitespace() {
                        seen = true;
                        if !self
                            .allowed_values
                            .contains(&token.to_ascii_lowercase().as_str())
                        {
                            return false;
                        }
                    }
                    seen
                }
                _ => false,
            },
        }
    }
}

fn token_text(value: &LiteralValue) -> Option<String> {
    match value {
        LiteralValue::Str(s) => Some(s.to_ascii_lowercase()),
        LiteralValue::Bool(b) => Some(b.to_string()),
        LiteralValue::Undefined => Some("undefined".to_string()),
        _ => None,
    }
}

/// All known `aria-*` attributes, sorted by name.
pub(crate) const ARIA_PROPERTIES: &[AriaPropertyDefinition] = &[
    AriaPropertyDefinition::typed("aria-activedescendant", AriaValueType::Id),
    AriaPropertyDefinition::typed("aria-atomic", AriaValueType::Boolean),
    AriaPropertyDefinition::tokens("aria-autocomplete", &["inline", "list", "both", "none"]),
    AriaPropertyDefinition::typed("aria-braillelabel", AriaValueType::String),
    AriaPropertyDefinition::typed("aria-brailleroledescription", AriaValueType::String),
    AriaPropertyDefinition::typed("aria-busy", AriaValueType::Boolean),
    AriaPropertyDefinition::typed("aria-checked", AriaValueType::Tristate),
    AriaPropertyDefinition::typed("aria-colcount", AriaValueType::Integer),
    AriaPropertyDefinition::typed("aria-colindex", AriaValueType::Integer),
    AriaPropertyDefinition::typed("aria-colspan", AriaValueType::Integer),
    AriaPropertyDefinition::typed("aria-controls", AriaValueType::IdList),
    AriaPropertyDefinition::tokens(
        "aria-current",
        &["page", "step", "location", "date", "time", "true", "false"],
    ),
    AriaPropertyDefinition::typed("aria-describedby", AriaValueType::IdList),
    AriaPropertyDefinition::typed("aria-description", AriaValueType::String),
    AriaPropertyDefinition::typed("aria-details", AriaValueType::Id),
    AriaPropertyDefinition::typed("aria-disabled", AriaValueType::Boolean),
    AriaPropertyDefinition::token_list(
        "aria-dropeffect",
        &["copy", "execute", "link", "move", "none", "popup"],
    ),
    AriaPropertyDefinition::typed("aria-errormessage", AriaValueType::Id),
    AriaPropertyDefinition::typed("aria-expanded", AriaValueType::Boolean).undefinable(),
    AriaPropertyDefinition::typed("aria-flowto", AriaValueType::IdList),
    AriaPropertyDefinition::typed("aria-grabbed", AriaValueType::Boolean).undefinable(),
    AriaPropertyDefinition::tokens(
        "aria-haspopup",
        &["false", "true", "menu", "listbox", "tree", "grid", "dialog"],
    ),
    AriaPropertyDefinition::typed("aria-hidden", AriaValueType::Boolean).undefinable(),
    AriaPropertyDefinition::tokens("aria-invalid", &["grammar", "false", "spelling", "true"]),
    AriaPropertyDefinition::typed("aria-keyshortcuts", AriaValueType::String),
    AriaPropertyDefinition::typed("aria-label", AriaValueType::String),
    AriaPropertyDefinition::typed("aria-labelledby", AriaValueType::IdList),
    AriaPropertyDefinition::typed("aria-level", AriaValueType::Integer),
    AriaPropertyDefinition::tokens("aria-live", &["assertive", "off", "polite"]),
    AriaPropertyDefinition::typed("aria-modal", AriaValueType::Boolean),
    AriaPropertyDefinition::typed("aria-multiline", AriaValueType::Boolean),
    AriaPropertyDefinition::typed("aria-multiselectable", AriaValueType::Boolean),
    AriaPropertyDefinition::tokens("aria-orientation", &["vertical", "undefined", "horizontal"]),
    AriaPropertyDefinition::typed("aria-owns", AriaValueType::IdList),
    AriaPropertyDefinition::typed("aria-placeholder", AriaValueType::String),
    AriaPropertyDefinition::typed("aria-posinset", AriaValueType::Integer),
    AriaPropertyDefinition::typed("aria-pressed", AriaValueType::Tristate),
    AriaPropertyDefinition::typed("aria-readonly", AriaValueType::Boolean),
    AriaPropertyDefinition::token_list("aria-relevant", &["additions", "all", "removals", "text"]),
    AriaPropertyDefinition::typed("aria-required", AriaValueType::Boolean),
    AriaPropertyDefinition::typed("aria-roledescription", AriaValueType::String),
    AriaPropertyDefinition::typed("aria-rowcount", AriaValueType::Integer),
    AriaPropertyDefinition::typed("aria-rowindex", AriaValueType::Integer),
    AriaPropertyDefinition::typed("aria-rowspan", AriaValueType::Integer),
    AriaPropertyDefinition::typed("aria-selected", AriaValueType::Boolean).undefinable(),
    AriaPropertyDefinition::typed("aria-setsize", AriaValueType::Integer),
    AriaPropertyDefinition::tokens("aria-sort", &["ascending", "descending", "none", "other"]),
    AriaPropertyDefinition::typed("aria-valuemax", AriaValueType::Number),
    AriaPropertyDefinition::typed("aria-valuemin", AriaValueType::Number),
    AriaPropertyDefinition::typed("aria-valuenow", AriaValueType::Number),
    AriaPropertyDefinition::typed("aria-valuetext", AriaValueType::String),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_table_is_sorted_by_name() {
        for pair in ROLE_SUPERCLASSES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn property_table_is_sorted_and_prefixed() {
        for pair in ARIA_PROPERTIES.windows(2) {
            assert!(pair[0].name < pair[1].name);
        }
        assert!(ARIA_PROPERTIES.iter().all(|p| p.name.starts_with("aria-")));
    }

    #[test]
    fn sparse_tables_reference_known_roles() {
        let known = |name: &str| {
            ROLE_SUPERCLASSES
                .binary_search_by_key(&name, |(n, _)| n)
                .is_ok()
        };
        assert!(ROLE_REQUIRED_PROPERTIES.iter().all(|(r, _)| known(r)));
        assert!(ROLE_CONCEPTS.iter().all(|(r, _)| known(r)));
        assert!(ABSTRACT_ROLES.iter().all(|r| known(r)));
    }

    #[test]
    fn required_properties_are_known_aria_attributes() {
        let known = |name: &str| {
            ARIA_PROPERTIES
                .binary_search_by_key(&name, |p| p.name)
                .is_ok()
        };
        for (_, props) in ROLE_REQUIRED_PROPERTIES {
            assert!(props.iter().all(|p| known(p)));
        }
    }

    fn prop(name: &str) -> &'static AriaPropertyDefinition {
        let idx = ARIA_PROPERTIES
            .binary_search_by_key(&name, |p| p.name)
            .unwrap();
        &ARIA_PROPERTIES[idx]
    }

    #[test]
    fn boolean_accepts_true_false_only() {
        let atomic = prop("aria-atomic");
        assert!(atomic.accepts_literal(&LiteralValue::Str("true".into())));
        assert!(atomic.accepts_literal(&LiteralValue::Bool(false)));
        assert!(!atomic.accepts_literal(&LiteralValue::Str("yes".into())));
        assert!(!atomic.accepts_literal(&LiteralValue::Str(String::new())));
    }

    #[test]
    fn undefinable_boolean_accepts_bare_and_undefined() {
        let expanded = prop("aria-expanded");
        assert!(expanded.accepts_literal(&LiteralValue::Str(String::new())));
        assert!(expanded.accepts_literal(&LiteralValue::Undefined));
        assert!(!expanded.accepts_literal(&LiteralValue::Str("maybe".into())));
    }

    #[test]
    fn tristate_accepts_mixed() {
        let checked = prop("aria-checked");
        assert!(checked.accepts_literal(&LiteralValue::Str("mixed".into())));
        assert!(checked.accepts_literal(&LiteralValue::Bool(true)));
        assert!(!checked.accepts_literal(&LiteralValue::Str("partial".into())));
    }

    #[test]
    fn integer_rejects_fractions() {
        let level = prop("aria-level");
        assert!(level.accepts_literal(&LiteralValue::Str("2".into())));
        assert!(level.accepts_literal(&LiteralValue::Number(3.0)));
        assert!(!level.accepts_literal(&LiteralValue::Number(2.5)));
        assert!(!level.accepts_literal(&LiteralValue::Str("two".into())));
    }

    #[test]
    fn token_matching_is_case_insensitive() {
        let live = prop("aria-live");
        assert!(live.accepts_literal(&LiteralValue::Str("Polite".into())));
        assert!(!live.accepts_literal(&LiteralValue::Str("loud".into())));
    }

    #[test]
    fn token_list_requires_all_tokens_known() {
        let relevant = prop("aria-relevant");
        assert!(relevant.accepts_literal(&LiteralValue::Str("additions text".into())));
        assert!(!relevant.accepts_literal(&LiteralValue::Str("additions bogus".into())));
    }
}
