//! Shared accessibility ontology.
//!
//! Read-only lookup tables (native DOM elements, native event names, ARIA
//! roles and attributes, AX objects) plus partitions derived from them
//! (interactive vs non-interactive roles and element schemas). Derived
//! tables are computed at most once per [`Ontology`] instance; the tables
//! are static data, never configuration.
//!
//! Rules receive an `&Ontology` through their context instead of reaching
//! for module state. [`Ontology::global`] exists for callers without a
//! context, such as doctests.

mod aria;
mod ax;
mod dom;

pub use aria::{AriaPropertyDefinition, AriaValueType};
pub use ax::{AxObject, AxType};

use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::debug;

/// Requirement that an element carry an attribute, optionally with a
/// specific literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRequirement {
    /// Attribute name, compared against original (author-written) names.
    pub name: &'static str,
    /// Required literal value; `None` means presence alone satisfies.
    pub value: Option<&'static str>,
}

impl AttributeRequirement {
    /// Requirement satisfied by presence alone.
    pub(crate) const fn present(name: &'static str) -> Self {
        Self { name, value: None }
    }

    /// Requirement satisfied only by a matching literal value.
    pub(crate) const fn value(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }
}

/// An element shape: tag name plus the attribute requirements that
/// distinguish it (`input[type=checkbox]`).
#[derive(Debug, Clone, Copy)]
pub struct ElementSchema {
    /// Tag name, lower-case.
    pub element: &'static str,
    /// Attribute requirements; empty means the tag name alone matches.
    pub requirements: &'static [AttributeRequirement],
}

impl ElementSchema {
    pub(crate) const fn of(
        element: &'static str,
        requirements: &'static [AttributeRequirement],
    ) -> Self {
        Self {
            element,
            requirements,
        }
    }
}

/// A resolved ARIA role definition.
#[derive(Debug, Clone, Copy)]
pub struct RoleDefinition {
    /// Role name.
    pub name: &'static str,
    /// Abstract roles structure the ontology and are invalid in markup.
    pub is_abstract: bool,
    /// Superclass chains, outermost first.
    pub superclasses: &'static [&'static [&'static str]],
    /// `aria-*` attributes this role requires.
    pub required_properties: &'static [&'static str],
    /// Element shapes that natively carry this role.
    pub concepts: &'static [ElementSchema],
}

impl RoleDefinition {
    /// Whether any superclass chain passes through `widget`.
    #[must_use]
    pub fn is_widget(&self) -> bool {
        self.superclasses.iter().any(|chain| chain.contains(&"widget"))
    }
}

/// Provider for all ontology lookups.
///
/// Construction is free; each derived table is built lazily on first access
/// and cached for the provider's lifetime. Lookups never panic: unknown
/// names yield `None` or `false`.
pub struct Ontology {
    dom_elements: OnceLock<HashSet<&'static str>>,
    native_events: OnceLock<HashSet<&'static str>>,
    interactive_roles: OnceLock<Vec<&'static str>>,
    non_interactive_roles: OnceLock<Vec<&'static str>>,
    interactive_role_schemas: OnceLock<Vec<ElementSchema>>,
    non_interactive_role_schemas: OnceLock<Vec<ElementSchema>>,
    interactive_ax_schemas: OnceLock<Vec<ElementSchema>>,
}

static GLOBAL: Ontology = Ontology::new();

impl Ontology {
    /// Creates a provider with empty caches.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dom_elements: OnceLock::new(),
            native_events: OnceLock::new(),
            interactive_roles: OnceLock::new(),
            non_interactive_roles: OnceLock::new(),
            interactive_role_schemas: OnceLock::new(),
            non_interactive_role_schemas: OnceLock::new(),
            interactive_ax_schemas: OnceLock::new(),
        }
    }

    /// Process-wide shared provider.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// The set of native HTML element names.
    pub fn dom_elements(&self) -> &HashSet<&'static str> {
        self.dom_elements
            .get_or_init(|| dom::DOM_ELEMENTS.iter().copied().collect())
    }

    /// Whether `name` is a native HTML element (case-insensitive).
    #[must_use]
    pub fn is_dom_element(&self, name: &str) -> bool {
        self.dom_elements()
            .contains(name.to_ascii_lowercase().as_str())
    }

    /// The set of native DOM event names.
    pub fn native_event_names(&self) -> &HashSet<&'static str> {
        self.native_events
            .get_or_init(|| dom::NATIVE_EVENT_NAMES.iter().copied().collect())
    }

    /// Whether `name` is a native DOM event name (case-sensitive; event
    /// names like `DOMContentLoaded` are cased).
    #[must_use]
    pub fn is_native_event(&self, name: &str) -> bool {
        self.native_event_names().contains(name)
    }

    /// Looks up an ARIA role by name (case-insensitive).
    #[must_use]
    pub fn aria_role(&self, name: &str) -> Option<RoleDefinition> {
        let lower = name.to_ascii_lowercase();
        let idx = aria::ROLE_SUPERCLASSES
            .binary_search_by_key(&lower.as_str(), |(n, _)| n)
            .ok()?;
        let (role_name, superclasses) = aria::ROLE_SUPERCLASSES[idx];
        Some(RoleDefinition {
            name: role_name,
            is_abstract: aria::ABSTRACT_ROLES.contains(&role_name),
            superclasses,
            required_properties: sparse_lookup(aria::ROLE_REQUIRED_PROPERTIES, role_name)
                .unwrap_or(&[]),
            concepts: sparse_lookup(aria::ROLE_CONCEPTS, role_name).unwrap_or(&[]),
        })
    }

    /// Looks up an `aria-*` attribute definition by name (case-insensitive).
    #[must_use]
    pub fn aria_property(&self, name: &str) -> Option<&'static AriaPropertyDefinition> {
        let lower = name.to_ascii_lowercase();
        let idx = aria::ARIA_PROPERTIES
            .binary_search_by_key(&lower.as_str(), |p| p.name)
            .ok()?;
        Some(&aria::ARIA_PROPERTIES[idx])
    }

    /// All known `aria-*` attribute definitions.
    #[must_use]
    pub fn aria_properties(&self) -> &'static [AriaPropertyDefinition] {
        aria::ARIA_PROPERTIES
    }

    /// All AX object definitions.
    #[must_use]
    pub fn ax_objects(&self) -> &'static [AxObject] {
        ax::AX_OBJECTS
    }

    /// Role names considered interactive, sorted.
    pub fn interactive_roles(&self) -> &[&'static str] {
        self.interactive_roles.get_or_init(|| {
            let roles: Vec<&'static str> = self
                .concrete_roles()
                .filter(|def| role_is_interactive(def))
                .map(|def| def.name)
                .collect();
            debug!("Derived {} interactive roles", roles.len());
            roles
        })
    }

    /// Role names considered non-interactive, sorted.
    pub fn non_interactive_roles(&self) -> &[&'static str] {
        self.non_interactive_roles.get_or_init(|| {
            self.concrete_roles()
                .filter(|def| !role_is_interactive(def))
                .map(|def| def.name)
                .collect()
        })
    }

    /// Whether `role` names an interactive role.
    #[must_use]
    pub fn is_interactive_role(&self, role: &str) -> bool {
        let lower = role.to_ascii_lowercase();
        self.interactive_roles()
            .binary_search(&lower.as_str())
            .is_ok()
    }

    /// Whether `role` names a known non-interactive role.
    #[must_use]
    pub fn is_non_interactive_role(&self, role: &str) -> bool {
        let lower = role.to_ascii_lowercase();
        self.non_interactive_roles()
            .binary_search(&lower.as_str())
            .is_ok()
    }

    /// Element schemas whose implied role is interactive.
    pub fn interactive_element_role_schemas(&self) -> &[ElementSchema] {
        self.interactive_role_schemas.get_or_init(|| {
            let schemas = self.role_schemas(true);
            debug!("Derived {} interactive element role schemas", schemas.len());
            schemas
        })
    }

    /// Element schemas whose implied role is non-interactive.
    pub fn non_interactive_element_role_schemas(&self) -> &[ElementSchema] {
        self.non_interactive_role_schemas
            .get_or_init(|| self.role_schemas(false))
    }

    /// Element schemas associated with widget-typed AX objects.
    pub fn interactive_element_ax_schemas(&self) -> &[ElementSchema] {
        self.interactive_ax_schemas.get_or_init(|| {
            ax::AX_OBJECTS
                .iter()
                .filter(|object| object.kind == AxType::Widget)
                .flat_map(|object| object.concepts.iter().copied())
                .collect()
        })
    }

    fn concrete_roles(&self) -> impl Iterator<Item = RoleDefinition> + '_ {
        aria::ROLE_SUPERCLASSES
            .iter()
            .filter_map(|(name, _)| self.aria_role(name))
            .filter(|def| !def.is_abstract)
    }

    fn role_schemas(&self, interactive: bool) -> Vec<ElementSchema> {
        self.concrete_roles()
            .filter(|def| role_is_interactive(def) == interactive)
            .flat_map(|def| def.concepts.iter().copied())
            .collect()
    }
}

impl Default for Ontology {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ontology").finish_non_exhaustive()
    }
}

/// Widget-derived partition with two special cases: `progressbar` reads as
/// a widget in the ontology but takes no input, `toolbar` takes input but
/// is not a widget.
fn role_is_interactive(def: &RoleDefinition) -> bool {
    match def.name {
        "progressbar" => false,
        "toolbar" => true,
        _ => def.is_widget(),
    }
}

fn sparse_lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table
        .binary_search_by_key(&name, |(n, _)| n)
        .ok()
        .map(|idx| table[idx].1)
}
