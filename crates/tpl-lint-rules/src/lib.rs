//! # tpl-lint-rules
//!
//! Built-in lint rules for tpl-lint.
//!
//! This crate provides the template accessibility rules and the directive
//! metadata rules, built on the predicates and ontology in `tpl-lint-core`.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | TL001 | `click-events-have-key-events` | Requires key events alongside click events |
//! | TL002 | `interactive-supports-focus` | Requires tabindex on elements with interactive roles |
//! | TL003 | `mouse-events-have-key-events` | Requires focus/blur alongside mouseover/mouseout |
//! | TL004 | `no-autofocus` | Forbids the autofocus attribute |
//! | TL005 | `no-distracting-elements` | Forbids `<marquee>` and `<blink>` |
//! | TL006 | `no-duplicate-attributes` | Forbids duplicate attributes on one element |
//! | TL007 | `no-positive-tabindex` | Forbids tabindex values greater than zero |
//! | TL008 | `no-noninteractive-element-to-interactive-role` | Forbids interactive roles on non-interactive elements |
//! | TL009 | `role-has-required-aria` | Requires role-mandated aria attributes |
//! | TL010 | `valid-aria` | Validates aria-* attribute names and values |
//! | TL011 | `component-selector` | Enforces component selector conventions |
//! | TL012 | `directive-selector` | Enforces directive selector conventions |
//! | TL013 | `no-output-native` | Forbids outputs named after native DOM events |
//!
//! ## Usage
//!
//! ```ignore
//! use tpl_lint_core::Analyzer;
//! use tpl_lint_rules::{NoAutofocus, ValidAria};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .template_rule(NoAutofocus::new())
//!     .template_rule(ValidAria::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod click_events_have_key_events;
mod component_selector;
mod directive_selector;
mod interactive_supports_focus;
mod mouse_events_have_key_events;
mod no_autofocus;
mod no_distracting_elements;
mod no_duplicate_attributes;
mod no_noninteractive_element_to_interactive_role;
mod no_output_native;
mod no_positive_tabindex;
mod presets;
mod role_has_required_aria;
mod valid_aria;

pub use click_events_have_key_events::ClickEventsHaveKeyEvents;
pub use component_selector::ComponentSelector;
pub use directive_selector::DirectiveSelector;
pub use interactive_supports_focus::InteractiveSupportsFocus;
pub use mouse_events_have_key_events::MouseEventsHaveKeyEvents;
pub use no_autofocus::NoAutofocus;
pub use no_distracting_elements::NoDistractingElements;
pub use no_duplicate_attributes::NoDuplicateAttributes;
pub use no_noninteractive_element_to_interactive_role::NoNoninteractiveElementToInteractiveRole;
pub use no_output_native::NoOutputNative;
pub use no_positive_tabindex::NoPositiveTabindex;
pub use presets::{all_rules, minimal_rules, recommended_rules, strict_rules, Preset, RuleSet};
pub use role_has_required_aria::RoleHasRequiredAria;
pub use valid_aria::ValidAria;

/// Re-export core types for convenience.
pub use tpl_lint_core::{DirectiveRule, Severity, TemplateRule, Violation};
