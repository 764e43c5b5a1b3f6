//! Attribute name and value resolution.
//!
//! The binding syntaxes mangle names in four ways: namespace prefixes
//! (`attr.aria-hidden`), dot-suffixed style/class keys
//! (`style.display.none`), target-qualified events (`window:resize`) and
//! two-way sugar (`[(ngModel)]` expands to an input `ngModel` plus an
//! output `ngModelChange`). [`AttributeRef::original_name`] is the single
//! choke point that recovers what the author wrote; every name comparison
//! in a predicate or rule goes through it.

use crate::template::expression::LiteralValue;
use crate::template::{BoundAttribute, BoundEvent, Element, Span, TextAttribute};

/// Uniform reference to any attribute-like entry on an element.
#[derive(Debug, Clone, Copy)]
pub enum AttributeRef<'a> {
    /// Static attribute.
    Static(&'a TextAttribute),
    /// Bound input.
    Bound(&'a BoundAttribute),
    /// Bound output.
    Event(&'a BoundEvent),
}

impl<'a> AttributeRef<'a> {
    /// Post-parse name (mangled; prefix-stripped, two-way outputs renamed).
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            Self::Static(attr) => &attr.name,
            Self::Bound(input) => &input.name,
            Self::Event(output) => &output.name,
        }
    }

    /// The attribute name as the author wrote it.
    ///
    /// - No recorded key detail: the parsed name is the written name.
    /// - Bound event with a detail: the detail. The output synthesized for
    ///   `[(ngModel)]` is internally `ngModelChange` but carries the
    ///   displayed name `ngModel`, which is what the author wrote; an
    ///   explicit `(ngModelChange)` has no detail and keeps its name.
    ///   Details likewise recover `window:resize` and `@fade.start`.
    /// - Bound input with a detail: the detail with a leading `attr.`
    ///   namespace stripped, so `[attr.role]` resolves to `role` while
    ///   `style.display` and `class.foo` details are returned whole.
    #[must_use]
    pub fn original_name(&self) -> &'a str {
        match self {
            Self::Static(attr) => &attr.name,
            Self::Event(output) => match &output.key_span.details {
                Some(details) => details,
                None => &output.name,
            },
            Self::Bound(input) => match &input.key_span.details {
                Some(details) => details.strip_prefix("attr.").unwrap_or(details),
                None => &input.name,
            },
        }
    }

    /// Full source span of the attribute.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Static(attr) => attr.span,
            Self::Bound(input) => input.span,
            Self::Event(output) => output.span,
        }
    }

    /// Span of the attribute key.
    #[must_use]
    pub fn key_span(&self) -> Span {
        match self {
            Self::Static(attr) => attr.key_span,
            Self::Bound(input) => input.key_span.span,
            Self::Event(output) => output.key_span.span,
        }
    }

    /// Whether this entry is a bound output.
    #[must_use]
    pub fn is_event(&self) -> bool {
        matches!(self, Self::Event(_))
    }

    /// Resolved value of this entry; `None` for outputs, which carry
    /// handlers rather than values.
    #[must_use]
    pub fn resolved_value(&self) -> Option<AttributeValue> {
        match self {
            Self::Static(attr) => Some(AttributeValue::Literal(LiteralValue::Str(
                attr.value.clone(),
            ))),
            Self::Bound(input) => Some(match input.value.as_literal() {
                Some(literal) => AttributeValue::Literal(literal.clone()),
                None => AttributeValue::Dynamic,
            }),
            Self::Event(_) => None,
        }
    }
}

/// Resolved value of a present attribute.
///
/// Absence is expressed by the `Option` around this type; the three-way
/// split (absent / present-but-dynamic / present-with-known-value) is
/// load-bearing for the predicates.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Bound input whose value is not a compile-time literal. Present but
    /// unknowable; never equality-match this against real values.
    Dynamic,
    /// Static attribute text or a bound literal.
    Literal(LiteralValue),
}

impl AttributeValue {
    /// Returns `true` for a dynamic (unknowable) value.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic)
    }

    /// The literal value, if knowable.
    #[must_use]
    pub fn as_literal(&self) -> Option<&LiteralValue> {
        match self {
            Self::Literal(v) => Some(v),
            Self::Dynamic => None,
        }
    }

    /// String payload of a knowable string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_literal().and_then(LiteralValue::as_str)
    }

    /// Integer reading of a knowable value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        self.as_literal().and_then(LiteralValue::as_int)
    }

    /// Whether the value reads as boolean `true`.
    #[must_use]
    pub fn is_true_like(&self) -> bool {
        self.as_literal().is_some_and(LiteralValue::is_true_like)
    }
}

impl Element {
    /// The logical attribute bag: static attributes and bound inputs.
    ///
    /// Any "does this element have attribute X" question consults the whole
    /// bag. Outputs are not part of it.
    pub fn attribute_bag(&self) -> impl Iterator<Item = AttributeRef<'_>> {
        self.attributes
            .iter()
            .map(AttributeRef::Static)
            .chain(self.inputs.iter().map(AttributeRef::Bound))
    }

    /// Every attribute-like entry: the bag plus bound outputs.
    pub fn all_attributes(&self) -> impl Iterator<Item = AttributeRef<'_>> {
        self.attribute_bag()
            .chain(self.outputs.iter().map(AttributeRef::Event))
    }

    /// First bag entry whose original name matches.
    #[must_use]
    pub fn bag_attribute(&self, original_name: &str) -> Option<AttributeRef<'_>> {
        self.attribute_bag()
            .find(|attr| attr.original_name() == original_name)
    }

    /// Whether the bag contains an attribute with this original name.
    #[must_use]
    pub fn has_bag_attribute(&self, original_name: &str) -> bool {
        self.bag_attribute(original_name).is_some()
    }

    /// Three-way value resolution by post-parse name.
    ///
    /// Static attributes are searched before bound inputs. Returns `None`
    /// when the name is absent from the bag entirely.
    #[must_use]
    pub fn attribute_value(&self, name: &str) -> Option<AttributeValue> {
        if let Some(attr) = self.attributes.iter().find(|a| a.name == name) {
            return Some(AttributeValue::Literal(LiteralValue::Str(
                attr.value.clone(),
            )));
        }
        let input = self.inputs.iter().find(|i| i.name == name)?;
        Some(match input.value.as_literal() {
            Some(literal) => AttributeValue::Literal(literal.clone()),
            None => AttributeValue::Dynamic,
        })
    }
}
