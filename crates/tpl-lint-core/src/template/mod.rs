//! Template AST consumed by lint rules.
//!
//! The tree is arena-based: [`Template`] owns every node in a flat vector and
//! hands out [`NodeId`] handles. Parent links live in a separate index built
//! at parse time, so nodes never hold owning back-pointers and ascent always
//! terminates at the structural root.
//!
//! Attribute-like entries come in three shapes, mirroring the binding
//! syntaxes of the template dialect:
//!
//! - [`TextAttribute`]: a static attribute (`role="main"`, bare `disabled`)
//! - [`BoundAttribute`]: a bound input (`[hidden]`, `[attr.role]`,
//!   `[style.display.none]`, the input half of `[(ngModel)]`)
//! - [`BoundEvent`]: a bound output (`(click)`, `(window:resize)`,
//!   `(@fade.start)`, the synthesized output half of `[(ngModel)]`)
//!
//! Post-parse names are mangled (namespace prefixes stripped, two-way
//! outputs renamed). The author-written form survives in the key span
//! details and is recovered through
//! [`original_name`](crate::attributes::AttributeRef::original_name).

pub mod expression;
pub mod parser;

pub use expression::{BoundValue, LiteralValue};
pub use parser::{parse_template, parse_template_with_offset, ParseError};

/// Byte range into the source text that produced the template.
///
/// Offsets are absolute within the containing file: templates parsed from an
/// inline decorator literal carry the literal's base offset, so spans from
/// both sources convert to line/column the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl Span {
    /// Creates a span from start/end byte offsets.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Span of an attribute key together with the author-written name when the
/// parser mangled it (`attr.` stripped, two-way outputs renamed, event
/// targets folded in).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpan {
    /// Byte range of the key as written.
    pub span: Span,
    /// Original author-written name, when it differs from the parsed name.
    pub details: Option<String>,
}

impl KeySpan {
    /// Key span with no recorded detail (the parsed name is the written name).
    #[must_use]
    pub const fn plain(span: Span) -> Self {
        Self {
            span,
            details: None,
        }
    }

    /// Key span carrying the author-written name.
    #[must_use]
    pub fn detailed(span: Span, details: impl Into<String>) -> Self {
        Self {
            span,
            details: Some(details.into()),
        }
    }
}

/// A static attribute: `name`, `name="value"` or `name='value'`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAttribute {
    /// Attribute name as written.
    pub name: String,
    /// Attribute value; empty for bare attributes.
    pub value: String,
    /// Full span including name, `=` and quotes.
    pub span: Span,
    /// Span of the name.
    pub key_span: Span,
    /// Span of the value text, `None` for bare attributes.
    pub value_span: Option<Span>,
}

/// How a bound attribute binds to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// `[prop]="expr"`.
    Property,
    /// `[attr.name]="expr"`.
    Attribute,
    /// `[class.name]="expr"`.
    Class,
    /// `[style.prop]="expr"` or `[style.prop.unit]="expr"`.
    Style,
    /// `[(name)]="expr"`, the input half.
    TwoWay,
    /// `[@trigger]="expr"`.
    Animation,
}

/// A bound input such as `[hidden]="expr"` or `[attr.aria-label]="expr"`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundAttribute {
    /// Post-parse name with namespace prefixes stripped.
    pub name: String,
    /// Binding namespace.
    pub kind: BindingKind,
    /// Unit suffix of a style binding (`px` in `[style.width.px]`).
    pub unit: Option<String>,
    /// Bound value: a recognized literal or an opaque dynamic expression.
    pub value: BoundValue,
    /// Full span including brackets and value.
    pub span: Span,
    /// Key span; `details` holds the author-written name when mangled.
    pub key_span: KeySpan,
    /// Span of the value expression text.
    pub value_span: Option<Span>,
}

/// A bound output such as `(click)="handler()"`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundEvent {
    /// Post-parse event name (`click`, `resize`, `ngModelChange`).
    pub name: String,
    /// Event target for `(window:…)` / `(document:…)` / `(body:…)` forms.
    pub target: Option<String>,
    /// Animation phase for `(@trigger.phase)` forms.
    pub phase: Option<String>,
    /// Handler expression text.
    pub handler: String,
    /// Full span including parens and handler.
    pub span: Span,
    /// Key span; `details` holds the author-written name when mangled.
    pub key_span: KeySpan,
    /// Span of the handler text.
    pub handler_span: Option<Span>,
}

/// An element node with its attribute collections and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name as written (case preserved).
    pub name: String,
    /// Static attributes.
    pub attributes: Vec<TextAttribute>,
    /// Bound inputs, including the input halves of two-way bindings.
    pub inputs: Vec<BoundAttribute>,
    /// Bound outputs, including synthesized two-way change events.
    pub outputs: Vec<BoundEvent>,
    /// Child nodes in document order.
    pub children: Vec<NodeId>,
    /// Span from the opening `<` to the end of the element.
    pub span: Span,
    /// Span of the opening tag only.
    pub start_span: Span,
}

/// A text node; interpolations are kept verbatim in the text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Raw text content.
    pub value: String,
    /// Span of the text.
    pub span: Span,
}

/// An HTML comment node.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Comment body without the `<!--`/`-->` markers.
    pub value: String,
    /// Span including the markers.
    pub span: Span,
}

/// Any template node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// A run of text.
    Text(Text),
    /// A comment.
    Comment(Comment),
}

impl Node {
    /// Returns the element payload, if this node is an element.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Span of this node.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Element(el) => el.span,
            Self::Text(t) => t.span,
            Self::Comment(c) => c.span,
        }
    }
}

/// Handle to a node stored in a [`Template`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A parsed template: node arena, root list and parent index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    nodes: Vec<Node>,
    parents: Vec<Option<NodeId>>,
    roots: Vec<NodeId>,
}

impl Template {
    /// Stores a node and records its parent, returning its handle.
    pub(crate) fn push(&mut self, node: Node, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.parents.push(parent);
        if parent.is_none() {
            self.roots.push(id);
        }
        id
    }

    /// Replaces a previously pushed node (used while closing elements).
    pub(crate) fn replace(&mut self, id: NodeId, node: Node) {
        self.nodes[id.0] = node;
    }

    /// Node lookup.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Element lookup; `None` when the node is text or a comment.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node(id).as_element()
    }

    /// Parent of a node, `None` for roots.
    #[must_use]
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.0]
    }

    /// Top-level nodes in document order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` for an empty template.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates every node id in storage order (document order for starts).
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Iterates `(id, element)` pairs over all element nodes.
    pub fn elements(&self) -> impl Iterator<Item = (NodeId, &Element)> {
        self.nodes.iter().enumerate().filter_map(|(i, node)| {
            node.as_element().map(|el| (NodeId(i), el))
        })
    }

    /// Iterates the ancestors of `id`, nearest first, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            template: self,
            current: self.parent_of(id),
        }
    }

    /// Iterates `id` followed by its ancestors, nearest first.
    pub fn self_and_ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::once(id).chain(self.ancestors(id))
    }
}

/// Iterator over the ancestor chain of a node. Ends at the structural root.
pub struct Ancestors<'a> {
    template: &'a Template,
    current: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.template.parent_of(id);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(name: &str, span: Span) -> Node {
        Node::Element(Element {
            name: name.to_string(),
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            children: Vec::new(),
            span,
            start_span: span,
        })
    }

    #[test]
    fn parent_index_tracks_nesting() {
        let mut tpl = Template::default();
        let outer = tpl.push(element("div", Span::new(0, 30)), None);
        let inner = tpl.push(element("span", Span::new(5, 20)), Some(outer));
        let leaf = tpl.push(element("b", Span::new(10, 15)), Some(inner));

        assert_eq!(tpl.parent_of(outer), None);
        assert_eq!(tpl.parent_of(inner), Some(outer));
        assert_eq!(tpl.parent_of(leaf), Some(inner));
        assert_eq!(tpl.roots(), &[outer]);
    }

    #[test]
    fn ancestors_walk_to_root_and_stop() {
        let mut tpl = Template::default();
        let a = tpl.push(element("a", Span::new(0, 40)), None);
        let b = tpl.push(element("b", Span::new(5, 35)), Some(a));
        let c = tpl.push(element("c", Span::new(10, 30)), Some(b));

        let chain: Vec<_> = tpl.ancestors(c).collect();
        assert_eq!(chain, vec![b, a]);

        let with_self: Vec<_> = tpl.self_and_ancestors(c).collect();
        assert_eq!(with_self, vec![c, b, a]);

        assert_eq!(tpl.ancestors(a).count(), 0);
    }

    #[test]
    fn elements_skips_text_nodes() {
        let mut tpl = Template::default();
        let root = tpl.push(element("p", Span::new(0, 20)), None);
        tpl.push(
            Node::Text(Text {
                value: "hello".to_string(),
                span: Span::new(3, 8),
            }),
            Some(root),
        );

        assert_eq!(tpl.elements().count(), 1);
        assert_eq!(tpl.len(), 2);
    }

    #[test]
    fn span_length_is_saturating() {
        assert_eq!(Span::new(3, 10).len(), 7);
        assert!(Span::new(5, 5).is_empty());
        assert_eq!(Span::new(10, 3).len(), 0);
    }
}
