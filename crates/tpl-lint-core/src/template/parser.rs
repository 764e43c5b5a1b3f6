//! Scanner for the template dialect.
//!
//! This is deliberately pragmatic plumbing: it covers the element and
//! binding syntax the lint rules reason about (static attributes, `[prop]`,
//! `[attr.x]`, `[style.x.unit]`, `[class.x]`, `[@trigger]`, `(event)`,
//! `(target:event)`, `(@trigger.phase)`, `[(twoWay)]` and the canonical
//! `bind-`/`on-`/`bindon-` prefixes, comments, text, void and self-closing
//! elements). Control-flow blocks and structural-directive microsyntax are
//! out of scope; `*dir` and `#ref` keys are recorded as static attributes.
//!
//! Recovery is lenient the way linters need it to be: unclosed elements are
//! implicitly closed at end of input and stray close tags are skipped.
//! Structural errors inside a tag stop the parse with a [`ParseError`].

use super::{
    BindingKind, BoundAttribute, BoundEvent, Comment, Element, KeySpan, Node, NodeId, Span,
    Template, Text, TextAttribute,
};
use crate::template::expression::BoundValue;

/// Error produced when the scanner cannot make sense of a tag.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message} at byte {offset}")]
pub struct ParseError {
    /// Human-readable description of the problem.
    pub message: String,
    /// Absolute byte offset where the problem was detected.
    pub offset: usize,
}

/// Elements that never have children or close tags.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Parses template source into a [`Template`].
///
/// ```
/// use tpl_lint_core::template::parse_template;
///
/// let tpl = parse_template("<div role=\"main\"><span>hi</span></div>").unwrap();
/// let (_, div) = tpl.elements().next().unwrap();
/// assert_eq!(div.name, "div");
/// assert_eq!(div.attributes[0].name, "role");
/// ```
pub fn parse_template(source: &str) -> Result<Template, ParseError> {
    parse_template_with_offset(source, 0)
}

/// Parses template source whose spans should start at `base` (used for
/// inline templates embedded in another file).
pub fn parse_template_with_offset(source: &str, base: usize) -> Result<Template, ParseError> {
    let mut parser = Parser {
        bytes: source.as_bytes(),
        pos: 0,
        base,
        template: Template::default(),
        stack: Vec::new(),
    };
    parser.run()?;
    Ok(parser.template)
}

/// An element whose close tag has not been seen yet.
struct OpenElement {
    id: NodeId,
    element: Element,
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    base: usize,
    template: Template,
    stack: Vec<OpenElement>,
}

impl Parser<'_> {
    fn run(&mut self) -> Result<(), ParseError> {
        while self.pos < self.bytes.len() {
            if self.peek() == Some(b'<') {
                match self.bytes.get(self.pos + 1) {
                    Some(b'!') => self.comment_or_doctype()?,
                    Some(b'/') => self.close_tag()?,
                    Some(c) if c.is_ascii_alphabetic() => self.open_tag()?,
                    _ => self.text(),
                }
            } else {
                self.text();
            }
        }
        // Anything still open is implicitly closed at end of input.
        let end = self.base + self.pos;
        while let Some(open) = self.stack.pop() {
            self.finish_element(open, end);
        }
        Ok(())
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.base + start, self.base + end)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            offset: self.base + self.pos,
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn slice(&self, start: usize, end: usize) -> &str {
        std::str::from_utf8(&self.bytes[start..end]).unwrap_or_default()
    }

    /// Attaches a finished node to the innermost open element, or the root.
    fn attach(&mut self, node: Node) -> NodeId {
        let parent = self.stack.last().map(|open| open.id);
        let id = self.template.push(node, parent);
        if let Some(open) = self.stack.last_mut() {
            open.element.children.push(id);
        }
        id
    }

    fn text(&mut self) {
        let start = self.pos;
        self.pos += 1;
        while self.pos < self.bytes.len() && self.peek() != Some(b'<') {
            self.pos += 1;
        }
        let value = self.slice(start, self.pos).to_string();
        if !value.trim().is_empty() {
            let span = self.span(start, self.pos);
            self.attach(Node::Text(Text { value, span }));
        }
    }

    fn comment_or_doctype(&mut self) -> Result<(), ParseError> {
        if self.bytes[self.pos..].starts_with(b"<!--") {
            let start = self.pos;
            let body_start = self.pos + 4;
            match find(self.bytes, body_start, b"-->") {
                Some(end) => {
                    let value = self.slice(body_start, end).to_string();
                    let span = self.span(start, end + 3);
                    self.pos = end + 3;
                    self.attach(Node::Comment(Comment { value, span }));
                    Ok(())
                }
                None => Err(self.error("unterminated comment")),
            }
        } else {
            // <!DOCTYPE …> and other declarations are skipped.
            match find(self.bytes, self.pos, b">") {
                Some(end) => {
                    self.pos = end + 1;
                    Ok(())
                }
                None => Err(self.error("unterminated declaration")),
            }
        }
    }

    fn close_tag(&mut self) -> Result<(), ParseError> {
        let tag_start = self.pos;
        self.pos += 2;
        let name_start = self.pos;
        while matches!(self.peek(), Some(b) if is_tag_name_byte(b)) {
            self.pos += 1;
        }
        let name = self.slice(name_start, self.pos).to_string();
        self.skip_ws();
        if self.peek() != Some(b'>') {
            return Err(self.error(format!("malformed close tag for `{name}`")));
        }
        self.pos += 1;

        let matched = self
            .stack
            .iter()
            .rposition(|open| open.element.name.eq_ignore_ascii_case(&name));
        if let Some(index) = matched {
            while self.stack.len() > index {
                if let Some(open) = self.stack.pop() {
                    // The matched element absorbs the close tag; elements it
                    // implicitly closes end where the close tag starts.
                    let end = if self.stack.len() == index {
                        self.base + self.pos
                    } else {
                        self.base + tag_start
                    };
                    self.finish_element(open, end);
                }
            }
        }
        // A close tag with no matching open element is skipped.
        Ok(())
    }

    fn finish_element(&mut self, mut open: OpenElement, end: usize) {
        open.element.span = Span::new(open.element.span.start, end);
        let id = open.id;
        self.template.replace(id, Node::Element(open.element));
    }

    fn open_tag(&mut self) -> Result<(), ParseError> {
        let tag_start = self.pos;
        self.pos += 1;
        let name_start = self.pos;
        while matches!(self.peek(), Some(b) if is_tag_name_byte(b)) {
            self.pos += 1;
        }
        let name = self.slice(name_start, self.pos).to_string();

        let mut element = Element {
            name,
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            children: Vec::new(),
            span: self.span(tag_start, tag_start),
            start_span: self.span(tag_start, tag_start),
        };

        let mut self_closing = false;
        loop {
            self.skip_ws();
            match self.peek() {
                None => return Err(self.error(format!("unterminated `<{}>` tag", element.name))),
                Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(b'/') => {
                    self.pos += 1;
                    if self.peek() == Some(b'>') {
                        self.pos += 1;
                        self_closing = true;
                        break;
                    }
                    return Err(self.error("expected `>` after `/`"));
                }
                Some(_) => self.attribute(&mut element)?,
            }
        }

        element.start_span = self.span(tag_start, self.pos);
        element.span = element.start_span;

        let is_void = VOID_ELEMENTS
            .iter()
            .any(|v| element.name.eq_ignore_ascii_case(v));
        if self_closing || is_void {
            self.attach(Node::Element(element));
        } else {
            let id = self.attach(Node::Element(element.clone()));
            self.stack.push(OpenElement { id, element });
        }
        Ok(())
    }

    /// Scans one attribute (static or bound) and adds it to `element`.
    fn attribute(&mut self, element: &mut Element) -> Result<(), ParseError> {
        let attr_start = self.pos;
        let key = self.attribute_key()?;
        self.skip_ws();

        let (value, value_span) = if self.peek() == Some(b'=') {
            self.pos += 1;
            self.skip_ws();
            let (text, span) = self.attribute_value()?;
            (Some(text), Some(span))
        } else {
            (None, None)
        };

        let attr_span = self.span(attr_start, self.pos);
        let name_span = self.span(key.name_start, key.name_end);
        self.build_attribute(element, &key, value, value_span, attr_span, name_span);
        Ok(())
    }

    fn build_attribute(
        &self,
        element: &mut Element,
        key: &ScannedKey,
        value: Option<String>,
        value_span: Option<Span>,
        attr_span: Span,
        name_span: Span,
    ) {
        let raw_name = self.slice(key.name_start, key.name_end).to_string();
        let expression = value.clone().unwrap_or_default();

        // Canonical prefix forms desugar to their bracket/paren equivalents.
        let (form, written) = match key.form {
            KeyForm::Plain => {
                if let Some(rest) = raw_name.strip_prefix("bindon-") {
                    (KeyForm::TwoWay, rest.to_string())
                } else if let Some(rest) = raw_name.strip_prefix("bind-") {
                    (KeyForm::Input, rest.to_string())
                } else if let Some(rest) = raw_name.strip_prefix("on-") {
                    (KeyForm::Output, rest.to_string())
                } else {
                    (KeyForm::Plain, raw_name)
                }
            }
            form => (form, raw_name),
        };

        match form {
            KeyForm::Plain => element.attributes.push(TextAttribute {
                name: written,
                value: value.unwrap_or_default(),
                span: attr_span,
                key_span: name_span,
                value_span,
            }),
            KeyForm::Input => {
                element
                    .inputs
                    .push(input_record(&written, &expression, attr_span, name_span, value_span));
            }
            KeyForm::Output => {
                element
                    .outputs
                    .push(output_record(&written, &expression, attr_span, name_span, value_span));
            }
            KeyForm::TwoWay => {
                element.inputs.push(BoundAttribute {
                    name: written.clone(),
                    kind: BindingKind::TwoWay,
                    unit: None,
                    value: BoundValue::from_expression(&expression),
                    span: attr_span,
                    key_span: KeySpan::plain(name_span),
                    value_span,
                });
                // The change side keeps the displayed name in its key details.
                element.outputs.push(BoundEvent {
                    name: format!("{written}Change"),
                    target: None,
                    phase: None,
                    handler: expression,
                    span: attr_span,
                    key_span: KeySpan::detailed(name_span, written),
                    handler_span: value_span,
                });
            }
        }
    }

    /// Scans the attribute key, honoring bracket and paren binding forms.
    fn attribute_key(&mut self) -> Result<ScannedKey, ParseError> {
        let start = self.pos;
        let (open, close): (usize, &[u8]) = match self.peek() {
            Some(b'[') => {
                if self.bytes.get(self.pos + 1) == Some(&b'(') {
                    (2, b")]")
                } else {
                    (1, b"]")
                }
            }
            Some(b'(') => (1, b")"),
            _ => (0, b""),
        };

        if open == 0 {
            while matches!(self.peek(), Some(b) if is_attr_name_byte(b)) {
                self.pos += 1;
            }
            if self.pos == start {
                return Err(self.error("expected attribute name"));
            }
            return Ok(ScannedKey {
                form: KeyForm::Plain,
                name_start: start,
                name_end: self.pos,
            });
        }

        self.pos += open;
        let name_start = self.pos;
        while matches!(self.peek(), Some(b) if is_binding_name_byte(b)) {
            self.pos += 1;
        }
        let name_end = self.pos;
        if name_end == name_start {
            return Err(self.error("empty binding name"));
        }
        if !self.bytes[self.pos..].starts_with(close) {
            let close = String::from_utf8_lossy(close);
            return Err(self.error(format!("expected `{close}` to end binding key")));
        }
        self.pos += close.len();
        let form = match (open, close) {
            (2, _) => KeyForm::TwoWay,
            (1, b"]") => KeyForm::Input,
            _ => KeyForm::Output,
        };
        Ok(ScannedKey {
            form,
            name_start,
            name_end,
        })
    }

    fn attribute_value(&mut self) -> Result<(String, Span), ParseError> {
        match self.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                self.pos += 1;
                let start = self.pos;
                while let Some(b) = self.peek() {
                    if b == quote {
                        let text = self.slice(start, self.pos).to_string();
                        let span = self.span(start, self.pos);
                        self.pos += 1;
                        return Ok((text, span));
                    }
                    self.pos += 1;
                }
                Err(self.error("unterminated attribute value"))
            }
            _ => {
                let start = self.pos;
                while matches!(self.peek(), Some(b) if !b.is_ascii_whitespace() && b != b'>' && b != b'/') {
                    self.pos += 1;
                }
                Ok((
                    self.slice(start, self.pos).to_string(),
                    self.span(start, self.pos),
                ))
            }
        }
    }
}

/// Builds the input record for a bound attribute key, resolving the binding
/// namespace and recording the written form in the key details when the
/// parsed name no longer matches it.
fn input_record(
    written: &str,
    expression: &str,
    span: Span,
    name_span: Span,
    value_span: Option<Span>,
) -> BoundAttribute {
    let value = BoundValue::from_expression(expression);
    let (kind, name, unit, details) = if let Some(rest) = written.strip_prefix("attr.") {
        (
            BindingKind::Attribute,
            rest.to_string(),
            None,
            Some(written.to_string()),
        )
    } else if let Some(rest) = written.strip_prefix("style.") {
        let (prop, unit) = match rest.split_once('.') {
            Some((prop, unit)) => (prop.to_string(), Some(unit.to_string())),
            None => (rest.to_string(), None),
        };
        (BindingKind::Style, prop, unit, Some(written.to_string()))
    } else if let Some(rest) = written.strip_prefix("class.") {
        (
            BindingKind::Class,
            rest.to_string(),
            None,
            Some(written.to_string()),
        )
    } else if let Some(rest) = written.strip_prefix('@') {
        (
            BindingKind::Animation,
            rest.to_string(),
            None,
            Some(written.to_string()),
        )
    } else {
        (BindingKind::Property, written.to_string(), None, None)
    };

    let key_span = match details {
        Some(details) => KeySpan::detailed(name_span, details),
        None => KeySpan::plain(name_span),
    };
    BoundAttribute {
        name,
        kind,
        unit,
        value,
        span,
        key_span,
        value_span,
    }
}

/// Builds the output record for a bound event key, folding out animation
/// phases and event targets.
fn output_record(
    written: &str,
    handler: &str,
    span: Span,
    name_span: Span,
    handler_span: Option<Span>,
) -> BoundEvent {
    let (name, target, phase, details) = if let Some(rest) = written.strip_prefix('@') {
        let (trigger, phase) = match rest.split_once('.') {
            Some((trigger, phase)) => (trigger.to_string(), Some(phase.to_string())),
            None => (rest.to_string(), None),
        };
        (trigger, None, phase, Some(written.to_string()))
    } else if let Some((target, event)) = written.split_once(':') {
        (
            event.to_string(),
            Some(target.to_string()),
            None,
            Some(written.to_string()),
        )
    } else {
        (written.to_string(), None, None, None)
    };

    let key_span = match details {
        Some(details) => KeySpan::detailed(name_span, details),
        None => KeySpan::plain(name_span),
    };
    BoundEvent {
        name,
        target,
        phase,
        handler: handler.to_string(),
        span,
        key_span,
        handler_span,
    }
}

/// Which binding syntax an attribute key used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyForm {
    Plain,
    Input,
    Output,
    TwoWay,
}

struct ScannedKey {
    form: KeyForm,
    name_start: usize,
    name_end: usize,
}

fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

fn is_attr_name_byte(b: u8) -> bool {
    !b.is_ascii_whitespace() && b != b'=' && b != b'>' && b != b'/' && b != b'"' && b != b'\''
}

fn is_binding_name_byte(b: u8) -> bool {
    !b.is_ascii_whitespace() && b != b']' && b != b')' && b != b'=' && b != b'>'
}

/// First occurrence of `needle` at or after `from`.
fn find(haystack: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| from + i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::LiteralValue;

    fn first_element(source: &str) -> Element {
        let tpl = parse_template(source).expect("parse");
        let element = tpl
            .elements()
            .next()
            .map(|(_, el)| el.clone())
            .expect("element");
        element
    }

    #[test]
    fn nested_elements_wire_parents_and_children() {
        let tpl = parse_template("<div><span>text</span><br></div>").unwrap();
        let (div_id, div) = tpl.elements().next().unwrap();
        assert_eq!(div.name, "div");
        assert_eq!(div.children.len(), 2);

        let span_id = div.children[0];
        assert_eq!(tpl.element(span_id).unwrap().name, "span");
        assert_eq!(tpl.parent_of(span_id), Some(div_id));

        let br = tpl.element(div.children[1]).unwrap();
        assert_eq!(br.name, "br");
        assert!(br.children.is_empty());
    }

    #[test]
    fn static_attribute_forms() {
        let el = first_element(r#"<div a="x" b='y' c=z d></div>"#);
        let values: Vec<_> = el
            .attributes
            .iter()
            .map(|a| (a.name.as_str(), a.value.as_str()))
            .collect();
        assert_eq!(values, vec![("a", "x"), ("b", "y"), ("c", "z"), ("d", "")]);
        assert!(el.attributes[3].value_span.is_none());
    }

    #[test]
    fn property_binding_literal_and_dynamic() {
        let el = first_element(r#"<div [hidden]="true" [title]="user.name"></div>"#);
        assert_eq!(el.inputs[0].name, "hidden");
        assert_eq!(el.inputs[0].kind, BindingKind::Property);
        assert_eq!(
            el.inputs[0].value,
            BoundValue::Literal(LiteralValue::Bool(true))
        );
        assert!(el.inputs[1].value.is_dynamic());
    }

    #[test]
    fn attr_binding_strips_namespace_into_details() {
        let el = first_element(r#"<div [attr.role]="'none'"></div>"#);
        let input = &el.inputs[0];
        assert_eq!(input.name, "role");
        assert_eq!(input.kind, BindingKind::Attribute);
        assert_eq!(input.key_span.details.as_deref(), Some("attr.role"));
    }

    #[test]
    fn style_binding_keeps_unit_and_written_name() {
        let el = first_element(r#"<div [style.display.none]="cond" [style.width.px]="w"></div>"#);
        assert_eq!(el.inputs[0].name, "display");
        assert_eq!(el.inputs[0].unit.as_deref(), Some("none"));
        assert_eq!(
            el.inputs[0].key_span.details.as_deref(),
            Some("style.display.none")
        );
        assert_eq!(el.inputs[1].key_span.details.as_deref(), Some("style.width.px"));
        assert_eq!(el.inputs[1].kind, BindingKind::Style);
    }

    #[test]
    fn class_and_animation_bindings() {
        let el = first_element(r#"<div [class.active]="on" [@fade]="state"></div>"#);
        assert_eq!(el.inputs[0].kind, BindingKind::Class);
        assert_eq!(el.inputs[0].name, "active");
        assert_eq!(el.inputs[1].kind, BindingKind::Animation);
        assert_eq!(el.inputs[1].key_span.details.as_deref(), Some("@fade"));
    }

    #[test]
    fn event_targets_and_phases_fold_into_details() {
        let el = first_element(
            r#"<div (click)="go()" (window:resize)="onResize()" (@fade.start)="started()"></div>"#,
        );
        assert_eq!(el.outputs[0].name, "click");
        assert_eq!(el.outputs[0].key_span.details, None);

        assert_eq!(el.outputs[1].name, "resize");
        assert_eq!(el.outputs[1].target.as_deref(), Some("window"));
        assert_eq!(el.outputs[1].key_span.details.as_deref(), Some("window:resize"));

        assert_eq!(el.outputs[2].name, "fade");
        assert_eq!(el.outputs[2].phase.as_deref(), Some("start"));
        assert_eq!(el.outputs[2].key_span.details.as_deref(), Some("@fade.start"));
    }

    #[test]
    fn two_way_binding_synthesizes_both_halves() {
        let el = first_element(r#"<input [(ngModel)]="name">"#);
        assert_eq!(el.inputs.len(), 1);
        assert_eq!(el.inputs[0].name, "ngModel");
        assert_eq!(el.inputs[0].kind, BindingKind::TwoWay);

        assert_eq!(el.outputs.len(), 1);
        assert_eq!(el.outputs[0].name, "ngModelChange");
        assert_eq!(el.outputs[0].key_span.details.as_deref(), Some("ngModel"));
    }

    #[test]
    fn canonical_prefix_forms_desugar() {
        let el = first_element(r#"<div bind-title="t" on-click="go()" bindon-value="v"></div>"#);
        assert_eq!(el.inputs[0].name, "title");
        assert_eq!(el.inputs[0].kind, BindingKind::Property);
        assert_eq!(el.outputs[0].name, "click");
        assert_eq!(el.inputs[1].name, "value");
        assert_eq!(el.inputs[1].kind, BindingKind::TwoWay);
        assert_eq!(el.outputs[1].name, "valueChange");
    }

    #[test]
    fn structural_and_reference_keys_stay_static() {
        let el = first_element(r#"<div *ngIf="shown" #panel></div>"#);
        assert_eq!(el.attributes[0].name, "*ngIf");
        assert_eq!(el.attributes[1].name, "#panel");
    }

    #[test]
    fn comments_are_nodes() {
        let tpl = parse_template("<div><!-- note --></div>").unwrap();
        let comment = tpl
            .node_ids()
            .find_map(|id| match tpl.node(id) {
                Node::Comment(c) => Some(c.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(comment.value.trim(), "note");
    }

    #[test]
    fn unclosed_elements_close_at_end_of_input() {
        let tpl = parse_template("<div><span>abandoned").unwrap();
        assert_eq!(tpl.elements().count(), 2);
        let (_, div) = tpl.elements().next().unwrap();
        assert_eq!(div.span.end, "<div><span>abandoned".len());
    }

    #[test]
    fn stray_close_tag_is_skipped() {
        let tpl = parse_template("<div></b></div>").unwrap();
        assert_eq!(tpl.elements().count(), 1);
    }

    #[test]
    fn mismatched_close_recovers_by_popping() {
        let tpl = parse_template("<div><span></div>").unwrap();
        let (div_id, div) = tpl.elements().next().unwrap();
        assert_eq!(div.name, "div");
        let span = tpl.element(div.children[0]).unwrap();
        assert_eq!(span.name, "span");
        assert_eq!(tpl.parent_of(div.children[0]), Some(div_id));
    }

    #[test]
    fn self_closing_elements_take_no_children() {
        let tpl = parse_template("<app-icon name=\"x\"/><p>after</p>").unwrap();
        let (_, icon) = tpl.elements().next().unwrap();
        assert_eq!(icon.name, "app-icon");
        assert!(icon.children.is_empty());
        assert_eq!(tpl.roots().len(), 2);
    }

    #[test]
    fn quoted_values_may_contain_angle_brackets() {
        let el = first_element(r#"<div (click)="go('<')" title="a > b"></div>"#);
        assert_eq!(el.outputs[0].handler, "go('<')");
        assert_eq!(el.attributes[0].value, "a > b");
    }

    #[test]
    fn base_offset_shifts_spans() {
        let tpl = parse_template_with_offset("<p id=\"x\"></p>", 100).unwrap();
        let (_, p) = tpl.elements().next().unwrap();
        assert_eq!(p.span.start, 100);
        assert_eq!(p.attributes[0].key_span.start, 103);
    }

    #[test]
    fn doctype_is_skipped() {
        let tpl = parse_template("<!DOCTYPE html><main></main>").unwrap();
        assert_eq!(tpl.elements().count(), 1);
    }

    #[test]
    fn malformed_tags_error() {
        assert!(parse_template("<div [x=\"1\">").is_err());
        assert!(parse_template("<div title=\"unterminated></div>").is_err());
        assert!(parse_template("<!-- never closed").is_err());
        assert!(parse_template("<div").is_err());
    }
}
