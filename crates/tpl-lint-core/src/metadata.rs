//! Component/directive decorator extraction.
//!
//! A literal-level scanner over TypeScript source: finds `@Component(...)`
//! and `@Directive(...)` decorators, pulls out the `selector` and inline
//! `template` string literals (with spans, so violations map back into the
//! containing file), the `outputs: [...]` metadata array and any `@Output`
//! property declarations in the class body that follows.
//!
//! Interpolated template literals (`` `${...}` ``) are not compile-time
//! strings; they yield no literal and the consuming rule skips silently.

use crate::template::Span;

/// Which decorator produced the metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `@Component(...)`.
    Component,
    /// `@Directive(...)`.
    Directive,
}

/// A string literal with the span of its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// Literal contents, quotes excluded.
    pub value: String,
    /// Byte range of the contents within the source file.
    pub span: Span,
}

/// A declared output: an `outputs: [...]` entry or an `@Output` property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDeclaration {
    /// Public event name (the alias when one is declared).
    pub name: String,
    /// Span of the declaring text.
    pub span: Span,
}

/// Metadata extracted from one decorator occurrence.
#[derive(Debug, Clone)]
pub struct DirectiveMetadata {
    /// Component or directive.
    pub kind: DirectiveKind,
    /// `selector` literal, when expressed as a compile-time string.
    pub selector: Option<StringLiteral>,
    /// Inline `template` literal, when present.
    pub template: Option<StringLiteral>,
    /// Declared outputs, metadata array entries first.
    pub outputs: Vec<OutputDeclaration>,
    /// Span of the whole decorator call.
    pub span: Span,
}

/// Extracts every `@Component` / `@Directive` occurrence from `source`.
#[must_use]
pub fn extract_directives(source: &str) -> Vec<DirectiveMetadata> {
    let mut found = Vec::new();
    for (kind, marker) in [
        (DirectiveKind::Component, "@Component"),
        (DirectiveKind::Directive, "@Directive"),
    ] {
        let mut from = 0;
        while let Some(rel) = source[from..].find(marker) {
            let at = from + rel;
            let after = at + marker.len();
            if let Some((body_start, body_end)) = balanced_parens(source, after) {
                let body = &source[body_start..body_end];
                let mut meta = DirectiveMetadata {
                    kind,
                    selector: property_literal(body, body_start, "selector"),
                    template: property_literal(body, body_start, "template"),
                    outputs: outputs_array(body, body_start),
                    span: Span::new(at, body_end + 1),
                };
                let class_body = &source[body_end + 1..];
                meta.outputs
                    .extend(output_decorators(class_body, body_end + 1));
                found.push(meta);
                from = body_end + 1;
            } else {
                from = after;
            }
        }
    }
    found.sort_by_key(|meta| meta.span.start);
    found
}

/// Locates the balanced `(...)` group starting at or after `from`,
/// returning the byte range of its contents. String literals are honored so
/// parens inside them do not unbalance the scan.
fn balanced_parens(source: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = source.as_bytes();
    let mut pos = from;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    if bytes.get(pos) != Some(&b'(') {
        return None;
    }
    let start = pos + 1;
    let mut depth = 0usize;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\'' | b'"' | b'`' => pos = skip_string(bytes, pos),
            b'(' => {
                depth += 1;
                pos += 1;
            }
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some((start, pos));
                }
                pos += 1;
            }
            _ => pos += 1,
        }
    }
    None
}

/// Advances past a string literal opened at `open`. Template literals may
/// span lines; escapes are honored.
fn skip_string(bytes: &[u8], open: usize) -> usize {
    let quote = bytes[open];
    let mut pos = open + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b if b == quote => return pos + 1,
            _ => pos += 1,
        }
    }
    pos
}

/// Finds `name:` followed by a string literal inside a decorator body.
/// Template literals containing `${` interpolation yield `None`.
fn property_literal(body: &str, base: usize, name: &str) -> Option<StringLiteral> {
    let bytes = body.as_bytes();
    let mut from = 0;
    while let Some(rel) = body[from..].find(name) {
        let at = from + rel;
        from = at + name.len();
        if !is_property_key(body, at, name.len()) {
            continue;
        }
        let mut pos = at + name.len();
        while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
            pos += 1;
        }
        if bytes.get(pos) != Some(&b':') {
            continue;
        }
        pos += 1;
        while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
            pos += 1;
        }
        let Some(quote @ (b'\'' | b'"' | b'`')) = bytes.get(pos).copied() else {
            return None;
        };
        let end = skip_string(bytes, pos);
        if end <= pos + 1 || bytes.get(end - 1) != Some(&quote) {
            return None;
        }
        let value = &body[pos + 1..end - 1];
        if quote == b'`' && value.contains("${") {
            return None;
        }
        return Some(StringLiteral {
            value: value.to_string(),
            span: Span::new(base + pos + 1, base + end - 1),
        });
    }
    None
}

/// A property key match must sit at a word boundary and not inside a larger
/// identifier (`selector` vs `subSelector`).
fn is_property_key(body: &str, at: usize, len: usize) -> bool {
    let before = body[..at].chars().next_back();
    let after = body[at + len..].chars().next();
    !before.is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !after.is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Parses the `outputs: [...]` metadata array. Entries may alias:
/// `"internalName: publicName"` exposes `publicName`.
fn outputs_array(body: &str, base: usize) -> Vec<OutputDeclaration> {
    let bytes = body.as_bytes();
    let mut declarations = Vec::new();
    let mut from = 0;
    while let Some(rel) = body[from..].find("outputs") {
        let at = from + rel;
        from = at + "outputs".len();
        if !is_property_key(body, at, "outputs".len()) {
            continue;
        }
        let mut pos = at + "outputs".len();
        while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
            pos += 1;
        }
        if bytes.get(pos) != Some(&b':') {
            continue;
        }
        pos += 1;
        while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
            pos += 1;
        }
        if bytes.get(pos) != Some(&b'[') {
            continue;
        }
        pos += 1;
        while pos < bytes.len() && bytes[pos] != b']' {
            match bytes[pos] {
                b'\'' | b'"' => {
                    let end = skip_string(bytes, pos);
                    let entry = &body[pos + 1..end.saturating_sub(1)];
                    let public = entry.split(':').next_back().unwrap_or(entry).trim();
                    if !public.is_empty() {
                        declarations.push(OutputDeclaration {
                            name: public.to_string(),
                            span: Span::new(base + pos, base + end),
                        });
                    }
                    pos = end;
                }
                _ => pos += 1,
            }
        }
        break;
    }
    declarations
}

/// Collects `@Output()` / `@Output('alias')` property declarations from the
/// class body that follows a decorator, stopping at the next decorator
/// occurrence so outputs attach to the right class.
fn output_decorators(class_body: &str, base: usize) -> Vec<OutputDeclaration> {
    let stop = ["@Component", "@Directive"]
        .iter()
        .filter_map(|marker| class_body.find(marker))
        .min()
        .unwrap_or(class_body.len());
    let scope = &class_body[..stop];

    let mut declarations = Vec::new();
    let mut from = 0;
    while let Some(rel) = scope[from..].find("@Output") {
        let at = from + rel;
        from = at + "@Output".len();
        let Some((args_start, args_end)) = balanced_parens(scope, at + "@Output".len()) else {
            continue;
        };
        let args = scope[args_start..args_end].trim();
        let name = if let Some(stripped) = args
            .strip_prefix('\'')
            .and_then(|s| s.strip_suffix('\''))
            .or_else(|| args.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        {
            // aliased output: the public name is the decorator argument
            stripped.to_string()
        } else if args.is_empty() {
            let Some(name) = property_name_after(scope, args_end + 1) else {
                continue;
            };
            name
        } else {
            continue;
        };
        declarations.push(OutputDeclaration {
            name,
            span: Span::new(base + at, base + args_end + 1),
        });
    }
    declarations
}

/// Reads the property identifier after an `@Output()` decorator, skipping
/// modifiers such as `readonly` or `public`.
fn property_name_after(scope: &str, from: usize) -> Option<String> {
    const MODIFIERS: &[&str] = &["readonly", "public", "protected", "private"];
    let mut rest = scope[from..].trim_start();
    loop {
        let ident: String = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
            .collect();
        if ident.is_empty() {
            return None;
        }
        if MODIFIERS.contains(&ident.as_str()) {
            rest = rest[ident.len()..].trim_start();
            continue;
        }
        return Some(ident);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_selector_and_template() {
        let source = r"
import { Component } from '@angular/core';

@Component({
  selector: 'app-banner',
  template: `<div role='banner'>hi</div>`,
})
export class BannerComponent {}
";
        let directives = extract_directives(source);
        assert_eq!(directives.len(), 1);
        let meta = &directives[0];
        assert_eq!(meta.kind, DirectiveKind::Component);
        assert_eq!(meta.selector.as_ref().unwrap().value, "app-banner");
        let template = meta.template.as_ref().unwrap();
        assert_eq!(template.value, "<div role='banner'>hi</div>");
        assert_eq!(
            &source[template.span.start..template.span.end],
            template.value
        );
    }

    #[test]
    fn directive_with_attribute_selector() {
        let source = r#"@Directive({ selector: "[appHighlight]" }) export class Hl {}"#;
        let directives = extract_directives(source);
        assert_eq!(directives[0].kind, DirectiveKind::Directive);
        assert_eq!(
            directives[0].selector.as_ref().unwrap().value,
            "[appHighlight]"
        );
    }

    #[test]
    fn interpolated_selector_yields_no_literal() {
        let source = "@Component({ selector: `app-${suffix}` }) class C {}";
        let directives = extract_directives(source);
        assert_eq!(directives.len(), 1);
        assert!(directives[0].selector.is_none());
    }

    #[test]
    fn selector_key_is_not_matched_inside_identifiers() {
        let source = "@Component({ subSelector: 'nope', selector: 'app-x' }) class C {}";
        let directives = extract_directives(source);
        assert_eq!(directives[0].selector.as_ref().unwrap().value, "app-x");
    }

    #[test]
    fn outputs_metadata_array_uses_public_alias() {
        let source = "@Directive({ selector: '[appX]', outputs: ['done', 'inner: click'] }) class X {}";
        let outputs = &extract_directives(source)[0].outputs;
        let names: Vec<&str> = outputs.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["done", "click"]);
    }

    #[test]
    fn output_property_decorators_are_collected() {
        let source = r"
@Component({ selector: 'app-x', template: '<p></p>' })
export class X {
  @Output() saved = new EventEmitter<void>();
  @Output('focus') readonly focused = new EventEmitter<void>();
}
";
        let outputs = &extract_directives(source)[0].outputs;
        let names: Vec<&str> = outputs.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["saved", "focus"]);
    }

    #[test]
    fn outputs_do_not_leak_across_classes() {
        let source = r"
@Component({ selector: 'app-a', template: '' })
class A { @Output() fromA = new EventEmitter(); }

@Component({ selector: 'app-b', template: '' })
class B { @Output() fromB = new EventEmitter(); }
";
        let directives = extract_directives(source);
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].outputs[0].name, "fromA");
        assert_eq!(directives[1].outputs[0].name, "fromB");
    }

    #[test]
    fn parens_inside_template_do_not_unbalance() {
        let source = r"@Component({ selector: 'app-x', template: `<button (click)='go()'>x</button>` }) class X {}";
        let directives = extract_directives(source);
        assert!(directives[0].template.as_ref().unwrap().value.contains("(click)"));
    }

    #[test]
    fn plain_source_has_no_directives() {
        assert!(extract_directives("export const x = 1;").is_empty());
    }
}
