//! Parser for the directive selector mini-language.
//!
//! Directive selectors are CSS-shaped: comma-separated groups, each with an
//! optional element name plus any number of `[attr]` / `[attr=value]`
//! attribute selectors. `.class` parts and `:not(...)` clauses are consumed
//! and dropped; naming rules only reason about element and attribute
//! fragments.

/// One comma-separated group of a parsed selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorFragment {
    /// Element name, when the group starts with one (`button` in
    /// `button[appButton]`). `None` for pure attribute selectors.
    pub element: Option<String>,
    /// Attribute names, brackets stripped, values dropped.
    pub attrs: Vec<String>,
}

impl SelectorFragment {
    /// Returns `true` when the group carried nothing usable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.element.is_none() && self.attrs.is_empty()
    }
}

/// Parses a selector string into fragments.
///
/// ```
/// use tpl_lint_core::selector::parse_selector;
///
/// let fragments = parse_selector("button[appButton], [appLink]");
/// assert_eq!(fragments[0].element.as_deref(), Some("button"));
/// assert_eq!(fragments[0].attrs, vec!["appButton"]);
/// assert!(fragments[1].element.is_none());
/// assert_eq!(fragments[1].attrs, vec!["appLink"]);
/// ```
#[must_use]
pub fn parse_selector(text: &str) -> Vec<SelectorFragment> {
    text.split(',')
        .map(parse_group)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

fn parse_group(group: &str) -> SelectorFragment {
    let mut fragment = SelectorFragment::default();
    let bytes = group.trim().as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'[' => {
                let end = find_byte(bytes, pos, b']').unwrap_or(bytes.len());
                let inner = &group.trim()[pos + 1..end.min(group.trim().len())];
                let name = inner.split('=').next().unwrap_or("").trim();
                if !name.is_empty() {
                    fragment.attrs.push(name.to_string());
                }
                pos = end.saturating_add(1);
            }
            b'.' => {
                // class selector: skip the token
                pos += 1;
                pos += ident_len(&bytes[pos..]);
            }
            b':' => {
                // pseudo-class; skip a balanced paren group if present
                pos += 1;
                pos += ident_len(&bytes[pos..]);
                if bytes.get(pos) == Some(&b'(') {
                    pos = skip_balanced(bytes, pos);
                }
            }
            b if b.is_ascii_whitespace() => pos += 1,
            _ => {
                let len = ident_len(&bytes[pos..]);
                if len == 0 {
                    pos += 1;
                    continue;
                }
                let name = &group.trim()[pos..pos + len];
                if fragment.element.is_none() && fragment.attrs.is_empty() {
                    fragment.element = Some(name.to_string());
                }
                pos += len;
            }
        }
    }

    fragment
}

/// Length of a selector identifier (`app-button`, `appButton`, `*`).
fn ident_len(bytes: &[u8]) -> usize {
    if bytes.first() == Some(&b'*') {
        return 1;
    }
    bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'-' || **b == b'_')
        .count()
}

fn find_byte(bytes: &[u8], from: usize, target: u8) -> Option<usize> {
    bytes[from..].iter().position(|b| *b == target).map(|i| from + i)
}

/// Advances past a `(`-opened group, tolerating nesting.
fn skip_balanced(bytes: &[u8], open: usize) -> usize {
    let mut depth = 0usize;
    let mut pos = open;
    while pos < bytes.len() {
        match bytes[pos] {
            b'(' => depth += 1,
            b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return pos + 1;
                }
            }
            _ => {}
        }
        pos += 1;
    }
    pos
}
