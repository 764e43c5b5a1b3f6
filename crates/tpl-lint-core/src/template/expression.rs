//! Literal recognition for bound values.
//!
//! Rules can only reason about values that are knowable at lint time. A
//! bound expression is either a recognized literal (string, number, boolean,
//! `null`, `undefined`, array or object-map literal) or an opaque dynamic
//! expression. Dynamic expressions are carried verbatim and never
//! interpreted; predicates must treat them as "present but unknowable".

/// A compile-time literal recognized in a bound expression.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// Quoted string, or the text of a static attribute.
    Str(String),
    /// Numeric literal.
    Number(f64),
    /// `true` / `false`.
    Bool(bool),
    /// `null`.
    Null,
    /// `undefined`.
    Undefined,
    /// Array literal of recognized literals.
    Array(Vec<LiteralValue>),
    /// Object literal with literal values, in source order.
    Map(Vec<(String, LiteralValue)>),
}

impl LiteralValue {
    /// String payload, if this is a string literal.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Integer payload: integral numbers, or strings that parse as integers.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            // The i128 round-trip rejects integral values outside i64 range
            // instead of letting the cast saturate.
            Self::Number(n) if n.fract() == 0.0 => i64::try_from(*n as i128).ok(),
            Self::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Boolean-valued attribute check: `true` and the string `"true"` count.
    #[must_use]
    pub fn is_true_like(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Str(s) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// Map entry lookup by key.
    #[must_use]
    pub fn map_get(&self, key: &str) -> Option<&LiteralValue> {
        match self {
            Self::Map(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Value of a bound attribute: a recognized literal or an opaque expression.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundValue {
    /// Compile-time literal.
    Literal(LiteralValue),
    /// Anything else; the raw expression text is kept for reporting.
    Dynamic(String),
}

impl BoundValue {
    /// Classifies an expression text, falling back to [`BoundValue::Dynamic`].
    #[must_use]
    pub fn from_expression(text: &str) -> Self {
        match parse_literal(text) {
            Some(value) => Self::Literal(value),
            None => Self::Dynamic(text.trim().to_string()),
        }
    }

    /// The literal payload, if any.
    #[must_use]
    pub fn as_literal(&self) -> Option<&LiteralValue> {
        match self {
            Self::Literal(v) => Some(v),
            Self::Dynamic(_) => None,
        }
    }

    /// Returns `true` for opaque dynamic expressions.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }
}

/// Parses an expression text as a literal. Returns `None` when any part of
/// the text is not a recognized literal form.
#[must_use]
pub fn parse_literal(text: &str) -> Option<LiteralValue> {
    let mut p = Parser {
        bytes: text.as_bytes(),
        pos: 0,
    };
    p.skip_ws();
    let value = p.value()?;
    p.skip_ws();
    if p.pos == p.bytes.len() {
        Some(value)
    } else {
        None
    }
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn value(&mut self) -> Option<LiteralValue> {
        match self.peek()? {
            b'\'' | b'"' => self.string().map(LiteralValue::Str),
            b'[' => self.array(),
            b'{' => self.map(),
            b'-' | b'0'..=b'9' => self.number(),
            _ => self.keyword(),
        }
    }

    fn string(&mut self) -> Option<String> {
        let quote = self.peek()?;
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.peek()? {
                b'\\' => {
                    self.pos += 1;
                    let escaped = self.peek()?;
                    out.push(match escaped {
                        b'n' => '\n',
                        b't' => '\t',
                        b'r' => '\r',
                        other => other as char,
                    });
                    self.pos += 1;
                }
                b if b == quote => {
                    self.pos += 1;
                    return Some(out);
                }
                _ => {
                    // Multi-byte characters pass through untouched.
                    let rest = &self.bytes[self.pos..];
                    let ch_len = next_char_len(rest);
                    out.push_str(std::str::from_utf8(&rest[..ch_len]).ok()?);
                    self.pos += ch_len;
                }
            }
        }
    }

    fn number(&mut self) -> Option<LiteralValue> {
        let start = self.pos;
        self.eat(b'-');
        let digits_start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if self.pos == digits_start {
            return None;
        }
        if self.eat(b'.') {
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos]).ok()?;
        text.parse().ok().map(LiteralValue::Number)
    }

    fn keyword(&mut self) -> Option<LiteralValue> {
        let start = self.pos;
        while matches!(self.peek(), Some(b'a'..=b'z')) {
            self.pos += 1;
        }
        match &self.bytes[start..self.pos] {
            b"true" => Some(LiteralValue::Bool(true)),
            b"false" => Some(LiteralValue::Bool(false)),
            b"null" => Some(LiteralValue::Null),
            b"undefined" => Some(LiteralValue::Undefined),
            _ => None,
        }
    }

    fn array(&mut self) -> Option<LiteralValue> {
        self.eat(b'[');
        let mut items = Vec::new();
        self.skip_ws();
        if self.eat(b']') {
            return Some(LiteralValue::Array(items));
        }
        loop {
            self.skip_ws();
            items.push(self.value()?);
            self.skip_ws();
            if self.eat(b']') {
                return Some(LiteralValue::Array(items));
            }
            if !self.eat(b',') {
                return None;
            }
        }
    }

    fn map(&mut self) -> Option<LiteralValue> {
        self.eat(b'{');
        let mut entries = Vec::new();
        self.skip_ws();
        if self.eat(b'}') {
            return Some(LiteralValue::Map(entries));
        }
        loop {
            self.skip_ws();
            let key = self.map_key()?;
            self.skip_ws();
            if !self.eat(b':') {
                return None;
            }
            self.skip_ws();
            let value = self.value()?;
            entries.push((key, value));
            self.skip_ws();
            if self.eat(b'}') {
                return Some(LiteralValue::Map(entries));
            }
            if !self.eat(b',') {
                return None;
            }
        }
    }

    fn map_key(&mut self) -> Option<String> {
        match self.peek()? {
            b'\'' | b'"' => self.string(),
            _ => {
                let start = self.pos;
                while matches!(
                    self.peek(),
                    Some(b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'$' | b'-')
                ) {
                    self.pos += 1;
                }
                if self.pos == start {
                    return None;
                }
                std::str::from_utf8(&self.bytes[start..self.pos])
                    .ok()
                    .map(ToString::to_string)
            }
        }
    }
}

/// Byte length of the UTF-8 character starting at `bytes[0]`.
fn next_char_len(bytes: &[u8]) -> usize {
    match bytes.first() {
        Some(b) if b & 0b1110_0000 == 0b1100_0000 => 2,
        Some(b) if b & 0b1111_0000 == 0b1110_0000 => 3,
        Some(b) if b & 0b1111_1000 == 0b1111_0000 => 4,
        _ => 1,
    }
}
