//! Byte-level scanner for statements.
//!
//! Produces one `(kind, len)` pair per call from an arbitrary byte offset,
//! without allocating and without state between calls. Keywords are not
//! resolved here and numeric values are not computed: the parser does both.
//!
//! ## Classification
//!
//! - ASCII whitespace runs are `Space`.
//! - A digit, or `.`/`+`/`-` followed by a digit, starts a number. Numbers are
//!   `Integer` until a fraction or exponent makes them `Float`.
//! - `'`, `` ` `` and `"` open a quoted string that runs through the matching
//!   delimiter, delimiters included.
//! - Anything else is a bare string up to the next whitespace.
//!
//! Malformed numbers and unterminated quoted strings are `Error` tokens. An
//! error token still has a length of at least one byte, so a caller walking
//! the input always makes progress.

use rowan::{TextRange, TextSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Space,
    Integer,
    Float,
    String,
    Error,
}

impl TokenKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Space)
    }

    #[inline]
    pub fn is_number(self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Float)
    }
}

/// Result of a single scan: what starts at the offset and how many bytes it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken {
    pub kind: TokenKind,
    pub len: usize,
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.span.start().into()
    }
}

/// Classifies the token starting at `offset`.
///
/// Returns `None` once `offset` reaches the end of `text`.
pub fn next_token(text: &str, offset: usize) -> Option<RawToken> {
    let bytes = text.as_bytes().get(offset..)?;
    if bytes.is_empty() {
        return None;
    }
    let mut scanner = Scanner { bytes, pos: 0 };
    let kind = scanner.scan();
    debug_assert!(scanner.pos > 0, "scanner must consume at least one byte");
    Some(RawToken {
        kind,
        len: scanner.pos,
    })
}

/// Walks the whole input, yielding every token including spaces.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, offset: 0 }
}

/// Iterator returned by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'src> {
    text: &'src str,
    offset: usize,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let raw = next_token(self.text, self.offset)?;
        let span = text_range(self.offset, raw.len);
        self.offset += raw.len;
        Some(Token::new(raw.kind, span))
    }
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}

/// Longest statement whose offsets fit a [`TextSize`].
pub const MAX_STATEMENT_LEN: usize = u32::MAX as usize;

/// Offsets past [`MAX_STATEMENT_LEN`] saturate instead of wrapping. The parser
/// rejects longer input before scanning.
pub(crate) fn text_range(offset: usize, len: usize) -> TextRange {
    let end = offset.saturating_add(len).min(MAX_STATEMENT_LEN);
    let start = offset.min(end);
    TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32))
}

/// Whitespace as the C locale sees it: space, tab, newline, vertical tab,
/// form feed, carriage return.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

#[inline]
pub(crate) fn is_quote(byte: u8) -> bool {
    matches!(byte, b'\'' | b'`' | b'"')
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Scanner<'_> {
    fn scan(&mut self) -> TokenKind {
        let first = self.bytes[0];
        if is_space(first) {
            self.eat_while(is_space);
            return TokenKind::Space;
        }
        if self.starts_number() {
            return self.number();
        }
        if is_quote(first) {
            return self.quoted(first);
        }
        self.eat_while(|b| !is_space(b));
        TokenKind::String
    }

    #[inline]
    fn peek(&self, lookahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + lookahead).copied()
    }

    #[inline]
    fn peek_is_digit(&self, lookahead: usize) -> bool {
        self.peek(lookahead).is_some_and(|b| b.is_ascii_digit())
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek(0).is_some_and(&pred) {
            self.pos += 1;
        }
    }

    fn starts_number(&self) -> bool {
        match self.peek(0) {
            Some(b'0'..=b'9') => true,
            Some(b'.' | b'+' | b'-') => self.peek_is_digit(1),
            _ => false,
        }
    }

    /// Scans a numeric literal. On a malformed continuation the token ends
    /// before the offending byte and is reported as `Error`.
    fn number(&mut self) -> TokenKind {
        let mut kind = TokenKind::Integer;
        let mut seen_dot = false;
        if self.peek(0) == Some(b'.') {
            seen_dot = true;
            kind = TokenKind::Float;
        }

        // Leading digit, sign or dot; the digit after a sign or dot follows.
        self.pos += 1;
        self.eat_while(|b| b.is_ascii_digit());

        if self.peek(0) == Some(b'.') {
            if seen_dot || !self.peek_is_digit(1) {
                return TokenKind::Error;
            }
            kind = TokenKind::Float;
            self.pos += 1;
            self.eat_while(|b| b.is_ascii_digit());

            // `1.2.3`: second decimal point in one literal
            if self.peek(0) == Some(b'.') {
                return TokenKind::Error;
            }
        }

        if matches!(self.peek(0), Some(b'e' | b'E')) {
            let digits_at = match self.peek(1) {
                Some(b'+' | b'-') => 2,
                _ => 1,
            };
            if !self.peek_is_digit(digits_at) {
                return TokenKind::Error;
            }
            kind = TokenKind::Float;
            self.pos += digits_at;
            self.eat_while(|b| b.is_ascii_digit());

            // `1e5.5`: no fraction after the exponent
            if self.peek(0) == Some(b'.') {
                return TokenKind::Error;
            }
        }

        kind
    }

    /// Scans a quoted string through its closing delimiter. Without one the
    /// rest of the input becomes a single `Error` token.
    fn quoted(&mut self, delimiter: u8) -> TokenKind {
        match self.bytes[1..].iter().position(|&b| b == delimiter) {
            Some(index) => {
                self.pos = index + 2;
                TokenKind::String
            }
            None => {
                self.pos = self.bytes.len();
                TokenKind::Error
            }
        }
    }
}
