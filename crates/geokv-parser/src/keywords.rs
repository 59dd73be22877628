//! Reserved words of the statement language.
//!
//! The set is fixed at compile time. Matching is ASCII case-insensitive and
//! length-exact, so `set`, `Set` and `SET` are the same keyword while `SETS`
//! is an ordinary identifier.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Set,
    Get,
    Del,
    Drop,
    Point,
    Bounds,
}

/// Every reserved word, in lookup order.
pub const RESERVED_WORDS: [Keyword; 6] = [
    Keyword::Set,
    Keyword::Get,
    Keyword::Del,
    Keyword::Drop,
    Keyword::Point,
    Keyword::Bounds,
];

impl Keyword {
    /// Canonical (upper-case) spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Set => "SET",
            Keyword::Get => "GET",
            Keyword::Del => "DEL",
            Keyword::Drop => "DROP",
            Keyword::Point => "POINT",
            Keyword::Bounds => "BOUNDS",
        }
    }

    /// Looks up a keyword by its exact bytes, ignoring ASCII case.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        RESERVED_WORDS
            .into_iter()
            .find(|kw| eq_ignore_case(kw.as_str().as_bytes(), bytes))
    }

    pub fn is_command(self) -> bool {
        matches!(
            self,
            Keyword::Set | Keyword::Get | Keyword::Del | Keyword::Drop
        )
    }

    pub fn is_geometry(self) -> bool {
        matches!(self, Keyword::Point | Keyword::Bounds)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `bytes` spell a reserved word.
///
/// Only unquoted identifiers are checked against this set. A quoted span keeps
/// its delimiters, so it never has a keyword's exact bytes.
pub fn is_reserved(bytes: &[u8]) -> bool {
    Keyword::from_bytes(bytes).is_some()
}

/// Byte equality ignoring ASCII case. Lengths must match.
#[inline]
pub fn eq_ignore_case(a: &[u8], b: &[u8]) -> bool {
    a.eq_ignore_ascii_case(b)
}
