//! Parsed statements.
//!
//! A [`PreparedStatement`] borrows the text it was parsed from: key and id are
//! spans into that buffer, not copies. The lifetime `'src` ties the statement
//! to the buffer, so the statement cannot outlive the input line.

use std::fmt;

use rowan::TextRange;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::keywords::Keyword;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Get,
    Set,
    Delete,
    Drop,
}

impl CommandType {
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Get => Some(CommandType::Get),
            Keyword::Set => Some(CommandType::Set),
            Keyword::Del => Some(CommandType::Delete),
            Keyword::Drop => Some(CommandType::Drop),
            Keyword::Point | Keyword::Bounds => None,
        }
    }

    pub fn keyword(self) -> Keyword {
        match self {
            CommandType::Get => Keyword::Get,
            CommandType::Set => Keyword::Set,
            CommandType::Delete => Keyword::Del,
            CommandType::Drop => Keyword::Drop,
        }
    }

    /// Every command except `DROP` addresses a single id.
    pub fn takes_id(self) -> bool {
        self != CommandType::Drop
    }

    /// Only `SET` carries a geometry.
    pub fn takes_geometry(self) -> bool {
        self == CommandType::Set
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.keyword(), f)
    }
}

/// A 2D or 3D point. `z` is `None` for 2D points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    pub fn is_3d(&self) -> bool {
        self.z.is_some()
    }
}

/// Axis-aligned box given by two opposite corners, kept in input order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Geometry {
    Point(Point),
    Bounds(BoundingBox),
}

impl Geometry {
    pub fn keyword(&self) -> Keyword {
        match self {
            Geometry::Point(_) => Keyword::Point,
            Geometry::Bounds(_) => Keyword::Bounds,
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Point(p) => {
                write!(f, "{} {} {}", Keyword::Point, p.x, p.y)?;
                if let Some(z) = p.z {
                    write!(f, " {z}")?;
                }
                Ok(())
            }
            Geometry::Bounds(b) => {
                write!(f, "{} {} {} {} {}", Keyword::Bounds, b.x1, b.y1, b.x2, b.y2)
            }
        }
    }
}

/// The validated result of a successful parse.
///
/// `id` is present for every command except `DROP`; `geometry` only for `SET`.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedStatement<'src> {
    source: &'src str,
    command: CommandType,
    key: TextRange,
    id: Option<TextRange>,
    geometry: Option<Geometry>,
}

impl<'src> PreparedStatement<'src> {
    pub(crate) fn new(
        source: &'src str,
        command: CommandType,
        key: TextRange,
        id: Option<TextRange>,
        geometry: Option<Geometry>,
    ) -> Self {
        debug_assert_eq!(id.is_some(), command.takes_id());
        debug_assert_eq!(geometry.is_some(), command.takes_geometry());
        Self {
            source,
            command,
            key,
            id,
            geometry,
        }
    }

    pub fn command(&self) -> CommandType {
        self.command
    }

    /// Key with surrounding quote delimiters removed.
    pub fn key(&self) -> &'src str {
        unquote(self.key_raw())
    }

    /// Key exactly as written, delimiters included.
    pub fn key_raw(&self) -> &'src str {
        self.slice(self.key)
    }

    pub fn key_span(&self) -> TextRange {
        self.key
    }

    /// Id with surrounding quote delimiters removed.
    pub fn id(&self) -> Option<&'src str> {
        self.id_raw().map(unquote)
    }

    /// Id exactly as written, delimiters included.
    pub fn id_raw(&self) -> Option<&'src str> {
        self.id.map(|span| self.slice(span))
    }

    pub fn id_span(&self) -> Option<TextRange> {
        self.id
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// The text this statement was parsed from.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Same command, key, id and geometry, regardless of source layout.
    pub fn is_equivalent(&self, other: &PreparedStatement<'_>) -> bool {
        self.command == other.command
            && self.key_raw() == other.key_raw()
            && self.id_raw() == other.id_raw()
            && self.geometry == other.geometry
    }

    fn slice(&self, span: TextRange) -> &'src str {
        &self.source[std::ops::Range::<usize>::from(span)]
    }
}

/// Canonical command text: keyword upper-cased, single spaces, raw key and id,
/// coordinates in shortest round-trip form.
impl fmt::Display for PreparedStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.command, self.key_raw())?;
        if let Some(id) = self.id_raw() {
            write!(f, " {id}")?;
        }
        if let Some(geometry) = &self.geometry {
            write!(f, " {geometry}")?;
        }
        Ok(())
    }
}

impl Serialize for PreparedStatement<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PreparedStatement", 4)?;
        state.serialize_field("command", &self.command)?;
        state.serialize_field("key", self.key())?;
        state.serialize_field("id", &self.id())?;
        state.serialize_field("geometry", &self.geometry)?;
        state.end()
    }
}

/// Strips one pair of matching quote delimiters, if present.
fn unquote(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&open), Some(&close))
            if bytes.len() >= 2 && open == close && matches!(open, b'\'' | b'`' | b'"') =>
        {
            &raw[1..raw.len() - 1]
        }
        _ => raw,
    }
}
