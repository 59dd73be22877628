//! Parser state machine.

use rowan::TextRange;

use super::number::{NumberError, parse_number};
use super::step::Step;
use super::trace::{NoopTracer, Tracer};
use crate::diagnostics::{ErrorKind, ParseError};
use crate::keywords::{Keyword, is_reserved};
use crate::scanner::{
    self, MAX_STATEMENT_LEN, Token, TokenKind, is_quote, text_range, token_text,
};
use crate::statement::{BoundingBox, CommandType, Geometry, Point, PreparedStatement};

/// Geometry selected by the keyword after the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Shape {
    Point,
    Bounds,
}

/// Coordinates collected so far, in input order.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Coords {
    pub(super) values: [f64; 4],
    pub(super) len: usize,
}

/// Walks the tokens of one statement.
///
/// All state is per call: construct, [`parse`](Parser::parse), discard.
pub struct Parser<'src, T: Tracer = NoopTracer> {
    pub(super) source: &'src str,
    pub(super) pos: usize,
    pub(super) step: Step,
    pub(super) command: Option<CommandType>,
    pub(super) key: Option<TextRange>,
    pub(super) id: Option<TextRange>,
    pub(super) shape: Option<Shape>,
    pub(super) coords: Coords,
    tracer: T,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            step: Step::AwaitingCommand,
            command: None,
            key: None,
            id: None,
            shape: None,
            coords: Coords::default(),
            tracer: NoopTracer,
        }
    }
}

impl<'src, T: Tracer> Parser<'src, T> {
    /// Replaces the tracer. Pass `&mut tracer` to inspect it after parsing.
    pub fn with_tracer<U: Tracer>(self, tracer: U) -> Parser<'src, U> {
        Parser {
            source: self.source,
            pos: self.pos,
            step: self.step,
            command: self.command,
            key: self.key,
            id: self.id,
            shape: self.shape,
            coords: self.coords,
            tracer,
        }
    }

    pub fn parse(mut self) -> Result<PreparedStatement<'src>, ParseError> {
        let result = self.run();
        match &result {
            Ok(statement) => self.tracer.trace_accept(statement),
            Err(error) => self.tracer.trace_reject(error),
        }
        result
    }

    fn run(&mut self) -> Result<PreparedStatement<'src>, ParseError> {
        check_length(self.source.len())?;

        while let Some(token) = self.bump() {
            self.tracer
                .trace_token(self.step, &token, token_text(self.source, &token));

            match token.kind {
                TokenKind::Space => continue,
                TokenKind::Error => {
                    return Err(self.error(
                        ErrorKind::InvalidToken,
                        "Invalid token in statement",
                        token.span,
                    ));
                }
                TokenKind::Integer | TokenKind::Float | TokenKind::String => {}
            }

            let next = self.advance(&token)?;
            if next != self.step {
                self.tracer.trace_step(self.step, next);
                self.step = next;
            }
        }

        self.finish()
    }

    /// Scans the token at the cursor and moves past it.
    fn bump(&mut self) -> Option<Token> {
        let raw = scanner::next_token(self.source, self.pos)?;
        let token = Token::new(raw.kind, text_range(self.pos, raw.len));
        self.pos += raw.len;
        Some(token)
    }

    /// Handles one non-space token and returns the next state.
    fn advance(&mut self, token: &Token) -> Result<Step, ParseError> {
        match self.step {
            Step::AwaitingCommand => {
                let Some(command) = self.keyword(token).and_then(CommandType::from_keyword)
                else {
                    return Err(self.error(
                        ErrorKind::InvalidCommandType,
                        "Invalid command type keyword",
                        token.span,
                    ));
                };
                self.command = Some(command);
                Ok(Step::AwaitingKey)
            }

            Step::AwaitingKey => {
                if !self.is_value(token) {
                    return Err(self.error(
                        ErrorKind::InvalidKeyValue,
                        "Invalid key value",
                        token.span,
                    ));
                }
                self.key = Some(token.span);
                Ok(Step::AwaitingId)
            }

            Step::AwaitingId => {
                if self.ensure_command()? == CommandType::Drop {
                    return Err(self.error(
                        ErrorKind::ExpectedEndOfTokens,
                        "Expected end of tokens in DROP statement",
                        token.span,
                    ));
                }
                if !self.is_value(token) {
                    return Err(self.error(
                        ErrorKind::InvalidIdValue,
                        "Invalid id value",
                        token.span,
                    ));
                }
                self.id = Some(token.span);
                Ok(Step::AwaitingGeometryKeyword)
            }

            Step::AwaitingGeometryKeyword => {
                if !self.ensure_command()?.takes_geometry() {
                    return Err(self.error(
                        ErrorKind::ExpectedEndOfTokens,
                        "Expected end of tokens in GET/DEL statement",
                        token.span,
                    ));
                }
                let shape = match self.keyword(token) {
                    Some(Keyword::Point) => Shape::Point,
                    Some(Keyword::Bounds) => Shape::Bounds,
                    _ => {
                        return Err(self.error(
                            ErrorKind::InvalidBoundsOrPoint,
                            "Expected BOUNDS or POINT keyword",
                            token.span,
                        ));
                    }
                };
                self.shape = Some(shape);
                Ok(Step::AwaitingX)
            }

            Step::AwaitingX => {
                self.coordinate(token)?;
                Ok(Step::AwaitingY)
            }

            Step::AwaitingY => {
                self.coordinate(token)?;
                match self.ensure_shape()? {
                    Shape::Point => Ok(Step::AwaitingZ),
                    Shape::Bounds => Ok(Step::AwaitingMaxX),
                }
            }

            Step::AwaitingZ => {
                self.ensure_shape_is(Shape::Point)?;
                self.coordinate(token)?;
                Ok(Step::Done)
            }

            Step::AwaitingMaxX => {
                self.ensure_shape_is(Shape::Bounds)?;
                self.coordinate(token)?;
                Ok(Step::AwaitingMaxY)
            }

            Step::AwaitingMaxY => {
                self.ensure_shape_is(Shape::Bounds)?;
                self.coordinate(token)?;
                Ok(Step::Done)
            }

            Step::Done => Err(self.error(
                ErrorKind::ExpectedEndOfTokens,
                "Expected end of tokens",
                token.span,
            )),
        }
    }

    /// End of input: either the statement is complete or a token is missing.
    fn finish(&mut self) -> Result<PreparedStatement<'src>, ParseError> {
        let cause = match self.step {
            Step::AwaitingCommand => "Expected command keyword",
            Step::AwaitingKey => "Expected key value",
            Step::AwaitingId if self.command == Some(CommandType::Drop) => {
                return self.build();
            }
            Step::AwaitingId => "Expected id value",
            Step::AwaitingGeometryKeyword if self.command != Some(CommandType::Set) => {
                return self.build();
            }
            Step::AwaitingGeometryKeyword => "Expected BOUNDS or POINT keyword",
            Step::AwaitingX => "Expected x value",
            Step::AwaitingY => "Expected y value",
            Step::AwaitingMaxX => "Expected second x value of bounds",
            Step::AwaitingMaxY => "Expected second y value of bounds",
            Step::AwaitingZ | Step::Done => return self.build(),
        };

        Err(self.error(ErrorKind::EndOfTokensReached, cause, self.eof_span()))
    }

    fn build(&self) -> Result<PreparedStatement<'src>, ParseError> {
        let command = self.ensure_command()?;
        let key = self.ensure_key()?;

        let geometry = match self.shape {
            None => None,
            Some(Shape::Point) => {
                let Coords { values: [x, y, z, _], len } = self.coords;
                match len {
                    2 => Some(Geometry::Point(Point::new(x, y))),
                    3 => Some(Geometry::Point(Point::with_z(x, y, z))),
                    _ => return Err(self.invalid_step("Unexpected coordinate count for POINT")),
                }
            }
            Some(Shape::Bounds) => {
                let Coords { values: [x1, y1, x2, y2], len } = self.coords;
                if len != 4 {
                    return Err(self.invalid_step("Unexpected coordinate count for BOUNDS"));
                }
                Some(Geometry::Bounds(BoundingBox::new(x1, y1, x2, y2)))
            }
        };

        self.ensure_shape_matches(command, geometry.is_some())?;

        Ok(PreparedStatement::new(
            self.source, command, key, self.id, geometry,
        ))
    }

    /// Parses a numeric token and stores it as the next coordinate.
    fn coordinate(&mut self, token: &Token) -> Result<(), ParseError> {
        let kind = self.ensure_coordinate_step()?;
        let axis = self.step.axis();

        if !token.kind.is_number() {
            return Err(self.error(
                kind,
                format!("Expected integer or double {axis} value"),
                token.span,
            ));
        }

        let value = parse_number(token_text(self.source, token)).map_err(|e| {
            let cause = match e {
                NumberError::OutOfRange => e.to_string(),
                NumberError::Incomplete => format!("Failed to parse entire {axis} value"),
            };
            self.error(kind, cause, token.span)
        })?;

        self.push_coordinate(value)
    }

    fn keyword(&self, token: &Token) -> Option<Keyword> {
        if token.kind != TokenKind::String {
            return None;
        }
        Keyword::from_bytes(token_text(self.source, token).as_bytes())
    }

    /// Keys and ids: numbers, non-empty quoted strings, or bare words that are
    /// not reserved.
    fn is_value(&self, token: &Token) -> bool {
        match token.kind {
            TokenKind::Integer | TokenKind::Float => true,
            TokenKind::String => {
                let bytes = token_text(self.source, token).as_bytes();
                if bytes.first().copied().is_some_and(is_quote) {
                    bytes.len() > 2
                } else {
                    !is_reserved(bytes)
                }
            }
            TokenKind::Space | TokenKind::Error => false,
        }
    }

    pub(super) fn error(
        &self,
        kind: ErrorKind,
        cause: impl Into<String>,
        span: TextRange,
    ) -> ParseError {
        ParseError::new(kind, cause, span)
    }

    pub(super) fn eof_span(&self) -> TextRange {
        TextRange::empty((self.source.len() as u32).into())
    }
}

/// Offsets are `u32`, so longer input is rejected before scanning.
pub(super) fn check_length(len: usize) -> Result<(), ParseError> {
    if len > MAX_STATEMENT_LEN {
        return Err(ParseError::new(
            ErrorKind::InvalidToken,
            "Statement too long",
            text_range(MAX_STATEMENT_LEN, 0),
        ));
    }
    Ok(())
}
