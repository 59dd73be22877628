//! State-machine consistency checks.
//!
//! Every failure here is a parser defect, never a property of the input.
//! They surface as `INVALID_STEP_ERROR` instead of a panic.

#![cfg_attr(coverage_nightly, coverage(off))]

use rowan::TextRange;

use super::core::{Parser, Shape};
use super::trace::Tracer;
use crate::diagnostics::{ErrorKind, ParseError};
use crate::statement::CommandType;

impl<T: Tracer> Parser<'_, T> {
    pub(super) fn invalid_step(&self, cause: &str) -> ParseError {
        self.error(
            ErrorKind::InvalidStep,
            format!("{cause} at step {}", self.step),
            TextRange::empty((self.pos as u32).into()),
        )
    }

    pub(super) fn ensure_command(&self) -> Result<CommandType, ParseError> {
        self.command
            .ok_or_else(|| self.invalid_step("Invalid step value: no command"))
    }

    pub(super) fn ensure_key(&self) -> Result<TextRange, ParseError> {
        self.key
            .ok_or_else(|| self.invalid_step("Invalid step value: no key"))
    }

    pub(super) fn ensure_shape(&self) -> Result<Shape, ParseError> {
        self.shape
            .ok_or_else(|| self.invalid_step("Invalid step value: no geometry"))
    }

    pub(super) fn ensure_shape_is(&self, expected: Shape) -> Result<(), ParseError> {
        if self.ensure_shape()? != expected {
            return Err(self.invalid_step("Invalid step value: wrong geometry"));
        }
        Ok(())
    }

    pub(super) fn ensure_coordinate_step(&self) -> Result<ErrorKind, ParseError> {
        self.step
            .coordinate_error()
            .ok_or_else(|| self.invalid_step("Invalid step value: not a coordinate"))
    }

    /// Only `SET` carries geometry, and it always does.
    pub(super) fn ensure_shape_matches(
        &self,
        command: CommandType,
        has_geometry: bool,
    ) -> Result<(), ParseError> {
        if command.takes_geometry() != has_geometry {
            return Err(self.invalid_step("Invalid step value: geometry mismatch"));
        }
        if command.takes_id() != self.id.is_some() {
            return Err(self.invalid_step("Invalid step value: id mismatch"));
        }
        Ok(())
    }

    pub(super) fn push_coordinate(&mut self, value: f64) -> Result<(), ParseError> {
        let index = self.coords.len;
        if index >= self.coords.values.len() {
            return Err(self.invalid_step("Invalid step value: too many coordinates"));
        }
        self.coords.values[index] = value;
        self.coords.len += 1;
        Ok(())
    }
}
