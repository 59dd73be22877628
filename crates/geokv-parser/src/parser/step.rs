use std::fmt;

use crate::diagnostics::ErrorKind;

/// Parser states, in the order a complete statement visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    AwaitingCommand,
    AwaitingKey,
    AwaitingId,
    AwaitingGeometryKeyword,
    AwaitingX,
    AwaitingY,
    /// Optional third coordinate of a `POINT`.
    AwaitingZ,
    /// Second corner of a `BOUNDS`.
    AwaitingMaxX,
    AwaitingMaxY,
    Done,
}

impl Step {
    /// Error raised when a coordinate state receives something unusable.
    pub(crate) fn coordinate_error(self) -> Option<ErrorKind> {
        match self {
            Step::AwaitingX | Step::AwaitingMaxX => Some(ErrorKind::InvalidXValue),
            Step::AwaitingY | Step::AwaitingMaxY => Some(ErrorKind::InvalidYValue),
            Step::AwaitingZ => Some(ErrorKind::InvalidZValue),
            _ => None,
        }
    }

    /// Short name of the value a coordinate state expects.
    pub(crate) fn axis(self) -> &'static str {
        match self {
            Step::AwaitingX => "x",
            Step::AwaitingY => "y",
            Step::AwaitingZ => "z",
            Step::AwaitingMaxX => "second x",
            Step::AwaitingMaxY => "second y",
            _ => "coordinate",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::AwaitingCommand => "command",
            Step::AwaitingKey => "key",
            Step::AwaitingId => "id",
            Step::AwaitingGeometryKeyword => "geometry",
            Step::AwaitingX => "x",
            Step::AwaitingY => "y",
            Step::AwaitingZ => "z",
            Step::AwaitingMaxX => "x2",
            Step::AwaitingMaxY => "y2",
            Step::Done => "done",
        };
        f.write_str(name)
    }
}
