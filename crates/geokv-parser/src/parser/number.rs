//! Conversion of numeric token text to `f64`.
//!
//! The scanner already decided the token is a number; this re-parses its
//! exact span and rejects values the store could not represent.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub(crate) enum NumberError {
    #[error("Numerical result out of range")]
    OutOfRange,
    /// The conversion could not take the whole span.
    #[error("Failed to parse entire value")]
    Incomplete,
}

/// Parses a numeric literal that must be consumed in full.
///
/// Overflow to infinity, subnormal results and underflow of a non-zero
/// literal to zero are all out of range.
pub(crate) fn parse_number(text: &str) -> Result<f64, NumberError> {
    let value: f64 = text.parse().map_err(|_| NumberError::Incomplete)?;

    if !value.is_finite() {
        return Err(NumberError::OutOfRange);
    }
    if value != 0.0 && !value.is_normal() {
        return Err(NumberError::OutOfRange);
    }
    if value == 0.0 && has_nonzero_mantissa(text) {
        return Err(NumberError::OutOfRange);
    }

    Ok(value)
}

fn has_nonzero_mantissa(text: &str) -> bool {
    text.bytes()
        .take_while(|&b| b != b'e' && b != b'E')
        .any(|b| matches!(b, b'1'..=b'9'))
}
