//! Accept/reject rules for user answers.
//!
//! Two rules exist:
//!
//! - [`validate_numeric`] is used for every catalog setting.  The answer must
//!   parse as a finite number inside the inclusive `[min, max]` range, so a
//!   `0`–`1` setting accepts `0.5`.
//! - [`validate_boolean`] is used for a category gate flag.  Only the
//!   literal strings `"0"` and `"1"` pass.
//!
//! Both functions trim surrounding whitespace before checking.  They never
//! substitute defaults; that happens in the collector before validation.

use thiserror::Error;

use super::catalog::ValueRange;

/// Reason an answer was rejected.
///
/// The `Display` text is shown to the user verbatim before re-prompting.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// The answer is empty or is not a finite number.
    #[error("Not valid. Please enter a value between {min} and {max}.")]
    NotANumber { min: String, max: String },

    /// The answer is a number but lies outside `[min, max]`.
    #[error("Not valid. Please enter a value between {min} and {max}.")]
    OutOfRange { min: String, max: String },

    /// A flag answer other than `"0"` or `"1"`.
    #[error("Not valid. Please enter 0 or 1.")]
    NotBoolean,
}

/// Parses `input` as a finite `f64`, ignoring surrounding whitespace.
pub(crate) fn parse_number(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Checks that `input` is a number within `range` (inclusive on both ends).
///
/// # Errors
///
/// Returns [`ValidationError::NotANumber`] for empty or non-numeric input and
/// [`ValidationError::OutOfRange`] when the value falls outside the range.
/// A range whose bounds are not numeric rejects every input as out of range.
pub fn validate_numeric(input: &str, range: &ValueRange) -> Result<(), ValidationError> {
    let value = parse_number(input).ok_or_else(|| ValidationError::NotANumber {
        min: range.min.clone(),
        max: range.max.clone(),
    })?;

    let out_of_range = || ValidationError::OutOfRange {
        min: range.min.clone(),
        max: range.max.clone(),
    };
    let (min, max) = range.bounds().ok_or_else(out_of_range)?;

    if value < min || value > max {
        return Err(out_of_range());
    }
    Ok(())
}

/// Checks that `input` is exactly `"0"` or `"1"` after trimming.
///
/// # Errors
///
/// Returns [`ValidationError::NotBoolean`] for anything else, including
/// numerically equal spellings such as `"1.0"`.
pub fn validate_boolean(input: &str) -> Result<(), ValidationError> {
    match input.trim() {
        "0" | "1" => Ok(()),
        _ => Err(ValidationError::NotBoolean),
    }
}
