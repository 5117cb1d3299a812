//! # Numeric Error Taxonomy

use rust_decimal::Decimal;
use thiserror::Error;

/// Why numeric text was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// The text is not a well-formed number under the active rules.
    #[error("cannot parse {text:?} as a number")]
    ParseFailure {
        /// The offending input text.
        text: String,
    },

    /// The value parsed but falls outside the caller's configured bounds.
    #[error("value {value} is outside the range {min}..={max}")]
    OutOfRange {
        /// The parsed value.
        value: Decimal,
        /// Inclusive lower bound.
        min: Decimal,
        /// Inclusive upper bound.
        max: Decimal,
    },
}
