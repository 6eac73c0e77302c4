//! Errors reported while reading color-matching data or integrating it.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Anything that can go wrong between reading the CSV input and writing the
/// results.
#[derive(Debug, Error)]
pub enum Error {
    /// The samples or one of the fields could not be used as integration
    /// input.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// A row did not carry enough fields.
    #[error("malformed record on line {line}: expected at least {expected} fields, found {found}")]
    MalformedRecord {
        /// 1-based line number of the row.
        line: u64,
        /// Number of fields required.
        expected: usize,
        /// Number of fields present.
        found: usize,
    },

    /// Error from the CSV reader.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Error while writing output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The ways a sample sequence or a numeric field can be rejected.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidInput {
    /// Integration needs at least two points.
    #[error("need at least 2 samples, got {0}")]
    TooFewSamples(usize),

    /// A sample was NaN or infinite.
    #[error("sample {index} is not finite")]
    NonFinite {
        /// Position of the offending sample.
        index: usize,
    },

    /// The samples were finite but their integral is not.
    #[error("integral overflows the floating point range")]
    Overflow,

    /// A numeric field did not parse, or parsed to a non-finite value.
    #[error("line {line}, field {field}: {text:?} is not a finite number")]
    NotANumber {
        /// 1-based line number of the row.
        line: u64,
        /// 0-based field index within the row.
        field: usize,
        /// The field as it appeared in the input.
        text: String,
    },
}
