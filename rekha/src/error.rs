//! Error types for rekha

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Geometry failures raised by sampling, fitting and intersection.
///
/// The RANSAC driver recovers from all of these by rejecting the current
/// attempt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Not enough points to sample or fit a line
    #[error("Insufficient points: need at least {required}, found {found}")]
    InsufficientPoints {
        /// Minimum number of points the operation needs
        required: usize,
        /// Number of points available
        found: usize,
    },

    /// The points do not determine a unique line
    #[error("Degenerate fit: {0}")]
    DegenerateFit(&'static str),

    /// Intersection of two lines with equal slopes
    #[error("Lines are parallel")]
    ParallelLines,
}

/// Bitmap parsing errors. Always fatal; no partial image is produced.
#[derive(Debug, Error)]
pub enum ParseError {
    /// I/O error while reading the stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stream ended before a dimension line
    #[error("Missing {0} line")]
    MissingDimension(&'static str),

    /// Dimension line is not a non-negative integer
    #[error("Invalid {name} on line {line}: {value:?}")]
    InvalidDimension {
        /// Which dimension (`column count` or `row count`)
        name: &'static str,
        /// 1-based line number
        line: usize,
        /// Offending text
        value: String,
    },

    /// A pixel row has the wrong number of characters
    #[error("Row {row} has {found} columns, expected {expected}")]
    RowLengthMismatch {
        /// 0-based row index
        row: usize,
        /// Declared column count
        expected: usize,
        /// Characters found
        found: usize,
    },

    /// Stream ended before all declared rows were read
    #[error("Truncated image: expected {expected} rows, found {found}")]
    Truncated {
        /// Declared row count
        expected: usize,
        /// Rows actually read
        found: usize,
    },
}

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse or serialization error
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A parameter is out of range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Parameter name
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Top-level error for the command-line front end.
#[derive(Debug, Error)]
pub enum Error {
    /// Input bitmap could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error outside parsing (opening input, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
