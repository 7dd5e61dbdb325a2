//! Error types for CSV table parsing

use thiserror::Error;

/// Errors that can occur while building a table from CSV text
///
/// Malformed CSV content (unbalanced quotes, ragged rows) is never an
/// error; the parser degrades best-effort. Only configuration problems
/// and structurally empty input are rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// Input contained no records and no explicit headers were supplied
    #[error("input contains no records and no headers were supplied")]
    EmptyInput,

    /// The configured separator is not usable
    #[error("invalid separator: {0}")]
    InvalidSeparator(String),
}

/// Result type alias for CSV parsing operations
pub type Result<T> = std::result::Result<T, CsvError>;
