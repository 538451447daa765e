//! Table rendering errors.

use thiserror::Error;
use unc_core::UncError;

/// Result type for table and matrix operations.
pub type TableResult<T> = Result<T, TableError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// A row or style does not have one entry per column.
    #[error("Expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    /// Number format spec could not be parsed.
    #[error(transparent)]
    Format(#[from] UncError),

    /// Matrix text contained something that is not a number.
    #[error("Invalid number {token:?} on line {line}")]
    Parse { line: usize, token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TableError::ColumnCount {
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "Expected 3 columns, found 2");

        let err = TableError::Parse {
            line: 4,
            token: "x1".into(),
        };
        assert!(err.to_string().contains("line 4"));

        let err: TableError = UncError::InvalidFormat { spec: "q".into() }.into();
        assert!(err.to_string().contains("Invalid number format"));
    }
}
