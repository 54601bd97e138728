//! Error types for fixture construction.

use fixture_core::ColumnType;
use thiserror::Error;

/// Errors that can occur while building columns, tables, and table sets.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Column definition has no value type.
    #[error("DataType must be provided for the Column definition")]
    MissingType,

    /// Column definition has no name, or only whitespace.
    #[error("Name must be provided for the Column definition")]
    MissingName,

    /// Two columns of one table share a name.
    #[error("A column named '{0}' already belongs to this table")]
    DuplicateColumnName(String),

    /// A cell value does not match its column's type.
    #[error("Column '{column}' expects {expected} but the value is {actual}")]
    TypeMismatch {
        column: String,
        expected: ColumnType,
        actual: &'static str,
    },

    /// Row count was negative and the config rejects it.
    #[error("Row count must not be negative, got {0}")]
    NegativeRowCount(i64),

    /// Row count does not fit in `usize` on this platform.
    #[error("Row count {0} is too large for this platform")]
    RowCountTooLarge(i64),

    /// Two tables of one table set share a name.
    #[error("A table named '{0}' already belongs to this table set")]
    DuplicateTableName(String),

    /// A column's generator returned an error.
    #[error("Generator for column '{column}' failed: {source}")]
    Generator {
        column: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            FixtureError::MissingType.to_string(),
            "DataType must be provided for the Column definition"
        );
        assert_eq!(
            FixtureError::MissingName.to_string(),
            "Name must be provided for the Column definition"
        );
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = FixtureError::TypeMismatch {
            column: "SomeNumber".to_string(),
            expected: ColumnType::Int,
            actual: "text",
        };
        assert_eq!(
            err.to_string(),
            "Column 'SomeNumber' expects int but the value is text"
        );
    }

    #[test]
    fn test_row_count_messages() {
        assert_eq!(
            FixtureError::NegativeRowCount(-2).to_string(),
            "Row count must not be negative, got -2"
        );
        assert_eq!(
            FixtureError::RowCountTooLarge(i64::MAX).to_string(),
            format!("Row count {} is too large for this platform", i64::MAX)
        );
    }

    #[test]
    fn test_generator_error_keeps_source() {
        let err = FixtureError::Generator {
            column: "Price".to_string(),
            source: anyhow::anyhow!("price feed exhausted"),
        };
        assert_eq!(
            err.to_string(),
            "Generator for column 'Price' failed: price feed exhausted"
        );
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "price feed exhausted");
    }
}
