//! # Error Types
//!
//! Structured error types for matdb_core. Schema failures carry the record
//! index (and material name once it is known) so a broken table can be
//! fixed without hunting through the file.
//!
//! ## Example
//!
//! ```rust
//! use matdb_core::errors::{CatalogError, SchemaError};
//! use matdb_core::MaterialCatalog;
//!
//! let err = MaterialCatalog::from_json_str("[{}]").unwrap_err();
//! assert!(matches!(err, CatalogError::Schema(SchemaError::MissingField { .. })));
//! assert_eq!(err.error_code(), "MISSING_FIELD");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for matdb_core operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// A record failed structural validation.
///
/// Any of these aborts the whole load; the catalog is never partially built.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SchemaError {
    /// The top-level value is not a JSON array
    #[error("Catalog must be a JSON array of records, found {found}")]
    NotAnArray { found: String },

    /// An entry of the array is not a JSON object
    #[error("Record {index} must be a JSON object, found {found}")]
    NotAnObject { index: usize, found: String },

    /// A required key is absent
    #[error("Record {index}{}: missing required field '{field}'", name_suffix(.material))]
    MissingField {
        index: usize,
        material: Option<String>,
        field: String,
    },

    /// A key holds a value of the wrong JSON type
    #[error(
        "Record {index}{}: field '{field}' must be {expected}, found {found}",
        name_suffix(.material)
    )]
    WrongType {
        index: usize,
        material: Option<String>,
        field: String,
        expected: String,
        found: String,
    },

    /// A text field is empty or whitespace only
    #[error("Record {index}{}: field '{field}' must not be empty", name_suffix(.material))]
    EmptyText {
        index: usize,
        material: Option<String>,
        field: String,
    },

    /// A key written more than once in the same record
    #[error("Record {index}{}: field '{field}' appears more than once", name_suffix(.material))]
    DuplicateField {
        index: usize,
        material: Option<String>,
        field: String,
    },

    /// A key outside the record schema
    #[error("Record {index}{}: unknown field '{field}'", name_suffix(.material))]
    UnknownField {
        index: usize,
        material: Option<String>,
        field: String,
    },

    /// A numeric field is zero, negative or not finite
    #[error(
        "Record {index} ('{material}'): field '{field}' must be strictly positive, \
         found {value}"
    )]
    NonPositive {
        index: usize,
        material: String,
        field: String,
        value: f64,
    },

    /// Ultimate strength below yield strength
    #[error(
        "Record {index} ('{material}'): Ultimate Strength {ultimate_strength} \
         is below Yield Strength {yield_strength}"
    )]
    StrengthOrder {
        index: usize,
        material: String,
        yield_strength: f64,
        ultimate_strength: f64,
    },

    /// Two records share a Material name
    #[error(
        "Record {duplicate_index}: duplicate material '{material}' \
         (first defined at record {first_index})"
    )]
    DuplicateMaterial {
        material: String,
        first_index: usize,
        duplicate_index: usize,
    },
}

fn name_suffix(material: &Option<String>) -> String {
    match material {
        Some(name) => format!(" ('{}')", name),
        None => String::new(),
    }
}

impl SchemaError {
    /// Index of the offending record, if the error is tied to one
    pub fn record_index(&self) -> Option<usize> {
        match self {
            SchemaError::NotAnArray { .. } => None,
            SchemaError::NotAnObject { index, .. }
            | SchemaError::MissingField { index, .. }
            | SchemaError::WrongType { index, .. }
            | SchemaError::EmptyText { index, .. }
            | SchemaError::DuplicateField { index, .. }
            | SchemaError::UnknownField { index, .. }
            | SchemaError::NonPositive { index, .. }
            | SchemaError::StrengthOrder { index, .. } => Some(*index),
            SchemaError::DuplicateMaterial { duplicate_index, .. } => Some(*duplicate_index),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SchemaError::NotAnArray { .. } => "NOT_AN_ARRAY",
            SchemaError::NotAnObject { .. } => "NOT_AN_OBJECT",
            SchemaError::MissingField { .. } => "MISSING_FIELD",
            SchemaError::WrongType { .. } => "WRONG_TYPE",
            SchemaError::EmptyText { .. } => "EMPTY_TEXT",
            SchemaError::DuplicateField { .. } => "DUPLICATE_FIELD",
            SchemaError::UnknownField { .. } => "UNKNOWN_FIELD",
            SchemaError::NonPositive { .. } => "NON_POSITIVE",
            SchemaError::StrengthOrder { .. } => "STRENGTH_ORDER",
            SchemaError::DuplicateMaterial { .. } => "DUPLICATE_MATERIAL",
        }
    }
}

/// Structured error type for catalog operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CatalogError {
    /// The catalog content violates the record schema
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The text is not valid JSON
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl CatalogError {
    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CatalogError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CatalogError::SerializationError {
            reason: reason.into(),
        }
    }

    /// The schema error behind this failure, if any
    pub fn as_schema(&self) -> Option<&SchemaError> {
        match self {
            CatalogError::Schema(e) => Some(e),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Schema(e) => e.error_code(),
            CatalogError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CatalogError::FileError { .. } => "FILE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CatalogError::Schema(SchemaError::StrengthOrder {
            index: 0,
            material: "Structural Steel (S235)".to_string(),
            yield_strength: 999.0,
            ultimate_strength: 360.0,
        });
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"Schema\""));
        let roundtrip: CatalogError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        let missing = SchemaError::MissingField {
            index: 3,
            material: None,
            field: "Density".to_string(),
        };
        assert_eq!(missing.error_code(), "MISSING_FIELD");
        assert_eq!(CatalogError::from(missing).error_code(), "MISSING_FIELD");
        assert_eq!(CatalogError::serialization("eof").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(CatalogError::file_error("open", "x.json", "gone").error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_messages_name_the_record() {
        let err = SchemaError::EmptyText {
            index: 2,
            material: Some("Brass (C36000)".to_string()),
            field: "Description".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Record 2 ('Brass (C36000)'): field 'Description' must not be empty"
        );

        let err = SchemaError::MissingField {
            index: 5,
            material: None,
            field: "Material".to_string(),
        };
        assert_eq!(err.to_string(), "Record 5: missing required field 'Material'");
    }

    #[test]
    fn test_duplicate_field_message() {
        let err = SchemaError::DuplicateField {
            index: 4,
            material: Some("Brass (C36000)".to_string()),
            field: "Density".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Record 4 ('Brass (C36000)'): field 'Density' appears more than once"
        );
        assert_eq!(err.error_code(), "DUPLICATE_FIELD");
        assert_eq!(err.record_index(), Some(4));
    }

    #[test]
    fn test_long_messages_read_as_one_line() {
        let err = SchemaError::StrengthOrder {
            index: 0,
            material: "Structural Steel (S235)".to_string(),
            yield_strength: 999.0,
            ultimate_strength: 360.0,
        };
        assert_eq!(
            err.to_string(),
            "Record 0 ('Structural Steel (S235)'): Ultimate Strength 360 \
             is below Yield Strength 999"
        );
    }

    #[test]
    fn test_record_index() {
        let dup = SchemaError::DuplicateMaterial {
            material: "Concrete (C30/37)".to_string(),
            first_index: 1,
            duplicate_index: 7,
        };
        assert_eq!(dup.record_index(), Some(7));
        assert_eq!(
            SchemaError::NotAnArray { found: "object".to_string() }.record_index(),
            None
        );
    }
}
