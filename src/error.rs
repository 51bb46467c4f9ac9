//! Error taxonomy.
//!
//! Only malformed input and failing I/O are errors. Packages left without a
//! center are a valid outcome and live in [`crate::models::Assignment`].

use thiserror::Error;

/// Errors raised while validating input or preparing data.
#[derive(Debug, Error)]
pub enum AssignError {
    /// An entity was given an empty identifier.
    #[error("{kind} at row {index} has an empty id")]
    EmptyId {
        /// `"package"` or `"center"`.
        kind: &'static str,
        /// Position in the input.
        index: usize,
    },

    /// Two entities of the same kind share an identifier.
    #[error("duplicate {kind} id `{id}`")]
    DuplicateId {
        /// `"package"` or `"center"`.
        kind: &'static str,
        /// The repeated identifier.
        id: String,
    },

    /// A coordinate is NaN or infinite.
    #[error("{kind} `{id}` has a non-finite location ({x}, {y})")]
    NonFiniteLocation {
        /// `"package"` or `"center"`.
        kind: &'static str,
        /// Entity identifier.
        id: String,
        /// X-coordinate.
        x: f64,
        /// Y-coordinate.
        y: f64,
    },

    /// A delivery weight is non-finite or not strictly positive.
    #[error("package `{id}` has invalid delivery weight {weight}")]
    InvalidWeight {
        /// Package identifier.
        id: String,
        /// Offending weight.
        weight: f64,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required CSV column is absent.
    #[error("missing column `{0}`")]
    MissingColumn(&'static str),

    /// CSV reading or writing failed.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Filesystem access failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A JSON configuration file could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AssignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = AssignError::DuplicateId {
            kind: "center",
            id: "C1".into(),
        };
        assert_eq!(e.to_string(), "duplicate center id `C1`");

        let e = AssignError::MissingColumn("Order_ID");
        assert_eq!(e.to_string(), "missing column `Order_ID`");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: AssignError = io.into();
        assert!(matches!(e, AssignError::Io(_)));
    }
}
