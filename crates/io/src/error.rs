//! Error types for nereus-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the nereus-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the Parquet or Arrow libraries.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when the file contents fail a consistency check.
    #[error("validation error: {details}")]
    Validation {
        /// Human-readable summary of the failure.
        details: String,
    },

    /// Returned when a requested region is absent from a file.
    #[error("region '{region}' not found in {}", path.display())]
    MissingRegion {
        /// Name of the missing region.
        region: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<nereus_field::FieldError> for IoError {
    fn from(e: nereus_field::FieldError) -> Self {
        IoError::Validation {
            details: e.to_string(),
        }
    }
}
