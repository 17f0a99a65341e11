//! Custom error types for Outlay
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Outlay operations
#[derive(Error, Debug)]
pub enum OutlayError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors, always raised before any write
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors (e.g., a category that already exists)
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Database errors during normal operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// The store could not be created or opened; fatal at startup
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Chart/CSV export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Email delivery errors
    #[error("Email error: {0}")]
    Email(#[from] EmailFailure),
}

/// Distinguishable reasons an email summary can fail
#[derive(Error, Debug)]
pub enum EmailFailure {
    /// No chart file was available to attach
    #[error("Could not find the chart to attach; generate it first")]
    ChartMissing,

    /// The chart file exists but could not be read
    #[error("Could not read the chart attachment: {0}")]
    Attachment(String),

    /// SMTP authentication or connection failure
    #[error("Failed to send email: {0}")]
    Transport(String),
}

impl OutlayError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "already exists" error for categories
    pub fn category_exists(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for OutlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for OutlayError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for Outlay operations
pub type OutlayResult<T> = Result<T, OutlayError>;
