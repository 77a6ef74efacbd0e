//! Unified error types for the report tool
//!
//! This module provides a common error type [`RerError`] that can represent
//! failures from any part of the system: dataset loading, settings
//! persistence, and report queries. No failure is fatal; callers report the
//! diagnostic at the boundary where it occurs and keep running.
//!
//! # Example
//!
//! ```ignore
//! use rer_core::{RerError, RerResult};
//!
//! fn show_report(dataset_path: &str) -> RerResult<()> {
//!     let dataset = load_dataset(dataset_path)?;
//!     print_country_report(&dataset, 0)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Unified error type for all report-tool operations.
#[derive(Error, Debug)]
pub enum RerError {
    /// I/O errors (file access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed dataset content (bad XML, missing or non-numeric attributes)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Malformed settings content
    #[error("Settings error: {0}")]
    Settings(String),

    /// Country report requested for an index outside the dataset
    #[error("country index {index} is out of range ({count} countries loaded)")]
    CountryIndex { index: usize, count: usize },

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using RerError.
pub type RerResult<T> = Result<T, RerError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for RerError {
    fn from(err: anyhow::Error) -> Self {
        RerError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for RerError {
    fn from(s: String) -> Self {
        RerError::Other(s)
    }
}

impl From<&str> for RerError {
    fn from(s: &str) -> Self {
        RerError::Other(s.to_string())
    }
}
