//! Error types for the fixture harness.

use thiserror::Error;

use crate::annotator::ReplayError;

/// Errors that can occur while loading or running fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error parsing a fixture file.
    #[error("parse error in {format} fixture: {message}")]
    Parse { format: &'static str, message: String },

    /// Error loading a fixture file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// The replay annotator refused the fixture text.
    #[error(transparent)]
    Annotator(#[from] ReplayError),
}

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;
