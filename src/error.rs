//! Crate error type.
//!
//! Only structurally invalid input is an error. An empty or short result
//! (no feasible schedule, non-positive `amount`) is a normal `Ok` value.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog failed validation; no search was run.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    /// A request or response could not be (de)serialized.
    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),
    /// The worker thread could not be started.
    #[error("failed to start generator worker: {0}")]
    Spawn(#[from] std::io::Error),
    /// The background worker has shut down.
    #[error("generator worker is not running")]
    WorkerUnavailable,
    /// A reply was requested but nothing is awaited.
    #[error("no request is pending")]
    NoPendingRequest,
    /// The search panicked inside the worker.
    #[error("generator worker panicked: {0}")]
    WorkerPanicked(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, CourseType};
    use crate::validation::validate_catalog;

    #[test]
    fn test_invalid_input_display() {
        let errors = validate_catalog(&[
            Course::new("A", CourseType::Lecture),
            Course::new("A", CourseType::Lecture),
        ])
        .unwrap_err();
        let err = Error::from(errors);
        assert_eq!(err.to_string(), "invalid input: Duplicate course: A Lecture");
    }

    #[test]
    fn test_json_error_converts() {
        let err: Error = serde_json::from_str::<Course>("{").unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("malformed message"));
    }
}
