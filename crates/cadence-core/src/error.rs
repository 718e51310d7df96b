//! Error types for the content calendar library.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::forms::FormField;

/// Comprehensive error type for all calendar operations.
///
/// Lifecycle conflicts (acting on an already resolved suggestion) and
/// cancelled submissions are not errors; they are reported through
/// [`crate::SuggestionOutcome`] and [`crate::SubmitOutcome`].
#[derive(Error, Debug)]
pub enum CalendarError {
    /// One or more form fields failed validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),
    /// A draft submission is already waiting to commit
    #[error("A draft submission is already in flight")]
    SubmissionInFlight,
    /// Suggestion ID was never known to the manager
    #[error("Suggestion with ID '{id}' not found")]
    SuggestionNotFound { id: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Async runtime errors (missing runtime, task join failures)
    #[error("Runtime error: {message}")]
    Runtime { message: String },
    /// Misconfigured collaborators, such as a suggestion source that
    /// cannot produce a list
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Per-field validation messages, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field, replacing any earlier one.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Returns the message recorded for a field.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Converts a non-empty set into `Err(CalendarError::Validation)`.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CalendarError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CalendarError {
        CalendarError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CalendarError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns the field errors when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CalendarError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias for calendar operations
pub type Result<T> = std::result::Result<T, CalendarError>;
