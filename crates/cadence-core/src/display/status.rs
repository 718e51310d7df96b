//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::error::FieldErrors;

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

/// Per-field validation messages as a markdown list.
pub struct FieldErrorList<'a>(pub &'a FieldErrors);

impl<'a> fmt::Display for FieldErrorList<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: validation failed")?;
        writeln!(f)?;
        for (field, message) in self.0.iter() {
            writeln!(f, "- **{field}**: {message}")?;
        }
        Ok(())
    }
}
