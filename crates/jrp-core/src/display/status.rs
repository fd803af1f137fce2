//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::models::Outcome;

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

    /// Builds the confirmation line for a store outcome.
    pub fn from_outcome<S: Outcome + fmt::Display>(status: S) -> Self {
        if status.is_failure() {
            Self::failure(status.to_string())
        } else {
            Self::success(status.to_string())
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}
