//! Store result types
//!
//! Defines the flattened result the presentation shell consumes: a success
//! flag and a human-readable message (or, for recovery-code generation,
//! the code itself).

use crate::error::AuthError;

/// Outcome of a store operation at the presentation boundary
#[derive(Debug, Clone)]
pub struct OperationOutcome {
    pub success: bool,
    pub message: String,
}

impl From<Result<String, AuthError>> for OperationOutcome {
    fn from(result: Result<String, AuthError>) -> Self {
        match result {
            Ok(message) => Self {
                success: true,
                message,
            },
            Err(e) => Self {
                success: false,
                message: e.to_string(),
            },
        }
    }
}
