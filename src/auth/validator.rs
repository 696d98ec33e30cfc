//! Registration input validation
//!
//! Validates usernames and new passwords before a record is created or
//! rewritten.

use crate::error::AuthError;

/// Upper bound on accepted username length
const MAX_USERNAME_LENGTH: usize = 64;

/// Performs basic input sanitation to reject malformed usernames.
fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty() && input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}

/// Validates a username for registration.
pub fn validate_username(username: &str) -> Result<(), AuthError> {
    if !is_valid_input(username, MAX_USERNAME_LENGTH) {
        return Err(AuthError::InvalidUsername(username.to_string()));
    }
    Ok(())
}

/// Validates a new password against the configured minimum length and its
/// confirmation entry.
pub fn validate_new_password(
    password: &str,
    confirm_password: &str,
    min_length: usize,
) -> Result<(), AuthError> {
    if password.len() < min_length {
        return Err(AuthError::PasswordTooShort(min_length));
    }

    if password != confirm_password {
        return Err(AuthError::PasswordMismatch);
    }

    Ok(())
}
