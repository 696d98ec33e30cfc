//! Error types
//!
//! Defines domain-specific error types for the account manager. Every
//! `AuthError` variant is recoverable by the caller choosing a different
//! input or retrying later; `StoreError` covers persistence failures,
//! which are logged and never surfaced through the shell contract.

use std::fmt;
use std::io;

/// Account operation errors
#[derive(Debug)]
pub enum AuthError {
    DuplicateUser(String),
    InvalidUsername(String),
    PasswordTooShort(usize),
    PasswordMismatch,
    UserNotFound(String),
    /// Lockout already in effect; seconds until it expires
    AccountLocked { remaining_secs: u64 },
    /// Lockout newly triggered by this attempt; its full duration
    LockoutTriggered { lockout_secs: u64 },
    InvalidPassword { attempts_remaining: u32 },
    InvalidRecoveryCode,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::DuplicateUser(u) => write!(f, "User already exists: {}", u),
            AuthError::InvalidUsername(u) => write!(f, "Invalid username: {}", u),
            AuthError::PasswordTooShort(min) => {
                write!(f, "Password must be at least {} characters.", min)
            }
            AuthError::PasswordMismatch => write!(f, "Passwords do not match."),
            AuthError::UserNotFound(u) => write!(f, "User not found: {}", u),
            AuthError::AccountLocked { remaining_secs } => {
                write!(
                    f,
                    "Account locked. Try again in {} seconds.",
                    remaining_secs
                )
            }
            AuthError::LockoutTriggered { lockout_secs } => {
                write!(
                    f,
                    "Account locked for {} seconds after too many failed attempts.",
                    lockout_secs
                )
            }
            AuthError::InvalidPassword { attempts_remaining } => {
                write!(
                    f,
                    "Incorrect password. Attempts remaining: {}.",
                    attempts_remaining
                )
            }
            // One message for both the absent-code and mismatch cases
            AuthError::InvalidRecoveryCode => write!(f, "Invalid recovery code."),
        }
    }
}

impl std::error::Error for AuthError {}

/// Persistence errors
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Parse(error)
    }
}
