//! Credential store
//!
//! Owns the user and login-attempt maps, implements the account operations
//! (register, authenticate, recovery, reset), and is the only component
//! that reads or writes durable storage.

pub mod operations;
pub mod persistence;
pub mod records;
pub mod results;

pub use operations::CredentialStore;
pub use records::{Role, UserRecord};
pub use results::OperationOutcome;
