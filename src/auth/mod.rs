//! Credential primitives
//!
//! Password hashing, recovery-code generation, and registration input
//! validation.

pub mod hashing;
pub mod recovery;
pub mod validator;

pub use hashing::hash_password;
pub use recovery::generate_recovery_code;
pub use validator::{validate_new_password, validate_username};
