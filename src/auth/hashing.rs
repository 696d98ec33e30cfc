//! Password hashing
//!
//! A single unsalted SHA-256 round, matching the stored-credential format.
//! Known weakness: without salting or key stretching this is not suitable
//! for hardened deployments; the on-disk contract requires it.

use sha2::{Digest, Sha256};

/// Hash a plaintext password to its 64-character hex digest.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    hex::encode(digest)
}
