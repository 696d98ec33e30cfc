//! Recovery code generation
//!
//! Produces the single-use codes handed to users for password reset. The
//! code is the user's temporary plaintext credential, not itself hashed.

use rand::Rng;

/// Code length in characters
const CODE_LENGTH: usize = 8;

/// Uppercase letters and digits only, to survive being read aloud or typed
const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a random 8-character recovery code.
pub fn generate_recovery_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect()
}
