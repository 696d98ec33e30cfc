//! Input prompts
//!
//! Line and masked-password prompts for the shell. Every prompt returns
//! `None` on closed stdin so the menu loop can exit cleanly instead of
//! spinning.

use log::warn;
use std::io::{self, Write};

/// Prompt for a line of input. Returns `None` on EOF.
pub fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            warn!("Failed to read input: {}", e);
            None
        }
    }
}

/// Prompt for a password with terminal echo disabled.
pub fn prompt_password(label: &str) -> Option<String> {
    match rpassword::prompt_password(label) {
        Ok(password) => Some(password),
        Err(e) => {
            warn!("Failed to read password: {}", e);
            None
        }
    }
}

/// Wait for Enter before redrawing the menu.
pub fn pause() {
    let _ = prompt("Press Enter to continue...");
}
