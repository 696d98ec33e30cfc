//! Shell session state
//!
//! Tracks who is logged in at the terminal and whether they hold the
//! admin role. Purely presentation-side; the store knows nothing about
//! sessions.

/// State of the interactive session
#[derive(Debug, Default)]
pub struct Session {
    username: Option<String>,
    is_admin: bool,
}

impl Session {
    /// Mark a user as logged in.
    pub fn login(&mut self, username: String, is_admin: bool) {
        self.username = Some(username);
        self.is_admin = is_admin;
    }

    /// Clear the session state.
    pub fn logout(&mut self) {
        self.username = None;
        self.is_admin = false;
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}
