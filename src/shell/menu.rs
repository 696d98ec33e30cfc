//! Menu rendering
//!
//! Banner, numbered menus, and the admin user table. Optional record
//! fields are given their display sentinels here, at the boundary; the
//! store itself only deals in true optionals.

use std::collections::HashMap;

use crate::store::records::{Role, UserRecord};
use crate::store::results::OperationOutcome;

const SYSTEM_NAME: &str = "ACCOUNT MANAGEMENT SYSTEM";
const HEADER_WIDTH: usize = 60;

/// Print the banner header.
pub fn print_header() {
    println!();
    println!("{}", "*".repeat(HEADER_WIDTH));
    println!("*{:^width$}*", SYSTEM_NAME, width = HEADER_WIDTH - 2);
    println!("{}", "*".repeat(HEADER_WIDTH));
    println!();
}

/// Print a numbered menu; option 0 always exits.
pub fn print_menu(options: &[&str]) {
    for (idx, option) in options.iter().enumerate() {
        println!("{}. {}", idx + 1, option);
    }
    println!("0. Exit");
    println!();
}

/// Print an operation outcome.
pub fn print_outcome(outcome: &OperationOutcome) {
    if outcome.success {
        println!("{}", outcome.message);
    } else {
        print_failure(&outcome.message);
    }
}

pub fn print_failure(message: &str) {
    println!("ERROR: {}", message);
}

/// Print the user table, sorted by username.
pub fn print_user_table(users: &HashMap<String, UserRecord>) {
    let mut usernames: Vec<&String> = users.keys().collect();
    usernames.sort();

    println!(
        "{:<20} {:<6} {:<20} {:<20}",
        "USERNAME", "ROLE", "CREATED", "LAST LOGIN"
    );
    println!("{}", "-".repeat(68));

    for username in usernames {
        let user = &users[username];
        let role = match user.role {
            Role::Admin => "admin",
            Role::User => "user",
        };
        let last_login = user
            .last_login
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "{:<20} {:<6} {:<20} {:<20}",
            username,
            role,
            user.created_at.format("%Y-%m-%d %H:%M:%S"),
            last_login
        );
    }
    println!();
}
