//! Terminal shell
//!
//! Presentation glue around the credential store: menus, prompts, and
//! result rendering. The shell owns session state and admin gating but
//! never touches the storage files; everything flows through the store's
//! operation contract.

pub mod input;
pub mod menu;
pub mod session;

use log::debug;

use crate::store::{CredentialStore, OperationOutcome};
use session::Session;

/// Run the interactive menu loop until the user exits or stdin closes.
pub fn run(store: &mut CredentialStore) {
    let mut session = Session::default();

    loop {
        let keep_going = if session.is_logged_in() {
            account_menu(store, &mut session)
        } else {
            main_menu(store, &mut session)
        };

        if !keep_going {
            break;
        }
    }

    println!("Goodbye.");
}

/// Menu shown before login. Returns false to terminate the shell.
fn main_menu(store: &mut CredentialStore, session: &mut Session) -> bool {
    menu::print_header();
    menu::print_menu(&["Login", "Register", "Recover password"]);

    let Some(choice) = input::prompt("Choose an option: ") else {
        return false;
    };

    match choice.as_str() {
        "1" => login_flow(store, session),
        "2" => register_flow(store),
        "3" => recovery_flow(store),
        "0" => return false,
        other => {
            debug!("Unrecognized menu choice: {:?}", other);
            menu::print_failure("Invalid option.");
        }
    }
    true
}

/// Menu shown while logged in. Returns false to terminate the shell.
fn account_menu(store: &mut CredentialStore, session: &mut Session) -> bool {
    menu::print_header();
    println!(
        "Logged in as: {}{}",
        session.username().unwrap_or(""),
        if session.is_admin() { " (admin)" } else { "" }
    );
    println!();

    if session.is_admin() {
        menu::print_menu(&["List users", "Logout"]);
    } else {
        menu::print_menu(&["Logout"]);
    }

    let Some(choice) = input::prompt("Choose an option: ") else {
        return false;
    };

    match (choice.as_str(), session.is_admin()) {
        ("1", true) => {
            // Admin-only view; gating lives here, not in the store
            menu::print_user_table(store.list_users());
            input::pause();
        }
        ("2", true) | ("1", false) => session.logout(),
        ("0", _) => return false,
        _ => menu::print_failure("Invalid option."),
    }
    true
}

fn login_flow(store: &mut CredentialStore, session: &mut Session) {
    let Some(username) = input::prompt("Username: ") else {
        return;
    };
    let Some(password) = input::prompt_password("Password: ") else {
        return;
    };

    let outcome = OperationOutcome::from(store.authenticate(&username, &password));
    menu::print_outcome(&outcome);

    if outcome.success {
        let is_admin = store
            .list_users()
            .get(&username)
            .is_some_and(|u| u.is_admin());
        session.login(username, is_admin);
    }
    input::pause();
}

fn register_flow(store: &mut CredentialStore) {
    let Some(username) = input::prompt("New username: ") else {
        return;
    };
    let Some(password) = input::prompt_password("Password: ") else {
        return;
    };
    let Some(confirm) = input::prompt_password("Confirm password: ") else {
        return;
    };

    let outcome = OperationOutcome::from(store.register(&username, &password, &confirm));
    menu::print_outcome(&outcome);
    input::pause();
}

fn recovery_flow(store: &mut CredentialStore) {
    let Some(username) = input::prompt("Username: ") else {
        return;
    };

    match store.generate_recovery_code(&username) {
        Ok(code) => {
            println!("Recovery code: {}", code);
            println!("Use it now to set a new password.");
        }
        Err(e) => {
            menu::print_failure(&e.to_string());
            input::pause();
            return;
        }
    }

    let Some(code) = input::prompt("Recovery code: ") else {
        return;
    };
    let Some(new_password) = input::prompt_password("New password: ") else {
        return;
    };

    let outcome = OperationOutcome::from(store.reset_password(&username, &code, &new_password));
    menu::print_outcome(&outcome);
    input::pause();
}
