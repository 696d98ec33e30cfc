//! RAX Account Manager - Entry Point
//!
//! A local, single-process account-management utility: registration,
//! authentication with a failed-attempt lockout policy, and a
//! recovery-code password reset flow.

use env_logger;
use log::{error, info};

use rax_account_manager::config::AuthConfig;
use rax_account_manager::shell;
use rax_account_manager::store::CredentialStore;

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching account manager...");

    let config = match AuthConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration, using defaults: {}", e);
            AuthConfig::default()
        }
    };

    let mut store = CredentialStore::open(config);
    shell::run(&mut store);
}
