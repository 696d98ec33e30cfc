pub mod auth;
pub mod config;
pub mod error;
pub mod lockout;
pub mod shell;
pub mod store;

pub use config::AuthConfig;
pub use store::CredentialStore;
