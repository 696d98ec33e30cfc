//! Configuration management
//!
//! Carries every tunable of the account manager in a single struct that is
//! constructed once and passed into the credential store. There are no
//! process-wide mutable globals; tests build their own `AuthConfig` values.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Account manager configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Primary user store (username -> record, JSON)
    pub database_file: PathBuf,

    /// Backup copy of the user store, taken before each overwrite
    pub backup_file: PathBuf,

    /// Login attempt store (username -> count/lockout, JSON)
    pub attempts_file: PathBuf,

    /// Consecutive failed logins before an account is locked
    pub max_login_attempts: u32,

    /// Lockout duration in seconds
    pub lockout_time_secs: u64,

    /// Minimum accepted password length
    pub password_min_length: usize,

    /// Seed administrator account, created on first run only
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            database_file: PathBuf::from("data/users.json"),
            backup_file: PathBuf::from("data/users_backup.json"),
            attempts_file: PathBuf::from("data/login_attempts.json"),
            max_login_attempts: 3,
            lockout_time_secs: 300,
            password_min_length: 6,
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
        }
    }
}

impl AuthConfig {
    /// Load configuration from config.toml with environment overrides.
    ///
    /// The file is optional; compiled-in defaults cover every field, and
    /// `RAX_AUTH_*` environment variables override both.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("RAX_AUTH"))
            .build()?;

        let config: AuthConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_login_attempts == 0 {
            return Err(ConfigError::Message(
                "max_login_attempts must be at least 1".to_string(),
            ));
        }

        if self.password_min_length == 0 {
            return Err(ConfigError::Message(
                "password_min_length must be at least 1".to_string(),
            ));
        }

        if self.admin_username.trim().is_empty() {
            return Err(ConfigError::Message(
                "admin_username must not be empty".to_string(),
            ));
        }

        if self.admin_password.len() < self.password_min_length {
            return Err(ConfigError::Message(format!(
                "admin_password must be at least {} characters",
                self.password_min_length
            )));
        }

        Ok(())
    }
}
