//! Account operations
//!
//! `CredentialStore` owns the user map and the attempt tracker, and is the
//! single mutation point for both. Every mutating operation persists before
//! returning; write failures keep the in-memory state authoritative until
//! the next successful save.

use chrono::{DateTime, Utc};
use log::{error, info, warn};
use std::collections::HashMap;

use crate::auth::{generate_recovery_code, hash_password, validate_new_password, validate_username};
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::lockout::{AttemptTracker, FailureOutcome, LockStatus};
use crate::store::persistence;
use crate::store::records::{Role, UserRecord};

pub struct CredentialStore {
    users: HashMap<String, UserRecord>,
    tracker: AttemptTracker,
    config: AuthConfig,
}

impl CredentialStore {
    /// Open the store from the configured paths.
    ///
    /// A missing user store means first run: a single admin account is
    /// seeded from the config and persisted immediately. A corrupt store
    /// loads as empty (reported by the persistence layer) and is NOT
    /// re-seeded.
    pub fn open(config: AuthConfig) -> Self {
        let (users, seeded) = match persistence::load_user_map(&config.database_file) {
            Some(users) => (users, false),
            None => {
                info!(
                    "No user store at {}, seeding admin account '{}'",
                    config.database_file.display(),
                    config.admin_username
                );
                let mut users = HashMap::new();
                users.insert(
                    config.admin_username.clone(),
                    UserRecord::new(
                        hash_password(&config.admin_password),
                        Role::Admin,
                        Utc::now(),
                    ),
                );
                (users, true)
            }
        };

        let attempts = persistence::load_attempt_map(&config.attempts_file);
        let tracker = AttemptTracker::new(
            config.max_login_attempts,
            config.lockout_time_secs,
            attempts,
        );

        let store = Self {
            users,
            tracker,
            config,
        };
        if seeded {
            store.persist();
        }
        store
    }

    /// Write both maps to disk. Failures are logged and swallowed; the
    /// in-memory maps remain the source of truth.
    fn persist(&self) {
        if let Err(e) = persistence::save_user_map(
            &self.config.database_file,
            &self.config.backup_file,
            &self.users,
        ) {
            error!("Failed to save user store: {}", e);
        }

        if let Err(e) =
            persistence::save_attempt_map(&self.config.attempts_file, self.tracker.records())
        {
            warn!("Failed to save attempt store: {}", e);
        }
    }

    /// Register a new account with role `user`.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<String, AuthError> {
        validate_username(username)?;

        if self.users.contains_key(username) {
            return Err(AuthError::DuplicateUser(username.to_string()));
        }

        validate_new_password(password, confirm_password, self.config.password_min_length)?;

        self.users.insert(
            username.to_string(),
            UserRecord::new(hash_password(password), Role::User, Utc::now()),
        );
        self.persist();

        info!("Registered user '{}'", username);
        Ok("User registered successfully.".to_string())
    }

    /// Authenticate a username/password pair against the stored hash,
    /// enforcing the lockout policy.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<String, AuthError> {
        self.authenticate_at(username, password, Utc::now())
    }

    /// Authentication state machine, with the clock as an argument.
    ///
    /// Order matters: the lockout check runs before any password
    /// comparison, and an expired lockout grants a fresh attempt budget
    /// before the password is evaluated.
    pub(crate) fn authenticate_at(
        &mut self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        if !self.users.contains_key(username) {
            return Err(AuthError::UserNotFound(username.to_string()));
        }

        if let LockStatus::Locked { remaining_secs } = self.tracker.check(username, now) {
            return Err(AuthError::AccountLocked { remaining_secs });
        }

        let supplied_hash = hash_password(password);
        if self.users[username].password_hash != supplied_hash {
            let outcome = self.tracker.record_failure(username, now);
            self.persist();

            return Err(match outcome {
                FailureOutcome::LockedOut { lockout_secs } => {
                    warn!("Account '{}' locked for {} seconds", username, lockout_secs);
                    AuthError::LockoutTriggered { lockout_secs }
                }
                FailureOutcome::AttemptsLeft(attempts_remaining) => {
                    AuthError::InvalidPassword { attempts_remaining }
                }
            });
        }

        self.tracker.record_success(username);
        if let Some(user) = self.users.get_mut(username) {
            user.last_login = Some(now);
        }
        self.persist();

        info!("User '{}' logged in", username);
        Ok("Login successful.".to_string())
    }

    /// Read-only view of every account, keyed by username. Admin-only
    /// access is enforced by the caller, not here.
    pub fn list_users(&self) -> &HashMap<String, UserRecord> {
        &self.users
    }

    /// Generate and store a recovery code for a user, overwriting any
    /// prior unused code. The plaintext code is returned to the caller;
    /// it is the user's temporary credential for the reset flow.
    pub fn generate_recovery_code(&mut self, username: &str) -> Result<String, AuthError> {
        let user = self
            .users
            .get_mut(username)
            .ok_or_else(|| AuthError::UserNotFound(username.to_string()))?;

        let code = generate_recovery_code();
        user.recovery_code = Some(code.clone());
        self.persist();

        info!("Recovery code issued for '{}'", username);
        Ok(code)
    }

    /// Reset a password with a previously issued recovery code. The code
    /// is single-use: a successful reset clears it.
    pub fn reset_password(
        &mut self,
        username: &str,
        recovery_code: &str,
        new_password: &str,
    ) -> Result<String, AuthError> {
        let min_length = self.config.password_min_length;
        let user = self
            .users
            .get_mut(username)
            .ok_or_else(|| AuthError::UserNotFound(username.to_string()))?;

        // Absent and mismatched codes share one error, so the response
        // does not reveal whether a code was ever issued
        match user.recovery_code.as_deref() {
            Some(stored) if stored == recovery_code => {}
            _ => return Err(AuthError::InvalidRecoveryCode),
        }

        if new_password.len() < min_length {
            return Err(AuthError::PasswordTooShort(min_length));
        }

        user.password_hash = hash_password(new_password);
        user.recovery_code = None;
        self.persist();

        info!("Password reset for '{}'", username);
        Ok("Password reset successfully.".to_string())
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> AuthConfig {
        AuthConfig {
            database_file: dir.path().join("users.json"),
            backup_file: dir.path().join("users_backup.json"),
            attempts_file: dir.path().join("login_attempts.json"),
            ..AuthConfig::default()
        }
    }

    fn open_store(dir: &TempDir) -> CredentialStore {
        CredentialStore::open(test_config(dir))
    }

    #[test]
    fn test_seeds_single_admin_on_first_run() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.list_users().len(), 1);
        let admin = &store.list_users()["admin"];
        assert!(admin.is_admin());
        assert!(admin.last_login.is_none());
        assert!(admin.recovery_code.is_none());
        assert_eq!(admin.password_hash, hash_password("admin123"));
        // Seed is persisted immediately
        assert!(dir.path().join("users.json").exists());
    }

    #[test]
    fn test_register_then_authenticate() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.register("alice", "secret1", "secret1").unwrap();
        assert!(store.authenticate("alice", "secret1").is_ok());
        assert!(store.list_users()["alice"].last_login.is_some());
    }

    #[test]
    fn test_register_rejects_duplicate() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.register("alice", "secret1", "secret1").unwrap();
        assert!(matches!(
            store.register("alice", "other99", "other99"),
            Err(AuthError::DuplicateUser(_))
        ));
    }

    #[test]
    fn test_register_validates_password() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        assert!(matches!(
            store.register("alice", "short", "short"),
            Err(AuthError::PasswordTooShort(6))
        ));
        assert!(matches!(
            store.register("alice", "secret1", "secret2"),
            Err(AuthError::PasswordMismatch)
        ));
        // Failed registrations leave no record behind
        assert!(!store.list_users().contains_key("alice"));
    }

    #[test]
    fn test_stored_record_never_holds_plaintext() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.register("alice", "secret1", "secret1").unwrap();
        assert_ne!(store.list_users()["alice"].password_hash, "secret1");

        let on_disk = std::fs::read_to_string(dir.path().join("users.json")).unwrap();
        assert!(!on_disk.contains("secret1"));
    }

    #[test]
    fn test_authenticate_unknown_user() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        assert!(matches!(
            store.authenticate("ghost", "whatever"),
            Err(AuthError::UserNotFound(_))
        ));
    }

    #[test]
    fn test_wrong_password_counts_down_attempts() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.register("alice", "secret1", "secret1").unwrap();

        assert!(matches!(
            store.authenticate("alice", "wrong"),
            Err(AuthError::InvalidPassword {
                attempts_remaining: 2
            })
        ));
        assert!(matches!(
            store.authenticate("alice", "wrong"),
            Err(AuthError::InvalidPassword {
                attempts_remaining: 1
            })
        ));
    }

    #[test]
    fn test_lockout_scenario() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.register("alice", "secret1", "secret1").unwrap();

        let now = Utc::now();
        store.authenticate_at("alice", "wrong", now).unwrap_err();
        store.authenticate_at("alice", "wrong", now).unwrap_err();

        // Third failure triggers the lockout, stating its duration
        assert!(matches!(
            store.authenticate_at("alice", "wrong", now),
            Err(AuthError::LockoutTriggered { lockout_secs: 300 })
        ));

        // Correct password during the window still fails; it is not checked
        match store.authenticate_at("alice", "secret1", now + Duration::seconds(10)) {
            Err(AuthError::AccountLocked { remaining_secs }) => {
                assert_eq!(remaining_secs, 290);
            }
            other => panic!("expected AccountLocked, got {:?}", other),
        }

        // Past the deadline the lockout clears and the login succeeds
        let later = now + Duration::seconds(301);
        assert!(store.authenticate_at("alice", "secret1", later).is_ok());
        assert_eq!(
            store.list_users()["alice"].last_login,
            Some(later)
        );

        // Fresh attempt budget after the expiry reset
        assert!(matches!(
            store.authenticate_at("alice", "wrong", later),
            Err(AuthError::InvalidPassword {
                attempts_remaining: 2
            })
        ));
    }

    #[test]
    fn test_expired_lockout_with_wrong_password_restarts_budget() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.register("alice", "secret1", "secret1").unwrap();

        let now = Utc::now();
        for _ in 0..3 {
            store.authenticate_at("alice", "wrong", now).unwrap_err();
        }

        // Expiry clears state before the password check, so a wrong
        // password counts as the first failure of a new budget
        let later = now + Duration::seconds(301);
        assert!(matches!(
            store.authenticate_at("alice", "wrong", later),
            Err(AuthError::InvalidPassword {
                attempts_remaining: 2
            })
        ));
    }

    #[test]
    fn test_success_resets_failed_count() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.register("alice", "secret1", "secret1").unwrap();

        store.authenticate("alice", "wrong").unwrap_err();
        store.authenticate("alice", "wrong").unwrap_err();
        store.authenticate("alice", "secret1").unwrap();

        // Back to a full budget
        assert!(matches!(
            store.authenticate("alice", "wrong"),
            Err(AuthError::InvalidPassword {
                attempts_remaining: 2
            })
        ));
    }

    #[test]
    fn test_recovery_code_reset_flow() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.register("alice", "secret1", "secret1").unwrap();

        let code = store.generate_recovery_code("alice").unwrap();
        assert_eq!(code.len(), 8);
        assert_eq!(
            store.list_users()["alice"].recovery_code.as_deref(),
            Some(code.as_str())
        );

        store.reset_password("alice", &code, "newpass9").unwrap();
        assert!(store.list_users()["alice"].recovery_code.is_none());
        assert!(store.authenticate("alice", "newpass9").is_ok());
        assert!(matches!(
            store.authenticate("alice", "secret1"),
            Err(AuthError::InvalidPassword { .. })
        ));
    }

    #[test]
    fn test_recovery_code_is_single_use() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.register("alice", "secret1", "secret1").unwrap();

        let code = store.generate_recovery_code("alice").unwrap();
        store.reset_password("alice", &code, "newpass9").unwrap();

        assert!(matches!(
            store.reset_password("alice", &code, "another9"),
            Err(AuthError::InvalidRecoveryCode)
        ));
    }

    #[test]
    fn test_reset_rejects_wrong_or_absent_code() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.register("alice", "secret1", "secret1").unwrap();

        // No code issued yet
        assert!(matches!(
            store.reset_password("alice", "AAAA1111", "newpass9"),
            Err(AuthError::InvalidRecoveryCode)
        ));

        let code = store.generate_recovery_code("alice").unwrap();
        // Case-sensitive exact match required
        let wrong_case = code.to_lowercase();
        assert!(matches!(
            store.reset_password("alice", &wrong_case, "newpass9"),
            Err(AuthError::InvalidRecoveryCode)
        ));
    }

    #[test]
    fn test_reset_enforces_minimum_length() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.register("alice", "secret1", "secret1").unwrap();

        let code = store.generate_recovery_code("alice").unwrap();
        assert!(matches!(
            store.reset_password("alice", &code, "abc"),
            Err(AuthError::PasswordTooShort(6))
        ));
        // The failed reset does not consume the code
        store.reset_password("alice", &code, "newpass9").unwrap();
    }

    #[test]
    fn test_new_code_overwrites_unused_one() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.register("alice", "secret1", "secret1").unwrap();

        let first = store.generate_recovery_code("alice").unwrap();
        let second = store.generate_recovery_code("alice").unwrap();

        assert!(matches!(
            store.reset_password("alice", &first, "newpass9"),
            Err(AuthError::InvalidRecoveryCode)
        ));
        store.reset_password("alice", &second, "newpass9").unwrap();
    }

    #[test]
    fn test_recovery_for_unknown_user() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        assert!(matches!(
            store.generate_recovery_code("ghost"),
            Err(AuthError::UserNotFound(_))
        ));
        assert!(matches!(
            store.reset_password("ghost", "AAAA1111", "newpass9"),
            Err(AuthError::UserNotFound(_))
        ));
    }

    #[test]
    fn test_corrupt_store_is_not_reseeded() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("users.json"), "{corrupt").unwrap();

        let store = open_store(&dir);
        assert!(store.list_users().is_empty());
    }
}
