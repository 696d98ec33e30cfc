//! Durable storage for the user and attempt maps
//!
//! Three JSON files: the primary user store, a backup copy taken before
//! each overwrite, and the attempt store. All IO is synchronous; failures
//! are reported to the log and degrade to in-memory state rather than
//! terminating the process.

use log::{error, warn};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::StoreError;
use crate::lockout::LoginAttemptRecord;
use crate::store::records::UserRecord;

/// Load the user map from `path`.
///
/// Returns `None` when the file does not exist, so the caller can bootstrap
/// the seed admin. Corrupt or unreadable content is reported and yields an
/// empty map: data loss is surfaced, not fatal.
pub fn load_user_map(path: &Path) -> Option<HashMap<String, UserRecord>> {
    if !path.exists() {
        return None;
    }

    match read_map(path) {
        Ok(users) => Some(users),
        Err(e) => {
            error!(
                "User store {} is unreadable, starting with an empty map: {}",
                path.display(),
                e
            );
            Some(HashMap::new())
        }
    }
}

/// Load the attempt map from `path`.
///
/// Absent or corrupt content becomes an empty map; losing attempt history
/// only forgives in-flight lockouts, so it is logged at a lower severity
/// than user data.
pub fn load_attempt_map(path: &Path) -> HashMap<String, LoginAttemptRecord> {
    if !path.exists() {
        return HashMap::new();
    }

    match read_map(path) {
        Ok(attempts) => attempts,
        Err(e) => {
            warn!(
                "Attempt store {} is unreadable, starting fresh: {}",
                path.display(),
                e
            );
            HashMap::new()
        }
    }
}

/// Write the user map to `path`, copying the previous on-disk content to
/// `backup_path` first. The backup is best-effort: its failure is reported
/// but does not abort the save.
pub fn save_user_map(
    path: &Path,
    backup_path: &Path,
    users: &HashMap<String, UserRecord>,
) -> Result<(), StoreError> {
    if path.exists() {
        if let Err(e) = fs::copy(path, backup_path) {
            warn!(
                "Failed to back up user store to {}: {}",
                backup_path.display(),
                e
            );
        }
    }

    write_map(path, users)
}

/// Write the attempt map to `path`.
pub fn save_attempt_map(
    path: &Path,
    attempts: &HashMap<String, LoginAttemptRecord>,
) -> Result<(), StoreError> {
    write_map(path, attempts)
}

fn read_map<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_map<T: serde::Serialize>(path: &Path, map: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let contents = serde_json::to_string_pretty(map)?;
    fs::write(path, contents)?;
    Ok(())
}
