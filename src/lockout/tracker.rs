//! Per-username attempt tracker

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Persisted attempt state for one username.
///
/// An absent record is equivalent to zero failures and no lockout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginAttemptRecord {
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lockout_until: Option<DateTime<Utc>>,
}

/// Lockout state of a username at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockStatus {
    Clear,
    Locked { remaining_secs: u64 },
}

/// Result of recording a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOutcome {
    /// The failure crossed the attempt limit and locked the account
    LockedOut { lockout_secs: u64 },
    /// Attempts left before the account locks
    AttemptsLeft(u32),
}

/// Tracks failed logins per username and applies the lockout policy
pub struct AttemptTracker {
    attempts: HashMap<String, LoginAttemptRecord>,
    max_attempts: u32,
    lockout_secs: u64,
}

impl AttemptTracker {
    pub fn new(
        max_attempts: u32,
        lockout_secs: u64,
        attempts: HashMap<String, LoginAttemptRecord>,
    ) -> Self {
        Self {
            attempts,
            max_attempts,
            lockout_secs,
        }
    }

    /// Check whether a username is locked out at `now`.
    ///
    /// A lockout whose deadline has passed is cleared here, together with
    /// the failed count: the user gets a fresh attempt budget.
    pub fn check(&mut self, username: &str, now: DateTime<Utc>) -> LockStatus {
        let Some(record) = self.attempts.get_mut(username) else {
            return LockStatus::Clear;
        };

        match record.lockout_until {
            Some(until) if now < until => {
                let remaining_secs = (until - now).num_seconds().max(0) as u64;
                LockStatus::Locked { remaining_secs }
            }
            Some(_) => {
                record.lockout_until = None;
                record.count = 0;
                LockStatus::Clear
            }
            None => LockStatus::Clear,
        }
    }

    /// Record a failed attempt at `now`, locking the account when the
    /// configured limit is reached.
    pub fn record_failure(&mut self, username: &str, now: DateTime<Utc>) -> FailureOutcome {
        let record = self.attempts.entry(username.to_string()).or_default();
        record.count += 1;

        if record.count >= self.max_attempts {
            record.lockout_until = Some(now + Duration::seconds(self.lockout_secs as i64));
            FailureOutcome::LockedOut {
                lockout_secs: self.lockout_secs,
            }
        } else {
            FailureOutcome::AttemptsLeft(self.max_attempts - record.count)
        }
    }

    /// Reset the failed count after a successful login.
    pub fn record_success(&mut self, username: &str) {
        if let Some(record) = self.attempts.get_mut(username) {
            record.count = 0;
        }
    }

    /// Failed count currently recorded for a username.
    pub fn failed_count(&self, username: &str) -> u32 {
        self.attempts.get(username).map_or(0, |r| r.count)
    }

    /// Read-only view of the attempt map, for persistence.
    pub fn records(&self) -> &HashMap<String, LoginAttemptRecord> {
        &self.attempts
    }
}
