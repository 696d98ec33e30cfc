//! Login attempt tracking and lockout
//!
//! Tracks per-username failed login attempts and enforces the time-bounded
//! lockout policy. Expiry is lazy: a past `lockout_until` is cleared on the
//! next check for that username, never by a background timer.

pub mod tracker;

pub use tracker::{AttemptTracker, FailureOutcome, LockStatus, LoginAttemptRecord};
