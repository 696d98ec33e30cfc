//! User record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role. Admin gating happens in the presentation layer; the store
/// itself only records the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// One stored account. The username is the map key, not a record field.
///
/// `password` on disk holds the SHA-256 hex digest, never the plaintext.
/// `last_login` and `recovery_code` are true optionals; any "never logged
/// in" style sentinel belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "password")]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub recovery_code: Option<String>,
}

impl UserRecord {
    /// Fresh record for a newly registered or seeded account.
    pub fn new(password_hash: String, role: Role, created_at: DateTime<Utc>) -> Self {
        Self {
            password_hash,
            role,
            created_at,
            last_login: None,
            recovery_code: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_stored_field_names() {
        let record = UserRecord::new(
            "ab".repeat(32),
            Role::User,
            "2026-01-05T10:00:00Z".parse().unwrap(),
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "password": "ab".repeat(32),
                "role": "user",
                "created_at": "2026-01-05T10:00:00Z",
                "last_login": null,
                "recovery_code": null,
            })
        );
    }

    #[test]
    fn test_roles_round_trip_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        let role: Role = serde_json::from_str(r#""admin""#).unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_deserializes_reference_format() {
        let record: UserRecord = serde_json::from_str(
            r#"{
                "password": "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8",
                "role": "admin",
                "created_at": "2025-11-20T08:30:00Z",
                "last_login": null,
                "recovery_code": null
            }"#,
        )
        .unwrap();
        assert!(record.is_admin());
        assert!(record.last_login.is_none());
        assert!(record.recovery_code.is_none());
    }
}
