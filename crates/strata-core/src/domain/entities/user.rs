//! User entity.

use super::super::value_objects::Email;
use crate::validation::{rules, validation_error_to_strata_error};
use crate::{Entity, StrataError, StrataResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity as read from the store and held in the cache.
///
/// Every instance passed validation on construction: the id is positive, the
/// name is trimmed, non-blank, at most 50 characters and free of control
/// characters, and the email is well formed. There are no setters; a fresh
/// value is built on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserRecord", into = "UserRecord")]
pub struct User {
    id: i64,
    name: String,
    email: Email,
    created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a validated user.
    pub fn new(
        id: i64,
        name: impl AsRef<str>,
        email: impl Into<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> StrataResult<Self> {
        if id < 1 {
            return Err(StrataError::validation(format!(
                "id: must be a positive integer, got {id}"
            )));
        }

        let name = name.as_ref().trim();
        rules::valid_display_name(name)
            .map_err(|e| validation_error_to_strata_error("name", &e))?;

        let email = Email::new(email)?;

        Ok(Self {
            id,
            name: name.to_string(),
            email,
            created_at,
        })
    }

    /// Returns the user id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the trimmed display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the creation timestamp assigned by the store, if any.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Entity for User {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

/// Unvalidated field-level form of a user.
///
/// This is the shape of a `users` row and of the JSON cache payload. It only
/// becomes a `User` through `TryFrom`, which runs the constructor checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserRecord> for User {
    type Error = StrataError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        Self::new(record.id, record.name, record.email, record.created_at)
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email.into(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ById;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn alice() -> User {
        User::new(1, "Alice", "alice@example.com", None).unwrap()
    }

    #[test]
    fn test_id_must_be_positive() {
        assert!(User::new(0, "Alice", "alice@example.com", None).is_err());
        assert!(User::new(-5, "Alice", "alice@example.com", None).is_err());
        assert!(User::new(1, "Alice", "alice@example.com", None).is_ok());
    }

    #[test]
    fn test_name_is_trimmed() {
        let user = User::new(1, "  Alice  ", "alice@example.com", None).unwrap();
        assert_eq!(user.name(), "Alice");
    }

    #[test]
    fn test_name_length_limit() {
        assert!(User::new(1, "a".repeat(50), "alice@example.com", None).is_ok());
        let err = User::new(1, "a".repeat(51), "alice@example.com", None).unwrap_err();
        assert!(matches!(err, StrataError::Validation(_)));
    }

    #[test]
    fn test_name_limit_applies_after_trimming() {
        let padded = format!("   {}   ", "a".repeat(50));
        assert!(User::new(1, padded, "alice@example.com", None).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(User::new(1, "", "alice@example.com", None).is_err());
        assert!(User::new(1, "   ", "alice@example.com", None).is_err());
    }

    #[test]
    fn test_name_whitespace_controls_allowed() {
        assert!(User::new(1, "Ali\tce", "alice@example.com", None).is_ok());
        assert!(User::new(1, "Ali\nce", "alice@example.com", None).is_ok());
    }

    #[test]
    fn test_name_null_byte_rejected() {
        assert!(User::new(1, "Ali\0ce", "alice@example.com", None).is_err());
        assert!(User::new(1, "Alice\u{7f}", "alice@example.com", None).is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let err = User::new(1, "Alice", "not-an-email", None).unwrap_err();
        assert!(matches!(err, StrataError::Validation(_)));
    }

    #[test]
    fn test_json_round_trip_with_timestamp() {
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let user = User::new(7, "Bob", "bob@example.com", Some(created)).unwrap();

        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, user);
        assert_eq!(parsed.created_at(), Some(created));
    }

    #[test]
    fn test_json_round_trip_without_timestamp() {
        let user = alice();
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"created_at\":null"));

        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
        assert!(parsed.created_at().is_none());
    }

    #[test]
    fn test_deserialization_validates() {
        let json = r#"{"id":0,"name":"Alice","email":"alice@example.com","created_at":null}"#;
        assert!(serde_json::from_str::<User>(json).is_err());

        let json = r#"{"id":1,"name":"  Alice ","email":"alice@example.com","created_at":null}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name(), "Alice");
    }

    #[test]
    fn test_structural_equality_by_default() {
        let a = alice();
        let renamed = User::new(1, "Alicia", "alice@example.com", None).unwrap();
        assert_ne!(a, renamed);
    }

    #[test]
    fn test_identity_wrapper_uses_id_only() {
        let a = alice();
        let renamed = User::new(1, "Alicia", "alicia@example.com", None).unwrap();
        let other = User::new(2, "Alice", "alice@example.com", None).unwrap();

        assert_eq!(ById(a.clone()), ById(renamed.clone()));
        assert_ne!(ById(a.clone()), ById(other.clone()));

        let set: HashSet<ById<User>> = [ById(a), ById(renamed), ById(other)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
