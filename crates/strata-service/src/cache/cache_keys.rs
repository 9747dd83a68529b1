//! Cache key generators for consistent key naming.

/// Generate a cache key for a user by ID.
#[must_use]
pub fn user_by_id(id: i64) -> String {
    format!("user:{id}")
}

/// Generate a cache key for a user by email.
///
/// The email is used exactly as given; no case folding.
#[must_use]
pub fn user_by_email(email: &str) -> String {
    format!("user:email:{email}")
}
