//! User lookup controller.

use crate::{
    responses::{ok, AppError, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;
use strata_core::{StrataError, User};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/:id", get(get_user))
        .route("/users/email/:email", get(get_user_by_email))
}

/// Cache switch shared by the lookup endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LookupQuery {
    #[serde(default = "default_use_cache")]
    pub use_cache: bool,
}

const fn default_use_cache() -> bool {
    true
}

/// Get a user by ID.
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LookupQuery>,
) -> ApiResult<User> {
    debug!("Get user request: {} (use_cache={})", id, query.use_cache);

    let user_id = parse_user_id(&id)?;
    let user = state
        .user_service
        .lookup_by_id(user_id, query.use_cache)
        .await?
        .ok_or_else(|| StrataError::not_found("User", user_id))?;

    ok(user)
}

/// Get a user by email.
async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Query(query): Query<LookupQuery>,
) -> ApiResult<User> {
    debug!("Get user by email request: {} (use_cache={})", email, query.use_cache);

    let user = state
        .user_service
        .lookup_by_email(&email, query.use_cache)
        .await?
        .ok_or_else(|| StrataError::not_found("User", &email))?;

    ok(user)
}

/// Parses a numeric user id from a path segment.
pub(crate) fn parse_user_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError(StrataError::validation(format!("Invalid user ID: {raw}"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("42").unwrap(), 42);
        assert_eq!(parse_user_id("-3").unwrap(), -3);
        assert!(parse_user_id("abc").is_err());
        assert!(parse_user_id("").is_err());
    }
}
