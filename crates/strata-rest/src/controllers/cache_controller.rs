//! Cache administration controller.

use crate::{
    controllers::user_controller::parse_user_id,
    responses::{ok, ApiResult, MessageResponse},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::delete,
    Router,
};
use tracing::info;

/// Creates the cache router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cache", delete(clear_cache))
        .route("/cache/users/:id", delete(invalidate_user))
}

/// Drop the id-keyed cache entry for a user.
async fn invalidate_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    let user_id = parse_user_id(&id)?;
    state.user_service.invalidate(user_id).await?;

    ok(MessageResponse::new(format!("Cache invalidated for user {user_id}")))
}

/// Drop every cache entry.
async fn clear_cache(State(state): State<AppState>) -> ApiResult<MessageResponse> {
    state.user_service.clear_cache().await?;
    info!("Cache cleared via API");

    ok(MessageResponse::new("Cache cleared"))
}
