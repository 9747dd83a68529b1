//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use strata_core::{ErrorResponse, StrataError};

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub StrataError);

impl From<StrataError> for AppError {
    fn from(err: StrataError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (StrataError::validation("bad id"), StatusCode::BAD_REQUEST),
            (StrataError::not_found("User", 1), StatusCode::NOT_FOUND),
            (StrataError::store("down"), StatusCode::SERVICE_UNAVAILABLE),
            (StrataError::cache("down"), StatusCode::SERVICE_UNAVAILABLE),
            (StrataError::internal("oops"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(AppError(error).into_response().status(), expected);
        }
    }
}
