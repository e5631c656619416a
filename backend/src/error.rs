//! Application error handling
//!
//! A single error type covers the whole router surface; `IntoResponse`
//! performs the status-code mapping. Repository-level failures that are not
//! domain outcomes are logged and masked as a generic 500 so internal detail
//! never reaches the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use inkpost_shared::types::{ErrorsResponse, FieldError, MessageResponse};
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    /// Field-level payload violations, answered as 422 `{"errors": [...]}`
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// Domain rejection answered as 422 `{"message": "..."}`.
    ///
    /// Bad login credentials land here rather than on `Unauthorized`, so a
    /// failed login attempt stays distinguishable from a missing or invalid
    /// session token.
    #[error("{0}")]
    Unprocessable(String),

    /// Missing, empty, or unknown session token. The body is always the
    /// fixed `{"message": "Unauthorized"}` so responses never reveal whether
    /// a token once existed.
    #[error("unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(errors) => {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorsResponse { errors }),
                )
                    .into_response();
            }
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_422() {
        let error = ApiError::Validation(vec![FieldError {
            path: "username".to_string(),
            message: "too short".to_string(),
        }]);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn invalid_credentials_map_to_422() {
        let error = ApiError::Unprocessable("Invalid credentials".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn not_found_maps_to_404() {
        let error = ApiError::NotFound("Post not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_409() {
        let error = ApiError::Conflict("Username already taken".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn internal_error_masks_the_cause() {
        let error = ApiError::Internal(anyhow::anyhow!("connection refused to 10.0.0.7"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
