//! Authentication middleware
//!
//! The `Authorization` header carries the raw session token with no scheme
//! prefix. A missing header, an empty value, and an unknown token are
//! indistinguishable to the client: all three produce the same 401 response.

use crate::error::ApiError;
use crate::repositories::SessionRecord;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The session resolved from the request's bearer token
///
/// Use as a handler argument to require authentication, or as
/// `Option<CurrentSession>` where authentication is conditional.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub session: SessionRecord,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        if token.is_empty() {
            return Err(ApiError::Unauthorized);
        }

        let session = app_state
            .sessions()
            .find_by_token(token)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(ApiError::Unauthorized)?;

        Ok(CurrentSession { session })
    }
}
