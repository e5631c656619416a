//! Authentication routes

use crate::auth::CurrentSession;
use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use inkpost_shared::types::{LoginRequest, MessageResponse, SessionResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Login with username and password
///
/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let session = AuthService::login(state.users(), state.sessions(), req).await?;
    Ok(Json(session))
}

/// Destroy the presented session
///
/// POST /auth/logout
///
/// Requires a valid session token in the Authorization header; a stale or
/// unknown token is rejected with 401 before this handler runs.
async fn logout(
    State(state): State<AppState>,
    current: CurrentSession,
) -> ApiResult<Json<MessageResponse>> {
    AuthService::logout(state.sessions(), &current.session).await?;
    Ok(Json(MessageResponse::new("Logged out")))
}
