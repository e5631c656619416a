//! User routes

use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::services::{AuthService, UserService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use inkpost_shared::types::{RegisterRequest, SessionResponse, UpdateProfileRequest, UserResponse};
use uuid::Uuid;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register))
        .route("/:user_id", get(get_user).put(update_user))
}

/// Register a new user and return a fresh session
///
/// POST /users
async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let session = AuthService::register(state.users(), state.sessions(), req).await?;
    Ok(Json(session))
}

/// Fetch a user's public profile
///
/// GET /users/:user_id
async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::get(state.users(), user_id).await?;
    Ok(Json(user))
}

/// Update a user's favorite book
///
/// PUT /users/:user_id
async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::update_profile(state.users(), user_id, req).await?;
    Ok(Json(user))
}
