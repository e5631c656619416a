//! Post routes
//!
//! Reads are open. Creation requires a session. Update and delete only
//! require one when `posts.enforce_ownership` is enabled, matching the
//! behavior the client was built against.

use crate::auth::CurrentSession;
use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::services::PostService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use inkpost_shared::types::{CreatePostRequest, MessageResponse, PostResponse, UpdatePostRequest};
use uuid::Uuid;

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route(
            "/:post_id",
            get(get_post).put(update_post).delete(delete_post),
        )
}

/// List all posts
///
/// GET /posts
async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<PostResponse>>> {
    let posts = PostService::list(state.posts()).await?;
    Ok(Json(posts))
}

/// Fetch one post
///
/// GET /posts/:post_id
async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> ApiResult<Json<PostResponse>> {
    let post = PostService::get(state.posts(), post_id).await?;
    Ok(Json(post))
}

/// Create a post authored by the authenticated user
///
/// POST /posts
async fn create_post(
    State(state): State<AppState>,
    current: CurrentSession,
    ValidatedJson(req): ValidatedJson<CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<PostResponse>)> {
    let post = PostService::create(state.posts(), &current.session, req).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// Update a post
///
/// PUT /posts/:post_id
async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    current: Option<CurrentSession>,
    ValidatedJson(req): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let session = current.as_ref().map(|c| &c.session);
    let post = PostService::update(
        state.posts(),
        session,
        state.config().posts.enforce_ownership,
        post_id,
        req,
    )
    .await?;
    Ok(Json(post))
}

/// Delete a post
///
/// DELETE /posts/:post_id
async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    current: Option<CurrentSession>,
) -> ApiResult<Json<MessageResponse>> {
    let session = current.as_ref().map(|c| &c.session);
    PostService::delete(
        state.posts(),
        session,
        state.config().posts.enforce_ownership,
        post_id,
    )
    .await?;
    Ok(Json(MessageResponse::new("Post deleted")))
}
