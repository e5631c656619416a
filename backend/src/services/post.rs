//! Post service

use crate::error::ApiError;
use crate::repositories::{PostRecord, PostStore, SessionRecord};
use inkpost_shared::types::{CreatePostRequest, PostResponse, UpdatePostRequest};
use uuid::Uuid;

fn post_not_found() -> ApiError {
    ApiError::NotFound("Post not found".to_string())
}

/// Post CRUD operations
pub struct PostService;

impl PostService {
    pub async fn list(posts: &dyn PostStore) -> Result<Vec<PostResponse>, ApiError> {
        let all = posts.all().await.map_err(ApiError::Internal)?;
        Ok(all.into_iter().map(post_response).collect())
    }

    pub async fn get(posts: &dyn PostStore, id: Uuid) -> Result<PostResponse, ApiError> {
        let post = posts
            .find(id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(post_not_found)?;
        Ok(post_response(post))
    }

    /// Create a post authored by the session's user
    ///
    /// The author always comes from the session; the payload type has no
    /// author field, so anything the client sends there is discarded during
    /// deserialization.
    pub async fn create(
        posts: &dyn PostStore,
        session: &SessionRecord,
        req: CreatePostRequest,
    ) -> Result<PostResponse, ApiError> {
        let post = posts
            .create(session.user_id, &req.title, &req.content)
            .await
            .map_err(ApiError::Internal)?;
        Ok(post_response(post))
    }

    pub async fn update(
        posts: &dyn PostStore,
        session: Option<&SessionRecord>,
        enforce_ownership: bool,
        id: Uuid,
        req: UpdatePostRequest,
    ) -> Result<PostResponse, ApiError> {
        if enforce_ownership {
            Self::check_ownership(posts, session, id).await?;
        }

        let post = posts
            .update(id, req.title, req.content)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(post_not_found)?;
        Ok(post_response(post))
    }

    pub async fn delete(
        posts: &dyn PostStore,
        session: Option<&SessionRecord>,
        enforce_ownership: bool,
        id: Uuid,
    ) -> Result<(), ApiError> {
        if enforce_ownership {
            Self::check_ownership(posts, session, id).await?;
        }

        let deleted = posts.delete(id).await.map_err(ApiError::Internal)?;
        if !deleted {
            return Err(post_not_found());
        }
        Ok(())
    }

    async fn check_ownership(
        posts: &dyn PostStore,
        session: Option<&SessionRecord>,
        id: Uuid,
    ) -> Result<(), ApiError> {
        let session = session.ok_or(ApiError::Unauthorized)?;
        let post = posts
            .find(id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(post_not_found)?;
        if post.author_id != session.user_id {
            return Err(ApiError::Forbidden(
                "Only the author may modify this post".to_string(),
            ));
        }
        Ok(())
    }
}

fn post_response(post: PostRecord) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author_id: post.author_id,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}
