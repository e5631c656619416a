//! User profile service
//!
//! The favorite book crosses the store boundary in its encoded string form
//! and is decoded back into a structured value on every read, so
//! `decode(encode(x)) == x` is exercised on each round trip.

use crate::error::ApiError;
use crate::repositories::{UserRecord, UserStore};
use inkpost_shared::models::FavoriteBook;
use inkpost_shared::types::{UpdateProfileRequest, UserResponse};
use uuid::Uuid;

fn user_not_found() -> ApiError {
    ApiError::NotFound("User not found".to_string())
}

/// User profile operations
pub struct UserService;

impl UserService {
    pub async fn get(users: &dyn UserStore, id: Uuid) -> Result<UserResponse, ApiError> {
        let user = users
            .find(id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(user_not_found)?;
        user_response(user)
    }

    pub async fn update_profile(
        users: &dyn UserStore,
        id: Uuid,
        req: UpdateProfileRequest,
    ) -> Result<UserResponse, ApiError> {
        let encoded = match &req.favorite_book {
            Some(book) => Some(book.encode().map_err(|e| ApiError::Internal(e.into()))?),
            None => None,
        };

        let user = users
            .update_favorite_book(id, encoded)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(user_not_found)?;
        user_response(user)
    }
}

fn user_response(user: UserRecord) -> Result<UserResponse, ApiError> {
    let favorite_book = match user.favorite_book.as_deref() {
        Some(encoded) => {
            Some(FavoriteBook::decode(encoded).map_err(|e| ApiError::Internal(e.into()))?)
        }
        None => None,
    };

    Ok(UserResponse {
        id: user.id,
        username: user.username,
        favorite_book,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::MemoryUserStore;

    #[tokio::test]
    async fn profile_round_trips_the_favorite_book() {
        let users = MemoryUserStore::default();
        let user = users.register("alice123", "hash").await.unwrap();

        let book = FavoriteBook {
            title: "1984".to_string(),
            author_name: Some(vec!["George Orwell".to_string()]),
        };
        let updated = UserService::update_profile(
            &users,
            user.id,
            UpdateProfileRequest {
                favorite_book: Some(book.clone()),
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.favorite_book, Some(book.clone()));

        let fetched = UserService::get(&users, user.id).await.unwrap();
        assert_eq!(fetched.favorite_book, Some(book));
    }

    #[tokio::test]
    async fn get_missing_user_is_not_found() {
        let users = MemoryUserStore::default();
        let result = UserService::get(&users, Uuid::new_v4()).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let users = MemoryUserStore::default();
        let result = UserService::update_profile(
            &users,
            Uuid::new_v4(),
            UpdateProfileRequest {
                favorite_book: None,
            },
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
