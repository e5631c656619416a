//! API request and response types
//!
//! Request payloads carry their validation rules (`validator` derive) plus a
//! declared field order so violation lists come back in a deterministic
//! order. Response types serialize with camelCase keys and ISO-8601
//! timestamps, matching what the browser client expects.

use crate::models::FavoriteBook;
use crate::validation::OrderedValidate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, message = "String must contain at least 3 character(s)"))]
    pub username: String,
    #[validate(length(min = 8, message = "String must contain at least 8 character(s)"))]
    pub password: String,
}

impl OrderedValidate for LoginRequest {
    const FIELDS: &'static [&'static str] = &["username", "password"];
}

/// Registration payload (same shape and rules as login)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, message = "String must contain at least 3 character(s)"))]
    pub username: String,
    #[validate(length(min = 8, message = "String must contain at least 8 character(s)"))]
    pub password: String,
}

impl OrderedValidate for RegisterRequest {
    const FIELDS: &'static [&'static str] = &["username", "password"];
}

/// Post creation payload
///
/// The author is never taken from the payload; it comes from the
/// authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "String must contain at least 1 character(s)"))]
    pub title: String,
    /// May be empty.
    #[serde(default)]
    pub content: String,
}

impl OrderedValidate for CreatePostRequest {
    const FIELDS: &'static [&'static str] = &["title", "content"];
}

/// Post update payload; absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, message = "String must contain at least 1 character(s)"))]
    pub title: Option<String>,
    pub content: Option<String>,
}

impl OrderedValidate for UpdatePostRequest {
    const FIELDS: &'static [&'static str] = &["title", "content"];
}

/// Profile update payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(nested)]
    pub favorite_book: Option<FavoriteBook>,
}

impl OrderedValidate for UpdateProfileRequest {
    const FIELDS: &'static [&'static str] = &["favorite_book"];
}

/// Issued session, returned by login and registration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

/// Sanitized user (the password hash never leaves the server)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_book: Option<FavoriteBook>,
}

/// Post as exposed over the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fixed-message response body (`{"message": "..."}`)
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

/// A single field violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

/// 422 response body (`{"errors": [...]}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorsResponse {
    pub errors: Vec<FieldError>,
}
