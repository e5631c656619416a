//! User repository

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

/// Unique-constraint rejection on `users.username`.
///
/// Kept as a typed error so the caller can tell a lost registration race
/// apart from an actual store failure; the existence pre-check alone cannot
/// rule out a concurrent insert.
#[derive(Debug, Error)]
#[error("username already taken")]
pub struct DuplicateUsername;

/// User record as persisted
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    /// FavoriteBook in its encoded string form; decoding happens at the
    /// service boundary.
    pub favorite_book: Option<String>,
}

/// Narrow persistence interface for users
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find(&self, id: Uuid) -> Result<Option<UserRecord>>;

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>>;

    async fn username_exists(&self, username: &str) -> Result<bool>;

    async fn register(&self, username: &str, password_hash: &str) -> Result<UserRecord>;

    /// Replace the stored favorite book; returns `None` when the user does
    /// not exist.
    async fn update_favorite_book(
        &self,
        id: Uuid,
        favorite_book: Option<String>,
    ) -> Result<Option<UserRecord>>;
}

/// PostgreSQL-backed user store
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find(&self, id: Uuid) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, password_hash, favorite_book
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, password_hash, favorite_book
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn username_exists(&self, username: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn register(&self, username: &str, password_hash: &str) -> Result<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, favorite_book
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err.as_database_error() {
            Some(db) if db.is_unique_violation() => anyhow::Error::new(DuplicateUsername),
            _ => err.into(),
        })?;

        Ok(user)
    }

    async fn update_favorite_book(
        &self,
        id: Uuid,
        favorite_book: Option<String>,
    ) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users
            SET favorite_book = $2
            WHERE id = $1
            RETURNING id, username, password_hash, favorite_book
            "#,
        )
        .bind(id)
        .bind(favorite_book)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
