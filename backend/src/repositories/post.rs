//! Post repository

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Post record as persisted
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Narrow persistence interface for posts
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn all(&self) -> Result<Vec<PostRecord>>;

    async fn find(&self, id: Uuid) -> Result<Option<PostRecord>>;

    async fn create(&self, author_id: Uuid, title: &str, content: &str) -> Result<PostRecord>;

    /// Apply the given fields, leaving absent ones unchanged; returns `None`
    /// when the post does not exist.
    async fn update(
        &self,
        id: Uuid,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Option<PostRecord>>;

    /// Returns false when the post does not exist.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// PostgreSQL-backed post store
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn all(&self) -> Result<Vec<PostRecord>> {
        let posts = sqlx::query_as::<_, PostRecord>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn find(&self, id: Uuid) -> Result<Option<PostRecord>> {
        let post = sqlx::query_as::<_, PostRecord>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn create(&self, author_id: Uuid, title: &str, content: &str) -> Result<PostRecord> {
        let post = sqlx::query_as::<_, PostRecord>(
            r#"
            INSERT INTO posts (author_id, title, content)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, author_id, created_at, updated_at
            "#,
        )
        .bind(author_id)
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn update(
        &self,
        id: Uuid,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Option<PostRecord>> {
        let post = sqlx::query_as::<_, PostRecord>(
            r#"
            UPDATE posts SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, content, author_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
