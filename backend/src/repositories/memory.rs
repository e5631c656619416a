//! In-memory store implementations
//!
//! Hash-map-backed stores behind `RwLock`s, implementing the same traits as
//! the Postgres stores. The route and integration test suites run the full
//! router against these instead of a database.

use super::{
    DuplicateUsername, PostRecord, PostStore, SessionRecord, SessionStore, UserRecord, UserStore,
};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

fn lock_poisoned() -> anyhow::Error {
    anyhow!("store lock poisoned")
}

/// In-memory user store
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, UserRecord>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find(&self, id: Uuid) -> Result<Option<UserRecord>> {
        let users = self.users.read().map_err(|_| lock_poisoned())?;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        let users = self.users.read().map_err(|_| lock_poisoned())?;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn username_exists(&self, username: &str) -> Result<bool> {
        let users = self.users.read().map_err(|_| lock_poisoned())?;
        Ok(users.values().any(|u| u.username == username))
    }

    async fn register(&self, username: &str, password_hash: &str) -> Result<UserRecord> {
        let mut users = self.users.write().map_err(|_| lock_poisoned())?;
        // Mirrors the unique index on users.username
        if users.values().any(|u| u.username == username) {
            return Err(anyhow::Error::new(DuplicateUsername));
        }
        let user = UserRecord {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            favorite_book: None,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_favorite_book(
        &self,
        id: Uuid,
        favorite_book: Option<String>,
    ) -> Result<Option<UserRecord>> {
        let mut users = self.users.write().map_err(|_| lock_poisoned())?;
        Ok(users.get_mut(&id).map(|user| {
            user.favorite_book = favorite_book;
            user.clone()
        }))
    }
}

/// In-memory session store
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<Uuid, SessionRecord>>,
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, user_id: Uuid, token: &str) -> Result<SessionRecord> {
        let mut sessions = self.sessions.write().map_err(|_| lock_poisoned())?;
        let session = SessionRecord {
            id: Uuid::new_v4(),
            user_id,
            token: token.to_string(),
            created_at: Utc::now(),
        };
        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<SessionRecord>> {
        let sessions = self.sessions.read().map_err(|_| lock_poisoned())?;
        Ok(sessions.values().find(|s| s.token == token).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut sessions = self.sessions.write().map_err(|_| lock_poisoned())?;
        sessions.remove(&id);
        Ok(())
    }
}

/// In-memory post store
#[derive(Default)]
pub struct MemoryPostStore {
    posts: RwLock<HashMap<Uuid, PostRecord>>,
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn all(&self) -> Result<Vec<PostRecord>> {
        let posts = self.posts.read().map_err(|_| lock_poisoned())?;
        let mut all: Vec<PostRecord> = posts.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find(&self, id: Uuid) -> Result<Option<PostRecord>> {
        let posts = self.posts.read().map_err(|_| lock_poisoned())?;
        Ok(posts.get(&id).cloned())
    }

    async fn create(&self, author_id: Uuid, title: &str, content: &str) -> Result<PostRecord> {
        let mut posts = self.posts.write().map_err(|_| lock_poisoned())?;
        let now = Utc::now();
        let post = PostRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            author_id,
            created_at: now,
            updated_at: now,
        };
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(
        &self,
        id: Uuid,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Option<PostRecord>> {
        let mut posts = self.posts.write().map_err(|_| lock_poisoned())?;
        Ok(posts.get_mut(&id).map(|post| {
            if let Some(title) = title {
                post.title = title;
            }
            if let Some(content) = content {
                post.content = content;
            }
            post.updated_at = Utc::now();
            post.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut posts = self.posts.write().map_err(|_| lock_poisoned())?;
        Ok(posts.remove(&id).is_some())
    }
}
