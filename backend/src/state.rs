//! Application state management
//!
//! Stores are injected at construction as trait objects, so the router never
//! depends on a concrete persistence technology. All fields are `Arc`'d;
//! cloning the state per request is O(1).

use crate::config::AppConfig;
use crate::repositories::{
    PgPostStore, PgSessionStore, PgUserStore, PostStore, SessionStore, UserStore,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    posts: Arc<dyn PostStore>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create state over explicit store implementations
    pub fn new(
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        posts: Arc<dyn PostStore>,
        config: AppConfig,
    ) -> Self {
        Self {
            users,
            sessions,
            posts,
            config: Arc::new(config),
        }
    }

    /// Create state backed by the PostgreSQL stores
    pub fn postgres(pool: PgPool, config: AppConfig) -> Self {
        Self::new(
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgSessionStore::new(pool.clone())),
            Arc::new(PgPostStore::new(pool)),
            config,
        )
    }

    #[inline]
    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }

    #[inline]
    pub fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }

    #[inline]
    pub fn posts(&self) -> &dyn PostStore {
        self.posts.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::{MemoryPostStore, MemorySessionStore, MemoryUserStore};

    #[test]
    fn state_clone_is_cheap() {
        let state = AppState::new(
            Arc::new(MemoryUserStore::default()),
            Arc::new(MemorySessionStore::default()),
            Arc::new(MemoryPostStore::default()),
            AppConfig::default(),
        );

        // Clone should be O(1) - just Arc increments
        let _cloned = state.clone();
    }
}
