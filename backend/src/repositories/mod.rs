//! Repository layer
//!
//! Each entity gets a narrow async trait plus two implementations: a
//! sqlx/Postgres store used in production and an in-memory store used by the
//! test suites. Stores are injected into [`crate::state::AppState`] at
//! construction; nothing in the crate reaches persistence any other way.

pub mod memory;
mod post;
mod session;
mod user;

pub use post::{PgPostStore, PostRecord, PostStore};
pub use session::{PgSessionStore, SessionRecord, SessionStore};
pub use user::{DuplicateUsername, PgUserStore, UserRecord, UserStore};
