//! Business logic services
//!
//! Services orchestrate validation outcomes, the password/session machinery,
//! and the stores. They return domain results; the routers and `ApiError`
//! handle HTTP mapping.

mod auth;
mod post;
mod user;

pub use auth::AuthService;
pub use post::PostService;
pub use user::UserService;
