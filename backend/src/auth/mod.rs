//! Authentication: password hashing, session issuance, request middleware

mod middleware;
mod password;
mod session;

pub use middleware::CurrentSession;
pub use password::PasswordService;
pub use session::SessionIssuer;
