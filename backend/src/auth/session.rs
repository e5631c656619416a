//! Session issuance and revocation
//!
//! Tokens are opaque bearer credentials: 48 alphanumeric characters drawn
//! from the OS RNG, so they are not sequential and not derivable from the
//! user id or a timestamp.

use crate::error::ApiError;
use crate::repositories::{SessionRecord, SessionStore};
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};
use uuid::Uuid;

const TOKEN_LENGTH: usize = 48;

/// Creates and revokes session records
pub struct SessionIssuer;

impl SessionIssuer {
    /// Issue a new session bound to the given user
    pub async fn issue(
        sessions: &dyn SessionStore,
        user_id: Uuid,
    ) -> Result<SessionRecord, ApiError> {
        let token = Self::generate_token();
        let session = sessions
            .create(user_id, &token)
            .await
            .map_err(ApiError::Internal)?;
        Ok(session)
    }

    /// Revoke a session
    ///
    /// The caller only ever holds a session resolved from a presented token,
    /// so revoking with a stale token is rejected upstream as 401, the same
    /// as an unknown token.
    pub async fn revoke(
        sessions: &dyn SessionStore,
        session: &SessionRecord,
    ) -> Result<(), ApiError> {
        sessions
            .delete(session.id)
            .await
            .map_err(ApiError::Internal)
    }

    fn generate_token() -> String {
        OsRng
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect()
    }
}
