//! Authentication service: login, logout, registration

use crate::auth::{PasswordService, SessionIssuer};
use crate::error::ApiError;
use crate::repositories::{DuplicateUsername, SessionRecord, SessionStore, UserStore};
use inkpost_shared::types::{LoginRequest, RegisterRequest, SessionResponse};

/// Authentication operations
pub struct AuthService;

impl AuthService {
    /// Log in with username and password
    ///
    /// Bad credentials answer 422, not 401: a failed login attempt is a
    /// different condition from a missing or invalid session elsewhere.
    pub async fn login(
        users: &dyn UserStore,
        sessions: &dyn SessionStore,
        req: LoginRequest,
    ) -> Result<SessionResponse, ApiError> {
        let user = users
            .find_by_username(&req.username)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unprocessable("Invalid credentials".to_string()))?;

        let valid = PasswordService::verify_async(req.password, user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unprocessable("Invalid credentials".to_string()));
        }

        let session = SessionIssuer::issue(sessions, user.id).await?;
        Ok(session_response(session))
    }

    /// Register a new user and log them straight in
    pub async fn register(
        users: &dyn UserStore,
        sessions: &dyn SessionStore,
        req: RegisterRequest,
    ) -> Result<SessionResponse, ApiError> {
        if users
            .username_exists(&req.username)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Username already taken".to_string()));
        }

        let password_hash = PasswordService::hash_async(req.password)
            .await
            .map_err(ApiError::Internal)?;

        // The pre-check cannot rule out a concurrent insert; a lost race
        // surfaces from the store as DuplicateUsername and gets the same 409.
        let user = users
            .register(&req.username, &password_hash)
            .await
            .map_err(|err| {
                if err.downcast_ref::<DuplicateUsername>().is_some() {
                    ApiError::Conflict("Username already taken".to_string())
                } else {
                    ApiError::Internal(err)
                }
            })?;

        let session = SessionIssuer::issue(sessions, user.id).await?;
        Ok(session_response(session))
    }

    /// Destroy the presented session
    pub async fn logout(
        sessions: &dyn SessionStore,
        session: &SessionRecord,
    ) -> Result<(), ApiError> {
        SessionIssuer::revoke(sessions, session).await
    }
}

fn session_response(session: SessionRecord) -> SessionResponse {
    SessionResponse {
        id: session.id,
        user_id: session.user_id,
        token: session.token,
        created_at: session.created_at,
    }
}
