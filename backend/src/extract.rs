//! Request body extractors
//!
//! Payload shape problems are validation failures, not transport errors: a
//! body that fails to deserialize gets the same 422 `{"errors": [...]}`
//! shape as a field-rule violation, instead of axum's default 400.

use crate::error::ApiError;
use axum::extract::{FromRequest, Request};
use inkpost_shared::types::FieldError;
use inkpost_shared::validation::OrderedValidate;
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection is a structured validation error
pub struct AppJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(ApiError::Validation(vec![FieldError {
                path: "body".to_string(),
                message: rejection.body_text(),
            }])),
        }
    }
}

/// JSON extractor that also runs the payload's validation rules
///
/// Handlers taking `ValidatedJson<T>` receive an already-validated payload;
/// no repository call happens before this extractor succeeds.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + OrderedValidate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let AppJson(value) = AppJson::<T>::from_request(req, state).await?;
        value.validate_ordered().map_err(ApiError::Validation)?;
        Ok(ValidatedJson(value))
    }
}
