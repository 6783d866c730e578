use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;

use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::identity::VerifiedIdentity;

/// Identity of a request that passed the auth middleware.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub clerk_id: String,
    pub identity: VerifiedIdentity,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> AppResult<Self> {
        match parts.extensions.get::<AuthUser>().cloned() {
            Some(user) => Ok(user),
            None => Err(AppError::Unauthorized),
        }
    }
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> AppResult<Option<Self>> {
        Ok(parts.extensions.get::<AuthUser>().cloned())
    }
}
