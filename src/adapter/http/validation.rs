use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use crate::application::app_error::AppError;

/// JSON body that is rejected with 422 when its `validator` rules fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let uri = req.uri().clone();
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate().map_err(|errors| {
            debug!("Rejected payload for {}: {}", uri, errors);
            AppError::ValidationError(errors)
        })?;
        Ok(ValidJson(value))
    }
}
