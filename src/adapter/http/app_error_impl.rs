use crate::application::app_error::AppError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Unauthorized")]
    pub error: String,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidPayload(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidId(_) => (StatusCode::BAD_REQUEST, None),
            AppError::InvalidPayload(msg) => (StatusCode::BAD_REQUEST, Some(msg.clone())),
            AppError::ValidationError(errors) => (StatusCode::UNPROCESSABLE_ENTITY, Some(errors.to_string())),
            AppError::EmptyPost | AppError::EmptyComment | AppError::SelfFollow => {
                (StatusCode::BAD_REQUEST, Some(self.to_string()))
            }
            AppError::Unauthorized | AppError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, Some("Unauthorized".to_string()))
            }
            AppError::AccessDenied => (StatusCode::FORBIDDEN, Some(self.to_string())),
            AppError::UserNotFound | AppError::PostNotFound => (StatusCode::NOT_FOUND, Some(self.to_string())),
            AppError::UserSyncFailed => (StatusCode::INTERNAL_SERVER_ERROR, Some(self.to_string())),
            AppError::IdentityProviderError(_) => (StatusCode::BAD_GATEWAY, None),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let message = match message {
            Some(msg) => msg,
            None => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
