use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::notification::{
    MarkNotificationsReadRequest, MarkNotificationsReadResponse, NotificationResponse,
};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::notification::{GetNotificationsDTO, MarkNotificationsReadDTO};
use crate::application::interactors::notifications::{GetNotificationsInteractor, MarkNotificationsReadInteractor};

#[utoipa::path(
    get,
    path = "/notifications",
    tag = "Notifications",
    responses(
        (status = 200, description = "Notifications of the caller, newest first", body = Vec<NotificationResponse>),
        (
            status = 401,
            description = "Missing or invalid session token",
            body = ErrorResponse,
            example = json!({ "error": "Unauthorized" })
        )
    ),
    security(("bearerAuth" = []))
)]
pub async fn get_notifications(
    auth_user: AuthUser,
    interactor: GetNotificationsInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = GetNotificationsDTO {
        clerk_id: auth_user.clerk_id,
    };
    let notifications = interactor.execute(dto).await?;
    let response: Vec<NotificationResponse> = notifications.into_iter().map(NotificationResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/notifications/read",
    tag = "Notifications",
    request_body(
        content = MarkNotificationsReadRequest,
        example = json!({ "notification_ids": ["019c47ec-183d-744e-b11d-cd409015bf13"] })
    ),
    responses(
        (
            status = 200,
            description = "Number of notifications marked as read",
            body = MarkNotificationsReadResponse,
            example = json!({ "updated": 1 })
        ),
        (
            status = 400,
            description = "Malformed notification id",
            body = ErrorResponse,
            example = json!({ "error": "Bad Request" })
        ),
        (
            status = 401,
            description = "Missing or invalid session token",
            body = ErrorResponse,
            example = json!({ "error": "Unauthorized" })
        )
    ),
    security(("bearerAuth" = []))
)]
pub async fn mark_notifications_read(
    auth_user: AuthUser,
    interactor: MarkNotificationsReadInteractor,
    ValidJson(payload): ValidJson<MarkNotificationsReadRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = MarkNotificationsReadDTO {
        clerk_id: auth_user.clerk_id,
        notification_ids: payload.notification_ids,
    };
    let updated = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(MarkNotificationsReadResponse { updated })))
}
