use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::user::{
    ActionResultResponse, IsFollowingResponse, SuggestedUserResponse, UserResponse, UserWithCountsResponse,
};
use crate::application::app_error::AppResult;
use crate::application::dto::user::{GetMeDTO, GetRandomUsersDTO, IsFollowingDTO, SyncUserDTO, ToggleFollowDTO};
use crate::application::interactors::users::{
    GetMeInteractor, GetRandomUsersInteractor, IsFollowingInteractor, SyncUserInteractor, ToggleFollowInteractor,
};
use crate::infra::config::AppConfig;

#[utoipa::path(
    post,
    path = "/users/sync",
    tag = "Users",
    responses(
        (
            status = 200,
            description = "Stored user, created on first sign-in",
            body = UserResponse
        ),
        (
            status = 204,
            description = "The identity provider does not know the signed-in user"
        ),
        (
            status = 401,
            description = "Missing or invalid session token",
            body = ErrorResponse,
            example = json!({ "error": "Unauthorized" })
        ),
        (
            status = 500,
            description = "User could not be synchronized",
            body = ErrorResponse,
            example = json!({ "error": "User synchronization failed" })
        )
    ),
    security(("bearerAuth" = []))
)]
pub async fn sync_user(auth_user: AuthUser, interactor: SyncUserInteractor) -> AppResult<Response> {
    let dto = SyncUserDTO {
        identity: Some(auth_user.identity),
    };
    let response = match interactor.execute(dto).await? {
        Some(user) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}

#[utoipa::path(
    get,
    path = "/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "Signed-in user with counts", body = UserWithCountsResponse),
        (
            status = 401,
            description = "Missing or invalid session token",
            body = ErrorResponse,
            example = json!({ "error": "Unauthorized" })
        ),
        (
            status = 404,
            description = "User was never synchronized",
            body = ErrorResponse,
            example = json!({ "error": "User not found" })
        )
    ),
    security(("bearerAuth" = []))
)]
pub async fn get_me(auth_user: AuthUser, interactor: GetMeInteractor) -> AppResult<impl IntoResponse> {
    let dto = GetMeDTO {
        clerk_id: auth_user.clerk_id,
    };
    let user = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(UserWithCountsResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/users/suggestions",
    tag = "Users",
    responses(
        (
            status = 200,
            description = "Random users the caller does not follow yet; empty on failure",
            body = Vec<SuggestedUserResponse>
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
pub async fn get_suggestions(
    auth_user: AuthUser,
    State(config): State<Arc<AppConfig>>,
    interactor: GetRandomUsersInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = GetRandomUsersDTO {
        clerk_id: Some(auth_user.clerk_id),
        limit: config.suggestions.limit,
    };
    let users = interactor.execute(dto).await;
    let response: Vec<SuggestedUserResponse> = users.into_iter().map(SuggestedUserResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/users/{user_id}/follow",
    tag = "Users",
    params(("user_id" = String, Path, description = "Database id of the user to follow or unfollow")),
    responses(
        (
            status = 200,
            description = "Outcome of the toggle; failures are reported in the body",
            body = ActionResultResponse,
            example = json!({ "success": false, "message": "Failed to toggle follow" })
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
pub async fn toggle_follow(
    auth_user: AuthUser,
    interactor: ToggleFollowInteractor,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = ToggleFollowDTO {
        clerk_id: Some(auth_user.clerk_id),
        target_user_id: user_id,
    };
    let result = interactor.execute(dto).await;
    Ok((StatusCode::OK, Json(ActionResultResponse::from(result))))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/is-following",
    tag = "Users",
    params(("user_id" = String, Path, description = "Database id of the user")),
    responses(
        (
            status = 200,
            description = "Whether the caller follows the user; false for anonymous callers",
            body = IsFollowingResponse,
            example = json!({ "is_following": false })
        )
    ),
    security((), ("bearerAuth" = []))
)]
pub async fn is_following(
    auth_user: Option<AuthUser>,
    interactor: IsFollowingInteractor,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = IsFollowingDTO {
        clerk_id: auth_user.map(|user| user.clerk_id),
        target_user_id: user_id,
    };
    let is_following = interactor.execute(dto).await;
    Ok((StatusCode::OK, Json(IsFollowingResponse { is_following })))
}
