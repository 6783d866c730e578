use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::MessageResponse;
use crate::adapter::http::schema::id::IdResponse;
use crate::adapter::http::schema::post::{CreateCommentRequest, CreatePostRequest, ToggleLikeResponse};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::post::{CreateCommentDTO, CreatePostDTO, DeletePostDTO, ToggleLikeDTO};
use crate::application::interactors::posts::{
    CreateCommentInteractor, CreatePostInteractor, DeletePostInteractor, ToggleLikeInteractor,
};

#[utoipa::path(
    post,
    path = "/posts",
    tag = "Posts",
    request_body(
        content = CreatePostRequest,
        example = json!({ "content": "Hello, Pulse!", "image": null })
    ),
    responses(
        (
            status = 201,
            description = "Post created",
            body = IdResponse,
            example = json!({ "id": "019c47ec-183d-744e-b11d-cd409015bf13" })
        ),
        (
            status = 400,
            description = "Neither content nor image given",
            body = ErrorResponse,
            example = json!({ "error": "Post must have content or an image" })
        ),
        (
            status = 401,
            description = "Missing or invalid session token",
            body = ErrorResponse,
            example = json!({ "error": "Unauthorized" })
        ),
        (
            status = 422,
            description = "Validation error",
            body = ErrorResponse
        )
    ),
    security(("bearerAuth" = []))
)]
pub async fn create_post(
    auth_user: AuthUser,
    interactor: CreatePostInteractor,
    ValidJson(payload): ValidJson<CreatePostRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreatePostDTO {
        clerk_id: auth_user.clerk_id,
        content: payload.content,
        image: payload.image,
    };
    let id = interactor.execute(dto).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

#[utoipa::path(
    delete,
    path = "/posts/{post_id}",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Id of the post")),
    responses(
        (
            status = 200,
            description = "Post deleted",
            body = MessageResponse,
            example = json!({ "message": "Post deleted successfully" })
        ),
        (
            status = 403,
            description = "The caller is not the author",
            body = ErrorResponse,
            example = json!({ "error": "Access denied" })
        ),
        (
            status = 404,
            description = "Post not found",
            body = ErrorResponse,
            example = json!({ "error": "Post not found" })
        )
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_post(
    auth_user: AuthUser,
    interactor: DeletePostInteractor,
    Path(post_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = DeletePostDTO {
        clerk_id: auth_user.clerk_id,
        post_id,
    };
    interactor.execute(dto).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Post deleted successfully".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/posts/{post_id}/like",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Id of the post")),
    responses(
        (
            status = 200,
            description = "Whether the post is liked by the caller afterwards",
            body = ToggleLikeResponse,
            example = json!({ "liked": true })
        ),
        (
            status = 404,
            description = "Post not found",
            body = ErrorResponse,
            example = json!({ "error": "Post not found" })
        )
    ),
    security(("bearerAuth" = []))
)]
pub async fn toggle_like(
    auth_user: AuthUser,
    interactor: ToggleLikeInteractor,
    Path(post_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = ToggleLikeDTO {
        clerk_id: auth_user.clerk_id,
        post_id,
    };
    let liked = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ToggleLikeResponse { liked })))
}

#[utoipa::path(
    post,
    path = "/posts/{post_id}/comments",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Id of the post")),
    request_body(
        content = CreateCommentRequest,
        example = json!({ "content": "Nice post!" })
    ),
    responses(
        (status = 201, description = "Comment created", body = IdResponse),
        (
            status = 404,
            description = "Post not found",
            body = ErrorResponse,
            example = json!({ "error": "Post not found" })
        ),
        (
            status = 422,
            description = "Validation error",
            body = ErrorResponse
        )
    ),
    security(("bearerAuth" = []))
)]
pub async fn create_comment(
    auth_user: AuthUser,
    interactor: CreateCommentInteractor,
    Path(post_id): Path<String>,
    ValidJson(payload): ValidJson<CreateCommentRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateCommentDTO {
        clerk_id: auth_user.clerk_id,
        post_id,
        content: payload.content,
    };
    let id = interactor.execute(dto).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}
