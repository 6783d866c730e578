use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::post::PostResponse;
use crate::adapter::http::schema::profile::{ProfilePageResponse, UpdateProfileRequest, UpdateProfileResponse};
use crate::adapter::http::schema::user::UserWithCountsResponse;
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::profile::{GetProfileDTO, GetProfilePageDTO, UpdateProfileDTO};
use crate::application::interactors::profile::{
    GetProfileInteractor, GetProfilePageInteractor, GetUserLikedPostsInteractor, GetUserPostsInteractor,
    UpdateProfileInteractor,
};

#[utoipa::path(
    get,
    path = "/profiles/{username}",
    tag = "Profiles",
    params(("username" = String, Path, description = "Username of the profile")),
    responses(
        (status = 200, description = "Profile with follower, following and post counts", body = UserWithCountsResponse),
        (
            status = 404,
            description = "No user with this username",
            body = ErrorResponse,
            example = json!({ "error": "User not found" })
        )
    )
)]
pub async fn get_profile(
    interactor: GetProfileInteractor,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = interactor.execute(GetProfileDTO { username }).await?;
    Ok((StatusCode::OK, Json(UserWithCountsResponse::from(profile))))
}

#[utoipa::path(
    get,
    path = "/profiles/{username}/posts",
    tag = "Profiles",
    params(("username" = String, Path, description = "Username of the author")),
    responses(
        (status = 200, description = "Posts of the user, newest first", body = Vec<PostResponse>),
        (
            status = 404,
            description = "No user with this username",
            body = ErrorResponse,
            example = json!({ "error": "User not found" })
        )
    )
)]
pub async fn get_user_posts(
    interactor: GetUserPostsInteractor,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let posts = interactor.execute(GetProfileDTO { username }).await?;
    let response: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/profiles/{username}/likes",
    tag = "Profiles",
    params(("username" = String, Path, description = "Username of the user")),
    responses(
        (status = 200, description = "Posts liked by the user, newest first", body = Vec<PostResponse>),
        (
            status = 404,
            description = "No user with this username",
            body = ErrorResponse,
            example = json!({ "error": "User not found" })
        )
    )
)]
pub async fn get_user_liked_posts(
    interactor: GetUserLikedPostsInteractor,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let posts = interactor.execute(GetProfileDTO { username }).await?;
    let response: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/profiles/{username}/page",
    tag = "Profiles",
    params(("username" = String, Path, description = "Username of the profile")),
    responses(
        (status = 200, description = "Everything the profile page renders", body = ProfilePageResponse),
        (
            status = 404,
            description = "No user with this username",
            body = ErrorResponse,
            example = json!({ "error": "User not found" })
        )
    ),
    security((), ("bearerAuth" = []))
)]
pub async fn get_profile_page(
    auth_user: Option<AuthUser>,
    interactor: GetProfilePageInteractor,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = GetProfilePageDTO {
        username,
        viewer_clerk_id: auth_user.map(|user| user.clerk_id),
    };
    let page = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfilePageResponse::from(page))))
}

#[utoipa::path(
    patch,
    path = "/profiles",
    tag = "Profiles",
    request_body(
        content = UpdateProfileRequest,
        example = json!(
            {
                "name": "Jane Doe",
                "bio": "Writing about Rust",
                "location": "Berlin",
                "website": "jane.dev"
            }
        )
    ),
    responses(
        (
            status = 200,
            description = "Outcome of the update; failures are reported in the body",
            body = UpdateProfileResponse,
            example = json!({ "success": false, "error": "Failed to update profile" })
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
pub async fn update_profile(
    auth_user: AuthUser,
    interactor: UpdateProfileInteractor,
    ValidJson(payload): ValidJson<UpdateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpdateProfileDTO {
        clerk_id: auth_user.clerk_id,
        name: payload.name,
        bio: payload.bio,
        location: payload.location,
        website: payload.website,
    };
    let result = interactor.execute(dto).await;
    Ok((StatusCode::OK, Json(UpdateProfileResponse::from(result))))
}
