use axum::{Json, response::Html};
use utoipa::{
    Modify, OpenApi,
    openapi::{
        OpenApi as OpenApiDoc,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};

use crate::adapter::http::{
    app_error_impl::ErrorResponse,
    routes::{notification, post, profile, user},
    schema::{
        MessageResponse,
        id::IdResponse,
        notification::{
            MarkNotificationsReadRequest, MarkNotificationsReadResponse, NotificationCommentResponse,
            NotificationPostResponse, NotificationResponse,
        },
        post::{
            CommentResponse, CreateCommentRequest, CreatePostRequest, PostCountsResponse, PostResponse,
            ToggleLikeResponse,
        },
        profile::{
            EditProfileFormResponse, ProfilePageResponse, ProfileTabResponse, UpdateProfileRequest,
            UpdateProfileResponse,
        },
        user::{
            ActionResultResponse, IsFollowingResponse, SuggestedUserResponse, UserCountsResponse, UserResponse,
            UserSummaryResponse, UserWithCountsResponse,
        },
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(
        user::sync_user,
        user::get_me,
        user::get_suggestions,
        user::toggle_follow,
        user::is_following,
        profile::get_profile,
        profile::get_user_posts,
        profile::get_user_liked_posts,
        profile::get_profile_page,
        profile::update_profile,
        post::create_post,
        post::delete_post,
        post::toggle_like,
        post::create_comment,
        notification::get_notifications,
        notification::mark_notifications_read
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            IdResponse,
            UserResponse,
            UserCountsResponse,
            UserWithCountsResponse,
            UserSummaryResponse,
            SuggestedUserResponse,
            ActionResultResponse,
            IsFollowingResponse,
            UpdateProfileRequest,
            UpdateProfileResponse,
            ProfilePageResponse,
            EditProfileFormResponse,
            ProfileTabResponse,
            CreatePostRequest,
            CreateCommentRequest,
            ToggleLikeResponse,
            CommentResponse,
            PostCountsResponse,
            PostResponse,
            NotificationResponse,
            NotificationPostResponse,
            NotificationCommentResponse,
            MarkNotificationsReadRequest,
            MarkNotificationsReadResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<OpenApiDoc> {
    Json(ApiDoc::openapi())
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>Pulse API</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  basePath="/"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use crate::adapter::http::docs::ApiDoc;

    #[test]
    fn test_openapi_lists_routes_and_bearer_scheme() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/users/{user_id}/follow"));
        assert!(doc.paths.paths.contains_key("/profiles/{username}/page"));
        assert!(doc.paths.paths.contains_key("/notifications/read"));
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearerAuth"));
    }
}
