use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::adapter::http::schema::user::UserSummaryResponse;
use crate::application::dto::post::{CommentDTO, PostDTO};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(length(max = 2000, message = "Post content must be at most 2000 characters"))]
    pub content: Option<String>,
    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be between 1 and 1000 characters"))]
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ToggleLikeResponse {
    pub liked: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: String,
    pub content: String,
    pub author: UserSummaryResponse,
    pub created_at: DateTime<Utc>,
}

impl From<CommentDTO> for CommentResponse {
    fn from(comment: CommentDTO) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            author: comment.author.into(),
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostCountsResponse {
    pub likes: i64,
    pub comments: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub id: String,
    pub author: UserSummaryResponse,
    pub content: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<CommentResponse>,
    /// Ids of the users who liked the post.
    pub likes: Vec<String>,
    #[serde(rename = "_count")]
    pub counts: PostCountsResponse,
}

impl From<PostDTO> for PostResponse {
    fn from(post: PostDTO) -> Self {
        Self {
            id: post.id,
            author: post.author.into(),
            content: post.content,
            image: post.image,
            created_at: post.created_at,
            updated_at: post.updated_at,
            comments: post.comments.into_iter().map(CommentResponse::from).collect(),
            likes: post.like_user_ids,
            counts: PostCountsResponse {
                likes: post.likes_count,
                comments: post.comments_count,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;
    use validator::Validate;

    use crate::adapter::http::schema::post::{CreateCommentRequest, CreatePostRequest};

    #[rstest]
    #[case(json!({ "content": "hello" }), true)]
    #[case(json!({ "image": "https://cdn.example.com/a.png" }), true)]
    #[case(json!({ "image": "not a url" }), false)]
    #[case(json!({ "content": "x".repeat(2001) }), false)]
    fn test_create_post_request(#[case] body: serde_json::Value, #[case] valid: bool) {
        let request: CreatePostRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.validate().is_ok(), valid);
    }

    #[rstest]
    #[case("", false)]
    #[case("nice post", true)]
    fn test_create_comment_request(#[case] content: &str, #[case] valid: bool) {
        let request: CreateCommentRequest = serde_json::from_value(json!({ "content": content })).unwrap();
        assert_eq!(request.validate().is_ok(), valid);
    }
}
