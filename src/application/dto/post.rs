use chrono::{DateTime, Utc};

use crate::application::dto::user::UserSummaryDTO;
use crate::domain::entities::comment::CommentView;
use crate::domain::entities::post::PostView;

#[derive(Debug, Clone)]
pub struct CreatePostDTO {
    pub clerk_id: String,
    pub content: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DeletePostDTO {
    pub clerk_id: String,
    pub post_id: String,
}

#[derive(Debug, Clone)]
pub struct ToggleLikeDTO {
    pub clerk_id: String,
    pub post_id: String,
}

#[derive(Debug, Clone)]
pub struct CreateCommentDTO {
    pub clerk_id: String,
    pub post_id: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct CommentDTO {
    pub id: String,
    pub content: String,
    pub author: UserSummaryDTO,
    pub created_at: DateTime<Utc>,
}

impl From<CommentView> for CommentDTO {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.comment.id.value.to_string(),
            content: view.comment.content,
            author: view.author.into(),
            created_at: view.comment.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostDTO {
    pub id: String,
    pub author: UserSummaryDTO,
    pub content: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<CommentDTO>,
    pub like_user_ids: Vec<String>,
    pub likes_count: i64,
    pub comments_count: i64,
}

impl From<PostView> for PostDTO {
    fn from(view: PostView) -> Self {
        Self {
            id: view.post.id.value.to_string(),
            author: view.author.into(),
            content: view.post.content,
            image: view.post.image,
            created_at: view.post.created_at,
            updated_at: view.post.updated_at,
            comments: view.comments.into_iter().map(CommentDTO::from).collect(),
            like_user_ids: view.like_user_ids.iter().map(|id| id.value.to_string()).collect(),
            likes_count: view.likes_count,
            comments_count: view.comments_count,
        }
    }
}
