use chrono::{DateTime, Utc};

use crate::application::app_error::{AppError, AppResult};
use crate::domain::entities::id::Id;
use crate::domain::entities::post::Post;
use crate::domain::entities::user::{User, UserSummary};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: Id<Comment>,
    pub content: String,
    pub author_id: Id<User>,
    pub post_id: Id<Post>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: Id<Post>, author_id: Id<User>, content: String) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Err(AppError::EmptyComment);
        }
        Ok(Self {
            id: Id::generate(),
            content,
            author_id,
            post_id,
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CommentView {
    pub comment: Comment,
    pub author: UserSummary,
}
