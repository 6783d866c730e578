use chrono::{DateTime, Utc};

use crate::application::app_error::{AppError, AppResult};
use crate::domain::entities::comment::CommentView;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::{User, UserSummary};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: Id<Post>,
    pub author_id: Id<User>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Blank content is stored as `None`; a post needs content or an image.
    pub fn new(author_id: Id<User>, content: Option<String>, image: Option<String>) -> AppResult<Self> {
        let content = content.filter(|c| !c.trim().is_empty());
        let image = image.filter(|i| !i.trim().is_empty());
        if content.is_none() && image.is_none() {
            return Err(AppError::EmptyPost);
        }
        let now = Utc::now();
        Ok(Self {
            id: Id::generate(),
            author_id,
            content,
            image,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PostView {
    pub post: Post,
    pub author: UserSummary,
    pub comments: Vec<CommentView>,
    pub like_user_ids: Vec<Id<User>>,
    pub likes_count: i64,
    pub comments_count: i64,
}
