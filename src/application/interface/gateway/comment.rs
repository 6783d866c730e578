use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::comment::Comment;
use crate::domain::entities::id::Id;

#[async_trait]
pub trait CommentWriter: Send + Sync {
    async fn insert(&self, comment: Comment) -> AppResult<Id<Comment>>;
}
