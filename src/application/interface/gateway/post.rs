use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::post::{Post, PostView};
use crate::domain::entities::user::User;

#[async_trait]
pub trait PostWriter: Send + Sync {
    async fn insert(&self, post: Post) -> AppResult<Id<Post>>;
    async fn delete(&self, post_id: &Id<Post>) -> AppResult<()>;
}

#[async_trait]
pub trait PostReader: Send + Sync {
    async fn find_by_id(&self, post_id: &Id<Post>) -> AppResult<Option<Post>>;
    async fn find_by_author(&self, author_id: &Id<User>) -> AppResult<Vec<PostView>>;
    async fn find_liked_by(&self, user_id: &Id<User>) -> AppResult<Vec<PostView>>;
}
