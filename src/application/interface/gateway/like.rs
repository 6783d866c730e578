use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::like::Like;
use crate::domain::entities::post::Post;
use crate::domain::entities::user::User;

#[async_trait]
pub trait LikeWriter: Send + Sync {
    async fn insert(&self, like: Like) -> AppResult<()>;
    async fn delete(&self, user_id: &Id<User>, post_id: &Id<Post>) -> AppResult<()>;
}

#[async_trait]
pub trait LikeReader: Send + Sync {
    async fn exists(&self, user_id: &Id<User>, post_id: &Id<Post>) -> AppResult<bool>;
}
