use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::follow::Follow;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[async_trait]
pub trait FollowWriter: Send + Sync {
    async fn insert(&self, follow: Follow) -> AppResult<()>;
    async fn delete(&self, follower_id: &Id<User>, following_id: &Id<User>) -> AppResult<()>;
}

#[async_trait]
pub trait FollowReader: Send + Sync {
    async fn exists(&self, follower_id: &Id<User>, following_id: &Id<User>) -> AppResult<bool>;
}
