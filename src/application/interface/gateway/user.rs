use crate::{
    application::app_error::AppResult,
    domain::entities::{
        id::Id,
        user::{ProfileUpdate, User, UserWithCounts}
    }
};
use async_trait::async_trait;

#[async_trait]
pub trait UserWriter: Send + Sync {
    async fn insert(&self, user: User) -> AppResult<Id<User>>;
    async fn update_profile(&self, user_id: &Id<User>, update: ProfileUpdate) -> AppResult<Option<User>>;
}

#[async_trait]
pub trait UserReader: Send + Sync {
    async fn find_by_clerk_id(&self, clerk_id: &str) -> AppResult<Option<User>>;
    async fn find_with_counts_by_clerk_id(&self, clerk_id: &str) -> AppResult<Option<UserWithCounts>>;
    async fn find_with_counts_by_username(&self, username: &str) -> AppResult<Option<UserWithCounts>>;
    /// Random users that are neither `user_id` nor followed by it.
    async fn find_suggestions(&self, user_id: &Id<User>, limit: i64) -> AppResult<Vec<UserWithCounts>>;
}
