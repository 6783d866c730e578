use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::notification::{Notification, NotificationView};
use crate::domain::entities::user::User;

#[async_trait]
pub trait NotificationWriter: Send + Sync {
    async fn insert(&self, notification: Notification) -> AppResult<Id<Notification>>;
    /// Returns the number of rows marked as read.
    async fn mark_read(&self, user_id: &Id<User>, notification_ids: &[Id<Notification>]) -> AppResult<u64>;
}

#[async_trait]
pub trait NotificationReader: Send + Sync {
    async fn find_by_user(&self, user_id: &Id<User>) -> AppResult<Vec<NotificationView>>;
}
