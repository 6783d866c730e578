use std::sync::Arc;

use tracing::info;

use crate::application::app_error::AppResult;
use crate::application::dto::notification::{GetNotificationsDTO, MarkNotificationsReadDTO, NotificationDTO};
use crate::application::interactors::users::get_db_user_id;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::notification::{NotificationReader, NotificationWriter};
use crate::application::interface::gateway::user::UserReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::notification::Notification;

#[derive(Clone)]
pub struct GetNotificationsInteractor {
    user_reader: Arc<dyn UserReader>,
    notification_reader: Arc<dyn NotificationReader>,
}

impl GetNotificationsInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>, notification_reader: Arc<dyn NotificationReader>) -> Self {
        Self {
            user_reader,
            notification_reader,
        }
    }

    pub async fn execute(&self, dto: GetNotificationsDTO) -> AppResult<Vec<NotificationDTO>> {
        let user_id = get_db_user_id(self.user_reader.as_ref(), Some(&dto.clerk_id)).await?;
        let notifications = self.notification_reader.find_by_user(&user_id).await?;
        Ok(notifications.into_iter().map(NotificationDTO::from).collect())
    }
}

#[derive(Clone)]
pub struct MarkNotificationsReadInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    notification_writer: Arc<dyn NotificationWriter>,
}

impl MarkNotificationsReadInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        notification_writer: Arc<dyn NotificationWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            notification_writer,
        }
    }

    /// Only notifications addressed to the caller are touched; returns how many were updated.
    pub async fn execute(&self, dto: MarkNotificationsReadDTO) -> AppResult<u64> {
        let user_id = get_db_user_id(self.user_reader.as_ref(), Some(&dto.clerk_id)).await?;
        let ids = dto
            .notification_ids
            .into_iter()
            .map(Id::<Notification>::try_from)
            .collect::<AppResult<Vec<_>>>()?;
        if ids.is_empty() {
            return Ok(0);
        }

        let updated = self.notification_writer.mark_read(&user_id, &ids).await?;
        self.db_session.commit().await?;
        info!("{} notifications of {} marked as read", updated, user_id);
        Ok(updated)
    }
}
