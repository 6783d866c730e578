use chrono::{DateTime, Utc};

use crate::application::dto::user::UserSummaryDTO;
use crate::domain::entities::notification::NotificationView;

#[derive(Debug, Clone)]
pub struct GetNotificationsDTO {
    pub clerk_id: String,
}

#[derive(Debug, Clone)]
pub struct MarkNotificationsReadDTO {
    pub clerk_id: String,
    pub notification_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NotificationPostDTO {
    pub id: String,
    pub content: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NotificationCommentDTO {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NotificationDTO {
    pub id: String,
    pub kind: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub creator: UserSummaryDTO,
    pub post: Option<NotificationPostDTO>,
    pub comment: Option<NotificationCommentDTO>,
}

impl From<NotificationView> for NotificationDTO {
    fn from(view: NotificationView) -> Self {
        Self {
            id: view.notification.id.value.to_string(),
            kind: view.notification.kind.as_str().to_string(),
            read: view.notification.read,
            created_at: view.notification.created_at,
            creator: view.creator.into(),
            post: view.post.map(|post| NotificationPostDTO {
                id: post.id.value.to_string(),
                content: post.content,
                image: post.image,
            }),
            comment: view.comment.map(|comment| NotificationCommentDTO {
                id: comment.id.value.to_string(),
                content: comment.content,
                created_at: comment.created_at,
            }),
        }
    }
}
