use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::adapter::http::schema::user::UserSummaryResponse;
use crate::application::dto::notification::NotificationDTO;

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationPostResponse {
    pub id: String,
    pub content: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationCommentResponse {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationResponse {
    pub id: String,
    #[serde(rename = "type")]
    #[schema(example = "FOLLOW")]
    pub kind: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub creator: UserSummaryResponse,
    pub post: Option<NotificationPostResponse>,
    pub comment: Option<NotificationCommentResponse>,
}

impl From<NotificationDTO> for NotificationResponse {
    fn from(notification: NotificationDTO) -> Self {
        Self {
            id: notification.id,
            kind: notification.kind,
            read: notification.read,
            created_at: notification.created_at,
            creator: notification.creator.into(),
            post: notification.post.map(|post| NotificationPostResponse {
                id: post.id,
                content: post.content,
                image: post.image,
            }),
            comment: notification.comment.map(|comment| NotificationCommentResponse {
                id: comment.id,
                content: comment.content,
                created_at: comment.created_at,
            }),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MarkNotificationsReadRequest {
    #[validate(length(max = 100, message = "At most 100 notifications per request"))]
    pub notification_ids: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkNotificationsReadResponse {
    pub updated: u64,
}
