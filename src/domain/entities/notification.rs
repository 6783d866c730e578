use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::application::app_error::AppError;
use crate::domain::entities::comment::Comment;
use crate::domain::entities::id::Id;
use crate::domain::entities::post::Post;
use crate::domain::entities::user::{User, UserSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Like,
    Comment,
    Follow,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Like => "LIKE",
            NotificationType::Comment => "COMMENT",
            NotificationType::Follow => "FOLLOW",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LIKE" => Ok(NotificationType::Like),
            "COMMENT" => Ok(NotificationType::Comment),
            "FOLLOW" => Ok(NotificationType::Follow),
            other => Err(AppError::InvalidNotificationType(other.to_string())),
        }
    }
}

/// `user_id` receives the notification, `creator_id` triggered it.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Id<Notification>,
    pub user_id: Id<User>,
    pub creator_id: Id<User>,
    pub kind: NotificationType,
    pub read: bool,
    pub post_id: Option<Id<Post>>,
    pub comment_id: Option<Id<Comment>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    fn new(
        kind: NotificationType,
        user_id: Id<User>,
        creator_id: Id<User>,
        post_id: Option<Id<Post>>,
        comment_id: Option<Id<Comment>>,
    ) -> Self {
        Self {
            id: Id::generate(),
            user_id,
            creator_id,
            kind,
            read: false,
            post_id,
            comment_id,
            created_at: Utc::now(),
        }
    }

    pub fn follow(user_id: Id<User>, creator_id: Id<User>) -> Self {
        Self::new(NotificationType::Follow, user_id, creator_id, None, None)
    }

    pub fn like(user_id: Id<User>, creator_id: Id<User>, post_id: Id<Post>) -> Self {
        Self::new(NotificationType::Like, user_id, creator_id, Some(post_id), None)
    }

    pub fn comment(user_id: Id<User>, creator_id: Id<User>, post_id: Id<Post>, comment_id: Id<Comment>) -> Self {
        Self::new(NotificationType::Comment, user_id, creator_id, Some(post_id), Some(comment_id))
    }
}

#[derive(Debug, Clone)]
pub struct NotificationPost {
    pub id: Id<Post>,
    pub content: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NotificationComment {
    pub id: Id<Comment>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NotificationView {
    pub notification: Notification,
    pub creator: UserSummary,
    pub post: Option<NotificationPost>,
    pub comment: Option<NotificationComment>,
}
