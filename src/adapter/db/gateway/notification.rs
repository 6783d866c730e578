use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::notification::{NotificationReader, NotificationWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::notification::{
    Notification, NotificationComment, NotificationPost, NotificationType, NotificationView,
};
use crate::domain::entities::user::{User, UserSummary};

#[derive(Clone)]
pub struct NotificationGateway {
    session: SqlxSession,
}

impl NotificationGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn get_notification_view(row: &PgRow) -> AppResult<NotificationView> {
        let kind_str: String = row.try_get("type")?;
        let kind = kind_str.parse::<NotificationType>()?;
        let post_id: Option<Uuid> = row.try_get("post_id")?;
        let comment_id: Option<Uuid> = row.try_get("comment_id")?;

        let notification = Notification {
            id: Id::new(row.try_get("id")?),
            user_id: Id::new(row.try_get("user_id")?),
            creator_id: Id::new(row.try_get("creator_id")?),
            kind,
            read: row.try_get("read")?,
            post_id: post_id.map(Id::new),
            comment_id: comment_id.map(Id::new),
            created_at: row.try_get("created_at")?,
        };

        let post = match post_id {
            Some(id) => Some(NotificationPost {
                id: Id::new(id),
                content: row.try_get("post_content")?,
                image: row.try_get("post_image")?,
            }),
            None => None,
        };
        let comment = match comment_id {
            Some(id) => Some(NotificationComment {
                id: Id::new(id),
                content: row.try_get("comment_content")?,
                created_at: row.try_get("comment_created_at")?,
            }),
            None => None,
        };

        Ok(NotificationView {
            creator: UserSummary {
                id: notification.creator_id.clone(),
                name: row.try_get("creator_name")?,
                username: row.try_get("creator_username")?,
                image: row.try_get("creator_image")?,
            },
            notification,
            post,
            comment,
        })
    }
}

#[async_trait]
impl NotificationWriter for NotificationGateway {
    async fn insert(&self, notification: Notification) -> AppResult<Id<Notification>> {
        self.session
            .with_tx(|tx| {
                let notification = notification.clone();
                async move {
                    let row = sqlx::query(
                        r#"
                            INSERT INTO notifications
                                (id, user_id, creator_id, type, read, post_id, comment_id, created_at)
                            VALUES
                                ($1, $2, $3, $4::notification_type, $5, $6, $7, $8)
                            RETURNING id
                        "#,
                    )
                    .bind(notification.id.value)
                    .bind(notification.user_id.value)
                    .bind(notification.creator_id.value)
                    .bind(notification.kind.as_str())
                    .bind(notification.read)
                    .bind(notification.post_id.map(|id| id.value))
                    .bind(notification.comment_id.map(|id| id.value))
                    .bind(notification.created_at)
                    .fetch_one(tx.as_mut())
                    .await?;

                    let id: Uuid = row.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn mark_read(&self, user_id: &Id<User>, notification_ids: &[Id<Notification>]) -> AppResult<u64> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                let notification_ids: Vec<Uuid> = notification_ids.iter().map(|id| id.value).collect();
                async move {
                    let result = sqlx::query(
                        r#"
                            UPDATE notifications
                            SET read = true
                            WHERE user_id = $1 AND id = ANY($2)
                        "#,
                    )
                    .bind(user_id)
                    .bind(notification_ids)
                    .execute(tx.as_mut())
                    .await?;

                    Ok(result.rows_affected())
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl NotificationReader for NotificationGateway {
    async fn find_by_user(&self, user_id: &Id<User>) -> AppResult<Vec<NotificationView>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                n.id,
                                n.user_id,
                                n.creator_id,
                                n.type::TEXT AS type,
                                n.read,
                                n.post_id,
                                n.comment_id,
                                n.created_at,
                                creator.name AS creator_name,
                                creator.username AS creator_username,
                                creator.image AS creator_image,
                                p.content AS post_content,
                                p.image AS post_image,
                                c.content AS comment_content,
                                c.created_at AS comment_created_at
                            FROM notifications AS n
                            JOIN users AS creator ON creator.id = n.creator_id
                            LEFT JOIN posts AS p ON p.id = n.post_id
                            LEFT JOIN comments AS c ON c.id = n.comment_id
                            WHERE n.user_id = $1
                            ORDER BY n.created_at DESC
                        "#,
                    )
                    .bind(user_id)
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.iter().map(Self::get_notification_view).collect()
                }
                .boxed()
            })
            .await
    }
}
