use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::follow::{FollowReader, FollowWriter};
use crate::domain::entities::follow::Follow;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct FollowGateway {
    session: SqlxSession,
}

impl FollowGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl FollowWriter for FollowGateway {
    async fn insert(&self, follow: Follow) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let follow = follow.clone();
                async move {
                    sqlx::query(
                        r#"
                            INSERT INTO follows
                                (follower_id, following_id, created_at)
                            VALUES
                                ($1, $2, $3)
                        "#,
                    )
                    .bind(follow.follower_id.value)
                    .bind(follow.following_id.value)
                    .bind(follow.created_at)
                    .execute(tx.as_mut())
                    .await?;

                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, follower_id: &Id<User>, following_id: &Id<User>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let follower_id = follower_id.value;
                let following_id = following_id.value;
                async move {
                    sqlx::query(
                        r#"
                            DELETE FROM follows
                            WHERE follower_id = $1 AND following_id = $2
                        "#,
                    )
                    .bind(follower_id)
                    .bind(following_id)
                    .execute(tx.as_mut())
                    .await?;

                    Ok(())
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl FollowReader for FollowGateway {
    async fn exists(&self, follower_id: &Id<User>, following_id: &Id<User>) -> AppResult<bool> {
        self.session
            .with_tx(|tx| {
                let follower_id = follower_id.value;
                let following_id = following_id.value;
                async move {
                    let row = sqlx::query(
                        r#"
                            SELECT EXISTS (
                                SELECT 1
                                FROM follows
                                WHERE follower_id = $1 AND following_id = $2
                            ) AS is_following
                        "#,
                    )
                    .bind(follower_id)
                    .bind(following_id)
                    .fetch_one(tx.as_mut())
                    .await?;

                    Ok(row.try_get("is_following")?)
                }
                .boxed()
            })
            .await
    }
}
