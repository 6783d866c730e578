use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::like::{LikeReader, LikeWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::like::Like;
use crate::domain::entities::post::Post;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct LikeGateway {
    session: SqlxSession,
}

impl LikeGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl LikeWriter for LikeGateway {
    async fn insert(&self, like: Like) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let like = like.clone();
                async move {
                    sqlx::query(
                        r#"
                            INSERT INTO likes
                                (id, post_id, user_id, created_at)
                            VALUES
                                ($1, $2, $3, $4)
                        "#,
                    )
                    .bind(like.id.value)
                    .bind(like.post_id.value)
                    .bind(like.user_id.value)
                    .bind(like.created_at)
                    .execute(tx.as_mut())
                    .await?;

                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, user_id: &Id<User>, post_id: &Id<Post>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                let post_id = post_id.value;
                async move {
                    sqlx::query("DELETE FROM likes WHERE user_id = $1 AND post_id = $2")
                        .bind(user_id)
                        .bind(post_id)
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
impl LikeReader for LikeGateway {
    async fn exists(&self, user_id: &Id<User>, post_id: &Id<Post>) -> AppResult<bool> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                let post_id = post_id.value;
                async move {
                    let row = sqlx::query(
                        r#"
                            SELECT EXISTS (
                                SELECT 1 FROM likes WHERE user_id = $1 AND post_id = $2
                            ) AS liked
                        "#,
                    )
                    .bind(user_id)
                    .bind(post_id)
                    .fetch_one(tx.as_mut())
                    .await?;

                    Ok(row.try_get("liked")?)
                }
                .boxed()
            })
            .await
    }
}
