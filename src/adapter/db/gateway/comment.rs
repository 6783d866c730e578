use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::comment::CommentWriter;
use crate::domain::entities::comment::Comment;
use crate::domain::entities::id::Id;

#[derive(Clone)]
pub struct CommentGateway {
    session: SqlxSession,
}

impl CommentGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl CommentWriter for CommentGateway {
    async fn insert(&self, comment: Comment) -> AppResult<Id<Comment>> {
        self.session
            .with_tx(|tx| {
                let comment = comment.clone();
                async move {
                    let row = sqlx::query(
                        r#"
                            INSERT INTO comments
                                (id, content, author_id, post_id, created_at)
                            VALUES
                                ($1, $2, $3, $4, $5)
                            RETURNING id
                        "#,
                    )
                    .bind(comment.id.value)
                    .bind(comment.content)
                    .bind(comment.author_id.value)
                    .bind(comment.post_id.value)
                    .bind(comment.created_at)
                    .fetch_one(tx.as_mut())
                    .await?;

                    let id: Uuid = row.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }
}
