use std::collections::HashMap;

use async_trait::async_trait;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, Row};
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::post::{PostReader, PostWriter};
use crate::domain::entities::comment::{Comment, CommentView};
use crate::domain::entities::id::Id;
use crate::domain::entities::post::{Post, PostView};
use crate::domain::entities::user::{User, UserSummary};

const POST_VIEW_COLUMNS: &str = r#"
    p.id, p.author_id, p.content, p.image, p.created_at, p.updated_at,
    a.name AS author_name, a.username AS author_username, a.image AS author_image,
    (SELECT COUNT(*) FROM likes WHERE post_id = p.id) AS likes_count,
    (SELECT COUNT(*) FROM comments WHERE post_id = p.id) AS comments_count
"#;

#[derive(Clone)]
pub struct PostGateway {
    session: SqlxSession,
}

impl PostGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn get_post(row: &PgRow) -> AppResult<Post> {
        Ok(Post {
            id: Id::new(row.try_get("id")?),
            author_id: Id::new(row.try_get("author_id")?),
            content: row.try_get("content")?,
            image: row.try_get("image")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn get_comment_view(row: &PgRow) -> AppResult<CommentView> {
        let author_id: Id<User> = Id::new(row.try_get("author_id")?);
        Ok(CommentView {
            comment: Comment {
                id: Id::new(row.try_get("id")?),
                content: row.try_get("content")?,
                author_id: author_id.clone(),
                post_id: Id::new(row.try_get("post_id")?),
                created_at: row.try_get("created_at")?,
            },
            author: UserSummary {
                id: author_id,
                name: row.try_get("author_name")?,
                username: row.try_get("author_username")?,
                image: row.try_get("author_image")?,
            },
        })
    }

    /// Attaches comments (oldest first) and like user ids to the given post rows, keeping their order.
    async fn assemble_views(conn: &mut PgConnection, rows: Vec<PgRow>) -> AppResult<Vec<PostView>> {
        let post_ids = rows
            .iter()
            .map(|row| row.try_get::<Uuid, _>("id"))
            .collect::<Result<Vec<_>, _>>()?;
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let comment_rows = sqlx::query(
            r#"
                SELECT
                    c.id, c.content, c.author_id, c.post_id, c.created_at,
                    u.name AS author_name, u.username AS author_username, u.image AS author_image
                FROM comments AS c
                JOIN users AS u ON u.id = c.author_id
                WHERE c.post_id = ANY($1)
                ORDER BY c.created_at ASC
            "#,
        )
        .bind(&post_ids)
        .fetch_all(&mut *conn)
        .await?;

        let mut comments: HashMap<Uuid, Vec<CommentView>> = HashMap::new();
        for row in &comment_rows {
            let view = Self::get_comment_view(row)?;
            comments.entry(view.comment.post_id.value).or_default().push(view);
        }

        let like_rows = sqlx::query("SELECT post_id, user_id FROM likes WHERE post_id = ANY($1)")
            .bind(&post_ids)
            .fetch_all(&mut *conn)
            .await?;

        let mut likes: HashMap<Uuid, Vec<Id<User>>> = HashMap::new();
        for row in &like_rows {
            let post_id: Uuid = row.try_get("post_id")?;
            likes.entry(post_id).or_default().push(Id::new(row.try_get("user_id")?));
        }

        rows.iter()
            .map(|row| -> AppResult<PostView> {
                let post = Self::get_post(row)?;
                Ok(PostView {
                    author: UserSummary {
                        id: post.author_id.clone(),
                        name: row.try_get("author_name")?,
                        username: row.try_get("author_username")?,
                        image: row.try_get("author_image")?,
                    },
                    comments: comments.remove(&post.id.value).unwrap_or_default(),
                    like_user_ids: likes.remove(&post.id.value).unwrap_or_default(),
                    likes_count: row.try_get("likes_count")?,
                    comments_count: row.try_get("comments_count")?,
                    post,
                })
            })
            .collect()
    }
}

#[async_trait]
impl PostWriter for PostGateway {
    async fn insert(&self, post: Post) -> AppResult<Id<Post>> {
        self.session
            .with_tx(|tx| {
                let post = post.clone();
                async move {
                    let row = sqlx::query(
                        r#"
                            INSERT INTO posts
                                (id, author_id, content, image, created_at, updated_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6)
                            RETURNING id
                        "#,
                    )
                    .bind(post.id.value)
                    .bind(post.author_id.value)
                    .bind(post.content)
                    .bind(post.image)
                    .bind(post.created_at)
                    .bind(post.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;

                    let id: Uuid = row.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, post_id: &Id<Post>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let post_id = post_id.value;
                async move {
                    sqlx::query("DELETE FROM posts WHERE id = $1")
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
impl PostReader for PostGateway {
    async fn find_by_id(&self, post_id: &Id<Post>) -> AppResult<Option<Post>> {
        self.session
            .with_tx(|tx| {
                let post_id = post_id.value;
                async move {
                    let row = sqlx::query(
                        r#"
                            SELECT
                                id, author_id, content, image, created_at, updated_at
                            FROM
                                posts
                            WHERE id = $1
                        "#,
                    )
                    .bind(post_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    row.as_ref().map(Self::get_post).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn find_by_author(&self, author_id: &Id<User>) -> AppResult<Vec<PostView>> {
        self.session
            .with_tx(|tx| {
                let author_id = author_id.value;
                async move {
                    let rows = sqlx::query(&format!(
                        r#"
                            SELECT {POST_VIEW_COLUMNS}
                            FROM posts AS p
                            JOIN users AS a ON a.id = p.author_id
                            WHERE p.author_id = $1
                            ORDER BY p.created_at DESC
                        "#
                    ))
                    .bind(author_id)
                    .fetch_all(tx.as_mut())
                    .await?;

                    Self::assemble_views(&mut **tx, rows).await
                }
                .boxed()
            })
            .await
    }

    async fn find_liked_by(&self, user_id: &Id<User>) -> AppResult<Vec<PostView>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let rows = sqlx::query(&format!(
                        r#"
                            SELECT {POST_VIEW_COLUMNS}
                            FROM posts AS p
                            JOIN users AS a ON a.id = p.author_id
                            JOIN likes AS l ON l.post_id = p.id
                            WHERE l.user_id = $1
                            ORDER BY p.created_at DESC
                        "#
                    ))
                    .bind(user_id)
                    .fetch_all(tx.as_mut())
                    .await?;

                    Self::assemble_views(&mut **tx, rows).await
                }
                .boxed()
            })
            .await
    }
}
