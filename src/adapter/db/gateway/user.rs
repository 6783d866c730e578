use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::{ProfileUpdate, User, UserCounts, UserWithCounts};

const USER_COLUMNS: &str = r#"
    u.id, u.clerk_id, u.name, u.username, u.email, u.image,
    u.bio, u.location, u.website, u.created_at, u.updated_at
"#;

const COUNT_COLUMNS: &str = r#"
    (SELECT COUNT(*) FROM follows WHERE following_id = u.id) AS followers,
    (SELECT COUNT(*) FROM follows WHERE follower_id = u.id) AS following,
    (SELECT COUNT(*) FROM posts WHERE author_id = u.id) AS posts
"#;

#[derive(Clone)]
pub struct UserGateway {
    session: SqlxSession,
}

impl UserGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    pub(crate) fn get_user(row: &PgRow) -> AppResult<User> {
        Ok(User {
            id: Id::new(row.try_get("id")?),
            clerk_id: row.try_get("clerk_id")?,
            name: row.try_get("name")?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            image: row.try_get("image")?,
            bio: row.try_get("bio")?,
            location: row.try_get("location")?,
            website: row.try_get("website")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn get_user_with_counts(row: &PgRow) -> AppResult<UserWithCounts> {
        Ok(UserWithCounts {
            user: Self::get_user(row)?,
            counts: UserCounts {
                followers: row.try_get("followers")?,
                following: row.try_get("following")?,
                posts: row.try_get("posts")?,
            },
        })
    }
}

#[async_trait]
impl UserWriter for UserGateway {
    async fn insert(&self, user: User) -> AppResult<Id<User>> {
        self.session
            .with_tx(|tx| {
                let user = user.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO users
                                (id, clerk_id, name, username, email, image, created_at, updated_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6, $7, $8)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(user.id.value)
                    .bind(&user.clerk_id)
                    .bind(&user.name)
                    .bind(&user.username)
                    .bind(&user.email)
                    .bind(&user.image)
                    .bind(user.created_at)
                    .bind(user.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update_profile(&self, user_id: &Id<User>, update: ProfileUpdate) -> AppResult<Option<User>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let row = sqlx::query(
                        r#"
                            UPDATE
                                users AS u
                            SET
                                name = $2, bio = $3, location = $4, website = $5, updated_at = now()
                            WHERE
                                u.id = $1
                            RETURNING
                                u.id, u.clerk_id, u.name, u.username, u.email, u.image,
                                u.bio, u.location, u.website, u.created_at, u.updated_at
                        "#,
                    )
                    .bind(user_id)
                    .bind(update.name)
                    .bind(update.bio)
                    .bind(update.location)
                    .bind(update.website)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    row.as_ref().map(Self::get_user).transpose()
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl UserReader for UserGateway {
    async fn find_by_clerk_id(&self, clerk_id: &str) -> AppResult<Option<User>> {
        self.session
            .with_tx(|tx| {
                let clerk_id = clerk_id.to_owned();
                async move {
                    let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users AS u WHERE u.clerk_id = $1"))
                        .bind(&clerk_id)
                        .fetch_optional(tx.as_mut())
                        .await?;

                    row.as_ref().map(Self::get_user).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn find_with_counts_by_clerk_id(&self, clerk_id: &str) -> AppResult<Option<UserWithCounts>> {
        self.session
            .with_tx(|tx| {
                let clerk_id = clerk_id.to_owned();
                async move {
                    let row = sqlx::query(&format!(
                        "SELECT {USER_COLUMNS}, {COUNT_COLUMNS} FROM users AS u WHERE u.clerk_id = $1"
                    ))
                    .bind(&clerk_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    row.as_ref().map(Self::get_user_with_counts).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn find_with_counts_by_username(&self, username: &str) -> AppResult<Option<UserWithCounts>> {
        self.session
            .with_tx(|tx| {
                let username = username.to_owned();
                async move {
                    let row = sqlx::query(&format!(
                        "SELECT {USER_COLUMNS}, {COUNT_COLUMNS} FROM users AS u WHERE u.username = $1"
                    ))
                    .bind(&username)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    row.as_ref().map(Self::get_user_with_counts).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn find_suggestions(&self, user_id: &Id<User>, limit: i64) -> AppResult<Vec<UserWithCounts>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let rows = sqlx::query(&format!(
                        r#"
                            SELECT {USER_COLUMNS}, {COUNT_COLUMNS}
                            FROM
                                users AS u
                            WHERE
                                u.id <> $1
                                AND NOT EXISTS (
                                    SELECT 1
                                    FROM follows AS f
                                    WHERE f.follower_id = $1 AND f.following_id = u.id
                                )
                            ORDER BY random()
                            LIMIT $2
                        "#
                    ))
                    .bind(user_id)
                    .bind(limit)
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.iter().map(Self::get_user_with_counts).collect()
                }
                .boxed()
            })
            .await
    }
}
