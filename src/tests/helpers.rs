#![cfg(test)]

use std::collections::BTreeMap;

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::adapter::identity::token::SessionTokenVerifier;
use crate::tests::fixtures::{TEST_ISSUER, TEST_JWT_SECRET};

/// Fresh `(clerk_id, username, email)` triple.
pub fn unique_credentials() -> (String, String, String) {
    let id = Uuid::now_v7().as_simple().to_string();
    let clerk_id = format!("user_{}", &id[16..]);
    let username = format!("t_{}", &id[16..]);
    let email = format!("{}@test.example", &id[16..]);

    (clerk_id, username, email)
}

pub async fn insert_user(pool: &PgPool, clerk_id: &str, username: &str, email: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (id, clerk_id, username, email) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(Uuid::now_v7())
    .bind(clerk_id)
    .bind(username)
    .bind(email)
    .fetch_one(pool)
    .await
    .expect("insert user")
}

pub async fn find_user_by_clerk_id(pool: &PgPool, clerk_id: &str) -> Option<Uuid> {
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE clerk_id = $1")
        .bind(clerk_id)
        .fetch_optional(pool)
        .await
        .expect("find user by clerk id")
}

pub async fn delete_user(pool: &PgPool, user_id: Uuid) {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete user");
}

pub async fn insert_post(pool: &PgPool, author_id: Uuid, content: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>("INSERT INTO posts (id, author_id, content) VALUES ($1, $2, $3) RETURNING id")
        .bind(Uuid::now_v7())
        .bind(author_id)
        .bind(content)
        .fetch_one(pool)
        .await
        .expect("insert post")
}

pub async fn count_notifications(pool: &PgPool, user_id: Uuid, kind: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND type = $2::notification_type",
    )
    .bind(user_id)
    .bind(kind)
    .fetch_one(pool)
    .await
    .expect("count notifications")
}

/// Session token understood by the local identity provider, carrying the profile claims.
pub fn sign_token(clerk_id: &str, username: &str, email: &str) -> String {
    let verifier = SessionTokenVerifier::new(TEST_JWT_SECRET, TEST_ISSUER).expect("token verifier");
    let mut claims = BTreeMap::new();
    claims.insert("first_name".to_string(), Value::from("Test"));
    claims.insert("last_name".to_string(), Value::from("User"));
    claims.insert("username".to_string(), Value::from(username));
    claims.insert("email".to_string(), Value::from(email));
    verifier.sign(clerk_id, 3_600, claims).expect("sign token")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
