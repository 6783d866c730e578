use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;
use crate::domain::entities::post::Post;
use crate::domain::entities::user::User;

#[derive(Debug, Clone)]
pub struct Like {
    pub id: Id<Like>,
    pub post_id: Id<Post>,
    pub user_id: Id<User>,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(post_id: Id<Post>, user_id: Id<User>) -> Self {
        Self {
            id: Id::generate(),
            post_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
