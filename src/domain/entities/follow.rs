use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Debug, Clone)]
pub struct Follow {
    pub follower_id: Id<User>,
    pub following_id: Id<User>,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    pub fn new(follower_id: Id<User>, following_id: Id<User>) -> Self {
        Self {
            follower_id,
            following_id,
            created_at: Utc::now(),
        }
    }
}
