use chrono::{DateTime, Utc};

use crate::application::interface::identity::VerifiedIdentity;
use crate::domain::entities::user::{User, UserCounts, UserSummary, UserWithCounts};

#[derive(Debug, Clone)]
pub struct SyncUserDTO {
    pub identity: Option<VerifiedIdentity>,
}

#[derive(Debug, Clone)]
pub struct GetMeDTO {
    pub clerk_id: String,
}

#[derive(Debug, Clone)]
pub struct GetRandomUsersDTO {
    pub clerk_id: Option<String>,
    pub limit: i64,
}

#[derive(Debug, Clone)]
pub struct ToggleFollowDTO {
    pub clerk_id: Option<String>,
    pub target_user_id: String,
}

#[derive(Debug, Clone)]
pub struct IsFollowingDTO {
    pub clerk_id: Option<String>,
    pub target_user_id: String,
}

#[derive(Debug, Clone)]
pub struct UserDTO {
    pub id: String,
    pub clerk_id: String,
    pub name: Option<String>,
    pub username: String,
    pub email: String,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDTO {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value.to_string(),
            clerk_id: user.clerk_id,
            name: user.name,
            username: user.username,
            email: user.email,
            image: user.image,
            bio: user.bio,
            location: user.location,
            website: user.website,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserCountsDTO {
    pub followers: i64,
    pub following: i64,
    pub posts: i64,
}

impl From<UserCounts> for UserCountsDTO {
    fn from(counts: UserCounts) -> Self {
        Self {
            followers: counts.followers,
            following: counts.following,
            posts: counts.posts,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserWithCountsDTO {
    pub user: UserDTO,
    pub counts: UserCountsDTO,
}

impl From<UserWithCounts> for UserWithCountsDTO {
    fn from(value: UserWithCounts) -> Self {
        Self {
            user: value.user.into(),
            counts: value.counts.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserSummaryDTO {
    pub id: String,
    pub name: Option<String>,
    pub username: String,
    pub image: Option<String>,
}

impl From<UserSummary> for UserSummaryDTO {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id.value.to_string(),
            name: summary.name,
            username: summary.username,
            image: summary.image,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuggestedUserDTO {
    pub id: String,
    pub name: Option<String>,
    pub username: String,
    pub image: Option<String>,
    pub followers: i64,
    pub following: i64,
}

impl From<UserWithCounts> for SuggestedUserDTO {
    fn from(value: UserWithCounts) -> Self {
        Self {
            id: value.user.id.value.to_string(),
            name: value.user.name,
            username: value.user.username,
            image: value.user.image,
            followers: value.counts.followers,
            following: value.counts.following,
        }
    }
}
