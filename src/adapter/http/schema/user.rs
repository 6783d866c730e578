use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::dto::result::ActionResultDTO;
use crate::application::dto::user::{SuggestedUserDTO, UserDTO, UserSummaryDTO, UserWithCountsDTO};

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
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

impl From<UserDTO> for UserResponse {
    fn from(user: UserDTO) -> Self {
        Self {
            id: user.id,
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

#[derive(Debug, Serialize, ToSchema)]
pub struct UserCountsResponse {
    pub followers: i64,
    pub following: i64,
    pub posts: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserWithCountsResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    #[serde(rename = "_count")]
    pub counts: UserCountsResponse,
}

impl From<UserWithCountsDTO> for UserWithCountsResponse {
    fn from(value: UserWithCountsDTO) -> Self {
        Self {
            user: value.user.into(),
            counts: UserCountsResponse {
                followers: value.counts.followers,
                following: value.counts.following,
                posts: value.counts.posts,
            },
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserSummaryResponse {
    pub id: String,
    pub name: Option<String>,
    pub username: String,
    pub image: Option<String>,
}

impl From<UserSummaryDTO> for UserSummaryResponse {
    fn from(summary: UserSummaryDTO) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            username: summary.username,
            image: summary.image,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestedUserResponse {
    pub id: String,
    pub name: Option<String>,
    pub username: String,
    pub image: Option<String>,
    pub followers: i64,
    pub following: i64,
}

impl From<SuggestedUserDTO> for SuggestedUserResponse {
    fn from(user: SuggestedUserDTO) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            image: user.image,
            followers: user.followers,
            following: user.following,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResultResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Failed to toggle follow")]
    pub message: Option<String>,
}

impl From<ActionResultDTO> for ActionResultResponse {
    fn from(result: ActionResultDTO) -> Self {
        Self {
            success: result.success,
            message: result.message,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IsFollowingResponse {
    pub is_following: bool,
}
