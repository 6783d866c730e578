use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::adapter::http::schema::post::PostResponse;
use crate::adapter::http::schema::user::{UserResponse, UserWithCountsResponse};
use crate::application::dto::profile::{ProfilePageDTO, UpdateProfileResultDTO};

/// Fields of the edit dialog. Empty strings clear the stored value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "Location must be at most 100 characters"))]
    pub location: String,
    #[serde(default)]
    #[validate(
        length(max = 200, message = "Website must be at most 200 characters"),
        custom(function = "has_no_whitespace", message = "Website must not contain spaces")
    )]
    pub website: String,
}

fn has_no_whitespace(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().any(char::is_whitespace) {
        return Err(ValidationError::new("website_whitespace"));
    }
    Ok(())
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateProfileResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Failed to update profile")]
    pub error: Option<String>,
}

impl From<UpdateProfileResultDTO> for UpdateProfileResponse {
    fn from(result: UpdateProfileResultDTO) -> Self {
        Self {
            success: result.success,
            user: result.user.map(UserResponse::from),
            error: result.error,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EditProfileFormResponse {
    pub name: String,
    pub bio: String,
    pub location: String,
    pub website: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileTabResponse {
    #[schema(example = "posts")]
    pub key: String,
    pub label: String,
    pub empty_text: String,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfilePageResponse {
    pub user: UserWithCountsResponse,
    pub display_name: String,
    pub avatar: String,
    #[schema(example = "Joined March 2024")]
    pub joined: String,
    pub website_href: Option<String>,
    pub is_own_profile: bool,
    pub is_following: bool,
    /// One of `sign_in`, `edit_profile`, `follow`, `unfollow`.
    pub action: String,
    pub edit_form: EditProfileFormResponse,
    pub default_tab: String,
    pub tabs: Vec<ProfileTabResponse>,
    pub posts: Vec<PostResponse>,
    pub liked_posts: Vec<PostResponse>,
}

impl From<ProfilePageDTO> for ProfilePageResponse {
    fn from(page: ProfilePageDTO) -> Self {
        Self {
            user: page.user.into(),
            display_name: page.display_name,
            avatar: page.avatar,
            joined: page.joined,
            website_href: page.website_href,
            is_own_profile: page.is_own_profile,
            is_following: page.is_following,
            action: page.action,
            edit_form: EditProfileFormResponse {
                name: page.edit_form.name,
                bio: page.edit_form.bio,
                location: page.edit_form.location,
                website: page.edit_form.website,
            },
            default_tab: page.default_tab,
            tabs: page
                .tabs
                .into_iter()
                .map(|tab| ProfileTabResponse {
                    key: tab.key,
                    label: tab.label,
                    empty_text: tab.empty_text,
                    count: tab.count,
                })
                .collect(),
            posts: page.posts.into_iter().map(PostResponse::from).collect(),
            liked_posts: page.liked_posts.into_iter().map(PostResponse::from).collect(),
        }
    }
}
