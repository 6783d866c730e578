use crate::application::dto::post::PostDTO;
use crate::application::dto::user::{UserDTO, UserWithCountsDTO};

#[derive(Debug, Clone)]
pub struct GetProfileDTO {
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileDTO {
    pub clerk_id: String,
    pub name: String,
    pub bio: String,
    pub location: String,
    pub website: String,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileResultDTO {
    pub success: bool,
    pub user: Option<UserDTO>,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetProfilePageDTO {
    pub username: String,
    pub viewer_clerk_id: Option<String>,
}

/// Values the edit dialog starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditProfileFormDTO {
    pub name: String,
    pub bio: String,
    pub location: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTabDTO {
    pub key: String,
    pub label: String,
    pub empty_text: String,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct ProfilePageDTO {
    pub user: UserWithCountsDTO,
    pub display_name: String,
    pub avatar: String,
    pub joined: String,
    pub website_href: Option<String>,
    pub is_own_profile: bool,
    pub is_following: bool,
    pub action: String,
    pub edit_form: EditProfileFormDTO,
    pub default_tab: String,
    pub tabs: Vec<ProfileTabDTO>,
    pub posts: Vec<PostDTO>,
    pub liked_posts: Vec<PostDTO>,
}
