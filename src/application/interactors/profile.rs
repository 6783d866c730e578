use std::sync::Arc;

use tracing::{error, info};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::post::PostDTO;
use crate::application::dto::profile::{
    EditProfileFormDTO, GetProfileDTO, GetProfilePageDTO, ProfilePageDTO, ProfileTabDTO, UpdateProfileDTO,
    UpdateProfileResultDTO,
};
use crate::application::dto::user::{UserDTO, UserWithCountsDTO};
use crate::application::interactors::users::get_db_user_id;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::follow::FollowReader;
use crate::application::interface::gateway::post::PostReader;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::profile::{self, ProfileAction};
use crate::domain::entities::user::{ProfileUpdate, User, UserWithCounts};

async fn find_profile(user_reader: &dyn UserReader, username: &str) -> AppResult<UserWithCounts> {
    user_reader
        .find_with_counts_by_username(username)
        .await?
        .ok_or(AppError::UserNotFound)
}

fn non_blank(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}

#[derive(Clone)]
pub struct GetProfileInteractor {
    user_reader: Arc<dyn UserReader>,
}

impl GetProfileInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>) -> Self {
        Self { user_reader }
    }

    pub async fn execute(&self, dto: GetProfileDTO) -> AppResult<UserWithCountsDTO> {
        let profile = find_profile(self.user_reader.as_ref(), &dto.username).await?;
        Ok(profile.into())
    }
}

#[derive(Clone)]
pub struct GetUserPostsInteractor {
    user_reader: Arc<dyn UserReader>,
    post_reader: Arc<dyn PostReader>,
}

impl GetUserPostsInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>, post_reader: Arc<dyn PostReader>) -> Self {
        Self {
            user_reader,
            post_reader,
        }
    }

    pub async fn execute(&self, dto: GetProfileDTO) -> AppResult<Vec<PostDTO>> {
        let profile = find_profile(self.user_reader.as_ref(), &dto.username).await?;
        let posts = self.post_reader.find_by_author(&profile.user.id).await?;
        Ok(posts.into_iter().map(PostDTO::from).collect())
    }
}

#[derive(Clone)]
pub struct GetUserLikedPostsInteractor {
    user_reader: Arc<dyn UserReader>,
    post_reader: Arc<dyn PostReader>,
}

impl GetUserLikedPostsInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>, post_reader: Arc<dyn PostReader>) -> Self {
        Self {
            user_reader,
            post_reader,
        }
    }

    pub async fn execute(&self, dto: GetProfileDTO) -> AppResult<Vec<PostDTO>> {
        let profile = find_profile(self.user_reader.as_ref(), &dto.username).await?;
        let posts = self.post_reader.find_liked_by(&profile.user.id).await?;
        Ok(posts.into_iter().map(PostDTO::from).collect())
    }
}

#[derive(Clone)]
pub struct UpdateProfileInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
}

impl UpdateProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            user_writer,
        }
    }

    pub async fn execute(&self, dto: UpdateProfileDTO) -> UpdateProfileResultDTO {
        match self.update(dto).await {
            Ok(user) => UpdateProfileResultDTO {
                success: true,
                user: Some(user),
                error: None,
            },
            Err(err) => {
                error!("Failed to update profile: {}", err);
                UpdateProfileResultDTO {
                    success: false,
                    user: None,
                    error: Some("Failed to update profile".to_string()),
                }
            }
        }
    }

    async fn update(&self, dto: UpdateProfileDTO) -> AppResult<UserDTO> {
        let user_id = get_db_user_id(self.user_reader.as_ref(), Some(&dto.clerk_id)).await?;
        let update = ProfileUpdate {
            name: non_blank(dto.name),
            bio: non_blank(dto.bio),
            location: non_blank(dto.location),
            website: non_blank(dto.website),
        };
        let user = self
            .user_writer
            .update_profile(&user_id, update)
            .await?
            .ok_or(AppError::UserNotFound)?;
        self.db_session.commit().await?;
        info!("Profile of {} updated", user.username);
        Ok(user.into())
    }
}

#[derive(Clone)]
pub struct GetProfilePageInteractor {
    user_reader: Arc<dyn UserReader>,
    post_reader: Arc<dyn PostReader>,
    follow_reader: Arc<dyn FollowReader>,
}

impl GetProfilePageInteractor {
    pub fn new(
        user_reader: Arc<dyn UserReader>,
        post_reader: Arc<dyn PostReader>,
        follow_reader: Arc<dyn FollowReader>,
    ) -> Self {
        Self {
            user_reader,
            post_reader,
            follow_reader,
        }
    }

    pub async fn execute(&self, dto: GetProfilePageDTO) -> AppResult<ProfilePageDTO> {
        let profile = find_profile(self.user_reader.as_ref(), &dto.username).await?;
        let posts = self.post_reader.find_by_author(&profile.user.id).await?;
        let liked_posts = self.post_reader.find_liked_by(&profile.user.id).await?;

        let viewer = match dto.viewer_clerk_id.as_deref() {
            Some(clerk_id) => self.user_reader.find_by_clerk_id(clerk_id).await?,
            None => None,
        };
        let is_own_profile = viewer
            .as_ref()
            .is_some_and(|viewer| profile::is_own_profile(viewer, &profile.user));
        let is_following = match viewer.as_ref() {
            Some(viewer) if !is_own_profile => self.is_following(viewer, &profile.user).await,
            _ => false,
        };
        let action = ProfileAction::resolve(viewer.as_ref(), &profile.user, is_following);

        let user = &profile.user;
        let tabs = vec![
            ProfileTabDTO {
                key: "posts".to_string(),
                label: "Posts".to_string(),
                empty_text: "No posts yet".to_string(),
                count: posts.len(),
            },
            ProfileTabDTO {
                key: "likes".to_string(),
                label: "Likes".to_string(),
                empty_text: "No liked posts to show".to_string(),
                count: liked_posts.len(),
            },
        ];

        Ok(ProfilePageDTO {
            display_name: profile::display_name(user).to_string(),
            avatar: profile::avatar(user).to_string(),
            joined: profile::joined_label(user.created_at),
            website_href: user.website.as_deref().map(profile::website_href),
            is_own_profile,
            is_following,
            action: action.as_str().to_string(),
            edit_form: EditProfileFormDTO {
                name: user.name.clone().unwrap_or_default(),
                bio: user.bio.clone().unwrap_or_default(),
                location: user.location.clone().unwrap_or_default(),
                website: user.website.clone().unwrap_or_default(),
            },
            default_tab: "posts".to_string(),
            tabs,
            posts: posts.into_iter().map(PostDTO::from).collect(),
            liked_posts: liked_posts.into_iter().map(PostDTO::from).collect(),
            user: profile.into(),
        })
    }

    async fn is_following(&self, viewer: &User, profile: &User) -> bool {
        match self.follow_reader.exists(&viewer.id, &profile.id).await {
            Ok(is_following) => is_following,
            Err(err) => {
                error!("Failed to check follow status: {}", err);
                false
            }
        }
    }
}
