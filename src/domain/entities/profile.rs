//! Presentation rules of the profile page.

use chrono::{DateTime, Utc};

use crate::domain::entities::user::User;

pub const DEFAULT_AVATAR: &str = "/avatar.png";

/// Primary button shown under the profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    SignIn,
    EditProfile,
    Follow,
    Unfollow,
}

impl ProfileAction {
    pub fn resolve(viewer: Option<&User>, profile: &User, is_following: bool) -> Self {
        match viewer {
            None => ProfileAction::SignIn,
            Some(viewer) if is_own_profile(viewer, profile) => ProfileAction::EditProfile,
            Some(_) if is_following => ProfileAction::Unfollow,
            Some(_) => ProfileAction::Follow,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileAction::SignIn => "sign_in",
            ProfileAction::EditProfile => "edit_profile",
            ProfileAction::Follow => "follow",
            ProfileAction::Unfollow => "unfollow",
        }
    }
}

/// Matches on username, or on the email local part for accounts that were
/// synced without a provider username.
pub fn is_own_profile(viewer: &User, profile: &User) -> bool {
    viewer.username == profile.username || viewer.email_local_part() == profile.username
}

pub fn display_name(user: &User) -> &str {
    user.name.as_deref().unwrap_or(&user.username)
}

pub fn avatar(user: &User) -> &str {
    user.image.as_deref().unwrap_or(DEFAULT_AVATAR)
}

pub fn joined_label(created_at: DateTime<Utc>) -> String {
    format!("Joined {}", created_at.format("%B %Y"))
}

pub fn website_href(website: &str) -> String {
    if website.starts_with("http") {
        website.to_string()
    } else {
        format!("https://{}", website)
    }
}
