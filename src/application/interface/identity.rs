use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::user::email_local_part;

/// A user as the identity provider knows it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalUser {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email_addresses: Vec<String>,
    pub image_url: Option<String>,
}

impl ExternalUser {
    /// First and last name joined without a separator; missing parts count as `""`.
    pub fn full_name(&self) -> String {
        format!(
            "{}{}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
    }

    pub fn primary_email(&self) -> Option<&str> {
        self.email_addresses.first().map(String::as_str)
    }

    pub fn preferred_username(&self) -> Option<String> {
        self.username
            .clone()
            .filter(|u| !u.is_empty())
            .or_else(|| self.primary_email().map(|email| email_local_part(email).to_string()))
    }
}

/// Identity extracted from a verified session token.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    pub user_id: String,
    pub session_id: Option<String>,
    /// Filled when the token itself carries the user profile.
    pub profile: Option<ExternalUser>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn verify_token(&self, token: &str) -> AppResult<VerifiedIdentity>;
    async fn current_user(&self, identity: &VerifiedIdentity) -> AppResult<Option<ExternalUser>>;
}
