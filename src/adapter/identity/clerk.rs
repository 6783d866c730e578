use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::warn;

use crate::adapter::identity::token::{SessionTokenVerifier, identity_from_claims};
use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::identity::{ExternalUser, IdentityProvider, VerifiedIdentity};
use crate::infra::config::IdentityConfig;

#[derive(Debug, Deserialize)]
struct ClerkEmailAddress {
    email_address: String,
}

#[derive(Debug, Deserialize)]
struct ClerkUserResponse {
    id: String,
    first_name: Option<String>,
    last_name: Option<String>,
    username: Option<String>,
    #[serde(default)]
    email_addresses: Vec<ClerkEmailAddress>,
    image_url: Option<String>,
}

impl From<ClerkUserResponse> for ExternalUser {
    fn from(user: ClerkUserResponse) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            email_addresses: user.email_addresses.into_iter().map(|e| e.email_address).collect(),
            image_url: user.image_url,
        }
    }
}

/// Verifies session tokens locally and loads users from the Clerk backend API.
#[derive(Clone)]
pub struct ClerkIdentityProvider {
    verifier: SessionTokenVerifier,
    client: reqwest::Client,
    api_url: String,
    secret_key: String,
}

impl ClerkIdentityProvider {
    pub fn new(verifier: SessionTokenVerifier, config: &IdentityConfig) -> Self {
        Self {
            verifier,
            client: reqwest::Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            secret_key: config.secret_key.clone(),
        }
    }
}

#[async_trait]
impl IdentityProvider for ClerkIdentityProvider {
    fn verify_token(&self, token: &str) -> AppResult<VerifiedIdentity> {
        let claims = self.verifier.verify(token)?;
        identity_from_claims(&claims)
    }

    async fn current_user(&self, identity: &VerifiedIdentity) -> AppResult<Option<ExternalUser>> {
        let response = self
            .client
            .get(format!("{}/users/{}", self.api_url, identity.user_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| AppError::IdentityProviderError(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            warn!("Identity provider has no user {}", identity.user_id);
            return Ok(None);
        }

        let user = response
            .error_for_status()
            .map_err(|e| AppError::IdentityProviderError(e.to_string()))?
            .json::<ClerkUserResponse>()
            .await
            .map_err(|e| AppError::IdentityProviderError(e.to_string()))?;

        Ok(Some(user.into()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use crate::adapter::identity::clerk::ClerkUserResponse;
    use crate::application::interface::identity::ExternalUser;

    #[rstest]
    fn test_user_response_into_external_user() {
        let body = json!({
            "id": "user_2abc",
            "first_name": "Jane",
            "last_name": null,
            "username": null,
            "email_addresses": [
                { "id": "idn_1", "email_address": "jane@example.com" },
                { "id": "idn_2", "email_address": "jane@work.example" }
            ],
            "image_url": "https://img.clerk.com/jane",
            "public_metadata": {}
        });

        let user: ExternalUser = serde_json::from_value::<ClerkUserResponse>(body).unwrap().into();
        assert_eq!(user.id, "user_2abc");
        assert_eq!(user.full_name(), "Jane");
        assert_eq!(user.primary_email(), Some("jane@example.com"));
        assert_eq!(user.preferred_username().as_deref(), Some("jane"));
        assert_eq!(user.image_url.as_deref(), Some("https://img.clerk.com/jane"));
    }

    #[rstest]
    fn test_user_response_without_emails() {
        let body = json!({ "id": "user_2abc", "first_name": null, "last_name": null, "username": "jd", "image_url": null });
        let user: ExternalUser = serde_json::from_value::<ClerkUserResponse>(body).unwrap().into();
        assert!(user.email_addresses.is_empty());
        assert_eq!(user.preferred_username().as_deref(), Some("jd"));
    }
}
