use async_trait::async_trait;
use jwt::Claims;
use serde_json::Value;

use crate::adapter::identity::token::{SessionTokenVerifier, identity_from_claims};
use crate::application::app_error::AppResult;
use crate::application::interface::identity::{ExternalUser, IdentityProvider, VerifiedIdentity};

/// Development provider: the session token carries the whole user profile,
/// so no call to the provider API is made.
#[derive(Clone)]
pub struct LocalIdentityProvider {
    verifier: SessionTokenVerifier,
}

impl LocalIdentityProvider {
    pub fn new(verifier: SessionTokenVerifier) -> Self {
        Self { verifier }
    }

    fn profile_from_claims(user_id: &str, claims: &Claims) -> ExternalUser {
        let claim = |name: &str| {
            claims
                .private
                .get(name)
                .and_then(Value::as_str)
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        ExternalUser {
            id: user_id.to_string(),
            first_name: claim("first_name"),
            last_name: claim("last_name"),
            username: claim("username"),
            email_addresses: claim("email").into_iter().collect(),
            image_url: claim("image_url"),
        }
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    fn verify_token(&self, token: &str) -> AppResult<VerifiedIdentity> {
        let claims = self.verifier.verify(token)?;
        let mut identity = identity_from_claims(&claims)?;
        identity.profile = Some(Self::profile_from_claims(&identity.user_id, &claims));
        Ok(identity)
    }

    async fn current_user(&self, identity: &VerifiedIdentity) -> AppResult<Option<ExternalUser>> {
        Ok(identity
            .profile
            .clone()
            .filter(|profile| !profile.email_addresses.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rstest::{fixture, rstest};
    use serde_json::json;

    use crate::adapter::identity::local::LocalIdentityProvider;
    use crate::adapter::identity::token::SessionTokenVerifier;
    use crate::application::interface::identity::IdentityProvider;

    #[fixture]
    fn verifier() -> SessionTokenVerifier {
        SessionTokenVerifier::new("local-secret", "pulse-local").unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn test_profile_from_token(verifier: SessionTokenVerifier) {
        let private = BTreeMap::from([
            ("first_name".to_string(), json!("Jane")),
            ("last_name".to_string(), json!("Doe")),
            ("email".to_string(), json!("jane@example.com")),
            ("image_url".to_string(), json!("")),
        ]);
        let token = verifier.sign("user_local_1", 60, private).unwrap();
        let provider = LocalIdentityProvider::new(verifier);

        let identity = provider.verify_token(&token).unwrap();
        let user = provider.current_user(&identity).await.unwrap().unwrap();

        assert_eq!(user.id, "user_local_1");
        assert_eq!(user.full_name(), "JaneDoe");
        assert_eq!(user.primary_email(), Some("jane@example.com"));
        assert!(user.username.is_none());
        assert!(user.image_url.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn test_token_without_email_has_no_user(verifier: SessionTokenVerifier) {
        let token = verifier.sign("user_local_2", 60, BTreeMap::new()).unwrap();
        let provider = LocalIdentityProvider::new(verifier);

        let identity = provider.verify_token(&token).unwrap();
        assert!(provider.current_user(&identity).await.unwrap().is_none());
    }
}
