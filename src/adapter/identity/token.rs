use std::collections::BTreeMap;

use chrono::{Duration, TimeZone, Utc};
use hmac::{Hmac, Mac};
use jwt::{Claims, Header, RegisteredClaims, SignWithKey, Token, VerifyWithKey};
use serde_json::Value;
use sha2::Sha256;
use tracing::debug;

use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::identity::VerifiedIdentity;

pub const DEFAULT_LEEWAY_SECS: u64 = 5;
const MAX_LEEWAY_SECS: u64 = 300;

/// HS256 session tokens shared with the identity provider.
#[derive(Clone)]
pub struct SessionTokenVerifier {
    key: Hmac<Sha256>,
    issuer: String,
    leeway: Duration,
}

impl SessionTokenVerifier {
    pub fn new(secret: &str, issuer: &str) -> AppResult<Self> {
        let key = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .map_err(|e| AppError::IdentityProviderError(format!("Invalid token secret: {}", e)))?;
        Ok(Self {
            key,
            issuer: issuer.to_string(),
            leeway: Duration::seconds(DEFAULT_LEEWAY_SECS as i64),
        })
    }

    /// Clock skew tolerated between this host and the token issuer.
    pub fn with_leeway(mut self, secs: u64) -> Self {
        self.leeway = Duration::seconds(secs.min(MAX_LEEWAY_SECS) as i64);
        self
    }

    /// Checks signature, issuer and the `iat`/`nbf`/`exp` window, allowing for clock skew.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let token: Token<Header, Claims, _> = token.verify_with_key(&self.key).map_err(|e| {
            debug!("Token signature rejected: {}", e);
            AppError::InvalidToken
        })?;
        let claims = token.claims();
        let now = Utc::now();

        if claims.registered.issuer.as_deref() != Some(self.issuer.as_str()) {
            return Err(AppError::InvalidToken);
        }

        let iat = claims
            .registered
            .issued_at
            .and_then(|x| Utc.timestamp_opt(x as i64, 0).single())
            .ok_or(AppError::InvalidToken)?;
        if iat > now + self.leeway {
            return Err(AppError::InvalidToken);
        }

        let nbf = claims
            .registered
            .not_before
            .and_then(|x| Utc.timestamp_opt(x as i64, 0).single());
        if nbf.is_some_and(|nbf| nbf > now + self.leeway) {
            return Err(AppError::InvalidToken);
        }

        let exp = claims
            .registered
            .expiration
            .and_then(|x| Utc.timestamp_opt(x as i64, 0).single())
            .ok_or(AppError::InvalidToken)?;
        if exp + self.leeway < now {
            return Err(AppError::InvalidToken);
        }

        Ok(claims.clone())
    }

    pub fn sign(&self, subject: &str, ttl_secs: u64, private: BTreeMap<String, Value>) -> AppResult<String> {
        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            registered: RegisteredClaims {
                issuer: Some(self.issuer.clone()),
                subject: Some(subject.to_string()),
                issued_at: Some(now),
                expiration: Some(now + ttl_secs),
                ..Default::default()
            },
            private,
        };
        claims
            .sign_with_key(&self.key)
            .map_err(|e| AppError::IdentityProviderError(format!("Failed to sign token: {}", e)))
    }
}

/// `sub` is the provider user id, `sid` (or `jti`) the provider session.
pub fn identity_from_claims(claims: &Claims) -> AppResult<VerifiedIdentity> {
    let user_id = claims
        .registered
        .subject
        .clone()
        .filter(|sub| !sub.is_empty())
        .ok_or(AppError::InvalidToken)?;
    let session_id = claims
        .private
        .get("sid")
        .and_then(Value::as_str)
        .map(String::from)
        .or_else(|| claims.registered.json_web_token_id.clone());

    Ok(VerifiedIdentity {
        user_id,
        session_id,
        profile: None,
    })
}
