use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{
    adapter::http::middleware::extractor::AuthUser,
    application::{
        app_error::{AppError, AppResult},
        interface::identity::IdentityProvider,
    },
};

/// Rejects the request unless it carries a valid session token.
pub async fn auth_middleware(
    State(identity_provider): State<Arc<dyn IdentityProvider>>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let token = extract_bearer_token(&request).ok_or(AppError::Unauthorized)?;
    let identity = identity_provider.verify_token(token)?;
    request.extensions_mut().insert(AuthUser {
        clerk_id: identity.user_id.clone(),
        identity,
    });

    Ok(next.run(request).await)
}

/// Attaches the identity when a valid token is present; anonymous otherwise.
pub async fn optional_auth_middleware(
    State(identity_provider): State<Arc<dyn IdentityProvider>>,
    mut request: Request,
    next: Next,
) -> Response {
    let verified = extract_bearer_token(&request).map(|token| identity_provider.verify_token(token));
    match verified {
        Some(Ok(identity)) => {
            request.extensions_mut().insert(AuthUser {
                clerk_id: identity.user_id.clone(),
                identity,
            });
        }
        Some(Err(err)) => debug!("Ignoring invalid session token: {}", err),
        None => {}
    }

    next.run(request).await
}

fn extract_bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
