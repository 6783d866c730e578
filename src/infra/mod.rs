use std::sync::Arc;

use tracing::info;

use crate::adapter::identity::clerk::ClerkIdentityProvider;
use crate::adapter::identity::local::LocalIdentityProvider;
use crate::adapter::identity::token::SessionTokenVerifier;
use crate::application::interface::identity::IdentityProvider;
use crate::infra::config::{AppConfig, IdentityConfig};
use crate::infra::db::{init_db, run_migrations};
use crate::infra::state::AppState;

pub mod app;
pub mod config;
pub mod db;
pub mod setup;
pub mod state;

fn identity_provider(config: &IdentityConfig) -> anyhow::Result<Arc<dyn IdentityProvider>> {
    let verifier =
        SessionTokenVerifier::new(&config.jwt_secret, &config.issuer)?.with_leeway(config.clock_skew_secs);
    let provider: Arc<dyn IdentityProvider> = match config.provider.as_str() {
        "clerk" => Arc::new(ClerkIdentityProvider::new(verifier, config)),
        "local" => Arc::new(LocalIdentityProvider::new(verifier)),
        other => anyhow::bail!("Unknown identity provider `{}`", other),
    };
    info!("Using `{}` identity provider", config.provider);
    Ok(provider)
}

pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db(config).await?;
    run_migrations(&pool).await?;
    let identity = identity_provider(&config.identity)?;

    Ok(AppState {
        pool,
        identity,
        config: Arc::new(config.clone()),
    })
}
