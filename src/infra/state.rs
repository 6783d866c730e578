use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::PgPool;

use crate::adapter::db::gateway::comment::CommentGateway;
use crate::adapter::db::gateway::follow::FollowGateway;
use crate::adapter::db::gateway::like::LikeGateway;
use crate::adapter::db::gateway::notification::NotificationGateway;
use crate::adapter::db::gateway::post::PostGateway;
use crate::adapter::db::gateway::user::UserGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::notifications::{GetNotificationsInteractor, MarkNotificationsReadInteractor};
use crate::application::interactors::posts::{
    CreateCommentInteractor, CreatePostInteractor, DeletePostInteractor, ToggleLikeInteractor,
};
use crate::application::interactors::profile::{
    GetProfileInteractor, GetProfilePageInteractor, GetUserLikedPostsInteractor, GetUserPostsInteractor,
    UpdateProfileInteractor,
};
use crate::application::interactors::users::{
    GetMeInteractor, GetRandomUsersInteractor, IsFollowingInteractor, SyncUserInteractor, ToggleFollowInteractor,
};
use crate::application::interface::identity::IdentityProvider;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub identity: Arc<dyn IdentityProvider>,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<dyn IdentityProvider> {
    fn from_ref(state: &AppState) -> Self {
        state.identity.clone()
    }
}

#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

/// Lets handlers take an interactor as an argument; each request gets its own lazy session.
macro_rules! interactor_from_request_parts {
    ($($interactor:ty),+ $(,)?) => {
        $(
            impl<S> FromRequestParts<S> for $interactor
            where
                S: Send + Sync,
                AppState: FromRef<S>,
            {
                type Rejection = AppError;

                async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
                    let app_state = AppState::from_ref(state);
                    <$interactor>::from_app_state(&app_state).await
                }
            }
        )+
    };
}

interactor_from_request_parts!(
    SyncUserInteractor,
    GetMeInteractor,
    GetRandomUsersInteractor,
    ToggleFollowInteractor,
    IsFollowingInteractor,
    GetProfileInteractor,
    GetUserPostsInteractor,
    GetUserLikedPostsInteractor,
    UpdateProfileInteractor,
    GetProfilePageInteractor,
    CreatePostInteractor,
    DeletePostInteractor,
    ToggleLikeInteractor,
    CreateCommentInteractor,
    GetNotificationsInteractor,
    MarkNotificationsReadInteractor,
);

// SyncUserInteractor
#[async_trait]
impl FromAppState for SyncUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session.clone()));

        Ok(SyncUserInteractor::new(
            Arc::new(session),
            user_gateway.clone(),
            user_gateway,
            state.identity.clone(),
        ))
    }
}

// GetMeInteractor
#[async_trait]
impl FromAppState for GetMeInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        Ok(GetMeInteractor::new(Arc::new(UserGateway::new(session))))
    }
}

// GetRandomUsersInteractor
#[async_trait]
impl FromAppState for GetRandomUsersInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        Ok(GetRandomUsersInteractor::new(Arc::new(UserGateway::new(session))))
    }
}

// ToggleFollowInteractor
#[async_trait]
impl FromAppState for ToggleFollowInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let follow_gateway = Arc::new(FollowGateway::new(session.clone()));

        Ok(ToggleFollowInteractor::new(
            Arc::new(session.clone()),
            Arc::new(UserGateway::new(session.clone())),
            follow_gateway.clone(),
            follow_gateway,
            Arc::new(NotificationGateway::new(session)),
        ))
    }
}

// IsFollowingInteractor
#[async_trait]
impl FromAppState for IsFollowingInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());

        Ok(IsFollowingInteractor::new(
            Arc::new(UserGateway::new(session.clone())),
            Arc::new(FollowGateway::new(session)),
        ))
    }
}

// GetProfileInteractor
#[async_trait]
impl FromAppState for GetProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        Ok(GetProfileInteractor::new(Arc::new(UserGateway::new(session))))
    }
}

// GetUserPostsInteractor
#[async_trait]
impl FromAppState for GetUserPostsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());

        Ok(GetUserPostsInteractor::new(
            Arc::new(UserGateway::new(session.clone())),
            Arc::new(PostGateway::new(session)),
        ))
    }
}

// GetUserLikedPostsInteractor
#[async_trait]
impl FromAppState for GetUserLikedPostsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());

        Ok(GetUserLikedPostsInteractor::new(
            Arc::new(UserGateway::new(session.clone())),
            Arc::new(PostGateway::new(session)),
        ))
    }
}

// UpdateProfileInteractor
#[async_trait]
impl FromAppState for UpdateProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session.clone()));

        Ok(UpdateProfileInteractor::new(
            Arc::new(session),
            user_gateway.clone(),
            user_gateway,
        ))
    }
}

// GetProfilePageInteractor
#[async_trait]
impl FromAppState for GetProfilePageInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());

        Ok(GetProfilePageInteractor::new(
            Arc::new(UserGateway::new(session.clone())),
            Arc::new(PostGateway::new(session.clone())),
            Arc::new(FollowGateway::new(session)),
        ))
    }
}

// CreatePostInteractor
#[async_trait]
impl FromAppState for CreatePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());

        Ok(CreatePostInteractor::new(
            Arc::new(session.clone()),
            Arc::new(UserGateway::new(session.clone())),
            Arc::new(PostGateway::new(session)),
        ))
    }
}

// DeletePostInteractor
#[async_trait]
impl FromAppState for DeletePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = Arc::new(PostGateway::new(session.clone()));

        Ok(DeletePostInteractor::new(
            Arc::new(session.clone()),
            Arc::new(UserGateway::new(session)),
            post_gateway.clone(),
            post_gateway,
        ))
    }
}

// ToggleLikeInteractor
#[async_trait]
impl FromAppState for ToggleLikeInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let like_gateway = Arc::new(LikeGateway::new(session.clone()));

        Ok(ToggleLikeInteractor::new(
            Arc::new(session.clone()),
            Arc::new(UserGateway::new(session.clone())),
            Arc::new(PostGateway::new(session.clone())),
            like_gateway.clone(),
            like_gateway,
            Arc::new(NotificationGateway::new(session)),
        ))
    }
}

// CreateCommentInteractor
#[async_trait]
impl FromAppState for CreateCommentInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());

        Ok(CreateCommentInteractor::new(
            Arc::new(session.clone()),
            Arc::new(UserGateway::new(session.clone())),
            Arc::new(PostGateway::new(session.clone())),
            Arc::new(CommentGateway::new(session.clone())),
            Arc::new(NotificationGateway::new(session)),
        ))
    }
}

// GetNotificationsInteractor
#[async_trait]
impl FromAppState for GetNotificationsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());

        Ok(GetNotificationsInteractor::new(
            Arc::new(UserGateway::new(session.clone())),
            Arc::new(NotificationGateway::new(session)),
        ))
    }
}

// MarkNotificationsReadInteractor
#[async_trait]
impl FromAppState for MarkNotificationsReadInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());

        Ok(MarkNotificationsReadInteractor::new(
            Arc::new(session.clone()),
            Arc::new(UserGateway::new(session.clone())),
            Arc::new(NotificationGateway::new(session)),
        ))
    }
}
