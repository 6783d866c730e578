use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{self};
use axum::routing::{delete, get, patch, post};
use axum::{Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use uuid::Uuid;

use crate::adapter::http::docs::{docs_ui, openapi_json};
use crate::adapter::http::middleware::auth::{auth_middleware, optional_auth_middleware};
use crate::adapter::http::routes::notification::{get_notifications, mark_notifications_read};
use crate::adapter::http::routes::post::{create_comment, create_post, delete_post, toggle_like};
use crate::adapter::http::routes::profile::{
    get_profile, get_profile_page, get_user_liked_posts, get_user_posts, update_profile,
};
use crate::adapter::http::routes::user::{get_me, get_suggestions, is_following, sync_user, toggle_follow};
use crate::infra::config::AppConfig;
use crate::infra::state::AppState;

const ALLOWED_METHODS: [http::Method; 4] = [
    http::Method::POST,
    http::Method::GET,
    http::Method::PATCH,
    http::Method::DELETE,
];

fn build_cors(config: &AppConfig) -> CorsLayer {
    let has_wildcard = config.application.allow_origins.iter().any(|s| s == "*");

    if has_wildcard {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(ALLOWED_METHODS)
            .allow_headers([CONTENT_TYPE, AUTHORIZATION]);
    }
    let origins: Vec<http::HeaderValue> = config
        .application
        .allow_origins
        .iter()
        .filter_map(|s| {
            s.parse::<http::HeaderValue>()
                .map_err(|e| {
                    tracing::warn!("Failed to parse origin '{}': {}", s, e);
                })
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}

pub fn user_router(state: AppState) -> Router<AppState> {
    let optional_routes = Router::new()
        .route("/{user_id}/is-following", get(is_following))
        .route_layer(middleware::from_fn_with_state(state.clone(), optional_auth_middleware));

    let protected_routes = Router::new()
        .route("/sync", post(sync_user))
        .route("/me", get(get_me))
        .route("/suggestions", get(get_suggestions))
        .route("/{user_id}/follow", post(toggle_follow))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new().merge(optional_routes).merge(protected_routes)
}

pub fn profile_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/{username}", get(get_profile))
        .route("/{username}/posts", get(get_user_posts))
        .route("/{username}/likes", get(get_user_liked_posts));

    let optional_routes = Router::new()
        .route("/{username}/page", get(get_profile_page))
        .route_layer(middleware::from_fn_with_state(state.clone(), optional_auth_middleware));

    let protected_routes = Router::new()
        .route("/", patch(update_profile))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(optional_routes)
        .merge(protected_routes)
}

pub fn post_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_post))
        .route("/{post_id}", delete(delete_post))
        .route("/{post_id}/like", post(toggle_like))
        .route("/{post_id}/comments", post(create_comment))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

pub fn notification_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_notifications))
        .route("/read", post(mark_notifications_read))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/users", user_router(state.clone()))
        .nest("/profiles", profile_router(state.clone()))
        .nest("/posts", post_router(state.clone()))
        .nest("/notifications", notification_router(state))
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(docs_ui))
}

pub fn create_app(config: &AppConfig, state: AppState) -> Router {
    let cors = build_cors(config);
    Router::new()
        .merge(router(state.clone()))
        .with_state(state.clone())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &http::Request<_>| {
                    let request_id = Uuid::now_v7();
                    tracing::info_span!(
                        "http-request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        request_id = %request_id
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
