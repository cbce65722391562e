pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::{admin_service::AdminService, user_service::UserService};
use crate::store::users::UserStore;

#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
    pub user_service: UserService,
    pub admin_service: AdminService,
}

impl AppState {
    pub fn new() -> Self {
        let store = UserStore::new();
        let user_service = UserService::new(store.clone());
        let admin_service = AdminService::new(store.clone());

        Self {
            store,
            user_service,
            admin_service,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Assembles the full application router. Tests drive exactly this router,
/// so the middleware gates are exercised end to end.
pub fn build_router(state: AppState) -> Router {
    let public_api = Router::new()
        .route("/signup", post(routes::auth_routes::signup))
        .route("/signin", post(routes::auth_routes::signin));

    let profile_api = Router::new()
        .route(
            "/me",
            get(routes::profile_routes::get_me).put(routes::profile_routes::update_me),
        )
        .route("/upload_resume", post(routes::profile_routes::upload_resume))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::auth::require_user,
        ));

    let admin_api = Router::new()
        .route("/admin/check", get(routes::admin_routes::admin_check))
        .route("/admin/users", get(routes::admin_routes::list_users))
        .route("/admin/block/:email", post(routes::admin_routes::block_user))
        .route(
            "/admin/unblock/:email",
            post(routes::admin_routes::unblock_user),
        )
        .route(
            "/admin/remove/:email",
            delete(routes::admin_routes::remove_user),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::auth::require_admin,
        ));

    Router::new()
        .route("/health", get(routes::health::health))
        .merge(public_api)
        .merge(profile_api)
        .merge(admin_api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
}
