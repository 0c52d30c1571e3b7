use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;

use crate::core::config::IdentityConfig;
use crate::core::middleware;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::landing::{routes as landing_routes, LandingPage};
use crate::features::links::{routes as links_routes, LinkService};

/// Everything the request handlers depend on, wired once at startup
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub link_service: Arc<LinkService>,
    pub identity: Arc<IdentityConfig>,
    pub landing_page: Arc<LandingPage>,
}

impl AppState {
    pub fn new(pool: SqlitePool, identity: IdentityConfig, landing_page: LandingPage) -> Self {
        Self {
            category_service: Arc::new(CategoryService::new(pool.clone())),
            link_service: Arc::new(LinkService::new(pool)),
            identity: Arc::new(identity),
            landing_page: Arc::new(landing_page),
        }
    }
}

/// Application routes with the acting user resolved for every request
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(categories_routes::routes(state.category_service))
        .merge(links_routes::routes(state.link_service))
        .merge(landing_routes::routes(state.landing_page))
        .layer(axum::middleware::from_fn_with_state(
            state.identity,
            middleware::identity_middleware,
        ))
}
