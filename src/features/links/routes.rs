use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::error::method_not_allowed;
use crate::features::links::handlers;
use crate::features::links::services::LinkService;

/// Create routes for the links feature
pub fn routes(service: Arc<LinkService>) -> Router {
    Router::new()
        .route(
            "/api/links",
            get(handlers::list_links).fallback(method_not_allowed),
        )
        .route(
            "/api/link",
            post(handlers::create_link)
                .put(handlers::update_link)
                .delete(handlers::delete_link)
                .fallback(method_not_allowed),
        )
        .with_state(service)
}
