use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::error::method_not_allowed;
use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/categories",
            get(handlers::list_categories).fallback(method_not_allowed),
        )
        .route(
            "/api/category",
            post(handlers::create_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category)
                .fallback(method_not_allowed),
        )
        .with_state(service)
}
