use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::landing::{handlers, LandingPage};

pub fn routes(page: Arc<LandingPage>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .with_state(page)
}
