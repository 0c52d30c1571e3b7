use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::features::identity::ActingUser;
use crate::features::landing::page::LandingPage;

pub async fn index(user: ActingUser, State(page): State<Arc<LandingPage>>) -> Response {
    tracing::info!("User {} accessing index", user.user);

    match page.render(&user) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render landing page: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::{test_server, user, IDENTITY_HEADER};

    #[tokio::test]
    async fn test_index_shows_acting_user() {
        let server = test_server().await;

        let response = server
            .get("/")
            .add_header(IDENTITY_HEADER, user("admin"))
            .await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<strong>admin</strong>"));
        assert!(html.contains("class=\"badge\""));
    }

    #[tokio::test]
    async fn test_index_defaults_to_configured_user() {
        let server = test_server().await;

        let html = server.get("/").await.text();
        assert!(html.contains("<strong>guest</strong>"));
    }
}
