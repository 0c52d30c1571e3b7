#[cfg(test)]
use crate::features::identity::ActingUser;

#[cfg(test)]
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// In-memory database with the schema applied.
///
/// Every connection to `sqlite::memory:` opens a fresh database, so the pool
/// is pinned to a single connection that never expires.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool");

    crate::core::database::init_schema(&pool)
        .await
        .expect("schema bootstrap");

    pool
}

#[cfg(test)]
pub fn acting(user: &str) -> ActingUser {
    ActingUser::new(user)
}

/// Full application router over a fresh in-memory database.
#[cfg(test)]
pub async fn test_server() -> axum_test::TestServer {
    use crate::core::config::IdentityConfig;
    use crate::features::landing::LandingPage;

    let state = crate::app::AppState::new(
        test_pool().await,
        IdentityConfig {
            header: IDENTITY_HEADER.as_str().to_string(),
            default_user: "guest".to_string(),
        },
        LandingPage::new().expect("landing template"),
    );

    axum_test::TestServer::new(crate::app::router(state)).expect("test server")
}

#[cfg(test)]
pub const IDENTITY_HEADER: axum::http::HeaderName =
    axum::http::HeaderName::from_static("x-forwarded-user");

/// Identity header value for `TestRequest::add_header`
#[cfg(test)]
pub fn user(name: &'static str) -> axum::http::HeaderValue {
    axum::http::HeaderValue::from_static(name)
}
