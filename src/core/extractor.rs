use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::features::identity::ActingUser;

/// JSON extractor whose failures come back as an envelope instead of a 4xx
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        match self.0 {
            JsonRejection::JsonDataError(err) => tracing::debug!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => tracing::debug!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                tracing::debug!("Missing JSON content type: {}", err)
            }
            other => tracing::debug!("Failed to parse JSON body: {}", other),
        }

        AppError::InvalidInput("Invalid JSON".to_string()).into_response()
    }
}

/// Query extractor for the id-style parameters used by the API.
///
/// Every query parameter the API accepts is a numeric id, so a parse failure
/// is reported as "Invalid ID".
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| {
                tracing::debug!("Invalid query string: {}", rejection);
                AppError::InvalidInput("Invalid ID".to_string())
            })
    }
}

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ActingUser>()
            .cloned()
            .ok_or_else(|| AppError::Internal("Acting user was not resolved".to_string()))
    }
}
