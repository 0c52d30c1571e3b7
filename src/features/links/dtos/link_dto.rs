use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::links::models::Link;
use crate::shared::validation::empty_string_as_none;

// Query params for listing links
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListLinksQuery {
    /// Only return links filed under this category
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category_id: Option<i64>,
}

// Create request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLinkDto {
    #[serde(default)]
    pub title: String,

    /// Stored with an `http://` prefix unless it already has an http(s) scheme
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category_id: Option<i64>,

    /// Ignored unless the acting user is admin
    #[serde(default)]
    pub is_public: bool,

    #[serde(default, alias = "sort_num")]
    pub sort_order: i32,
}

// Update request; owner, visibility and creation time are not updatable
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLinkDto {
    pub id: i64,

    #[serde(default)]
    pub title: String,

    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category_id: Option<i64>,

    #[serde(default, alias = "sort_num")]
    pub sort_order: i32,
}

// Response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LinkResponseDto {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub owner: String,
    pub is_public: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponseDto {
    fn from(l: Link) -> Self {
        Self {
            id: l.id,
            title: l.title,
            url: l.url,
            description: l.description,
            category_id: l.category_id,
            owner: l.owner,
            is_public: l.is_public,
            sort_order: l.sort_order,
            created_at: l.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let dto: CreateLinkDto = serde_json::from_str(r#"{"url": "example.com"}"#).unwrap();
        assert_eq!(dto.title, "");
        assert_eq!(dto.description, None);
        assert_eq!(dto.category_id, None);
        assert!(!dto.is_public);
        assert_eq!(dto.sort_order, 0);
    }

    #[test]
    fn test_create_rejects_empty_url() {
        let dto: CreateLinkDto =
            serde_json::from_str(r#"{"title": "x", "url": ""}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_null_category_is_none() {
        let dto: CreateLinkDto =
            serde_json::from_str(r#"{"url": "a.b", "category_id": null, "sort_num": 3}"#).unwrap();
        assert_eq!(dto.category_id, None);
        assert_eq!(dto.sort_order, 3);
    }
}
