use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::identity::ActingUser;
use crate::features::links::dtos::{
    CreateLinkDto, LinkResponseDto, ListLinksQuery, UpdateLinkDto,
};
use crate::features::links::services::LinkService;
use crate::shared::types::{ApiResponse, IdQuery};

/// List visible links, optionally for one category
#[utoipa::path(
    get,
    path = "/api/links",
    params(ListLinksQuery),
    responses(
        (status = 200, description = "Envelope with the visible links", body = ApiResponse<Vec<LinkResponseDto>>),
    ),
    tag = "links",
    security(("identity_header" = []))
)]
pub async fn list_links(
    user: ActingUser,
    State(service): State<Arc<LinkService>>,
    AppQuery(params): AppQuery<ListLinksQuery>,
) -> Result<Json<ApiResponse<Vec<LinkResponseDto>>>> {
    let links = service.list(&user, &params).await?;
    Ok(Json(ApiResponse::success(Some(links))))
}

/// Create a link
///
/// The URL gets an `http://` prefix when it has no http(s) scheme.
#[utoipa::path(
    post,
    path = "/api/link",
    request_body = CreateLinkDto,
    responses(
        (status = 200, description = "Envelope with the created link", body = ApiResponse<LinkResponseDto>),
    ),
    tag = "links",
    security(("identity_header" = []))
)]
pub async fn create_link(
    user: ActingUser,
    State(service): State<Arc<LinkService>>,
    AppJson(dto): AppJson<CreateLinkDto>,
) -> Result<Json<ApiResponse<LinkResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let link = service.create(&user, dto).await?;
    Ok(Json(ApiResponse::success(Some(link))))
}

/// Update a link
#[utoipa::path(
    put,
    path = "/api/link",
    request_body = UpdateLinkDto,
    responses(
        (status = 200, description = "Envelope with null data; code 1 with \"Permission denied\" when not allowed"),
    ),
    tag = "links",
    security(("identity_header" = []))
)]
pub async fn update_link(
    user: ActingUser,
    State(service): State<Arc<LinkService>>,
    AppJson(dto): AppJson<UpdateLinkDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    service.update(&user, dto).await?;
    Ok(Json(ApiResponse::success(None)))
}

/// Delete a link
#[utoipa::path(
    delete,
    path = "/api/link",
    params(IdQuery),
    responses(
        (status = 200, description = "Envelope with null data; code 1 with \"Permission denied\" when not allowed"),
    ),
    tag = "links",
    security(("identity_header" = []))
)]
pub async fn delete_link(
    user: ActingUser,
    State(service): State<Arc<LinkService>>,
    AppQuery(query): AppQuery<IdQuery>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&user, query.id).await?;
    Ok(Json(ApiResponse::success(None)))
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{test_server, user, IDENTITY_HEADER};

    #[tokio::test]
    async fn test_create_link_over_http() {
        let server = test_server().await;

        let body: Value = server
            .post("/api/link")
            .add_header(IDENTITY_HEADER, user("alice"))
            .json(&json!({
                "title": "Example",
                "url": "example.com",
                "description": "a site",
                "category_id": 5,
                "is_public": true,
                "sort_order": 1
            }))
            .await
            .json();

        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["url"], "http://example.com");
        assert_eq!(body["data"]["owner"], "alice");
        assert_eq!(body["data"]["is_public"], false);
        assert_eq!(body["data"]["category_id"], 5);
        assert!(body["data"]["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_list_links_category_filter() {
        let server = test_server().await;

        for (url, category) in [("a.example", 5), ("b.example", 6)] {
            server
                .post("/api/link")
                .add_header(IDENTITY_HEADER, user("alice"))
                .json(&json!({"title": url, "url": url, "category_id": category}))
                .await;
        }

        let body: Value = server
            .get("/api/links")
            .add_query_param("category_id", 5)
            .add_header(IDENTITY_HEADER, user("alice"))
            .await
            .json();
        let links = body["data"].as_array().unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0]["url"], "http://a.example");

        // an empty filter means no filter
        let body: Value = server
            .get("/api/links")
            .add_query_param("category_id", "")
            .add_header(IDENTITY_HEADER, user("alice"))
            .await
            .json();
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let body: Value = server
            .get("/api/links")
            .add_query_param("category_id", "five")
            .add_header(IDENTITY_HEADER, user("alice"))
            .await
            .json();
        assert_eq!(body["code"], 1);
        assert_eq!(body["message"], "Invalid ID");
    }

    #[tokio::test]
    async fn test_deleting_category_removes_its_links() {
        let server = test_server().await;

        let category: Value = server
            .post("/api/category")
            .add_header(IDENTITY_HEADER, user("alice"))
            .json(&json!({"name": "Doomed"}))
            .await
            .json();
        let category_id = category["data"]["id"].as_i64().unwrap();

        for url in ["one.example", "two.example"] {
            server
                .post("/api/link")
                .add_header(IDENTITY_HEADER, user("alice"))
                .json(&json!({"title": url, "url": url, "category_id": category_id}))
                .await;
        }

        let body: Value = server
            .delete("/api/category")
            .add_query_param("id", category_id)
            .add_header(IDENTITY_HEADER, user("alice"))
            .await
            .json();
        assert_eq!(body["code"], 0);

        let links: Value = server
            .get("/api/links")
            .add_header(IDENTITY_HEADER, user("alice"))
            .await
            .json();
        assert_eq!(links["data"], json!([]));

        let categories: Value = server
            .get("/api/categories")
            .add_header(IDENTITY_HEADER, user("alice"))
            .await
            .json();
        assert_eq!(categories["data"], json!([]));
    }

    #[tokio::test]
    async fn test_admin_may_edit_foreign_link() {
        let server = test_server().await;

        let created: Value = server
            .post("/api/link")
            .add_header(IDENTITY_HEADER, user("alice"))
            .json(&json!({"title": "t", "url": "https://example.com"}))
            .await
            .json();
        let id = created["data"]["id"].as_i64().unwrap();

        let denied: Value = server
            .put("/api/link")
            .add_header(IDENTITY_HEADER, user("bob"))
            .json(&json!({"id": id, "title": "x", "url": "x.example"}))
            .await
            .json();
        assert_eq!(denied["message"], "Permission denied");

        let allowed: Value = server
            .put("/api/link")
            .add_header(IDENTITY_HEADER, user("admin"))
            .json(&json!({"id": id, "title": "fixed", "url": "fixed.example"}))
            .await
            .json();
        assert_eq!(allowed["code"], 0);

        let listed: Value = server
            .get("/api/links")
            .add_header(IDENTITY_HEADER, user("alice"))
            .await
            .json();
        assert_eq!(listed["data"][0]["url"], "http://fixed.example");
        assert_eq!(listed["data"][0]["owner"], "alice");
    }

    #[tokio::test]
    async fn test_link_routes_reject_other_methods() {
        let server = test_server().await;

        let body: Value = server.delete("/api/links").await.json();
        assert_eq!(body, json!({"code": 1, "message": "Method not allowed", "data": null}));

        let body: Value = server.patch("/api/link").await.json();
        assert_eq!(body["message"], "Method not allowed");
    }
}
