use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::features::identity::ActingUser;
use crate::shared::types::{ApiResponse, IdQuery};

/// List visible categories
///
/// Returns the caller's own categories plus every public one, ordered by
/// `sort_order` then name.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Envelope with the visible categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories",
    security(("identity_header" = []))
)]
pub async fn list_categories(
    user: ActingUser,
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list(&user).await?;
    Ok(Json(ApiResponse::success(Some(categories))))
}

/// Create a category
///
/// The owner is the caller. `is_public` is honoured for admin only.
#[utoipa::path(
    post,
    path = "/api/category",
    request_body = CreateCategoryDto,
    responses(
        (status = 200, description = "Envelope with the created category", body = ApiResponse<CategoryResponseDto>),
    ),
    tag = "categories",
    security(("identity_header" = []))
)]
pub async fn create_category(
    user: ActingUser,
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let category = service.create(&user, dto).await?;
    Ok(Json(ApiResponse::success(Some(category))))
}

/// Update a category's name and sort order
#[utoipa::path(
    put,
    path = "/api/category",
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Envelope with null data; code 1 with \"Permission denied\" when not allowed"),
    ),
    tag = "categories",
    security(("identity_header" = []))
)]
pub async fn update_category(
    user: ActingUser,
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    service.update(&user, dto).await?;
    Ok(Json(ApiResponse::success(None)))
}

/// Delete a category and every link filed under it
#[utoipa::path(
    delete,
    path = "/api/category",
    params(IdQuery),
    responses(
        (status = 200, description = "Envelope with null data; code 1 with \"Permission denied\" when not allowed"),
    ),
    tag = "categories",
    security(("identity_header" = []))
)]
pub async fn delete_category(
    user: ActingUser,
    State(service): State<Arc<CategoryService>>,
    AppQuery(query): AppQuery<IdQuery>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&user, query.id).await?;
    Ok(Json(ApiResponse::success(None)))
}
