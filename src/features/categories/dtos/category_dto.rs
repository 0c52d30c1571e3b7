use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;

/// Create request. The owner is always the acting user.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    /// Ignored unless the acting user is admin
    #[serde(default)]
    pub is_public: bool,

    #[serde(default, alias = "sort_num")]
    pub sort_order: i32,
}

/// Update request. Only `name` and `sort_order` are applied; any `owner` or
/// `is_public` in the body is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    pub id: i64,

    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[serde(default, alias = "sort_num")]
    pub sort_order: i32,
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub owner: String,
    pub is_public: bool,
    pub sort_order: i32,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            owner: c.owner,
            is_public: c.is_public,
            sort_order: c.sort_order,
        }
    }
}
