use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::Category;
use crate::features::identity::{policy, ActingUser};

/// Service for category operations
pub struct CategoryService {
    pool: SqlitePool,
}

impl CategoryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List categories the actor owns plus every public category
    pub async fn list(&self, actor: &ActingUser) -> Result<Vec<CategoryResponseDto>> {
        let categories: Vec<Category> = sqlx::query_as(
            r#"
            SELECT id, name, owner, is_public, sort_order
            FROM categories
            WHERE owner = $1 OR is_public = 1
            ORDER BY sort_order ASC, name ASC, id ASC
            "#,
        )
        .bind(&actor.user)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Create a category owned by the actor
    pub async fn create(
        &self,
        actor: &ActingUser,
        dto: CreateCategoryDto,
    ) -> Result<CategoryResponseDto> {
        let is_public = actor.effective_visibility(dto.is_public);

        let category: Category = sqlx::query_as(
            r#"
            INSERT INTO categories (name, owner, is_public, sort_order, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, owner, is_public, sort_order
            "#,
        )
        .bind(&dto.name)
        .bind(&actor.user)
        .bind(is_public)
        .bind(dto.sort_order)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Category created: id={}, owner={}, public={}",
            category.id,
            category.owner,
            category.is_public
        );

        Ok(category.into())
    }

    /// Rename / reorder a category. Owner and visibility are never touched.
    pub async fn update(&self, actor: &ActingUser, dto: UpdateCategoryDto) -> Result<()> {
        let owner = self.owner_of(dto.id).await?;
        policy::ensure_can_modify("category", dto.id, owner.as_deref(), actor)?;

        sqlx::query(
            r#"
            UPDATE categories
            SET name = $1, sort_order = $2
            WHERE id = $3
            "#,
        )
        .bind(&dto.name)
        .bind(dto.sort_order)
        .bind(dto.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update category {}: {:?}", dto.id, e);
            AppError::Database(e)
        })?;

        tracing::info!("Category updated: id={}, by={}", dto.id, actor.user);
        Ok(())
    }

    /// Delete a category together with its links.
    ///
    /// Link removal is best-effort: a failure there is logged and the category
    /// is still deleted. The two statements are not atomic.
    pub async fn delete(&self, actor: &ActingUser, id: i64) -> Result<()> {
        let owner = self.owner_of(id).await?;
        policy::ensure_can_modify("category", id, owner.as_deref(), actor)?;

        match sqlx::query("DELETE FROM links WHERE category_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(result) => tracing::debug!(
                "Deleted {} links of category {}",
                result.rows_affected(),
                id
            ),
            Err(e) => tracing::error!("Failed to delete links of category {}: {:?}", id, e),
        }

        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        tracing::info!("Category deleted: id={}, by={}", id, actor.user);
        Ok(())
    }

    /// Owner of a category, `None` if it does not exist
    async fn owner_of(&self, id: i64) -> Result<Option<String>> {
        sqlx::query_scalar("SELECT owner FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up category {}: {:?}", id, e);
                AppError::Database(e)
            })
    }
}
