use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::identity::{policy, ActingUser};
use crate::features::links::dtos::{
    CreateLinkDto, LinkResponseDto, ListLinksQuery, UpdateLinkDto,
};
use crate::features::links::models::Link;
use crate::shared::validation::normalize_url;

/// Service for link operations
pub struct LinkService {
    pool: SqlitePool,
}

impl LinkService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List links the actor owns plus every public link, optionally narrowed
    /// to one category. Equal sort orders list newest first.
    pub async fn list(
        &self,
        actor: &ActingUser,
        params: &ListLinksQuery,
    ) -> Result<Vec<LinkResponseDto>> {
        let links: Vec<Link> = sqlx::query_as(
            r#"
            SELECT id, title, url, description, category_id, owner, is_public, sort_order, created_at
            FROM links
            WHERE (owner = $1 OR is_public = 1)
              AND ($2 IS NULL OR category_id = $2)
            ORDER BY sort_order ASC, created_at DESC, id DESC
            "#,
        )
        .bind(&actor.user)
        .bind(params.category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list links: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(links.into_iter().map(LinkResponseDto::from).collect())
    }

    /// Create a link owned by the actor
    pub async fn create(&self, actor: &ActingUser, dto: CreateLinkDto) -> Result<LinkResponseDto> {
        let is_public = actor.effective_visibility(dto.is_public);
        let url = normalize_url(&dto.url);

        let link: Link = sqlx::query_as(
            r#"
            INSERT INTO links (title, url, description, category_id, owner, is_public, sort_order, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, url, description, category_id, owner, is_public, sort_order, created_at
            "#,
        )
        .bind(&dto.title)
        .bind(&url)
        .bind(&dto.description)
        .bind(dto.category_id)
        .bind(&actor.user)
        .bind(is_public)
        .bind(dto.sort_order)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create link: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Link created: id={}, owner={}, public={}",
            link.id,
            link.owner,
            link.is_public
        );

        Ok(link.into())
    }

    /// Update the editable fields of a link
    pub async fn update(&self, actor: &ActingUser, dto: UpdateLinkDto) -> Result<()> {
        let owner = self.owner_of(dto.id).await?;
        policy::ensure_can_modify("link", dto.id, owner.as_deref(), actor)?;

        let url = normalize_url(&dto.url);

        sqlx::query(
            r#"
            UPDATE links
            SET title = $1, url = $2, description = $3, category_id = $4, sort_order = $5
            WHERE id = $6
            "#,
        )
        .bind(&dto.title)
        .bind(&url)
        .bind(&dto.description)
        .bind(dto.category_id)
        .bind(dto.sort_order)
        .bind(dto.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update link {}: {:?}", dto.id, e);
            AppError::Database(e)
        })?;

        tracing::info!("Link updated: id={}, by={}", dto.id, actor.user);
        Ok(())
    }

    /// Delete a single link
    pub async fn delete(&self, actor: &ActingUser, id: i64) -> Result<()> {
        let owner = self.owner_of(id).await?;
        policy::ensure_can_modify("link", id, owner.as_deref(), actor)?;

        sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete link {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        tracing::info!("Link deleted: id={}, by={}", id, actor.user);
        Ok(())
    }

    async fn owner_of(&self, id: i64) -> Result<Option<String>> {
        sqlx::query_scalar("SELECT owner FROM links WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up link {}: {:?}", id, e);
                AppError::Database(e)
            })
    }
}
