use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for link
#[derive(Debug, Clone, FromRow)]
pub struct Link {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    /// Not enforced as a foreign key; may point at a deleted category
    pub category_id: Option<i64>,
    pub owner: String,
    pub is_public: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}
