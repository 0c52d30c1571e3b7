use sqlx::FromRow;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub owner: String,
    pub is_public: bool,
    pub sort_order: i32,
}
