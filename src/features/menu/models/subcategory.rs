use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Database model for a subcategory; always owned by one category
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Subcategory {
    pub id: Uuid,
    pub category_id: Uuid,
    pub slug: String,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: bool,
}

#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct SubcategoryTranslation {
    pub id: Uuid,
    pub subcategory_id: Uuid,
    pub language_code: String,
    pub name: String,
    pub description: Option<String>,
}
