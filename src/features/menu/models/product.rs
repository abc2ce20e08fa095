use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Database model for a product.
///
/// A product with `subcategory_id` belongs to that subcategory; without one it
/// hangs directly off its category.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub category_id: Uuid,
    pub subcategory_id: Option<Uuid>,
    pub slug: String,
    pub sku: Option<String>,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub image_url: Option<String>,
    pub gallery_images: Option<Vec<String>>,
    pub portion_size: Option<String>,
    pub calories: Option<i32>,
    pub preparation_time: Option<String>,
    pub allergens: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub is_available: bool,
    pub is_featured: bool,
    pub is_active: bool,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct ProductTranslation {
    pub id: Uuid,
    pub product_id: Uuid,
    pub language_code: String,
    pub name: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub ingredients: Option<String>,
}
