use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::menu::models::{
    Category, CategoryTranslation, Product, ProductTranslation, Subcategory,
    SubcategoryTranslation,
};
use crate::shared::i18n::Locale;

/// Read-only access to the six menu tables.
///
/// Every call is an independent table scan; rows come back in whatever order
/// the store returns them. Translation scans can be narrowed to one language.
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>>;

    async fn category_translations(
        &self,
        language: Option<Locale>,
    ) -> Result<Vec<CategoryTranslation>>;

    async fn subcategories(&self) -> Result<Vec<Subcategory>>;

    async fn subcategory_translations(
        &self,
        language: Option<Locale>,
    ) -> Result<Vec<SubcategoryTranslation>>;

    async fn products(&self) -> Result<Vec<Product>>;

    async fn product_translations(
        &self,
        language: Option<Locale>,
    ) -> Result<Vec<ProductTranslation>>;
}

/// `MenuSource` backed by the Postgres pool
pub struct PgMenuSource {
    pool: PgPool,
}

impl PgMenuSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuSource for PgMenuSource {
    async fn categories(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, slug, icon, image_url, display_order, is_active
            FROM categories
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn category_translations(
        &self,
        language: Option<Locale>,
    ) -> Result<Vec<CategoryTranslation>> {
        sqlx::query_as::<_, CategoryTranslation>(
            r#"
            SELECT id, category_id, language_code, name, description
            FROM category_translations
            WHERE $1::TEXT IS NULL OR language_code = $1
            "#,
        )
        .bind(language.map(Locale::code))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list category translations: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn subcategories(&self) -> Result<Vec<Subcategory>> {
        sqlx::query_as::<_, Subcategory>(
            r#"
            SELECT id, category_id, slug, icon, image_url, display_order, is_active
            FROM subcategories
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list subcategories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn subcategory_translations(
        &self,
        language: Option<Locale>,
    ) -> Result<Vec<SubcategoryTranslation>> {
        sqlx::query_as::<_, SubcategoryTranslation>(
            r#"
            SELECT id, subcategory_id, language_code, name, description
            FROM subcategory_translations
            WHERE $1::TEXT IS NULL OR language_code = $1
            "#,
        )
        .bind(language.map(Locale::code))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list subcategory translations: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn products(&self) -> Result<Vec<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, category_id, subcategory_id, slug, sku, price, discount_price,
                   image_url, gallery_images, portion_size, calories, preparation_time,
                   allergens, tags, is_available, is_featured, is_active, display_order
            FROM products
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn product_translations(
        &self,
        language: Option<Locale>,
    ) -> Result<Vec<ProductTranslation>> {
        sqlx::query_as::<_, ProductTranslation>(
            r#"
            SELECT id, product_id, language_code, name, description,
                   short_description, ingredients
            FROM product_translations
            WHERE $1::TEXT IS NULL OR language_code = $1
            "#,
        )
        .bind(language.map(Locale::code))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list product translations: {:?}", e);
            AppError::Database(e)
        })
    }
}
