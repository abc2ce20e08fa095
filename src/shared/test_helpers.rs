use std::collections::HashMap;

use async_trait::async_trait;
use fake::faker::lorem::en::Word;
use fake::Fake;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::menu::models::{
    Category, CategoryTranslation, Product, ProductTranslation, Subcategory,
    SubcategoryTranslation,
};
use crate::features::menu::services::MenuSource;
use crate::features::settings::services::SettingsSource;
use crate::shared::i18n::Locale;

// =============================================================================
// Row fixtures
// =============================================================================

pub fn category(slug: &str, display_order: Option<i32>, is_active: bool) -> Category {
    Category {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        icon: None,
        image_url: None,
        display_order,
        is_active,
    }
}

pub fn subcategory(
    category_id: Uuid,
    slug: &str,
    display_order: Option<i32>,
    is_active: bool,
) -> Subcategory {
    Subcategory {
        id: Uuid::new_v4(),
        category_id,
        slug: slug.to_string(),
        icon: None,
        image_url: None,
        display_order,
        is_active,
    }
}

pub fn product(
    category_id: Uuid,
    subcategory_id: Option<Uuid>,
    slug: &str,
    display_order: Option<i32>,
    is_active: bool,
) -> Product {
    Product {
        id: Uuid::new_v4(),
        category_id,
        subcategory_id,
        slug: slug.to_string(),
        sku: Some(Word().fake::<String>().to_uppercase()),
        price: Decimal::new((50..500).fake::<i64>(), 0),
        discount_price: None,
        image_url: None,
        gallery_images: None,
        portion_size: None,
        calories: None,
        preparation_time: None,
        allergens: None,
        tags: None,
        is_available: true,
        is_featured: false,
        is_active,
        display_order,
    }
}

pub fn category_translation(category_id: Uuid, language_code: &str, name: &str) -> CategoryTranslation {
    CategoryTranslation {
        id: Uuid::new_v4(),
        category_id,
        language_code: language_code.to_string(),
        name: name.to_string(),
        description: None,
    }
}

pub fn subcategory_translation(
    subcategory_id: Uuid,
    language_code: &str,
    name: &str,
) -> SubcategoryTranslation {
    SubcategoryTranslation {
        id: Uuid::new_v4(),
        subcategory_id,
        language_code: language_code.to_string(),
        name: name.to_string(),
        description: None,
    }
}

pub fn product_translation(product_id: Uuid, language_code: &str, name: &str) -> ProductTranslation {
    ProductTranslation {
        id: Uuid::new_v4(),
        product_id,
        language_code: language_code.to_string(),
        name: name.to_string(),
        description: None,
        short_description: None,
        ingredients: None,
    }
}

// =============================================================================
// In-memory sources
// =============================================================================

fn unavailable(table: &str) -> AppError {
    tracing::debug!(table, "Simulating unavailable table");
    AppError::Database(sqlx::Error::PoolTimedOut)
}

fn for_language<T: Clone>(
    rows: &[T],
    language: Option<Locale>,
    code_of: impl Fn(&T) -> &str,
) -> Vec<T> {
    rows.iter()
        .filter(|row| language.is_none_or(|l| code_of(row) == l.code()))
        .cloned()
        .collect()
}

/// Menu tables held in memory, with per-table failure switches
#[derive(Default, Clone)]
pub struct InMemoryMenuSource {
    pub categories: Vec<Category>,
    pub category_translations: Vec<CategoryTranslation>,
    pub subcategories: Vec<Subcategory>,
    pub subcategory_translations: Vec<SubcategoryTranslation>,
    pub products: Vec<Product>,
    pub product_translations: Vec<ProductTranslation>,
    pub fail_categories: bool,
    pub fail_subcategories: bool,
    pub fail_products: bool,
    pub fail_product_translations: bool,
}

#[async_trait]
impl MenuSource for InMemoryMenuSource {
    async fn categories(&self) -> Result<Vec<Category>> {
        if self.fail_categories {
            return Err(unavailable("categories"));
        }
        Ok(self.categories.clone())
    }

    async fn category_translations(
        &self,
        language: Option<Locale>,
    ) -> Result<Vec<CategoryTranslation>> {
        Ok(for_language(&self.category_translations, language, |t| {
            t.language_code.as_str()
        }))
    }

    async fn subcategories(&self) -> Result<Vec<Subcategory>> {
        if self.fail_subcategories {
            return Err(unavailable("subcategories"));
        }
        Ok(self.subcategories.clone())
    }

    async fn subcategory_translations(
        &self,
        language: Option<Locale>,
    ) -> Result<Vec<SubcategoryTranslation>> {
        Ok(for_language(&self.subcategory_translations, language, |t| {
            t.language_code.as_str()
        }))
    }

    async fn products(&self) -> Result<Vec<Product>> {
        if self.fail_products {
            return Err(unavailable("products"));
        }
        Ok(self.products.clone())
    }

    async fn product_translations(
        &self,
        language: Option<Locale>,
    ) -> Result<Vec<ProductTranslation>> {
        if self.fail_product_translations {
            return Err(unavailable("product_translations"));
        }
        Ok(for_language(&self.product_translations, language, |t| {
            t.language_code.as_str()
        }))
    }
}

/// Site settings held in memory; `fail` makes every fetch error out
#[derive(Default, Clone)]
pub struct InMemorySettingsSource {
    pub values: HashMap<String, Option<String>>,
    pub fail: bool,
}

impl InMemorySettingsSource {
    pub fn with(pairs: &[(&str, Option<&str>)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
                .collect(),
            fail: false,
        }
    }
}

#[async_trait]
impl SettingsSource for InMemorySettingsSource {
    async fn all(&self) -> Result<HashMap<String, Option<String>>> {
        if self.fail {
            return Err(unavailable("site_settings"));
        }
        Ok(self.values.clone())
    }
}
