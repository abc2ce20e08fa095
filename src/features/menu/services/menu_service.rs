use std::sync::Arc;

use crate::core::error::Result;
use crate::features::menu::dtos::{LocalizedCategory, LocalizedProduct, MenuTreeItemDto};
use crate::features::menu::services::localize::{localize_sorted, DisplayOrdered, Localize};
use crate::features::menu::services::MenuSource;
use crate::shared::i18n::Locale;

/// Service assembling the localized menu
pub struct MenuService {
    source: Arc<dyn MenuSource>,
}

impl MenuService {
    pub fn new(source: Arc<dyn MenuSource>) -> Self {
        Self { source }
    }

    /// Full category -> subcategory -> product tree for one language.
    ///
    /// The six scans run concurrently. A tier whose rows or translations could
    /// not be fetched is treated as empty, so this never fails.
    pub async fn menu_tree(&self, locale: Locale) -> Vec<MenuTreeItemDto> {
        let (
            categories,
            category_translations,
            subcategories,
            subcategory_translations,
            products,
            product_translations,
        ) = tokio::join!(
            self.source.categories(),
            self.source.category_translations(None),
            self.source.subcategories(),
            self.source.subcategory_translations(None),
            self.source.products(),
            self.source.product_translations(None),
        );

        let categories = localize_tier("categories", categories, category_translations, locale);
        let subcategories =
            localize_tier("subcategories", subcategories, subcategory_translations, locale);
        let products = localize_tier("products", products, product_translations, locale);

        MenuTreeItemDto::build_tree(categories, subcategories, products)
    }

    /// Active categories for one language, without their children
    pub async fn categories(&self, locale: Locale) -> Vec<LocalizedCategory> {
        let (categories, translations) = tokio::join!(
            self.source.categories(),
            self.source.category_translations(Some(locale)),
        );

        let categories = match categories {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("Category list unavailable, returning empty list: {}", e);
                return Vec::new();
            }
        };
        // Missing translations only cost the display names
        let translations = translations.unwrap_or_else(|e| {
            tracing::warn!("Category translations unavailable, using slugs: {}", e);
            Vec::new()
        });

        localize_sorted(categories, &translations, locale)
    }

    /// Active featured products in display order, at most `limit`
    pub async fn featured_products(&self, locale: Locale, limit: usize) -> Vec<LocalizedProduct> {
        let (products, translations) = tokio::join!(
            self.source.products(),
            self.source.product_translations(Some(locale)),
        );

        localize_tier("featured products", products, translations, locale)
            .into_iter()
            .filter(|p| p.product.is_featured)
            .take(limit)
            .collect()
    }
}

/// Localize one tier, degrading to an empty list when either scan failed
fn localize_tier<B>(
    tier: &str,
    rows: Result<Vec<B>>,
    translations: Result<Vec<B::Translation>>,
    locale: Locale,
) -> Vec<B::Output>
where
    B: Localize,
    B::Output: DisplayOrdered,
{
    match (rows, translations) {
        (Ok(rows), Ok(translations)) => localize_sorted(rows, &translations, locale),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(tier, "Menu tier unavailable, rendering it empty: {}", e);
            Vec::new()
        }
    }
}
