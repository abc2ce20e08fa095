use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::menu::models::{
    Category, CategoryTranslation, Product, ProductTranslation, Subcategory,
    SubcategoryTranslation,
};
use crate::features::menu::services::localize::{
    DisplayOrdered, Localize, MenuRow, TranslationRow,
};
use crate::shared::i18n::Locale;

/// Category resolved for one language
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocalizedCategory {
    #[serde(flatten)]
    pub category: Category,
    /// Translated name, or the slug when no translation exists
    pub name: String,
    pub description: Option<String>,
    pub language_code: String,
}

/// Subcategory resolved for one language
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocalizedSubcategory {
    #[serde(flatten)]
    pub subcategory: Subcategory,
    pub name: String,
    pub description: Option<String>,
    pub language_code: String,
}

/// Product resolved for one language
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocalizedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub language_code: String,
    pub name: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub ingredients: Option<String>,
}

impl LocalizedProduct {
    /// Price the customer pays: the discount price when one is set
    pub fn effective_price(&self) -> Decimal {
        self.product.discount_price.unwrap_or(self.product.price)
    }
}

/// A subcategory together with its products
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubcategoryBlockDto {
    pub subcategory: LocalizedSubcategory,
    pub products: Vec<LocalizedProduct>,
}

/// One category node of the menu tree
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuTreeItemDto {
    pub category: LocalizedCategory,
    pub subcategories: Vec<SubcategoryBlockDto>,
    /// Products attached to the category without a subcategory
    pub uncategorized_products: Vec<LocalizedProduct>,
}

impl MenuTreeItemDto {
    /// Build the category -> subcategory -> product tree from localized,
    /// already sorted flat lists. Sibling order is taken from the inputs.
    ///
    /// Children whose parent is not in the input (inactive or missing) are
    /// dropped, never re-attached elsewhere.
    pub fn build_tree(
        categories: Vec<LocalizedCategory>,
        subcategories: Vec<LocalizedSubcategory>,
        products: Vec<LocalizedProduct>,
    ) -> Vec<MenuTreeItemDto> {
        let mut subcategories_by_category: HashMap<Uuid, Vec<LocalizedSubcategory>> =
            HashMap::new();
        for sub in subcategories {
            subcategories_by_category
                .entry(sub.subcategory.category_id)
                .or_default()
                .push(sub);
        }

        let mut products_by_subcategory: HashMap<Uuid, Vec<LocalizedProduct>> = HashMap::new();
        let mut products_by_category: HashMap<Uuid, Vec<LocalizedProduct>> = HashMap::new();
        for product in products {
            match product.product.subcategory_id {
                Some(subcategory_id) => products_by_subcategory
                    .entry(subcategory_id)
                    .or_default()
                    .push(product),
                None => products_by_category
                    .entry(product.product.category_id)
                    .or_default()
                    .push(product),
            }
        }

        categories
            .into_iter()
            .map(|category| {
                let subcategories = subcategories_by_category
                    .remove(&category.category.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|subcategory| SubcategoryBlockDto {
                        products: products_by_subcategory
                            .remove(&subcategory.subcategory.id)
                            .unwrap_or_default(),
                        subcategory,
                    })
                    .collect();

                let uncategorized_products = products_by_category
                    .remove(&category.category.id)
                    .unwrap_or_default();

                MenuTreeItemDto {
                    category,
                    subcategories,
                    uncategorized_products,
                }
            })
            .collect()
    }

    /// Every product in this node, subcategory blocks first
    pub fn products(&self) -> impl Iterator<Item = &LocalizedProduct> {
        self.subcategories
            .iter()
            .flat_map(|block| block.products.iter())
            .chain(self.uncategorized_products.iter())
    }
}

// =============================================================================
// Translation merge wiring
// =============================================================================

impl MenuRow for Category {
    fn id(&self) -> Uuid {
        self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl TranslationRow for CategoryTranslation {
    fn owner_id(&self) -> Uuid {
        self.category_id
    }

    fn language_code(&self) -> &str {
        &self.language_code
    }
}

impl Localize for Category {
    type Translation = CategoryTranslation;
    type Output = LocalizedCategory;

    fn localize(self, translation: Option<&CategoryTranslation>, locale: Locale) -> LocalizedCategory {
        LocalizedCategory {
            name: translation
                .map(|t| t.name.clone())
                .unwrap_or_else(|| self.slug.clone()),
            description: translation.and_then(|t| t.description.clone()),
            language_code: translation
                .map(|t| t.language_code.clone())
                .unwrap_or_else(|| locale.code().to_string()),
            category: self,
        }
    }
}

impl DisplayOrdered for LocalizedCategory {
    fn display_order(&self) -> Option<i32> {
        self.category.display_order
    }
}

impl MenuRow for Subcategory {
    fn id(&self) -> Uuid {
        self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl TranslationRow for SubcategoryTranslation {
    fn owner_id(&self) -> Uuid {
        self.subcategory_id
    }

    fn language_code(&self) -> &str {
        &self.language_code
    }
}

impl Localize for Subcategory {
    type Translation = SubcategoryTranslation;
    type Output = LocalizedSubcategory;

    fn localize(
        self,
        translation: Option<&SubcategoryTranslation>,
        locale: Locale,
    ) -> LocalizedSubcategory {
        LocalizedSubcategory {
            name: translation
                .map(|t| t.name.clone())
                .unwrap_or_else(|| self.slug.clone()),
            description: translation.and_then(|t| t.description.clone()),
            language_code: translation
                .map(|t| t.language_code.clone())
                .unwrap_or_else(|| locale.code().to_string()),
            subcategory: self,
        }
    }
}

impl DisplayOrdered for LocalizedSubcategory {
    fn display_order(&self) -> Option<i32> {
        self.subcategory.display_order
    }
}

impl MenuRow for Product {
    fn id(&self) -> Uuid {
        self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl TranslationRow for ProductTranslation {
    fn owner_id(&self) -> Uuid {
        self.product_id
    }

    fn language_code(&self) -> &str {
        &self.language_code
    }
}

impl Localize for Product {
    type Translation = ProductTranslation;
    type Output = LocalizedProduct;

    fn localize(self, translation: Option<&ProductTranslation>, locale: Locale) -> LocalizedProduct {
        LocalizedProduct {
            language_code: translation
                .map(|t| t.language_code.clone())
                .unwrap_or_else(|| locale.code().to_string()),
            name: translation
                .map(|t| t.name.clone())
                .unwrap_or_else(|| self.slug.clone()),
            description: translation.and_then(|t| t.description.clone()),
            short_description: translation.and_then(|t| t.short_description.clone()),
            ingredients: translation.and_then(|t| t.ingredients.clone()),
            product: self,
        }
    }
}

impl DisplayOrdered for LocalizedProduct {
    fn display_order(&self) -> Option<i32> {
        self.product.display_order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::menu::services::localize::localize_sorted;
    use crate::shared::test_helpers::{category, product, subcategory};

    fn localize_all(
        categories: Vec<Category>,
        subcategories: Vec<Subcategory>,
        products: Vec<Product>,
    ) -> Vec<MenuTreeItemDto> {
        MenuTreeItemDto::build_tree(
            localize_sorted(categories, &[], Locale::En),
            localize_sorted(subcategories, &[], Locale::En),
            localize_sorted(products, &[], Locale::En),
        )
    }

    #[test]
    fn test_build_tree_without_translations_uses_slugs() {
        let c1 = category("c1", Some(1), true);
        let s1 = subcategory(c1.id, "s1", Some(1), true);
        let p1 = product(c1.id, Some(s1.id), "p1", Some(1), true);
        let p2 = product(c1.id, None, "p2", Some(2), true);

        let tree = localize_all(vec![c1.clone()], vec![s1.clone()], vec![p1, p2]);

        assert_eq!(tree.len(), 1);
        let node = &tree[0];
        assert_eq!(node.category.category.id, c1.id);
        assert_eq!(node.subcategories.len(), 1);
        assert_eq!(node.subcategories[0].subcategory.subcategory.id, s1.id);
        assert_eq!(node.subcategories[0].products.len(), 1);
        assert_eq!(node.subcategories[0].products[0].name, "p1");
        assert_eq!(node.uncategorized_products.len(), 1);
        assert_eq!(node.uncategorized_products[0].name, "p2");
        assert_eq!(node.uncategorized_products[0].language_code, "en");
    }

    #[test]
    fn test_inactive_category_drops_its_children() {
        let hidden = category("hidden", Some(1), false);
        let sub = subcategory(hidden.id, "sub", Some(1), true);
        let in_sub = product(hidden.id, Some(sub.id), "in-sub", Some(1), true);
        let direct = product(hidden.id, None, "direct", Some(2), true);
        let visible = category("visible", Some(2), true);

        let tree = localize_all(vec![hidden, visible.clone()], vec![sub], vec![in_sub, direct]);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].category.category.id, visible.id);
        assert!(tree[0].subcategories.is_empty());
        assert!(tree[0].uncategorized_products.is_empty());
    }

    #[test]
    fn test_empty_category_still_listed() {
        let c1 = category("empty", None, true);
        let tree = localize_all(vec![c1], vec![], vec![]);

        assert_eq!(tree.len(), 1);
        assert!(tree[0].subcategories.is_empty());
        assert!(tree[0].uncategorized_products.is_empty());
    }

    #[test]
    fn test_products_never_cross_between_subcategory_and_uncategorized() {
        let c1 = category("c1", Some(1), true);
        let s1 = subcategory(c1.id, "s1", Some(1), true);
        let s2 = subcategory(c1.id, "s2", Some(2), true);
        let products = vec![
            product(c1.id, Some(s1.id), "a", Some(1), true),
            product(c1.id, None, "b", Some(1), true),
            product(c1.id, Some(s2.id), "c", Some(1), true),
            product(c1.id, None, "d", Some(2), true),
        ];

        let tree = localize_all(vec![c1], vec![s1, s2], products);
        let node = &tree[0];

        for block in &node.subcategories {
            assert!(block
                .products
                .iter()
                .all(|p| p.product.subcategory_id == Some(block.subcategory.subcategory.id)));
        }
        assert!(node
            .uncategorized_products
            .iter()
            .all(|p| p.product.subcategory_id.is_none()));
        assert_eq!(node.products().count(), 4);
    }

    #[test]
    fn test_product_under_inactive_subcategory_is_not_hoisted() {
        let c1 = category("c1", Some(1), true);
        let inactive_sub = subcategory(c1.id, "old", Some(1), false);
        let orphan = product(c1.id, Some(inactive_sub.id), "orphan", Some(1), true);

        let tree = localize_all(vec![c1], vec![inactive_sub], vec![orphan]);

        assert!(tree[0].subcategories.is_empty());
        assert!(tree[0].uncategorized_products.is_empty());
    }

    #[test]
    fn test_sibling_order_follows_display_order() {
        let c1 = category("c1", Some(2), true);
        let c2 = category("c2", None, true);
        let c3 = category("c3", Some(1), true);
        let s_late = subcategory(c1.id, "late", Some(5), true);
        let s_early = subcategory(c1.id, "early", Some(-1), true);

        let tree = localize_all(vec![c1, c2, c3], vec![s_late, s_early], vec![]);

        let names: Vec<&str> = tree.iter().map(|n| n.category.name.as_str()).collect();
        assert_eq!(names, vec!["c2", "c3", "c1"]);
        let sub_names: Vec<&str> = tree[2]
            .subcategories
            .iter()
            .map(|b| b.subcategory.name.as_str())
            .collect();
        assert_eq!(sub_names, vec!["early", "late"]);
    }

    #[test]
    fn test_effective_price_prefers_discount() {
        let c1 = category("c1", None, true);
        let mut p = product(c1.id, None, "p", None, true);
        p.price = Decimal::new(100, 0);
        let localized = localize_sorted(vec![p.clone()], &[], Locale::Tr);
        assert_eq!(localized[0].effective_price(), Decimal::new(100, 0));

        p.discount_price = Some(Decimal::new(80, 0));
        let localized = localize_sorted(vec![p], &[], Locale::Tr);
        assert_eq!(localized[0].effective_price(), Decimal::new(80, 0));
    }

    #[test]
    fn test_localized_product_serializes_flat() {
        let c1 = category("c1", None, true);
        let p = product(c1.id, None, "ayran", Some(3), true);
        let localized = localize_sorted(vec![p], &[], Locale::Tr);
        let value = serde_json::to_value(&localized[0]).unwrap();

        assert_eq!(value["slug"], "ayran");
        assert_eq!(value["name"], "ayran");
        assert_eq!(value["display_order"], 3);
        assert!(value["description"].is_null());
    }
}
