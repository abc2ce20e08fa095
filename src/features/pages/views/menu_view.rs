use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::features::menu::dtos::{
    LocalizedProduct, LocalizedSubcategory, MenuTreeItemDto, SubcategoryBlockDto,
};
use crate::shared::constants::FALLBACK_SUBCATEGORY_ICON;

/// Keyword icons for subcategories without their own icon, keyed by slug
const SUBCATEGORY_ICONS: &[(&str, &str)] = &[
    ("kahvalti", "🍳"),
    ("breakfast", "🍳"),
    ("corba", "🥣"),
    ("soup", "🥣"),
    ("izgara", "🍖"),
    ("grill", "🍖"),
    ("burger", "🍔"),
    ("pizza", "🍕"),
    ("meze", "🥗"),
    ("salad", "🥗"),
    ("salata", "🥗"),
    ("tatli", "🍰"),
    ("dessert", "🍰"),
    ("icecek", "🥤"),
    ("drinks", "🥤"),
    ("beverage", "🥤"),
    ("makarna", "🍝"),
    ("pasta", "🍝"),
    ("doner", "🥙"),
    ("pide", "🥙"),
];

/// Icon for a subcategory: its own icon, else the slug keyword icon, else 📌
pub fn subcategory_icon(subcategory: &LocalizedSubcategory) -> String {
    if let Some(icon) = subcategory
        .subcategory
        .icon
        .as_deref()
        .filter(|icon| !icon.trim().is_empty())
    {
        return icon.to_string();
    }

    let key = subcategory.subcategory.slug.to_lowercase();
    SUBCATEGORY_ICONS
        .iter()
        .find(|(slug, _)| *slug == key)
        .map_or(FALLBACK_SUBCATEGORY_ICON, |(_, icon)| icon)
        .to_string()
}

#[derive(Debug, Serialize)]
pub struct MenuProductView {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Price the customer pays
    pub price: Decimal,
    /// List price, only set when a discount applies
    pub original_price: Option<Decimal>,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub is_available: bool,
}

impl From<&LocalizedProduct> for MenuProductView {
    fn from(product: &LocalizedProduct) -> Self {
        let price = product.effective_price();
        Self {
            id: product.product.id,
            name: product.name.clone(),
            description: product
                .short_description
                .clone()
                .or_else(|| product.description.clone()),
            price,
            original_price: (price != product.product.price).then_some(product.product.price),
            image_url: product.product.image_url.clone(),
            is_featured: product.product.is_featured,
            is_available: product.product.is_available,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MenuSubcategoryView {
    pub name: String,
    pub description: Option<String>,
    pub icon: String,
    pub products: Vec<MenuProductView>,
}

impl From<&SubcategoryBlockDto> for MenuSubcategoryView {
    fn from(block: &SubcategoryBlockDto) -> Self {
        Self {
            name: block.subcategory.name.clone(),
            description: block.subcategory.description.clone(),
            icon: subcategory_icon(&block.subcategory),
            products: block.products.iter().map(MenuProductView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MenuCategoryView {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub subcategories: Vec<MenuSubcategoryView>,
    /// Products directly under the category
    pub products: Vec<MenuProductView>,
}

impl From<&MenuTreeItemDto> for MenuCategoryView {
    fn from(node: &MenuTreeItemDto) -> Self {
        Self {
            slug: node.category.category.slug.clone(),
            name: node.category.name.clone(),
            description: node.category.description.clone(),
            subcategories: node
                .subcategories
                .iter()
                .map(MenuSubcategoryView::from)
                .collect(),
            products: node
                .uncategorized_products
                .iter()
                .map(MenuProductView::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MenuPageView {
    pub categories: Vec<MenuCategoryView>,
    /// Endpoint the cart script posts to
    pub order_url: String,
    /// Per-line quantity cap enforced by the cart script
    pub max_quantity: u32,
}
