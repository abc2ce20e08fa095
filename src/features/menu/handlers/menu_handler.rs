use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::core::extractor::LocaleParam;
use crate::features::menu::dtos::{LocalizedCategory, LocalizedProduct, MenuTreeItemDto};
use crate::features::menu::services::MenuService;
use crate::shared::constants::FEATURED_PRODUCTS_LIMIT;
use crate::shared::types::{ApiResponse, Meta};

/// Query params for featured products
#[derive(Debug, Deserialize, IntoParams)]
pub struct FeaturedQuery {
    /// Maximum number of products (default: 3, max: 20)
    #[param(minimum = 1, maximum = 20)]
    pub limit: Option<usize>,
}

/// Get the localized menu tree
///
/// Unreachable tables are rendered as empty tiers instead of failing.
#[utoipa::path(
    get,
    path = "/api/{lang}/menu",
    params(
        ("lang" = String, Path, description = "Language code (tr, en); unknown values use tr")
    ),
    responses(
        (status = 200, description = "Menu tree", body = ApiResponse<Vec<MenuTreeItemDto>>),
    ),
    tag = "menu"
)]
pub async fn get_menu_tree(
    State(service): State<Arc<MenuService>>,
    LocaleParam(locale): LocaleParam,
) -> Json<ApiResponse<Vec<MenuTreeItemDto>>> {
    let tree = service.menu_tree(locale).await;
    let meta = Meta::total(tree.len());
    Json(ApiResponse::success(Some(tree), None, Some(meta)))
}

/// List active categories
#[utoipa::path(
    get,
    path = "/api/{lang}/categories",
    params(
        ("lang" = String, Path, description = "Language code (tr, en); unknown values use tr")
    ),
    responses(
        (status = 200, description = "Active categories", body = ApiResponse<Vec<LocalizedCategory>>),
    ),
    tag = "menu"
)]
pub async fn list_categories(
    State(service): State<Arc<MenuService>>,
    LocaleParam(locale): LocaleParam,
) -> Json<ApiResponse<Vec<LocalizedCategory>>> {
    let categories = service.categories(locale).await;
    let meta = Meta::total(categories.len());
    Json(ApiResponse::success(Some(categories), None, Some(meta)))
}

/// List featured products
#[utoipa::path(
    get,
    path = "/api/{lang}/featured",
    params(
        ("lang" = String, Path, description = "Language code (tr, en); unknown values use tr"),
        FeaturedQuery
    ),
    responses(
        (status = 200, description = "Featured products", body = ApiResponse<Vec<LocalizedProduct>>),
    ),
    tag = "menu"
)]
pub async fn list_featured_products(
    State(service): State<Arc<MenuService>>,
    LocaleParam(locale): LocaleParam,
    Query(query): Query<FeaturedQuery>,
) -> Json<ApiResponse<Vec<LocalizedProduct>>> {
    let limit = query.limit.unwrap_or(FEATURED_PRODUCTS_LIMIT).clamp(1, 20);
    let products = service.featured_products(locale, limit).await;
    let meta = Meta::total(products.len());
    Json(ApiResponse::success(Some(products), None, Some(meta)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::menu::routes;
    use crate::shared::test_helpers::{
        category, category_translation, product, InMemoryMenuSource,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    fn server(source: InMemoryMenuSource) -> TestServer {
        let service = Arc::new(MenuService::new(Arc::new(source)));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_menu_endpoint_returns_tree() {
        let soups = category("corba", Some(1), true);
        let lentil = product(soups.id, None, "mercimek", Some(1), true);
        let server = server(InMemoryMenuSource {
            category_translations: vec![category_translation(soups.id, "en", "Soups")],
            categories: vec![soups],
            products: vec![lentil],
            ..Default::default()
        });

        let response = server.get("/api/en/menu").await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();

        assert_eq!(body["success"], true);
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["category"]["name"], "Soups");
        assert_eq!(body["data"][0]["uncategorized_products"][0]["name"], "mercimek");
    }

    #[tokio::test]
    async fn test_unknown_language_uses_default() {
        let soups = category("corba", Some(1), true);
        let server = server(InMemoryMenuSource {
            category_translations: vec![
                category_translation(soups.id, "tr", "Çorbalar"),
                category_translation(soups.id, "en", "Soups"),
            ],
            categories: vec![soups],
            ..Default::default()
        });

        let body: Value = server.get("/api/de/categories").await.json();

        assert_eq!(body["data"][0]["name"], "Çorbalar");
        assert_eq!(body["data"][0]["language_code"], "tr");
    }

    #[tokio::test]
    async fn test_failed_source_still_returns_ok() {
        let server = server(InMemoryMenuSource {
            fail_categories: true,
            fail_subcategories: true,
            fail_products: true,
            ..Default::default()
        });

        let response = server.get("/api/tr/menu").await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_featured_limit_is_applied() {
        let grill = category("izgara", Some(1), true);
        let products = (0..5)
            .map(|i| {
                let mut p = product(grill.id, None, &format!("kebap-{}", i), Some(i), true);
                p.is_featured = true;
                p
            })
            .collect();
        let server = server(InMemoryMenuSource {
            categories: vec![grill],
            products,
            ..Default::default()
        });

        let body: Value = server.get("/api/tr/featured").await.json();
        assert_eq!(body["meta"]["total"], 3);

        let body: Value = server
            .get("/api/tr/featured")
            .add_query_param("limit", 4)
            .await
            .json();
        assert_eq!(body["meta"]["total"], 4);
        assert_eq!(body["data"][0]["slug"], "kebap-0");
    }
}
