use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, LocaleParam};
use crate::features::ordering::dtos::{WhatsAppOrderRequestDto, WhatsAppOrderResponseDto};
use crate::features::ordering::services::OrderService;
use crate::shared::types::ApiResponse;

/// Build a WhatsApp order link for a cart
///
/// Prices come from the current menu; products that are unknown or
/// unavailable are left out of the message.
#[utoipa::path(
    post,
    path = "/api/{lang}/order/whatsapp",
    params(
        ("lang" = String, Path, description = "Language code (tr, en); unknown values use tr")
    ),
    request_body = WhatsAppOrderRequestDto,
    responses(
        (status = 200, description = "Order message and WhatsApp link", body = ApiResponse<WhatsAppOrderResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Site settings unavailable")
    ),
    tag = "ordering"
)]
pub async fn create_whatsapp_order(
    State(service): State<Arc<OrderService>>,
    LocaleParam(locale): LocaleParam,
    AppJson(dto): AppJson<WhatsAppOrderRequestDto>,
) -> Result<Json<ApiResponse<WhatsAppOrderResponseDto>>> {
    dto.validate()?;

    let order = service.whatsapp_order(locale, &dto).await?;
    Ok(Json(ApiResponse::success(Some(order), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::menu::MenuService;
    use crate::features::ordering::routes;
    use crate::features::settings::SettingsService;
    use crate::shared::test_helpers::{
        category, product, product_translation, InMemoryMenuSource, InMemorySettingsSource,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rust_decimal::Decimal;
    use serde_json::{json, Value};
    use uuid::Uuid;

    fn server(menu: InMemoryMenuSource, settings: InMemorySettingsSource) -> TestServer {
        let service = Arc::new(OrderService::new(
            Arc::new(MenuService::new(Arc::new(menu))),
            Arc::new(SettingsService::new(Arc::new(settings))),
            "+90 541 635 64 85",
        ));
        TestServer::new(routes::routes(service)).unwrap()
    }

    fn menu_with_tea() -> (InMemoryMenuSource, Uuid) {
        let drinks = category("icecekler", Some(1), true);
        let mut tea = product(drinks.id, None, "cay", Some(1), true);
        tea.price = Decimal::new(25, 0);
        let tea_id = tea.id;
        let menu = InMemoryMenuSource {
            product_translations: vec![product_translation(tea.id, "en", "Tea")],
            categories: vec![drinks],
            products: vec![tea],
            ..Default::default()
        };
        (menu, tea_id)
    }

    #[tokio::test]
    async fn test_order_returns_message_and_link() {
        let (menu, tea) = menu_with_tea();
        let server = server(menu, InMemorySettingsSource::default());

        let response = server
            .post("/api/en/order/whatsapp")
            .json(&json!({ "items": [{ "product_id": tea, "quantity": 4 }] }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["item_count"], 4);
        assert_eq!(
            body["data"]["message"],
            "Hello, I would like to order from Tatlı Bahçe.\n\nItems:\n- Tea x4 ~ 100 TL\nApprox. total: 100 TL"
        );
        assert!(body["data"]["link"]
            .as_str()
            .unwrap()
            .starts_with("https://api.whatsapp.com/send?phone=905416356485&text=Hello%2C%20I"));
    }

    #[tokio::test]
    async fn test_quantity_out_of_range_is_rejected() {
        let (menu, tea) = menu_with_tea();
        let server = server(menu, InMemorySettingsSource::default());

        let response = server
            .post("/api/tr/order/whatsapp")
            .json(&json!({ "items": [{ "product_id": tea, "quantity": 100 }] }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let (menu, _) = menu_with_tea();
        let server = server(menu, InMemorySettingsSource::default());

        let response = server
            .post("/api/tr/order/whatsapp")
            .json(&json!({ "items": [{ "product_id": "not-a-uuid", "quantity": 1 }] }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_settings_failure_is_server_error() {
        let (menu, tea) = menu_with_tea();
        let server = server(
            menu,
            InMemorySettingsSource {
                fail: true,
                ..Default::default()
            },
        );

        let response = server
            .post("/api/tr/order/whatsapp")
            .json(&json!({ "items": [{ "product_id": tea, "quantity": 1 }] }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
