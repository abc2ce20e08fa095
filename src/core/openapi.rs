use utoipa::{Modify, OpenApi};

use crate::features::menu::{dtos as menu_dtos, handlers as menu_handlers, models as menu_models};
use crate::features::ordering::{dtos as ordering_dtos, handlers as ordering_handlers};
use crate::features::settings::handlers as settings_handlers;
use crate::shared::i18n::Locale;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Menu
        menu_handlers::get_menu_tree,
        menu_handlers::list_categories,
        menu_handlers::list_featured_products,
        // Settings
        settings_handlers::get_settings,
        // Ordering
        ordering_handlers::create_whatsapp_order,
    ),
    components(
        schemas(
            // Shared
            Meta,
            Locale,
            // Menu
            menu_models::Category,
            menu_models::Subcategory,
            menu_models::Product,
            menu_dtos::LocalizedCategory,
            menu_dtos::LocalizedSubcategory,
            menu_dtos::LocalizedProduct,
            menu_dtos::SubcategoryBlockDto,
            menu_dtos::MenuTreeItemDto,
            ApiResponse<Vec<menu_dtos::MenuTreeItemDto>>,
            ApiResponse<Vec<menu_dtos::LocalizedCategory>>,
            ApiResponse<Vec<menu_dtos::LocalizedProduct>>,
            // Ordering
            ordering_dtos::OrderItemDto,
            ordering_dtos::WhatsAppOrderRequestDto,
            ordering_dtos::OrderLineDto,
            ordering_dtos::WhatsAppOrderResponseDto,
            ApiResponse<ordering_dtos::WhatsAppOrderResponseDto>,
        )
    ),
    tags(
        (name = "menu", description = "Localized menu (public)"),
        (name = "settings", description = "Site settings (public)"),
        (name = "ordering", description = "WhatsApp order links (public)"),
    ),
    info(
        title = "Tatlı Bahçe API",
        version = "0.1.0",
        description = "API documentation for the Tatlı Bahçe restaurant site",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
