use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::menu::MenuService;
use crate::features::ordering::dtos::{WhatsAppOrderRequestDto, WhatsAppOrderResponseDto};
use crate::features::ordering::models::PricedItem;
use crate::features::ordering::services::{build_order_message, build_whatsapp_link};
use crate::features::settings::SettingsService;
use crate::shared::constants::{SETTING_PHONE, SETTING_WHATSAPP_PHONE};
use crate::shared::i18n::{dictionary, Locale};

/// Service turning a cart into a WhatsApp order link
pub struct OrderService {
    menu: Arc<MenuService>,
    settings: Arc<SettingsService>,
    default_phone: String,
}

impl OrderService {
    pub fn new(
        menu: Arc<MenuService>,
        settings: Arc<SettingsService>,
        default_phone: impl Into<String>,
    ) -> Self {
        Self {
            menu,
            settings,
            default_phone: default_phone.into(),
        }
    }

    /// Orderable products of the current menu, keyed by id
    pub async fn catalog(&self, locale: Locale) -> HashMap<Uuid, PricedItem> {
        let tree = self.menu.menu_tree(locale).await;
        tree.iter()
            .flat_map(|node| node.products())
            .filter(|p| p.product.is_available)
            .map(|p| {
                (
                    p.product.id,
                    PricedItem {
                        name: p.name.clone(),
                        unit_price: p.effective_price(),
                    },
                )
            })
            .collect()
    }

    /// Price the submitted cart and build the message and link.
    ///
    /// Products that are not on the menu (or not available) are left out.
    pub async fn whatsapp_order(
        &self,
        locale: Locale,
        request: &WhatsAppOrderRequestDto,
    ) -> Result<WhatsAppOrderResponseDto> {
        let (catalog, settings) = tokio::join!(self.catalog(locale), self.settings.load());
        let settings = settings?;

        let summary = request.to_cart().summarize(&catalog);
        let message = build_order_message(dictionary(locale), &summary);
        let phone = settings.resolve_first(
            &[SETTING_WHATSAPP_PHONE, SETTING_PHONE],
            &self.default_phone,
        );
        let link = build_whatsapp_link(phone, &message);

        tracing::debug!(
            locale = %locale,
            items = summary.item_count,
            "Built WhatsApp order link"
        );

        Ok(WhatsAppOrderResponseDto::new(summary, message, link))
    }
}
