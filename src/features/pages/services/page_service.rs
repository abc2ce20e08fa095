use std::sync::Arc;

use minijinja::context;

use crate::core::error::Result;
use crate::features::menu::MenuService;
use crate::features::pages::views::{
    AboutView, ContactView, HomeView, LayoutView, MenuCategoryView, MenuPageView,
    MenuProductView, Page,
};
use crate::features::settings::SettingsService;
use crate::shared::constants::{FEATURED_PRODUCTS_LIMIT, MAX_CART_QUANTITY};
use crate::shared::i18n::{dictionary, Locale};
use crate::shared::templates::render_page;

/// Renders the public site pages.
///
/// Settings are loaded for every page and a failure is returned as an
/// error. Menu data degrades to empty sections instead.
pub struct PageService {
    menu: Arc<MenuService>,
    settings: Arc<SettingsService>,
    default_phone: String,
}

impl PageService {
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

    pub async fn home(&self, locale: Locale, path: &str) -> Result<String> {
        let (settings, featured) = tokio::join!(
            self.settings.load(),
            self.menu.featured_products(locale, FEATURED_PRODUCTS_LIMIT),
        );
        let settings = settings?;

        let layout = LayoutView::new(locale, Page::Home, path, &settings, &self.default_phone);
        let featured = featured.iter().map(MenuProductView::from).collect();
        let home = HomeView::new(layout.dict, &settings, featured);

        Ok(render_page("home.html", context! { layout, home })?)
    }

    pub async fn menu(&self, locale: Locale, path: &str) -> Result<String> {
        let (settings, tree) = tokio::join!(self.settings.load(), self.menu.menu_tree(locale));
        let settings = settings?;

        let layout = LayoutView::new(locale, Page::Menu, path, &settings, &self.default_phone);
        let menu = MenuPageView {
            categories: tree.iter().map(MenuCategoryView::from).collect(),
            order_url: format!("/api/{}/order/whatsapp", locale),
            max_quantity: MAX_CART_QUANTITY,
        };

        Ok(render_page("menu.html", context! { layout, menu })?)
    }

    pub async fn about(&self, locale: Locale, path: &str) -> Result<String> {
        let settings = self.settings.load().await?;

        let layout = LayoutView::new(locale, Page::About, path, &settings, &self.default_phone);
        let about = AboutView::new(dictionary(locale), &settings);

        Ok(render_page("about.html", context! { layout, about })?)
    }

    pub async fn contact(&self, locale: Locale, path: &str) -> Result<String> {
        let settings = self.settings.load().await?;

        let layout = LayoutView::new(locale, Page::Contact, path, &settings, &self.default_phone);
        let contact = ContactView::new(dictionary(locale), &settings, &self.default_phone);

        Ok(render_page("contact.html", context! { layout, contact })?)
    }
}
