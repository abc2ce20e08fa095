use serde::Serialize;

use crate::features::ordering::services::build_whatsapp_link;
use crate::features::pages::views::MenuProductView;
use crate::features::settings::SiteSettings;
use crate::shared::constants::{
    DEFAULT_MAP_EMBED_URL, SETTING_ABOUT_INTRO, SETTING_ABOUT_KITCHEN, SETTING_ABOUT_STORY,
    SETTING_ABOUT_TITLE, SETTING_ADDRESS, SETTING_HERO_SUBTITLE, SETTING_HERO_TITLE,
    SETTING_MAP_EMBED_URL, SETTING_OPENING_HOURS, SETTING_PHONE, SETTING_WHATSAPP_PHONE,
};
use crate::shared::i18n::Dictionary;

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub title: String,
    pub subtitle: String,
    pub opening_hours: String,
    pub address: String,
    pub featured: Vec<MenuProductView>,
}

impl HomeView {
    pub fn new(dict: &Dictionary, settings: &SiteSettings, featured: Vec<MenuProductView>) -> Self {
        Self {
            title: settings.resolve(SETTING_HERO_TITLE, &dict.hero.title).to_string(),
            subtitle: settings
                .resolve(SETTING_HERO_SUBTITLE, &dict.hero.subtitle)
                .to_string(),
            opening_hours: settings
                .resolve(SETTING_OPENING_HOURS, &dict.hero.opening_hours_default)
                .to_string(),
            address: settings
                .resolve(SETTING_ADDRESS, &dict.hero.address_default)
                .to_string(),
            featured,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AboutView {
    pub title: String,
    pub intro: String,
    pub story: String,
    pub kitchen: String,
}

impl AboutView {
    pub fn new(dict: &Dictionary, settings: &SiteSettings) -> Self {
        Self {
            title: settings.resolve(SETTING_ABOUT_TITLE, &dict.about.title).to_string(),
            intro: settings.resolve(SETTING_ABOUT_INTRO, &dict.about.intro).to_string(),
            story: settings.resolve(SETTING_ABOUT_STORY, &dict.about.story).to_string(),
            kitchen: settings
                .resolve(SETTING_ABOUT_KITCHEN, &dict.about.kitchen)
                .to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactView {
    pub phone: String,
    pub whatsapp_phone: String,
    pub whatsapp_link: String,
    pub address: String,
    pub opening_hours: String,
    pub map_embed_url: String,
}

impl ContactView {
    pub fn new(dict: &Dictionary, settings: &SiteSettings, default_phone: &str) -> Self {
        let phone = settings.resolve(SETTING_PHONE, default_phone);
        let whatsapp_phone = settings.resolve(SETTING_WHATSAPP_PHONE, phone);
        Self {
            phone: phone.to_string(),
            whatsapp_phone: whatsapp_phone.to_string(),
            whatsapp_link: build_whatsapp_link(whatsapp_phone, &dict.contact.whatsapp_message),
            address: settings
                .resolve(SETTING_ADDRESS, &dict.contact.address_default)
                .to_string(),
            opening_hours: settings
                .resolve(SETTING_OPENING_HOURS, &dict.contact.opening_hours_default)
                .to_string(),
            map_embed_url: settings
                .get(SETTING_MAP_EMBED_URL)
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(DEFAULT_MAP_EMBED_URL)
                .to_string(),
        }
    }
}
