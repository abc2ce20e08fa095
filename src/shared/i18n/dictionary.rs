use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::shared::i18n::Locale;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dictionary {
    pub site: SiteStrings,
    pub navbar: NavbarStrings,
    pub hero: HeroStrings,
    pub footer: FooterStrings,
    pub menu: MenuStrings,
    pub order: OrderStrings,
    pub about: AboutStrings,
    pub contact: ContactStrings,
    pub error: ErrorStrings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteStrings {
    pub name: String,
    pub kind: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavbarStrings {
    pub home: String,
    pub menu: String,
    pub about: String,
    pub contact: String,
    pub whatsapp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroStrings {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub view_menu: String,
    pub order_whatsapp: String,
    pub opening_hours_label: String,
    pub opening_hours_default: String,
    pub location_label: String,
    pub address_default: String,
    pub family_label: String,
    pub family_text: String,
    pub picks_kicker: String,
    pub picks_title: String,
    pub price_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterStrings {
    pub tagline: String,
    pub address_label: String,
    pub hours_label: String,
    pub phone_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuStrings {
    pub title: String,
    pub intro: String,
    pub featured_badge: String,
    pub unavailable_badge: String,
    pub add_to_cart: String,
    pub add_one_more: String,
    pub cart_label: String,
    pub cart_empty: String,
    pub cart_items: String,
    pub order_whatsapp: String,
}

/// Strings used to compose the WhatsApp order message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStrings {
    pub greeting: String,
    pub items_header: String,
    pub approx_total: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutStrings {
    pub title: String,
    pub intro: String,
    pub story: String,
    pub kitchen: String,
    pub story_heading: String,
    pub kitchen_heading: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactStrings {
    pub title: String,
    pub intro: String,
    pub contact_heading: String,
    pub phone_label: String,
    pub address_label: String,
    pub hours_label: String,
    pub address_default: String,
    pub opening_hours_default: String,
    pub map_heading: String,
    pub map_intro: String,
    pub map_title: String,
    pub whatsapp_message: String,
}

/// Shown when a page cannot be rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorStrings {
    pub title: String,
    pub message: String,
    pub back_home: String,
}

lazy_static! {
    static ref TR: Dictionary = serde_json::from_str(include_str!("../../../messages/tr.json"))
        .expect("messages/tr.json is not a valid dictionary");
    static ref EN: Dictionary = serde_json::from_str(include_str!("../../../messages/en.json"))
        .expect("messages/en.json is not a valid dictionary");
}

/// Static UI strings for a locale
pub fn dictionary(locale: Locale) -> &'static Dictionary {
    match locale {
        Locale::Tr => &TR,
        Locale::En => &EN,
    }
}
