use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::features::ordering::services::build_whatsapp_link;
use crate::features::settings::SiteSettings;
use crate::shared::constants::{
    SETTING_ADDRESS, SETTING_OPENING_HOURS, SETTING_PHONE, SETTING_WHATSAPP_PHONE,
};
use crate::shared::i18n::{dictionary, switch_locale_path, Dictionary, Locale};

/// Site page, used for the active navbar entry and the page title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Menu,
    About,
    Contact,
}

impl Page {
    /// Path of this page under `locale`, e.g. `/en/menu`
    pub fn path(self, locale: Locale) -> String {
        match self {
            Page::Home => format!("/{}", locale),
            Page::Menu => format!("/{}/menu", locale),
            Page::About => format!("/{}/about", locale),
            Page::Contact => format!("/{}/contact", locale),
        }
    }

    fn title(self, dict: &Dictionary) -> &str {
        match self {
            Page::Home => &dict.navbar.home,
            Page::Menu => &dict.navbar.menu,
            Page::About => &dict.navbar.about,
            Page::Contact => &dict.navbar.contact,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NavLinks {
    pub home: String,
    pub menu: String,
    pub about: String,
    pub contact: String,
}

impl NavLinks {
    fn for_locale(locale: Locale) -> Self {
        Self {
            home: Page::Home.path(locale),
            menu: Page::Menu.path(locale),
            about: Page::About.path(locale),
            contact: Page::Contact.path(locale),
        }
    }
}

/// One entry of the TR | EN switcher
#[derive(Debug, Serialize)]
pub struct LocaleLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct FooterView {
    pub address: String,
    pub opening_hours: String,
    pub phone: String,
    pub whatsapp_phone: String,
}

/// Everything the shared layout (navbar and footer) needs
#[derive(Debug, Serialize)]
pub struct LayoutView {
    pub locale: Locale,
    pub dict: &'static Dictionary,
    pub active: Page,
    pub title: String,
    pub links: NavLinks,
    pub switcher: Vec<LocaleLink>,
    pub whatsapp_link: String,
    pub footer: FooterView,
    pub year: i32,
}

impl LayoutView {
    /// `path` is the request path, used to build the language switcher links
    pub fn new(
        locale: Locale,
        active: Page,
        path: &str,
        settings: &SiteSettings,
        default_phone: &str,
    ) -> Self {
        let dict = dictionary(locale);
        let phone = settings.resolve(SETTING_PHONE, default_phone);
        let whatsapp_phone =
            settings.resolve_first(&[SETTING_WHATSAPP_PHONE, SETTING_PHONE], default_phone);

        let switcher = Locale::ALL
            .into_iter()
            .map(|target| LocaleLink {
                label: target.code().to_uppercase(),
                href: switch_locale_path(path, target),
                active: target == locale,
            })
            .collect();

        Self {
            locale,
            dict,
            active,
            title: active.title(dict).to_string(),
            links: NavLinks::for_locale(locale),
            switcher,
            whatsapp_link: build_whatsapp_link(whatsapp_phone, &dict.order.greeting),
            footer: FooterView {
                address: settings
                    .resolve(SETTING_ADDRESS, &dict.hero.address_default)
                    .to_string(),
                opening_hours: settings
                    .resolve(SETTING_OPENING_HOURS, &dict.hero.opening_hours_default)
                    .to_string(),
                phone: phone.to_string(),
                whatsapp_phone: whatsapp_phone.to_string(),
            },
            year: Utc::now().year(),
        }
    }
}
