/// Number of featured products shown on the home page
pub const FEATURED_PRODUCTS_LIMIT: usize = 3;

/// Highest quantity accepted for a single cart line
pub const MAX_CART_QUANTITY: u32 = 99;

/// Highest number of lines accepted in one order request
pub const MAX_ORDER_LINES: u64 = 100;

/// Icon shown for a subcategory without its own icon or a known keyword
pub const FALLBACK_SUBCATEGORY_ICON: &str = "📌";

/// Google Maps embed used when `map_embed_url` is not configured
pub const DEFAULT_MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3010.3785473532757!2d29.070476675514417!3d41.01697341889025!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x14cac86db24105e1%3A0xf328918e7271cd4e!2zVGF0bMSxIEJhaMOnZQ!5e0!3m2!1str!2str!4v1765907011401!5m2!1str!2str";

// =============================================================================
// SITE SETTING KEYS
// =============================================================================

pub const SETTING_HERO_TITLE: &str = "hero_title";
pub const SETTING_HERO_SUBTITLE: &str = "hero_subtitle";
pub const SETTING_PHONE: &str = "phone";
pub const SETTING_WHATSAPP_PHONE: &str = "whatsapp_phone";
pub const SETTING_ADDRESS: &str = "address";
pub const SETTING_OPENING_HOURS: &str = "opening_hours";
pub const SETTING_MAP_EMBED_URL: &str = "map_embed_url";
pub const SETTING_ABOUT_TITLE: &str = "about_title";
pub const SETTING_ABOUT_INTRO: &str = "about_intro";
pub const SETTING_ABOUT_STORY: &str = "about_story";
pub const SETTING_ABOUT_KITCHEN: &str = "about_kitchen";
