pub mod settings_service;
pub mod settings_source;

pub use settings_service::{SettingsService, SiteSettings};
pub use settings_source::{PgSettingsSource, SettingsSource};
