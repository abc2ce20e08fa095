//! Key/value site settings (texts, phone numbers, address, map URL).
//!
//! Pages read these per request and fall back to the locale dictionary for
//! anything missing. Unlike the menu, a failed settings fetch is an error.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{PgSettingsSource, SettingsService, SiteSettings};
