//! Site languages and the static per-locale UI strings.
//!
//! Localized data rows come from the database; everything hardcoded in the
//! pages (labels, fallback texts for missing site settings) lives in
//! `messages/<code>.json`.

pub mod dictionary;
pub mod locale;

pub use dictionary::{dictionary, Dictionary};
pub use locale::{switch_locale_path, Locale};
