use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Supported site languages. Parsed once at the request boundary, so the
/// rest of the code never re-validates a language code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Tr,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Tr, Locale::En];

    /// Language code as stored in the `language_code` columns
    pub fn code(self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::En => "en",
        }
    }

    pub fn parse(value: &str) -> Option<Locale> {
        Self::ALL.into_iter().find(|locale| locale.code() == value)
    }

    /// Unknown or missing values fall back to the default locale
    pub fn from_param_or_default(value: Option<&str>) -> Locale {
        value.and_then(Self::parse).unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnsupportedLocale(pub String);

impl fmt::Display for UnsupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale '{}'", self.0)
    }
}

impl std::error::Error for UnsupportedLocale {}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}

/// Rewrite the locale segment of a site path, e.g. `/tr/menu` -> `/en/menu`.
pub fn switch_locale_path(path: &str, target: Locale) -> String {
    if path.is_empty() || path == "/" {
        return format!("/{}", target);
    }

    let mut segments: Vec<&str> = path.split('/').collect();
    if segments.len() > 1 {
        segments[1] = target.code();
    }

    let next = segments.join("/");
    if next.is_empty() {
        "/".to_string()
    } else {
        next
    }
}
