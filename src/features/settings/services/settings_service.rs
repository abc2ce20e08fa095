use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::core::error::Result;
use crate::features::settings::services::SettingsSource;

/// Snapshot of the site settings for one request
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SiteSettings(HashMap<String, Option<String>>);

impl SiteSettings {
    pub fn new(values: HashMap<String, Option<String>>) -> Self {
        Self(values)
    }

    /// Value for `key`; a stored NULL counts as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_deref())
    }

    /// Value for `key`, else `default`
    pub fn resolve<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// First key that has a value, else `default`
    pub fn resolve_first<'a>(&'a self, keys: &[&str], default: &'a str) -> &'a str {
        keys.iter()
            .find_map(|key| self.get(key))
            .unwrap_or(default)
    }

    pub fn into_inner(self) -> HashMap<String, Option<String>> {
        self.0
    }
}

/// Service for site settings. Fetch errors propagate to the caller.
pub struct SettingsService {
    source: Arc<dyn SettingsSource>,
}

impl SettingsService {
    pub fn new(source: Arc<dyn SettingsSource>) -> Self {
        Self { source }
    }

    pub async fn load(&self) -> Result<SiteSettings> {
        Ok(SiteSettings::new(self.source.all().await?))
    }
}
