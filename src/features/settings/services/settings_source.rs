use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::settings::models::SiteSetting;

/// Read access to the `site_settings` key/value table
#[async_trait]
pub trait SettingsSource: Send + Sync {
    async fn all(&self) -> Result<HashMap<String, Option<String>>>;
}

pub struct PgSettingsSource {
    pool: PgPool,
}

impl PgSettingsSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsSource for PgSettingsSource {
    async fn all(&self) -> Result<HashMap<String, Option<String>>> {
        let rows = sqlx::query_as::<_, SiteSetting>("SELECT key, value FROM site_settings")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load site settings: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(|s| (s.key, s.value)).collect())
    }
}
