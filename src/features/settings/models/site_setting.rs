use sqlx::FromRow;

/// Database model for one key/value site setting
#[derive(Debug, Clone, FromRow)]
pub struct SiteSetting {
    pub key: String,
    pub value: Option<String>,
}
