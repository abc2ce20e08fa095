use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::settings::handlers;
use crate::features::settings::services::SettingsService;

/// Create routes for the settings feature
pub fn routes(service: Arc<SettingsService>) -> Router {
    Router::new()
        .route("/api/settings", get(handlers::get_settings))
        .with_state(service)
}
