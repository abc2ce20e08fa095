use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::menu::handlers;
use crate::features::menu::services::MenuService;

/// Create routes for the menu feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<MenuService>) -> Router {
    Router::new()
        .route("/api/{lang}/menu", get(handlers::get_menu_tree))
        .route("/api/{lang}/categories", get(handlers::list_categories))
        .route("/api/{lang}/featured", get(handlers::list_featured_products))
        .with_state(service)
}
