use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::pages::handlers;
use crate::features::pages::services::PageService;

/// Create routes for the public site pages
pub fn routes(service: Arc<PageService>) -> Router {
    Router::new()
        .route("/", get(handlers::redirect_root))
        .route("/contact", get(handlers::redirect_contact))
        .route("/{lang}", get(handlers::home_page))
        .route("/{lang}/menu", get(handlers::menu_page))
        .route("/{lang}/about", get(handlers::about_page))
        .route("/{lang}/contact", get(handlers::contact_page))
        .route("/{lang}/", get(handlers::trim_trailing_slash))
        .route("/{lang}/menu/", get(handlers::trim_trailing_slash))
        .route("/{lang}/about/", get(handlers::trim_trailing_slash))
        .route("/{lang}/contact/", get(handlers::trim_trailing_slash))
        .with_state(service)
}
