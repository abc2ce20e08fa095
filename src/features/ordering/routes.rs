use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::ordering::handlers;
use crate::features::ordering::services::OrderService;

/// Create routes for the ordering feature
pub fn routes(service: Arc<OrderService>) -> Router {
    Router::new()
        .route("/api/{lang}/order/whatsapp", post(handlers::create_whatsapp_order))
        .with_state(service)
}
