use std::collections::HashMap;
use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::settings::services::SettingsService;
use crate::shared::types::{ApiResponse, Meta};

/// Get all site settings as a key/value map
#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Site settings", body = ApiResponse<HashMap<String, Option<String>>>),
        (status = 500, description = "Settings could not be loaded")
    ),
    tag = "settings"
)]
pub async fn get_settings(
    State(service): State<Arc<SettingsService>>,
) -> Result<Json<ApiResponse<HashMap<String, Option<String>>>>> {
    let settings = service.load().await?.into_inner();
    let meta = Meta::total(settings.len());
    Ok(Json(ApiResponse::success(Some(settings), None, Some(meta))))
}
