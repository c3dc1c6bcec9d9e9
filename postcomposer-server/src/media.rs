//! `/api/media` handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use libpostcomposer::{MediaFilter, MediaItem};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MediaQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default, rename = "type")]
    pub filter: MediaFilter,
}

#[derive(Debug, Serialize)]
pub struct MediaResponse {
    pub media: Vec<MediaItem>,
}

/// `GET /api/media?q=<query>&type=<all|image|video>`
pub async fn list_media(
    State(state): State<AppState>,
    query: Result<Query<MediaQuery>, QueryRejection>,
) -> Result<Json<MediaResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected media query");
        ApiError::BadRequest("Invalid media query".to_string())
    })?;

    let catalog = state
        .media()
        .load_catalog()
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to fetch media"))?;

    let media = catalog
        .displayed(&query.q, query.filter)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(MediaResponse { media }))
}
