/// Catalog proxy API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use redtunes_core::types::{Song, VideoDuration, VideoId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub max_results: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DurationsParams {
    /// Comma-separated video ids
    pub ids: String,
}

/// GET /api/catalog/search?q=...&max_results=...
pub async fn search(
    State(app_state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Song>>> {
    let songs = app_state
        .catalog
        .search(&params.q, params.max_results)
        .await?;
    Ok(Json(songs))
}

/// GET /api/catalog/durations?ids=a,b,c
pub async fn durations(
    State(app_state): State<AppState>,
    Query(params): Query<DurationsParams>,
) -> Result<Json<Vec<VideoDuration>>> {
    let ids: Vec<VideoId> = params
        .ids
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(VideoId::new)
        .collect();

    let durations = app_state.catalog.video_durations(&ids).await?;
    Ok(Json(durations))
}
