/// Recent play history API routes
use crate::{error::Result, middleware::OptionalUser, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use redtunes_core::types::{RecentPlay, RecordPlay, VideoId};
use redtunes_storage::recent_plays;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RecordPlayRequest {
    pub video_id: String,
    pub title: String,
    pub artist: String,
    pub thumbnail_url: String,
}

/// POST /api/plays
/// Record a play in the caller's history; a silent no-op for anonymous
/// callers so playback never fails on a missing session
pub async fn record_play(
    State(app_state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Json(req): Json<RecordPlayRequest>,
) -> Result<StatusCode> {
    let Some(user_id) = user else {
        return Ok(StatusCode::NO_CONTENT);
    };

    let play = RecordPlay {
        video_id: VideoId::new(req.video_id),
        title: req.title,
        artist: req.artist,
        thumbnail_url: req.thumbnail_url,
    };
    recent_plays::record(&app_state.pool, &user_id, play).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/plays/recent
/// Get the caller's most recent plays, newest first; anonymous callers get
/// an empty list
pub async fn list_recent(
    State(app_state): State<AppState>,
    OptionalUser(user): OptionalUser,
) -> Result<Json<Vec<RecentPlay>>> {
    let Some(user_id) = user else {
        return Ok(Json(Vec::new()));
    };

    let plays = recent_plays::list_recent(&app_state.pool, &user_id).await?;
    Ok(Json(plays))
}
