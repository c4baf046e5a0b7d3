/// Playlists API routes
use crate::{
    error::Result,
    middleware::{AuthenticatedUser, OptionalUser},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use redtunes_core::types::{
    CreateEntry, CreatePlaylist, EntryId, Playlist, PlaylistEntry, PlaylistId, VideoId,
};
use redtunes_storage::playlists;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub video_id: String,
    pub title: String,
    pub artist: String,
    pub thumbnail_url: String,
    pub duration: String,
}

/// GET /api/playlists
/// Get the caller's playlists; anonymous callers get an empty list
pub async fn list_playlists(
    State(app_state): State<AppState>,
    OptionalUser(user): OptionalUser,
) -> Result<Json<Vec<Playlist>>> {
    let Some(user_id) = user else {
        return Ok(Json(Vec::new()));
    };

    let playlists = playlists::list_owned(&app_state.pool, &user_id).await?;
    Ok(Json(playlists))
}

/// POST /api/playlists
/// Create a new playlist owned by the caller
pub async fn create_playlist(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<CreatePlaylistRequest>,
) -> Result<Json<Playlist>> {
    let create = CreatePlaylist {
        name: req.name,
        description: req.description,
        is_public: req.is_public,
        owner_id: auth.user_id().clone(),
    };
    let playlist = playlists::create(&app_state.pool, create).await?;
    Ok(Json(playlist))
}

/// DELETE /api/playlists/:id
/// Delete a playlist the caller owns
pub async fn delete_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<serde_json::Value>> {
    let playlist_id = PlaylistId::new(id);
    playlists::delete(&app_state.pool, &playlist_id, auth.user_id()).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// POST /api/playlists/:id/entries
/// Add a song to a playlist the caller owns
pub async fn add_entry(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<AddEntryRequest>,
) -> Result<Json<PlaylistEntry>> {
    let playlist_id = PlaylistId::new(id);
    let entry = CreateEntry {
        video_id: VideoId::new(req.video_id),
        title: req.title,
        artist: req.artist,
        thumbnail_url: req.thumbnail_url,
        duration: req.duration,
    };

    let entry =
        playlists::add_entry(&app_state.pool, &playlist_id, entry, auth.user_id()).await?;
    Ok(Json(entry))
}

/// GET /api/playlists/:id/entries
/// Get a playlist's entries, newest first; public playlists need no token
pub async fn list_entries(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    OptionalUser(user): OptionalUser,
) -> Result<Json<Vec<PlaylistEntry>>> {
    let playlist_id = PlaylistId::new(id);
    let entries = playlists::list_entries(&app_state.pool, &playlist_id, user.as_ref()).await?;
    Ok(Json(entries))
}

/// DELETE /api/playlists/entries/:id
/// Remove a song from a playlist the caller owns
pub async fn remove_entry(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<serde_json::Value>> {
    let entry_id = EntryId::new(id);
    playlists::remove_entry(&app_state.pool, &entry_id, auth.user_id()).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
