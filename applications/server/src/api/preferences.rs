/// User preferences API routes
use crate::{error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{extract::State, Json};
use redtunes_core::types::UserPreferences;
use redtunes_storage::preferences;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    #[serde(default)]
    pub favorite_genres: Vec<String>,
    #[serde(default)]
    pub dark_mode: bool,
}

/// GET /api/preferences
/// Get the caller's preferences, falling back to defaults if never saved
pub async fn get_preferences(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<UserPreferences>> {
    let prefs = preferences::get(&app_state.pool, auth.user_id())
        .await?
        .unwrap_or_else(|| UserPreferences::default_for(auth.user_id().clone()));
    Ok(Json(prefs))
}

/// PUT /api/preferences
/// Replace the caller's preferences
pub async fn update_preferences(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<UpdatePreferencesRequest>,
) -> Result<Json<UserPreferences>> {
    let prefs = UserPreferences {
        user_id: auth.user_id().clone(),
        favorite_genres: req.favorite_genres,
        dark_mode: req.dark_mode,
    };
    preferences::upsert(&app_state.pool, prefs.clone()).await?;
    Ok(Json(prefs))
}
