//! User preference storage
//!
//! One row per user; genre tags are stored as a JSON array.

use redtunes_core::{error::Result, types::*, CoreError};
use sqlx::{Row, SqlitePool};

/// Get a user's stored preferences, or None if none were ever saved
pub async fn get(pool: &SqlitePool, user_id: &UserId) -> Result<Option<UserPreferences>> {
    let row = sqlx::query(
        "SELECT user_id, favorite_genres, dark_mode FROM user_preferences WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| {
        let genres_json: String = row.get("favorite_genres");
        let favorite_genres = serde_json::from_str(&genres_json)?;
        Ok(UserPreferences {
            user_id: row.get("user_id"),
            favorite_genres,
            dark_mode: row.get::<i64, _>("dark_mode") != 0,
        })
    })
    .transpose()
}

/// Create or replace a user's preferences
pub async fn upsert(pool: &SqlitePool, prefs: UserPreferences) -> Result<()> {
    let genres_json =
        serde_json::to_string(&prefs.favorite_genres).map_err(CoreError::Serialization)?;

    sqlx::query(
        r#"
        INSERT INTO user_preferences (user_id, favorite_genres, dark_mode)
        VALUES (?, ?, ?)
        ON CONFLICT(user_id)
        DO UPDATE SET favorite_genres = excluded.favorite_genres,
                      dark_mode = excluded.dark_mode
        "#,
    )
    .bind(&prefs.user_id)
    .bind(genres_json)
    .bind(prefs.dark_mode)
    .execute(pool)
    .await?;

    Ok(())
}
