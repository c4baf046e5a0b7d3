//! Recent play history
//!
//! Append-only per-user log. Rows are never updated; reads return a fixed
//! window of the newest entries.

use crate::now_millis;
use redtunes_core::{error::Result, types::*};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// How many rows a history read returns
pub const RECENT_WINDOW: i64 = 20;

/// Append a play to the user's history
///
/// Repeated plays of the same song create separate rows; there is no
/// uniqueness constraint here.
pub async fn record(pool: &SqlitePool, user_id: &UserId, play: RecordPlay) -> Result<RecentPlay> {
    let id = Uuid::new_v4().to_string();
    let played_at = now_millis();

    sqlx::query(
        r#"
        INSERT INTO recent_plays (id, user_id, video_id, title, artist, thumbnail_url, played_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(user_id)
    .bind(&play.video_id)
    .bind(&play.title)
    .bind(&play.artist)
    .bind(&play.thumbnail_url)
    .bind(played_at)
    .execute(pool)
    .await?;

    Ok(RecentPlay {
        id,
        user_id: user_id.clone(),
        video_id: play.video_id,
        title: play.title,
        artist: play.artist,
        thumbnail_url: play.thumbnail_url,
        played_at,
    })
}

/// Get the user's most recent plays, newest first
///
/// Returns at most [`RECENT_WINDOW`] rows. Ties on `played_at` (plays within
/// the same millisecond) fall back to insertion order.
pub async fn list_recent(pool: &SqlitePool, user_id: &UserId) -> Result<Vec<RecentPlay>> {
    let rows = sqlx::query(
        r#"
        SELECT id, user_id, video_id, title, artist, thumbnail_url, played_at
        FROM recent_plays
        WHERE user_id = ?
        ORDER BY played_at DESC, rowid DESC
        LIMIT ?
        "#,
    )
    .bind(user_id)
    .bind(RECENT_WINDOW)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| RecentPlay {
            id: row.get("id"),
            user_id: row.get("user_id"),
            video_id: row.get("video_id"),
            title: row.get("title"),
            artist: row.get("artist"),
            thumbnail_url: row.get("thumbnail_url"),
            played_at: row.get("played_at"),
        })
        .collect())
}
