//! Playlists and playlist entries
//!
//! Ownership-checked CRUD over a user's playlists. All checks run against
//! the caller-supplied identity; absent and foreign playlists are reported
//! identically on write paths so existence cannot be probed.

use crate::now_millis;
use redtunes_core::{error::Result, types::*, CoreError};
use sqlx::{Row, SqlitePool};

/// Create a new playlist
///
/// No name-collision check; a user may own several playlists with the same
/// name.
pub async fn create(pool: &SqlitePool, playlist: CreatePlaylist) -> Result<Playlist> {
    let id = PlaylistId::generate();
    let created_at = now_millis();

    sqlx::query(
        r#"
        INSERT INTO playlists (id, owner_id, name, description, is_public, cover_image, created_at)
        VALUES (?, ?, ?, ?, ?, NULL, ?)
        "#,
    )
    .bind(&id)
    .bind(&playlist.owner_id)
    .bind(&playlist.name)
    .bind(&playlist.description)
    .bind(playlist.is_public)
    .bind(created_at)
    .execute(pool)
    .await?;

    Ok(Playlist {
        id,
        owner_id: playlist.owner_id,
        name: playlist.name,
        description: playlist.description,
        is_public: playlist.is_public,
        cover_image: None,
        created_at,
    })
}

/// Get the playlists owned by a user, in insertion order
pub async fn list_owned(pool: &SqlitePool, owner_id: &UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        r#"
        SELECT id, owner_id, name, description, is_public, cover_image, created_at
        FROM playlists
        WHERE owner_id = ?
        ORDER BY rowid
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_playlist).collect())
}

/// Get a playlist by ID, regardless of owner
///
/// Access decisions are made by the callers; this is a plain lookup.
pub async fn get_by_id(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        r#"
        SELECT id, owner_id, name, description, is_public, cover_image, created_at
        FROM playlists
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(row_to_playlist))
}

/// Add a song to a playlist
///
/// Only the playlist owner may add. A song may appear at most once per
/// playlist; the UNIQUE constraint reports a second add as `DuplicateEntry`
/// even under concurrent submission.
pub async fn add_entry(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    entry: CreateEntry,
    user_id: &UserId,
) -> Result<PlaylistEntry> {
    match get_by_id(pool, playlist_id).await? {
        Some(p) if p.owner_id == *user_id => {}
        _ => return Err(CoreError::NotFoundOrForbidden),
    }

    let id = EntryId::generate();
    let added_at = now_millis();

    let result = sqlx::query(
        r#"
        INSERT INTO playlist_entries
            (id, playlist_id, video_id, title, artist, thumbnail_url, duration, added_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(playlist_id)
    .bind(&entry.video_id)
    .bind(&entry.title)
    .bind(&entry.artist)
    .bind(&entry.thumbnail_url)
    .bind(&entry.duration)
    .bind(added_at)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(PlaylistEntry {
            id,
            playlist_id: playlist_id.clone(),
            video_id: entry.video_id,
            title: entry.title,
            artist: entry.artist,
            thumbnail_url: entry.thumbnail_url,
            duration: entry.duration,
            added_at,
        }),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            Err(CoreError::DuplicateEntry {
                playlist_id: playlist_id.clone(),
                video_id: entry.video_id,
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Get a playlist's entries, most recently added first
///
/// Readable by the owner, and by anyone when the playlist is public.
/// `viewer` is `None` for unauthenticated callers.
pub async fn list_entries(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    viewer: Option<&UserId>,
) -> Result<Vec<PlaylistEntry>> {
    let Some(playlist) = get_by_id(pool, playlist_id).await? else {
        return Err(CoreError::NotFoundOrForbidden);
    };

    let is_owner = viewer.is_some_and(|u| *u == playlist.owner_id);
    if !playlist.is_public && !is_owner {
        return Err(CoreError::NotFoundOrForbidden);
    }

    let rows = sqlx::query(
        r#"
        SELECT id, playlist_id, video_id, title, artist, thumbnail_url, duration, added_at
        FROM playlist_entries
        WHERE playlist_id = ?
        ORDER BY added_at DESC, rowid DESC
        "#,
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_entry).collect())
}

/// Remove a song from a playlist
///
/// Absent entries are `EntryNotFound`; entries in a playlist owned by
/// someone else are `Forbidden` and left intact.
pub async fn remove_entry(pool: &SqlitePool, entry_id: &EntryId, user_id: &UserId) -> Result<()> {
    let row = sqlx::query("SELECT playlist_id FROM playlist_entries WHERE id = ?")
        .bind(entry_id)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Err(CoreError::EntryNotFound(entry_id.clone()));
    };

    let playlist_id: PlaylistId = row.get("playlist_id");
    match get_by_id(pool, &playlist_id).await? {
        Some(p) if p.owner_id == *user_id => {}
        _ => return Err(CoreError::Forbidden),
    }

    sqlx::query("DELETE FROM playlist_entries WHERE id = ?")
        .bind(entry_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete a playlist and its entries
///
/// Owner only. Entries cascade-delete with the playlist.
pub async fn delete(pool: &SqlitePool, id: &PlaylistId, user_id: &UserId) -> Result<()> {
    match get_by_id(pool, id).await? {
        Some(p) if p.owner_id == *user_id => {
            sqlx::query("DELETE FROM playlists WHERE id = ?")
                .bind(id)
                .execute(pool)
                .await?;
            Ok(())
        }
        Some(_) => Err(CoreError::Forbidden),
        None => Err(CoreError::not_found("Playlist", id.as_str())),
    }
}

fn row_to_playlist(row: sqlx::sqlite::SqliteRow) -> Playlist {
    Playlist {
        id: row.get("id"),
        owner_id: row.get("owner_id"),
        name: row.get("name"),
        description: row.get("description"),
        is_public: row.get::<i64, _>("is_public") != 0,
        cover_image: row.get("cover_image"),
        created_at: row.get("created_at"),
    }
}

fn row_to_entry(row: sqlx::sqlite::SqliteRow) -> PlaylistEntry {
    PlaylistEntry {
        id: row.get("id"),
        playlist_id: row.get("playlist_id"),
        video_id: row.get("video_id"),
        title: row.get("title"),
        artist: row.get("artist"),
        thumbnail_url: row.get("thumbnail_url"),
        duration: row.get("duration"),
        added_at: row.get("added_at"),
    }
}
