//! Test helpers and fixtures for storage integration tests
//!
//! These helpers use real SQLite files (not in-memory) so migrations,
//! constraints and indexes behave exactly as in production.

use redtunes_core::types::*;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = redtunes_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        redtunes_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: create a user
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> UserId {
    redtunes_storage::users::create(pool, username)
        .await
        .expect("Failed to create test user")
        .id
}

/// Test fixture: create a private playlist
pub async fn create_test_playlist(pool: &SqlitePool, name: &str, owner_id: UserId) -> PlaylistId {
    redtunes_storage::playlists::create(
        pool,
        CreatePlaylist {
            name: name.to_string(),
            description: None,
            is_public: false,
            owner_id,
        },
    )
    .await
    .expect("Failed to create test playlist")
    .id
}

/// Test fixture: entry payload for a given video id
pub fn entry_for(video_id: &str) -> CreateEntry {
    CreateEntry {
        video_id: VideoId::new(video_id),
        title: format!("Song {video_id}"),
        artist: "Test Artist".to_string(),
        thumbnail_url: "https://i.ytimg.com/vi/test/mqdefault.jpg".to_string(),
        duration: "PT3M30S".to_string(),
    }
}

/// Test fixture: play payload for a given video id
pub fn play_for(video_id: &str) -> RecordPlay {
    RecordPlay {
        video_id: VideoId::new(video_id),
        title: format!("Song {video_id}"),
        artist: "Test Artist".to_string(),
        thumbnail_url: "https://i.ytimg.com/vi/test/mqdefault.jpg".to_string(),
    }
}
