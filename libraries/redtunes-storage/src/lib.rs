//! RedTunes Storage
//!
//! `SQLite` persistence layer for the RedTunes library service.
//!
//! Playlists, playlist entries, recent plays and user preferences are all
//! scoped to an owning user. Every mutating function takes the acting
//! identity as an explicit argument; nothing is derived from ambient state.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each record kind owns its own queries and logic
//! - **Explicit Identity**: ownership checks happen per operation, against
//!   the caller-supplied `UserId`
//! - **Constraint-Backed Invariants**: the per-playlist song uniqueness rule
//!   is a database constraint, not an application-level scan
//!
//! # Example
//!
//! ```rust,no_run
//! use redtunes_storage::{create_pool, run_migrations};
//! use redtunes_core::types::CreatePlaylist;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://redtunes.db").await?;
//! run_migrations(&pool).await?;
//!
//! let user = redtunes_storage::users::create(&pool, "alice").await?;
//! let playlist = redtunes_storage::playlists::create(
//!     &pool,
//!     CreatePlaylist {
//!         name: "Road Trip".to_string(),
//!         description: None,
//!         is_public: false,
//!         owner_id: user.id,
//!     },
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

mod error;

// Vertical slices
pub mod playlists;
pub mod preferences;
pub mod recent_plays;
pub mod users;

pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into the binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at startup to bring the schema up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g. `sqlite://redtunes.db`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
