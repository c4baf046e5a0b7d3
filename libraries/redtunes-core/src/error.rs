/// Core error types for RedTunes
use crate::types::{EntryId, PlaylistId, VideoId};
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for the RedTunes library service
#[derive(Error, Debug)]
pub enum CoreError {
    /// No identity available (missing or expired session)
    #[error("Not authenticated")]
    Unauthenticated,

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Playlist entry not found
    #[error("Song not found: {0}")]
    EntryNotFound(EntryId),

    /// Record exists but is not owned by the caller
    #[error("Access denied")]
    Forbidden,

    /// Record is either absent or not owned by the caller. The two cases are
    /// deliberately conflated on write paths so callers cannot probe for the
    /// existence of other users' playlists.
    #[error("Playlist not found or access denied")]
    NotFoundOrForbidden,

    /// Uniqueness violation when adding a song to a playlist
    #[error("Song already in playlist: {video_id}")]
    DuplicateEntry {
        playlist_id: PlaylistId,
        video_id: VideoId,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
