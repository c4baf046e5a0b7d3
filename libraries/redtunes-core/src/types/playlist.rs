/// Playlist domain types
use crate::types::{EntryId, PlaylistId, UserId, VideoId};
use serde::{Deserialize, Serialize};

/// A user-owned playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Owner user ID
    pub owner_id: UserId,

    /// Playlist name (not required to be unique)
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Whether non-owners may read the playlist's entries
    pub is_public: bool,

    /// Optional cover image URL
    pub cover_image: Option<String>,

    /// Creation timestamp (unix epoch milliseconds)
    pub created_at: i64,
}

/// Payload for creating a playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylist {
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub owner_id: UserId,
}

/// A song's membership record inside a playlist
///
/// Song metadata is denormalized into the entry at add time so listing a
/// playlist never needs another catalog round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Unique entry identifier
    pub id: EntryId,

    /// Parent playlist (ownership follows the playlist's owner)
    pub playlist_id: PlaylistId,

    /// External catalog track id
    pub video_id: VideoId,

    /// Song title
    pub title: String,

    /// Artist (catalog channel title)
    pub artist: String,

    /// Thumbnail URL
    pub thumbnail_url: String,

    /// Duration in the catalog's ISO-8601 notation, carried opaquely
    pub duration: String,

    /// When the song was added (unix epoch milliseconds)
    pub added_at: i64,
}

/// Payload for adding a song to a playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntry {
    pub video_id: VideoId,
    pub title: String,
    pub artist: String,
    pub thumbnail_url: String,
    pub duration: String,
}
