//! RedTunes Core
//!
//! Domain types and error handling shared across the RedTunes backend.
//!
//! This crate defines:
//! - **Domain Types**: `Playlist`, `PlaylistEntry`, `RecentPlay`, `Song`, `User`
//! - **Id Newtypes**: `UserId`, `PlaylistId`, `EntryId`, `VideoId`
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use redtunes_core::types::{CreatePlaylist, Song, UserId, VideoId};
//!
//! let owner = UserId::generate();
//! let playlist = CreatePlaylist {
//!     name: "Road Trip".to_string(),
//!     description: None,
//!     is_public: false,
//!     owner_id: owner,
//! };
//!
//! let song = Song {
//!     video_id: VideoId::new("dQw4w9WgXcQ"),
//!     title: "Some Song".to_string(),
//!     artist: "Some Channel".to_string(),
//!     thumbnail_url: "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg".to_string(),
//!     published_at: None,
//!     duration: None,
//! };
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{
    CreateEntry, CreatePlaylist, EntryId, Playlist, PlaylistEntry, PlaylistId, RecentPlay,
    RecordPlay, Song, User, UserId, UserPreferences, VideoDuration, VideoId,
};
