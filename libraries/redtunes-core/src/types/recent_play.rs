/// Recent play history types
use crate::types::{UserId, VideoId};
use serde::{Deserialize, Serialize};

/// One row of a user's append-only play history
///
/// Repeated plays of the same song create multiple rows; rows are never
/// mutated after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentPlay {
    /// Unique row identifier
    pub id: String,

    /// The user who played the song
    pub user_id: UserId,

    /// External catalog track id
    pub video_id: VideoId,

    /// Song title
    pub title: String,

    /// Artist (catalog channel title)
    pub artist: String,

    /// Thumbnail URL
    pub thumbnail_url: String,

    /// When the play happened (unix epoch milliseconds)
    pub played_at: i64,
}

/// Payload for recording a play
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPlay {
    pub video_id: VideoId,
    pub title: String,
    pub artist: String,
    pub thumbnail_url: String,
}
