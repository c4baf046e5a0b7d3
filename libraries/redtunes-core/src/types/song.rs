/// Transient song shapes returned by the catalog proxy
use crate::types::VideoId;
use serde::{Deserialize, Serialize};

/// A song as returned by catalog search
///
/// Never persisted as its own entity; its fields are embedded into
/// `PlaylistEntry` and `RecentPlay` records on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// External catalog track id
    pub video_id: VideoId,

    /// Song title
    pub title: String,

    /// Artist (catalog channel title)
    pub artist: String,

    /// Thumbnail URL (medium resolution preferred)
    pub thumbnail_url: String,

    /// Publication timestamp as reported by the catalog
    pub published_at: Option<String>,

    /// Duration in the catalog's ISO-8601 notation, when known
    pub duration: Option<String>,
}

/// Duration lookup result for one catalog track
///
/// The duration string is passed through in the catalog's own notation
/// (e.g. `PT3M30S`) without parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDuration {
    pub video_id: VideoId,
    pub duration: String,
}
