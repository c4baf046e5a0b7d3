/// Domain types for RedTunes entities
mod ids;
mod playlist;
mod preferences;
mod recent_play;
mod song;
mod user;

pub use ids::{EntryId, PlaylistId, UserId, VideoId};
pub use playlist::{CreateEntry, CreatePlaylist, Playlist, PlaylistEntry};
pub use preferences::UserPreferences;
pub use recent_play::{RecentPlay, RecordPlay};
pub use song::{Song, VideoDuration};
pub use user::User;
