/// API route modules
pub mod auth;
pub mod catalog;
pub mod health;
pub mod playlists;
pub mod plays;
pub mod preferences;
