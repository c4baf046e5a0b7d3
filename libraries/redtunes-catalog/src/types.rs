//! Catalog client configuration and YouTube Data API response shapes.

use serde::Deserialize;

/// Default base URL of the YouTube Data API.
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Configuration for [`CatalogClient`](crate::CatalogClient).
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API
    pub api_base_url: String,

    /// API credential; its absence makes every call fail with
    /// [`CatalogError::MissingApiKey`](crate::CatalogError::MissingApiKey)
    pub api_key: Option<String>,
}

impl CatalogConfig {
    /// Configuration against the real YouTube Data API.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Configuration against an alternate base URL (used by tests).
    pub fn with_base_url(api_base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            api_key,
        }
    }
}

// Wire shapes of the two consumed endpoints. Only the fields RedTunes reads
// are modeled; everything else in the payload is ignored.

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub id: SearchItemId,
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchItemId {
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snippet {
    pub title: String,
    pub channel_title: String,
    pub thumbnails: Thumbnails,
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnails {
    pub medium: Option<Thumbnail>,
    #[serde(rename = "default")]
    pub fallback: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideosResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoItem {
    pub id: String,
    pub content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentDetails {
    pub duration: String,
}
