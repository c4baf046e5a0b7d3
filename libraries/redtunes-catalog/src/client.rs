//! Catalog client for search and duration lookups.

use crate::error::{CatalogError, Result};
use crate::types::{CatalogConfig, SearchItem, SearchResponse, VideosResponse};
use redtunes_core::types::{Song, VideoDuration, VideoId};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Default result window for catalog searches.
pub const DEFAULT_MAX_RESULTS: u32 = 20;

/// YouTube video category for music.
const MUSIC_CATEGORY_ID: &str = "10";

/// Client for the external music catalog (YouTube Data API).
///
/// Holds a connection-pooling HTTP client; cheap to clone via `Arc` at the
/// call sites. Every operation is one outbound GET with the platform-default
/// semantics: no retry, no caching.
pub struct CatalogClient {
    http: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// A missing API key is not an error here; it surfaces per call so the
    /// rest of the application can run without catalog access.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.api_base_url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("RedTunes/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: CatalogConfig {
                api_base_url,
                api_key: config.api_key,
            },
        })
    }

    /// Search the catalog for music videos.
    ///
    /// `max_results` defaults to [`DEFAULT_MAX_RESULTS`]. Fails with
    /// [`CatalogError::MissingApiKey`] before any outbound request when no
    /// credential is configured.
    pub async fn search(&self, query: &str, max_results: Option<u32>) -> Result<Vec<Song>> {
        let key = self.api_key()?;
        let max_results = max_results.unwrap_or(DEFAULT_MAX_RESULTS);

        debug!(query = %query, max_results, "Searching music catalog");

        let url = format!("{}/search", self.config.api_base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("videoCategoryId", MUSIC_CATEGORY_ID),
                ("q", query),
                ("maxResults", &max_results.to_string()),
                ("key", key),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Catalog search request failed");
                CatalogError::Unavailable
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Catalog search returned an error");
            return Err(CatalogError::Unavailable);
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        Ok(parsed.items.into_iter().filter_map(item_to_song).collect())
    }

    /// Look up durations for a batch of catalog tracks.
    ///
    /// Issues a single request with all ids joined together. Durations come
    /// back in the catalog's ISO-8601 notation and are passed through
    /// unmodified.
    pub async fn video_durations(&self, video_ids: &[VideoId]) -> Result<Vec<VideoDuration>> {
        let key = self.api_key()?;

        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = video_ids
            .iter()
            .map(VideoId::as_str)
            .collect::<Vec<_>>()
            .join(",");

        debug!(ids = %ids, "Fetching video durations");

        let url = format!("{}/videos", self.config.api_base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("part", "contentDetails"), ("id", &ids), ("key", key)])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Catalog duration request failed");
                CatalogError::Unavailable
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Catalog duration lookup returned an error");
            return Err(CatalogError::Unavailable);
        }

        let parsed: VideosResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        Ok(parsed
            .items
            .into_iter()
            .map(|item| VideoDuration {
                video_id: VideoId::new(item.id),
                duration: item.content_details.duration,
            })
            .collect())
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or(CatalogError::MissingApiKey)
    }
}

/// Map one search result to the internal `Song` shape, preferring the medium
/// thumbnail and falling back to the default one.
fn item_to_song(item: SearchItem) -> Option<Song> {
    let video_id = item.id.video_id?;
    let thumbnails = item.snippet.thumbnails;
    let thumbnail_url = thumbnails
        .medium
        .or(thumbnails.fallback)
        .map(|t| t.url)
        .unwrap_or_default();

    Some(Song {
        video_id: VideoId::new(video_id),
        title: item.snippet.title,
        artist: item.snippet.channel_title,
        thumbnail_url,
        published_at: item.snippet.published_at,
        duration: None,
    })
}
