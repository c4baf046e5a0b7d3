//! Tests for the catalog proxy client.
//!
//! These use a mock server so no real YouTube traffic is involved.

use redtunes_catalog::{CatalogClient, CatalogConfig, CatalogError};
use redtunes_core::types::VideoId;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, api_key: Option<&str>) -> CatalogClient {
    let config = CatalogConfig::with_base_url(server.uri(), api_key.map(str::to_string));
    CatalogClient::new(config).expect("Failed to build client")
}

fn search_body() -> serde_json::Value {
    json!({
        "items": [
            {
                "id": { "videoId": "vid-1" },
                "snippet": {
                    "title": "First Song",
                    "channelTitle": "First Artist",
                    "thumbnails": {
                        "default": { "url": "https://img.test/1/default.jpg" },
                        "medium": { "url": "https://img.test/1/medium.jpg" }
                    },
                    "publishedAt": "2024-01-01T00:00:00Z"
                }
            },
            {
                "id": { "videoId": "vid-2" },
                "snippet": {
                    "title": "Second Song",
                    "channelTitle": "Second Artist",
                    "thumbnails": {
                        "default": { "url": "https://img.test/2/default.jpg" }
                    },
                    "publishedAt": "2024-02-02T00:00:00Z"
                }
            }
        ]
    })
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_empty_url_rejected() {
    let result = CatalogClient::new(CatalogConfig::with_base_url("", None));
    assert!(matches!(result, Err(CatalogError::InvalidUrl(_))));
}

#[test]
fn test_url_without_scheme_rejected() {
    let result = CatalogClient::new(CatalogConfig::with_base_url("example.com", None));
    assert!(matches!(result, Err(CatalogError::InvalidUrl(_))));
}

#[test]
fn test_default_config_points_at_youtube() {
    let config = CatalogConfig::new(None);
    assert_eq!(config.api_base_url, redtunes_catalog::DEFAULT_API_BASE_URL);
    assert!(config.api_key.is_none());
}

// =============================================================================
// Search Tests
// =============================================================================

#[tokio::test]
async fn test_search_without_key_makes_no_outbound_call() {
    let server = MockServer::start().await;

    // Any request reaching the server fails the test
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let result = client.search("lofi beats", Some(5)).await;

    assert!(matches!(result, Err(CatalogError::MissingApiKey)));
    server.verify().await;
}

#[tokio::test]
async fn test_search_maps_items_to_songs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("part", "snippet"))
        .and(query_param("type", "video"))
        .and(query_param("videoCategoryId", "10"))
        .and(query_param("q", "lofi beats"))
        .and(query_param("maxResults", "5"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"));
    let songs = client
        .search("lofi beats", Some(5))
        .await
        .expect("Search should succeed");

    assert_eq!(songs.len(), 2);

    // Medium thumbnail preferred when present
    assert_eq!(songs[0].video_id, VideoId::new("vid-1"));
    assert_eq!(songs[0].title, "First Song");
    assert_eq!(songs[0].artist, "First Artist");
    assert_eq!(songs[0].thumbnail_url, "https://img.test/1/medium.jpg");
    assert_eq!(songs[0].published_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    assert!(songs[0].duration.is_none());

    // Default thumbnail used when medium is absent
    assert_eq!(songs[1].thumbnail_url, "https://img.test/2/default.jpg");
}

#[tokio::test]
async fn test_search_default_window_is_twenty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("maxResults", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"));
    let songs = client.search("anything", None).await.unwrap();
    assert!(songs.is_empty());
}

#[tokio::test]
async fn test_search_non_success_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "message": "quotaExceeded" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"));
    let result = client.search("lofi beats", None).await;

    // Upstream detail is logged, not surfaced
    assert!(matches!(result, Err(CatalogError::Unavailable)));
}

#[tokio::test]
async fn test_search_network_failure_is_unavailable() {
    // Point the client at a closed port
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let config = CatalogConfig::with_base_url(uri, Some("test-key".to_string()));
    let client = CatalogClient::new(config).unwrap();

    let result = client.search("lofi beats", None).await;
    assert!(matches!(result, Err(CatalogError::Unavailable)));
}

// =============================================================================
// Duration Tests
// =============================================================================

#[tokio::test]
async fn test_durations_batched_into_single_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("part", "contentDetails"))
        .and(query_param("id", "vid-1,vid-2,vid-3"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "id": "vid-1", "contentDetails": { "duration": "PT3M30S" } },
                { "id": "vid-2", "contentDetails": { "duration": "PT4M05S" } },
                { "id": "vid-3", "contentDetails": { "duration": "PT1H2M" } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"));
    let ids = [
        VideoId::new("vid-1"),
        VideoId::new("vid-2"),
        VideoId::new("vid-3"),
    ];
    let durations = client.video_durations(&ids).await.unwrap();

    assert_eq!(durations.len(), 3);
    assert_eq!(durations[0].video_id, VideoId::new("vid-1"));
    // Passed through in the catalog's own notation, unparsed
    assert_eq!(durations[0].duration, "PT3M30S");
    assert_eq!(durations[2].duration, "PT1H2M");
}

#[tokio::test]
async fn test_durations_empty_input_short_circuits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-key"));
    let durations = client.video_durations(&[]).await.unwrap();
    assert!(durations.is_empty());

    server.verify().await;
}

#[tokio::test]
async fn test_durations_without_key_rejected() {
    let server = MockServer::start().await;
    let client = client_for(&server, None);

    let result = client.video_durations(&[VideoId::new("vid-1")]).await;
    assert!(matches!(result, Err(CatalogError::MissingApiKey)));
}
