//! RedTunes Catalog Proxy
//!
//! Thin client over the YouTube Data API. Translates internal search and
//! duration requests into outbound calls and normalizes the responses into
//! the internal [`Song`](redtunes_core::types::Song) shape.
//!
//! Every call is a single-attempt outbound request: no caching, no retry,
//! no rate limiting. Upstream failure details are logged, never surfaced.
//!
//! # Example
//!
//! ```ignore
//! use redtunes_catalog::{CatalogClient, CatalogConfig};
//!
//! let config = CatalogConfig::new(Some("api-key".to_string()));
//! let client = CatalogClient::new(config)?;
//!
//! let songs = client.search("lofi beats", Some(5)).await?;
//! println!("Found {} songs", songs.len());
//! ```

#![forbid(unsafe_code)]

mod client;
mod error;
mod types;

pub use client::{CatalogClient, DEFAULT_MAX_RESULTS};
pub use error::{CatalogError, Result};
pub use types::{CatalogConfig, DEFAULT_API_BASE_URL};
