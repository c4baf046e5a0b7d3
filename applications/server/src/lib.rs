//! RedTunes Server Library
//!
//! Music streaming backend: playlist library, recent play history, and a
//! proxy to the external music catalog.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use router::create_router;
pub use error::{Result, ServerError};
pub use services::auth::AuthService;
pub use state::AppState;
