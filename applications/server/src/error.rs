/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use redtunes_catalog::CatalogError;
use redtunes_core::CoreError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl From<redtunes_storage::StorageError> for ServerError {
    fn from(err: redtunes_storage::StorageError) -> Self {
        // Convert StorageError -> CoreError -> ServerError
        ServerError::Core(err.into())
    }
}

/// Maps domain errors onto HTTP statuses. Permission failures on reads come
/// back as 404 so a caller cannot distinguish a hidden playlist from a
/// missing one.
fn core_error_response(err: &CoreError) -> (StatusCode, String) {
    match err {
        CoreError::Unauthenticated => (StatusCode::UNAUTHORIZED, err.to_string()),
        CoreError::Forbidden => (StatusCode::FORBIDDEN, err.to_string()),
        CoreError::NotFound { .. }
        | CoreError::EntryNotFound(_)
        | CoreError::NotFoundOrForbidden => (StatusCode::NOT_FOUND, err.to_string()),
        CoreError::DuplicateEntry { .. } => (StatusCode::CONFLICT, err.to_string()),
        CoreError::InvalidInput(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        CoreError::Storage(msg) => {
            tracing::error!("Storage error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            )
        }
        CoreError::Database(msg) => {
            tracing::error!("Database error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            )
        }
        CoreError::Serialization(e) => {
            tracing::error!("Serialization error: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            )
        }
    }
}

fn catalog_error_response(err: &CatalogError) -> (StatusCode, String) {
    match err {
        CatalogError::MissingApiKey | CatalogError::InvalidUrl(_) => {
            tracing::error!("Catalog configuration error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Music catalog is not configured".to_string(),
            )
        }
        CatalogError::Http(e) => {
            tracing::warn!("Catalog request failed: {:?}", e);
            (
                StatusCode::BAD_GATEWAY,
                "Music catalog is unavailable".to_string(),
            )
        }
        CatalogError::Unavailable | CatalogError::Parse(_) => {
            (StatusCode::BAD_GATEWAY, err.to_string())
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Core(ref e) => core_error_response(e),
            ServerError::Catalog(ref e) => catalog_error_response(e),
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string())
            }
            ServerError::Jwt(ref e) => {
                tracing::error!("JWT error: {:?}", e);
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            ServerError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Password error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
