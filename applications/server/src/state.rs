/// Shared application state
use crate::services::AuthService;
use redtunes_catalog::CatalogClient;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth_service: Arc<AuthService>,
    pub catalog: Arc<CatalogClient>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        auth_service: Arc<AuthService>,
        catalog: Arc<CatalogClient>,
    ) -> Self {
        Self {
            pool,
            auth_service,
            catalog,
        }
    }
}
