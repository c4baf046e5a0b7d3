/// Common test utilities and fixtures
use axum::Router;
use redtunes_catalog::{CatalogClient, CatalogConfig};
use redtunes_core::UserId;
use redtunes_server::{create_router, services::AuthService, state::AppState};
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

/// The real server router over a throwaway database.
///
/// The catalog client has no API key, so catalog routes exercise the
/// unconfigured path.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub auth_service: Arc<AuthService>,
    // Held so the database file outlives the test
    _dir: TempDir,
}

pub async fn create_test_app() -> TestApp {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let url = format!("sqlite://{}", db_path.display());

    let pool = redtunes_storage::create_pool(&url).await.unwrap();
    redtunes_storage::run_migrations(&pool).await.unwrap();

    let auth_service = Arc::new(AuthService::new(
        "test-secret-key".to_string(),
        1, // 1 hour access
        1, // 1 day refresh
    ));

    let catalog = Arc::new(CatalogClient::new(CatalogConfig::new(None)).unwrap());

    let app_state = AppState::new(pool.clone(), Arc::clone(&auth_service), catalog);

    let router = create_router(app_state, Arc::clone(&auth_service));

    TestApp {
        router,
        pool,
        auth_service,
        _dir: dir,
    }
}

impl TestApp {
    /// Create a user directly in storage and mint an access token for them
    pub async fn user_with_token(&self, username: &str) -> (UserId, String) {
        let user = redtunes_storage::users::create(&self.pool, username)
            .await
            .unwrap();
        let token = self.auth_service.create_access_token(&user.id).unwrap();
        (user.id, token)
    }
}
