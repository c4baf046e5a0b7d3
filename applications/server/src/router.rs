/// HTTP route table for the RedTunes server.
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{api, middleware, services::AuthService, state::AppState};

/// Builds the full application router. Used by the server binary and
/// by integration tests so both drive the same route table.
pub fn create_router(app_state: AppState, auth_service: Arc<AuthService>) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/refresh", post(api::auth::refresh))
        // Catalog proxy
        .route("/catalog/search", get(api::catalog::search))
        .route("/catalog/durations", get(api::catalog::durations));

    // Routes that serve both signed-in and anonymous callers
    let optional_routes = Router::new()
        .route("/playlists", get(api::playlists::list_playlists))
        .route("/playlists/:id/entries", get(api::playlists::list_entries))
        .route("/plays", post(api::plays::record_play))
        .route("/plays/recent", get(api::plays::list_recent));

    // Protected routes (auth required)
    let protected_routes = Router::new()
        .route("/playlists", post(api::playlists::create_playlist))
        .route("/playlists/:id", delete(api::playlists::delete_playlist))
        .route("/playlists/:id/entries", post(api::playlists::add_entry))
        .route(
            "/playlists/entries/:id",
            delete(api::playlists::remove_entry),
        )
        .route("/preferences", get(api::preferences::get_preferences))
        .route("/preferences", put(api::preferences::update_preferences))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&auth_service),
            middleware::auth_middleware,
        ));

    // Combine routes
    Router::new()
        .nest(
            "/api",
            public_routes.merge(optional_routes).merge(protected_routes),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
