/// RedTunes server - music streaming backend
use clap::{Parser, Subcommand};
use redtunes_catalog::{CatalogClient, CatalogConfig};
use redtunes_server::{
    config::ServerConfig, create_router, services::AuthService, state::AppState,
};
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "redtunes-server")]
#[command(about = "RedTunes music streaming server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Create a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redtunes_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config: _ } => {
            serve().await?;
        }
        Commands::AddUser { username, password } => {
            add_user(&username, &password).await?;
        }
        Commands::ListUsers => {
            list_users().await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting RedTunes server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = redtunes_storage::create_pool(&config.storage.database_url).await?;
    redtunes_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // Initialize auth service
    let auth_service = AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    );
    let auth_service = Arc::new(auth_service);
    tracing::info!("Auth service initialized");

    // Initialize catalog client
    let catalog_config = CatalogConfig::with_base_url(
        config.catalog.api_base_url.clone(),
        config.catalog.api_key.clone(),
    );
    let catalog = Arc::new(CatalogClient::new(catalog_config)?);
    if config.catalog.api_key.is_none() {
        tracing::warn!("No catalog API key configured; search will be unavailable");
    }

    // Build application state
    let app_state = AppState::new(pool, Arc::clone(&auth_service), catalog);

    // Build router
    let app = create_router(app_state, auth_service);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(username: &str, password: &str) -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = redtunes_storage::create_pool(&config.storage.database_url).await?;
    redtunes_storage::run_migrations(&pool).await?;

    let auth_service = AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    );

    let user = redtunes_storage::users::create(&pool, username).await?;

    let password_hash = auth_service.hash_password(password)?;
    redtunes_storage::users::set_password_hash(&pool, &user.id, &password_hash).await?;

    println!("Created user {} ({})", user.username, user.id);

    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = redtunes_storage::create_pool(&config.storage.database_url).await?;
    redtunes_storage::run_migrations(&pool).await?;

    let users = redtunes_storage::users::get_all(&pool).await?;

    println!("Users:");
    for user in users {
        println!("  {} - {}", user.id, user.username);
    }

    Ok(())
}
