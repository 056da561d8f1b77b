use fr_server::error::ServerError;
use fr_server::{AppState, build_router, logger};

use fr_auth::{GoogleIdTokenVerifier, JwtIssuer, JwtValidator};
use fr_config::Config;
use fr_db::ReferenceRepository;
use fr_media::CloudinaryStore;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir).map_err(|e| ServerError::CreateDir {
            path: log_dir.display().to_string(),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting fr-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database
    let database_path = config.database_path()?;
    if let Some(db_dir) = database_path.parent() {
        std::fs::create_dir_all(db_dir).map_err(|e| ServerError::CreateDir {
            path: db_dir.display().to_string(),
            source: e,
        })?;
    }
    info!("Connecting to database: {}", database_path.display());

    let pool = fr_db::connect(&database_path, config.database.max_connections).await?;
    fr_db::ping(
        &pool,
        Duration::from_secs(config.database.connect_timeout_secs),
    )
    .await?;
    info!("Database connection established");

    info!("Running database migrations...");
    fr_db::run_migrations(&pool).await?;

    let references = ReferenceRepository::load_content_references(&pool).await?;
    info!("Reference data ready: {:?}", references);

    // Sessions
    let jwt_secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or(ServerError::MissingSetting {
            setting: "auth.jwt_secret",
        })?;
    let jwt_issuer = Arc::new(JwtIssuer::with_hs256(
        jwt_secret.as_bytes(),
        config.auth.session_ttl_hours,
    ));
    let jwt_validator = Arc::new(JwtValidator::with_hmac(jwt_secret.as_bytes()));
    info!(
        "JWT: HS256 sessions, {}h lifetime",
        jwt_issuer.ttl().num_hours()
    );

    // Google sign-in
    let google_client_id =
        config
            .auth
            .google_client_id
            .as_deref()
            .ok_or(ServerError::MissingSetting {
                setting: "auth.google_client_id",
            })?;
    let identity_verifier = Arc::new(GoogleIdTokenVerifier::new(
        google_client_id,
        config.auth.google_certs_url.as_str(),
    )?);

    // Media storage
    let cloudinary_url = config
        .media
        .cloudinary_url
        .as_deref()
        .ok_or(ServerError::MissingSetting {
            setting: "media.cloudinary_url",
        })?;
    let media_store = Arc::new(CloudinaryStore::from_url(
        cloudinary_url,
        &config.media.api_base_url,
    )?);

    let app_state = AppState {
        pool: pool.clone(),
        jwt_issuer,
        jwt_validator,
        identity_verifier,
        media_store,
        references,
        feed_page_size: config.feed.page_size,
        max_upload_bytes: config.server.max_upload_bytes,
    };

    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
