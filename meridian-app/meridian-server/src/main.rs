use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use meridian_api::{build_router, cors_layer, state::SessionCookie, AppState};
use meridian_core::{
    repositories::{CheckinRepository, FamilyMemberRepository, NamedPlaceRepository},
    services::{AlertService, GeofenceResolver, LocationService},
};
use meridian_infrastructure::{
    create_pool, run_migrations, PgAlertRepository, PgCheckinRepository,
    PgFamilyMemberRepository, PgNamedPlaceRepository,
};
use meridian_security::SessionService;
use meridian_shared::config::AppConfig;
use tracing::{info, warn};

const MIN_SECRET_LEN: usize = 32;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize telemetry; the guard flushes the file writer on exit
    let _log_guard = meridian_shared::telemetry::init_telemetry(&config.log)?;

    info!("{} starting ({})", config.app.name, config.app.env);

    if config.session.secret.len() < MIN_SECRET_LEN {
        if config.is_production() {
            anyhow::bail!("session.secret must be at least {} bytes", MIN_SECRET_LEN);
        }
        warn!("session.secret is shorter than {} bytes", MIN_SECRET_LEN);
    }

    // Connect to Database
    let pool = create_pool(&config.database).await?;
    info!("Database connection established.");

    if config.database.run_migrations {
        run_migrations(&pool).await?;
        info!("Migrations applied.");
    }

    // Wire repositories and services
    let checkins: Arc<dyn CheckinRepository> = Arc::new(PgCheckinRepository::new(pool.clone()));
    let places: Arc<dyn NamedPlaceRepository> =
        Arc::new(PgNamedPlaceRepository::new(pool.clone()));
    let members: Arc<dyn FamilyMemberRepository> =
        Arc::new(PgFamilyMemberRepository::new(pool.clone()));

    let resolver = GeofenceResolver::new(places.clone());
    let location = LocationService::new(checkins, places, members, resolver);
    let alerts = AlertService::new(Arc::new(PgAlertRepository::new(pool)));
    let sessions = SessionService::new(config.session.secret.clone(), config.session.ttl_seconds);

    let state = AppState {
        location: Arc::new(location),
        alerts: Arc::new(alerts),
        sessions: Arc::new(sessions),
        session_cookie: SessionCookie {
            name: config.session.cookie_name.clone(),
            secure: config.session.secure_cookie,
        },
        photos_dir: Arc::new(PathBuf::from(&config.photos.dir)),
    };

    // Build router
    let app = build_router(state, cors_layer(&config.cors)?);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
