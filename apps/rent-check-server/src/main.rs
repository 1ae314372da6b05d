//! Rent-check server
//!
//! Exposes the Paris rent-control engine over HTTP:
//!
//! - `POST /api/check-rent`: full compliance report for a lease
//! - `GET /api/cities`: supported cities with their reference buckets
//! - `GET /health`
//!
//! The server is stateless. Quartier polygons (`quartier_paris` GeoJSON) and
//! the rent-reference snapshot (`logement-encadrement-des-loyers` JSON export)
//! are read from disk once at startup and shared read-only.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use rent_check::{EngineConfig, ReportGenerator, RentSnapshot, ZoneSet};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{handle_check_rent, handle_health, handle_list_cities};

/// Command-line arguments for the rent-check server
#[derive(Parser, Debug)]
#[command(name = "rent-check-server")]
#[command(about = "Paris rent-control compliance server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// GeoJSON file of quartier polygons
    #[arg(long)]
    zones: PathBuf,

    /// JSON rent-reference snapshot used when the open-data portal is unavailable
    #[arg(long)]
    snapshot: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<ReportGenerator>,
}

/// Router with every route and middleware, minus the listener
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/api/cities", get(handle_list_cities))
        .route("/api/check-rent", post(handle_check_rent))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive(log_level.into())
                .add_directive("tower_http=debug".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::from_env()?;
    let zones = Arc::new(
        ZoneSet::from_file(&args.zones)
            .with_context(|| format!("loading zones from {}", args.zones.display()))?,
    );
    let snapshot = Arc::new(
        RentSnapshot::from_file(&args.snapshot)
            .with_context(|| format!("loading snapshot from {}", args.snapshot.display()))?,
    );
    info!(
        zones = zones.len(),
        references = snapshot.len(),
        "datasets loaded"
    );

    let generator = ReportGenerator::from_config(&config, zones, snapshot)?;
    let app = build_router(AppState {
        generator: Arc::new(generator),
    });

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Geocoder: {}", config.geocoding_url);
    info!("Rent references: {}", config.rent_opendata_url);
    info!("Outbound timeout: {}ms", config.timeout_ms);

    axum::serve(listener, app).await?;

    Ok(())
}
