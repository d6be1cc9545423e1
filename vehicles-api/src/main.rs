use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vehicles_api::clients::{MapsClient, PriceClient};
use vehicles_api::config::Config;
use vehicles_api::constants::API_NAME;
use vehicles_api::repository::{CarStore, MemoryCarStore, PgCarStore};
use vehicles_api::service::{CarService, EnrichmentTimeouts};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Invalid configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting Vehicles API on port {}", API_NAME, config.server_port);

    let store: Arc<dyn CarStore> = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("{} Connected to database", API_NAME);

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("{} Database migrations completed", API_NAME);

            Arc::new(PgCarStore::new(pool))
        }
        None => {
            tracing::warn!("{} DATABASE_URL not set, cars are kept in memory", API_NAME);
            Arc::new(MemoryCarStore::new())
        }
    };

    let prices = PriceClient::new(&config.pricing_service_url, config.pricing_timeout)
        .context("Failed to build pricing client")?;
    let maps = MapsClient::new(&config.maps_service_url, config.maps_timeout)
        .context("Failed to build maps client")?;
    tracing::info!(
        "{} Using pricing service at {} and maps service at {}",
        API_NAME,
        config.pricing_service_url,
        config.maps_service_url
    );

    let service = CarService::new(
        store,
        Arc::new(prices),
        Arc::new(maps),
        EnrichmentTimeouts {
            price: config.pricing_timeout,
            address: config.maps_timeout,
        },
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, vehicles_api::app(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("{} Failed to listen for shutdown signal: {}", API_NAME, e);
    }
    tracing::info!("{} Shutting down", API_NAME);
}
