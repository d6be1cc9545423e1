pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use handlers::{health, maps};
use service::Geocoder;

pub fn app(geocoder: Geocoder) -> Router {
    Router::new()
        .merge(maps::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(geocoder)
}
