pub mod clients;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use handlers::{cars, health};
use service::CarService;

pub fn app(service: CarService) -> Router {
    Router::new()
        .nest("/cars", cars::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}
