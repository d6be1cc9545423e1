pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use handlers::{health, prices};
use repository::PriceRepository;

pub fn app(repo: PriceRepository) -> Router {
    Router::new()
        .nest("/prices", prices::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(repo)
}
