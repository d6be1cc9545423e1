use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use crate::service::Geocoder;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Liveness {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    known_addresses: usize,
}

pub fn router() -> Router<Geocoder> {
    Router::new().route("/health", get(liveness))
}

async fn liveness(State(geocoder): State<Geocoder>) -> Json<Liveness> {
    Json(Liveness {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        known_addresses: geocoder.catalogue_size(),
    })
}
