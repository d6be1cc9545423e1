use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use crate::repository::PriceRepository;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Liveness {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    priced_vehicles: usize,
}

pub fn router() -> Router<PriceRepository> {
    Router::new().route("/health", get(liveness))
}

async fn liveness(State(repo): State<PriceRepository>) -> Json<Liveness> {
    Json(Liveness {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        priced_vehicles: repo.priced_vehicles(),
    })
}
