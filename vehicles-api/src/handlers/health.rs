use axum::{response::Json, routing::get, Router};
use serde::Serialize;

use crate::service::CarService;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

pub fn router() -> Router<CarService> {
    Router::new().route("/health", get(liveness))
}

/// Reports the process as up. The store and the collaborators are not probed;
/// a car read already degrades on its own when pricing or maps are down.
async fn liveness() -> Json<Liveness> {
    Json(Liveness {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
