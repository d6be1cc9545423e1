use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::error::AppError;
use crate::models::Price;
use crate::repository::PriceRepository;

pub fn router() -> Router<PriceRepository> {
    Router::new()
        .route("/", get(list_prices))
        .route("/{vehicle_id}", get(get_price))
}

async fn list_prices(State(repo): State<PriceRepository>) -> Json<Vec<Price>> {
    Json(repo.find_all())
}

async fn get_price(
    State(repo): State<PriceRepository>,
    vehicle_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Price>, AppError> {
    let Path(vehicle_id) = vehicle_id?;
    if vehicle_id <= 0 {
        return Err(AppError::Validation(format!(
            "vehicle id must be positive, got {}",
            vehicle_id
        )));
    }

    repo.find_by_vehicle_id(vehicle_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No price for vehicle {}", vehicle_id)))
}
