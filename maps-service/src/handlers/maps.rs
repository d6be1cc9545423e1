use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use validator::Validate;

use crate::error::AppError;
use crate::models::{Address, Coordinates};
use crate::service::Geocoder;

pub fn router() -> Router<Geocoder> {
    Router::new().route("/maps", get(reverse_geocode))
}

async fn reverse_geocode(
    State(geocoder): State<Geocoder>,
    Query(coordinates): Query<Coordinates>,
) -> Result<Json<Address>, AppError> {
    coordinates
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    geocoder.lookup(coordinates).map(Json).ok_or_else(|| {
        AppError::NotFound(format!(
            "No address near {}, {}",
            coordinates.lat, coordinates.lon
        ))
    })
}
