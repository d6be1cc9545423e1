use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Car, CarPayload};
use crate::service::CarService;

pub fn router() -> Router<CarService> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/{id}", get(get_car).put(update_car).delete(delete_car))
}

async fn list_cars(State(service): State<CarService>) -> Result<Json<Vec<Car>>, AppError> {
    Ok(Json(service.list().await?))
}

async fn get_car(
    State(service): State<CarService>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Car>, AppError> {
    let Path(id) = id?;
    Ok(Json(service.find_by_id(id).await?))
}

async fn create_car(
    State(service): State<CarService>,
    payload: Result<Json<CarPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let Json(payload) = payload?;
    tracing::debug!("{} Received new car: {:?}", API_NAME, payload.details.model);

    let car = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

async fn update_car(
    State(service): State<CarService>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CarPayload>, JsonRejection>,
) -> Result<Json<Car>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    Ok(Json(service.update(id, payload).await?))
}

async fn delete_car(
    State(service): State<CarService>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
