use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use super::{CarStore, StoreError};
use crate::models::{Car, Details, Location};

const CAR_COLUMNS: &str = "id, created_at, modified_at, condition, latitude, longitude, details";

#[derive(Debug, FromRow)]
struct CarRow {
    id: i64,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    condition: String,
    latitude: f64,
    longitude: f64,
    details: Json<Details>,
}

impl TryFrom<CarRow> for Car {
    type Error = StoreError;

    fn try_from(row: CarRow) -> Result<Self, Self::Error> {
        let condition = row
            .condition
            .parse()
            .map_err(|reason| StoreError::Corrupt { id: row.id, reason })?;

        Ok(Car {
            id: Some(row.id),
            created_at: Some(row.created_at),
            modified_at: Some(row.modified_at),
            condition,
            location: Location::new(row.latitude, row.longitude),
            details: row.details.0,
            price: None,
        })
    }
}

/// Postgres-backed car store. Every write is a single statement, so writes
/// are atomic per record and concurrent updates of one id are last-write-wins.
#[derive(Clone)]
pub struct PgCarStore {
    pool: PgPool,
}

impl PgCarStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarStore for PgCarStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, StoreError> {
        let query = format!("SELECT {} FROM cars WHERE id = $1", CAR_COLUMNS);
        let row = sqlx::query_as::<_, CarRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Car::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Car>, StoreError> {
        let query = format!("SELECT {} FROM cars ORDER BY id", CAR_COLUMNS);
        let rows = sqlx::query_as::<_, CarRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Car::try_from).collect()
    }

    async fn save(&self, car: Car) -> Result<Car, StoreError> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO cars (created_at, modified_at, condition, latitude, longitude, details)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            CAR_COLUMNS
        );
        let row = sqlx::query_as::<_, CarRow>(&query)
            .bind(car.created_at.unwrap_or(now))
            .bind(car.modified_at.unwrap_or(now))
            .bind(car.condition.as_str())
            .bind(car.location.lat)
            .bind(car.location.lon)
            .bind(Json(&car.details))
            .fetch_one(&self.pool)
            .await?;

        Car::try_from(row)
    }

    async fn update(&self, car: Car) -> Result<Option<Car>, StoreError> {
        let Some(id) = car.id else {
            return Ok(None);
        };
        // created_at is never rewritten; a missing row yields no RETURNING row
        let query = format!(
            "UPDATE cars SET
                 modified_at = $2,
                 condition = $3,
                 latitude = $4,
                 longitude = $5,
                 details = $6
             WHERE id = $1
             RETURNING {}",
            CAR_COLUMNS
        );
        let row = sqlx::query_as::<_, CarRow>(&query)
            .bind(id)
            .bind(car.modified_at.unwrap_or_else(Utc::now))
            .bind(car.condition.as_str())
            .bind(car.location.lat)
            .bind(car.location.lon)
            .bind(Json(&car.details))
            .fetch_optional(&self.pool)
            .await?;

        row.map(Car::try_from).transpose()
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
