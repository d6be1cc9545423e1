use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::stream::{self, StreamExt};
use thiserror::Error;

use crate::clients::{AddressLookup, LookupError, PriceLookup};
use crate::constants::API_NAME;
use crate::models::{Car, CarPayload};
use crate::repository::{CarStore, StoreError};

/// Cars enriched at the same time by `list`; each one issues two lookups.
pub const LIST_ENRICHMENT_CONCURRENCY: usize = 16;

#[derive(Debug, Error)]
pub enum CarServiceError {
    #[error("Car {0} not found")]
    NotFound(i64),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Upper bounds for each collaborator call made while enriching a car.
#[derive(Debug, Clone, Copy)]
pub struct EnrichmentTimeouts {
    pub price: Duration,
    pub address: Duration,
}

impl Default for EnrichmentTimeouts {
    fn default() -> Self {
        Self {
            price: Duration::from_secs(2),
            address: Duration::from_secs(2),
        }
    }
}

/// Composes stored cars with their price and address.
///
/// Only the store is authoritative: its failures are returned to the
/// caller. Price and address lookups are best-effort and a failed, empty
/// or slow lookup just leaves the corresponding field unset.
#[derive(Clone)]
pub struct CarService {
    store: Arc<dyn CarStore>,
    prices: Arc<dyn PriceLookup>,
    maps: Arc<dyn AddressLookup>,
    timeouts: EnrichmentTimeouts,
}

impl CarService {
    pub fn new(
        store: Arc<dyn CarStore>,
        prices: Arc<dyn PriceLookup>,
        maps: Arc<dyn AddressLookup>,
        timeouts: EnrichmentTimeouts,
    ) -> Self {
        Self {
            store,
            prices,
            maps,
            timeouts,
        }
    }

    pub async fn create(&self, payload: CarPayload) -> Result<Car, CarServiceError> {
        if let Some(id) = payload.id {
            return Err(CarServiceError::Validation(format!(
                "id {} must not be set when creating a car; update it instead",
                id
            )));
        }
        let location = payload
            .validated_location()
            .map_err(CarServiceError::Validation)?;

        let now = Utc::now();
        let car = Car {
            id: None,
            created_at: Some(payload.created_at.unwrap_or(now)),
            modified_at: Some(now),
            condition: payload.condition,
            location,
            details: payload.details,
            price: None,
        };

        let saved = self.store.save(car).await?;
        if let Some(id) = saved.id {
            tracing::info!("{} Created car: {}", API_NAME, id);
        }
        Ok(saved)
    }

    /// Replaces condition, details and coordinates of an existing car.
    /// The id and creation time are kept.
    pub async fn update(&self, id: i64, payload: CarPayload) -> Result<Car, CarServiceError> {
        if payload.id.is_some_and(|body_id| body_id != id) {
            return Err(CarServiceError::Validation(format!(
                "id in body does not match car {}",
                id
            )));
        }
        let location = payload
            .validated_location()
            .map_err(CarServiceError::Validation)?;

        let car = Car {
            id: Some(id),
            created_at: None,
            modified_at: Some(Utc::now()),
            condition: payload.condition,
            location,
            details: payload.details,
            price: None,
        };

        let saved = self
            .store
            .update(car)
            .await?
            .ok_or(CarServiceError::NotFound(id))?;
        tracing::info!("{} Updated car: {}", API_NAME, id);
        Ok(saved)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Car, CarServiceError> {
        let car = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CarServiceError::NotFound(id))?;

        Ok(self.enrich(car).await)
    }

    /// Every car in the result has finished enrichment, successfully or not.
    /// Store order is kept and at most `LIST_ENRICHMENT_CONCURRENCY` cars
    /// are enriched at once.
    pub async fn list(&self) -> Result<Vec<Car>, CarServiceError> {
        let cars = self.store.find_all().await?;
        tracing::debug!("{} Enriching {} cars", API_NAME, cars.len());

        Ok(stream::iter(cars)
            .map(|car| self.enrich(car))
            .buffered(LIST_ENRICHMENT_CONCURRENCY)
            .collect::<Vec<_>>()
            .await)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), CarServiceError> {
        if !self.store.delete_by_id(id).await? {
            return Err(CarServiceError::NotFound(id));
        }
        tracing::info!("{} Deleted car: {}", API_NAME, id);
        Ok(())
    }

    async fn enrich(&self, car: Car) -> Car {
        let mut car = car.without_enrichment();
        let Some(id) = car.id else {
            return car;
        };
        let (lat, lon) = (car.location.lat, car.location.lon);

        let (price, address) = tokio::join!(
            best_effort("Price", id, self.timeouts.price, self.prices.price_for(id)),
            best_effort("Address", id, self.timeouts.address, self.maps.address_for(lat, lon)),
        );

        car.price = price;
        if let Some(address) = address {
            car.location.set_address(address);
        }
        car
    }
}

async fn best_effort<T, F>(what: &str, car_id: i64, limit: Duration, lookup: F) -> Option<T>
where
    F: Future<Output = Result<Option<T>, LookupError>>,
{
    match tokio::time::timeout(limit, lookup).await {
        Ok(Ok(Some(value))) => Some(value),
        Ok(Ok(None)) => {
            tracing::debug!("{} No {} data for car {}", API_NAME, what.to_lowercase(), car_id);
            None
        }
        Ok(Err(e)) => {
            tracing::warn!("{} {} lookup failed for car {}: {}", API_NAME, what, car_id, e);
            None
        }
        Err(_) => {
            tracing::warn!(
                "{} {} lookup timed out for car {} after {:?}",
                API_NAME,
                what,
                car_id,
                limit
            );
            None
        }
    }
}
