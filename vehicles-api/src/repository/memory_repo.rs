use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CarStore, StoreError};
use crate::models::Car;

#[derive(Default)]
struct Inner {
    cars: BTreeMap<i64, Car>,
    last_id: i64,
}

/// Keeps cars in process memory. Writes are serialized behind one lock, so
/// every write is atomic and reads see the latest completed write.
#[derive(Default)]
pub struct MemoryCarStore {
    inner: RwLock<Inner>,
}

impl MemoryCarStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarStore for MemoryCarStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, StoreError> {
        Ok(self.inner.read().await.cars.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Car>, StoreError> {
        Ok(self.inner.read().await.cars.values().cloned().collect())
    }

    async fn save(&self, car: Car) -> Result<Car, StoreError> {
        let mut car = car.without_enrichment();
        let mut inner = self.inner.write().await;

        inner.last_id += 1;
        let id = inner.last_id;
        car.id = Some(id);
        inner.cars.insert(id, car.clone());

        Ok(car)
    }

    async fn update(&self, car: Car) -> Result<Option<Car>, StoreError> {
        let mut car = car.without_enrichment();
        let Some(id) = car.id else {
            return Ok(None);
        };
        let mut inner = self.inner.write().await;

        let Some(stored) = inner.cars.get_mut(&id) else {
            return Ok(None);
        };
        car.created_at = stored.created_at;
        *stored = car.clone();

        Ok(Some(car))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.cars.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Condition, Details, Location, Price};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn new_car() -> Car {
        Car {
            id: None,
            created_at: None,
            modified_at: None,
            condition: Condition::New,
            location: Location::new(10.0, 20.0),
            details: Details::default(),
            price: None,
        }
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let store = MemoryCarStore::new();

        let first = store.save(new_car()).await.unwrap();
        let second = store.save(new_car()).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn save_ignores_a_caller_supplied_id() {
        let store = MemoryCarStore::new();
        let mut car = new_car();
        car.id = Some(40);

        let saved = store.save(car).await.unwrap();

        assert_eq!(saved.id, Some(1));
        assert!(store.find_by_id(40).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_the_record_but_keeps_creation_time() {
        let store = MemoryCarStore::new();
        let mut car = new_car();
        car.created_at = Some(Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap());
        let saved = store.save(car).await.unwrap();

        let mut replacement = saved.clone();
        replacement.condition = Condition::Used;
        replacement.created_at = None;
        let updated = store.update(replacement).await.unwrap().unwrap();

        assert_eq!(updated.created_at, saved.created_at);
        let found = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.condition, Condition::Used);
        assert_eq!(found.created_at, saved.created_at);
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_of_deleted_car_does_not_bring_it_back() {
        let store = MemoryCarStore::new();
        let saved = store.save(new_car()).await.unwrap();
        store.delete_by_id(saved.id.unwrap()).await.unwrap();

        assert!(store.update(saved).await.unwrap().is_none());
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_without_id_finds_nothing() {
        let store = MemoryCarStore::new();
        store.save(new_car()).await.unwrap();

        assert!(store.update(new_car()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn enrichment_is_never_stored() {
        let store = MemoryCarStore::new();
        let mut car = new_car();
        car.price = Some(Price {
            currency: "USD".to_string(),
            price: Decimal::new(1000, 0),
            vehicle_id: 1,
        });
        car.location.address = Some("1 Main St".to_string());

        let saved = store.save(car).await.unwrap();
        let found = store.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();

        assert!(found.price.is_none());
        assert!(found.location.address.is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let store = MemoryCarStore::new();
        let saved = store.save(new_car()).await.unwrap();
        let id = saved.id.unwrap();

        assert!(store.delete_by_id(id).await.unwrap());
        assert!(!store.delete_by_id(id).await.unwrap());
        assert!(store.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryCarStore::new();
        store.save(new_car()).await.unwrap();
        let second = store.save(new_car()).await.unwrap();
        store.delete_by_id(second.id.unwrap()).await.unwrap();

        let third = store.save(new_car()).await.unwrap();
        assert_eq!(third.id, Some(3));
    }
}
