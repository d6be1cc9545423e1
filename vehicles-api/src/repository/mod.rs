pub mod car_repo;
pub mod errors;
pub mod memory_repo;

use async_trait::async_trait;

use crate::models::Car;

pub use car_repo::PgCarStore;
pub use errors::StoreError;
pub use memory_repo::MemoryCarStore;

/// System of record for cars.
///
/// `save` stores a new car under a freshly assigned id; `update` replaces an
/// existing car and never brings back one that was deleted. Implementations
/// never persist price or address fields.
#[async_trait]
pub trait CarStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Car>, StoreError>;

    async fn save(&self, car: Car) -> Result<Car, StoreError>;

    /// Replaces the car with `car.id`, keeping its stored creation time.
    /// Returns `None` when that car does not exist (or `car.id` is unset).
    async fn update(&self, car: Car) -> Result<Option<Car>, StoreError>;

    /// Returns `false` when no car with `id` existed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError>;
}
