use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::models::Price;

/// Whole-dollar USD prices for the vehicles known at startup.
const SEED_PRICES: [(i64, i64); 20] = [
    (1, 18_250),
    (2, 27_500),
    (3, 31_990),
    (4, 12_400),
    (5, 45_000),
    (6, 22_750),
    (7, 9_800),
    (8, 38_300),
    (9, 26_100),
    (10, 53_450),
    (11, 14_999),
    (12, 29_875),
    (13, 33_200),
    (14, 17_650),
    (15, 41_500),
    (16, 24_300),
    (17, 11_250),
    (18, 36_700),
    (19, 20_050),
    (20, 48_900),
];

/// Read-only price catalogue keyed by vehicle id.
#[derive(Clone, Default)]
pub struct PriceRepository {
    prices: Arc<BTreeMap<i64, Price>>,
}

impl PriceRepository {
    pub fn new(prices: impl IntoIterator<Item = Price>) -> Self {
        let prices = prices
            .into_iter()
            .map(|price| (price.vehicle_id, price))
            .collect();
        Self {
            prices: Arc::new(prices),
        }
    }

    pub fn seeded() -> Self {
        Self::new(
            SEED_PRICES
                .iter()
                .map(|&(vehicle_id, dollars)| Price::usd(vehicle_id, Decimal::new(dollars * 100, 2))),
        )
    }

    pub fn find_by_vehicle_id(&self, vehicle_id: i64) -> Option<Price> {
        self.prices.get(&vehicle_id).cloned()
    }

    pub fn find_all(&self) -> Vec<Price> {
        self.prices.values().cloned().collect()
    }

    pub fn priced_vehicles(&self) -> usize {
        self.prices.len()
    }
}
