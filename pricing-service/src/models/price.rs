use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub currency: String,
    pub price: Decimal,
    pub vehicle_id: i64,
}

impl Price {
    pub fn usd(vehicle_id: i64, price: Decimal) -> Self {
        Self {
            currency: "USD".to_string(),
            price,
            vehicle_id,
        }
    }
}
