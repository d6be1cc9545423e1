use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::instrument;

use super::{http_client, LookupError, PriceLookup};
use crate::models::Price;

const SERVICE: &str = "pricing-service";

/// HTTP client for the pricing service's `GET /prices/{vehicleId}`.
#[derive(Clone)]
pub struct PriceClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl PriceClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }
}

#[async_trait]
impl PriceLookup for PriceClient {
    #[instrument(skip_all, fields(base_url = %self.base_url, vehicle_id = vehicle_id))]
    async fn price_for(&self, vehicle_id: i64) -> Result<Option<Price>, LookupError> {
        let url = format!("{}/prices/{}", self.base_url, vehicle_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::from_reqwest(SERVICE, e, self.timeout))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let price = response
                    .json::<Price>()
                    .await
                    .map_err(|e| LookupError::from_reqwest(SERVICE, e, self.timeout))?;
                Ok(Some(price))
            }
            status => Err(LookupError::Status {
                service: SERVICE,
                status,
            }),
        }
    }
}
