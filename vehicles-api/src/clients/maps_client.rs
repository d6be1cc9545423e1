use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::instrument;

use super::{http_client, AddressLookup, LookupError};
use crate::models::Address;

const SERVICE: &str = "maps-service";

/// HTTP client for the maps service's `GET /maps?lat=..&lon=..`.
#[derive(Clone)]
pub struct MapsClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl MapsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }
}

#[async_trait]
impl AddressLookup for MapsClient {
    #[instrument(skip_all, fields(base_url = %self.base_url, lat = lat, lon = lon))]
    async fn address_for(&self, lat: f64, lon: f64) -> Result<Option<Address>, LookupError> {
        let url = format!("{}/maps", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("lat", lat), ("lon", lon)])
            .send()
            .await
            .map_err(|e| LookupError::from_reqwest(SERVICE, e, self.timeout))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let address = response
                    .json::<Address>()
                    .await
                    .map_err(|e| LookupError::from_reqwest(SERVICE, e, self.timeout))?;
                // A blank street line carries no usable address.
                if address.address.trim().is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(address))
                }
            }
            status => Err(LookupError::Status {
                service: SERVICE,
                status,
            }),
        }
    }
}
