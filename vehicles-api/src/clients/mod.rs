//! Lookups against the pricing and maps collaborators.
//!
//! Every lookup has three outcomes: a value, `Ok(None)` when the
//! collaborator has no data for the key, or a [`LookupError`] when the
//! call itself failed.

pub mod maps_client;
pub mod price_client;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Address, Price};

pub use maps_client::MapsClient;
pub use price_client::PriceClient;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} responded with status {status}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("{service} returned a malformed response: {source}")]
    Malformed {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} did not answer within {after:?}")]
    Timeout {
        service: &'static str,
        after: Duration,
    },
}

impl LookupError {
    fn from_reqwest(service: &'static str, source: reqwest::Error, after: Duration) -> Self {
        if source.is_timeout() {
            LookupError::Timeout { service, after }
        } else if source.is_decode() {
            LookupError::Malformed { service, source }
        } else {
            LookupError::Transport { service, source }
        }
    }
}

#[async_trait]
pub trait PriceLookup: Send + Sync {
    async fn price_for(&self, vehicle_id: i64) -> Result<Option<Price>, LookupError>;
}

#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn address_for(&self, lat: f64, lon: f64) -> Result<Option<Address>, LookupError>;
}

fn http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}
