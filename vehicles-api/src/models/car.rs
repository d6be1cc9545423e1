use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    New,
    Used,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "NEW",
            Condition::Used => "USED",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(Condition::New),
            "USED" => Ok(Condition::Used),
            other => Err(format!("unknown condition: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manufacturer {
    pub code: i32,
    pub name: String,
}

impl Manufacturer {
    pub fn new(code: i32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Details {
    pub manufacturer: Manufacturer,
    pub model: String,
    pub mileage: i32,
    pub external_color: String,
    pub body: String,
    pub engine: String,
    pub fuel_type: String,
    pub model_year: i32,
    pub production_year: i32,
    pub number_of_doors: i32,
}

/// Street address returned by the maps collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Coordinates are persisted; the address fields are filled in on reads only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            address: None,
            city: None,
            state: None,
            zip: None,
        }
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address.address);
        self.city = Some(address.city);
        self.state = Some(address.state);
        self.zip = Some(address.zip);
    }

    pub fn clear_address(&mut self) {
        self.address = None;
        self.city = None;
        self.state = None;
        self.zip = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub currency: String,
    pub price: Decimal,
    pub vehicle_id: i64,
}

/// A car as persisted by the store, plus the transient `price` and
/// address fields populated on outbound views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    pub condition: Condition,
    pub location: Location,
    pub details: Details,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

impl Car {
    /// Drops every field that is derived from collaborators.
    pub fn without_enrichment(mut self) -> Self {
        self.price = None;
        self.location.clear_address();
        self
    }
}

/// Inbound representation for create and update requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub condition: Condition,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub details: Details,
}

impl CarPayload {
    pub fn new(condition: Condition, location: Location, details: Details) -> Self {
        Self {
            id: None,
            created_at: None,
            condition,
            location: Some(location),
            details,
        }
    }

    /// Returns the coordinates to persist, without any client-supplied address.
    pub fn validated_location(&self) -> Result<Location, String> {
        let location = self
            .location
            .as_ref()
            .ok_or_else(|| "location is required".to_string())?;
        location.validate().map_err(|e| e.to_string())?;
        Ok(Location::new(location.lat, location.lon))
    }
}
