pub mod car;

pub use car::{Address, Car, CarPayload, Condition, Details, Location, Manufacturer, Price};
