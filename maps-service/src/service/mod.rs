pub mod geocoder;

pub use geocoder::Geocoder;
