use std::sync::Arc;

use crate::models::{Address, Coordinates};

const CATALOGUE: [(&str, &str, &str, &str); 12] = [
    ("777 Brockton Avenue", "Abington", "MA", "2351"),
    ("30 Memorial Drive", "Avon", "MA", "2322"),
    ("250 Hartford Avenue", "Bellingham", "MA", "2019"),
    ("700 Oak Street", "Brockton", "MA", "2301"),
    ("66-4 Parkhurst Rd", "Chelmsford", "MA", "1824"),
    ("591 Memorial Dr", "Chicopee", "MA", "1020"),
    ("55 Brooksby Village Way", "Danvers", "MA", "1923"),
    ("137 Teaticket Hwy", "East Falmouth", "MA", "2536"),
    ("42 Fairhaven Commons Way", "Fairhaven", "MA", "2719"),
    ("374 William S Canning Blvd", "Fall River", "MA", "2721"),
    ("121 Worcester Rd", "Framingham", "MA", "1701"),
    ("677 Timpany Blvd", "Gardner", "MA", "1440"),
];

/// Mock reverse geocoder. The same coordinates always map to the same
/// catalogue entry.
#[derive(Clone)]
pub struct Geocoder {
    addresses: Arc<Vec<Address>>,
}

impl Default for Geocoder {
    fn default() -> Self {
        Self::new(
            CATALOGUE
                .iter()
                .map(|&(address, city, state, zip)| Address::new(address, city, state, zip))
                .collect(),
        )
    }
}

impl Geocoder {
    pub fn new(addresses: Vec<Address>) -> Self {
        Self {
            addresses: Arc::new(addresses),
        }
    }

    pub fn catalogue_size(&self) -> usize {
        self.addresses.len()
    }

    /// `None` when the catalogue is empty.
    pub fn lookup(&self, coordinates: Coordinates) -> Option<Address> {
        if self.addresses.is_empty() {
            return None;
        }
        let key = coordinates.lat.to_bits() ^ coordinates.lon.to_bits().rotate_left(17);
        let index = (key % self.addresses.len() as u64) as usize;
        self.addresses.get(index).cloned()
    }
}
