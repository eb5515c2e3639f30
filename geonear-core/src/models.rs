#[cfg(test)]
#[path = "../tests/unit/models_test.rs"]
mod models_test;

use std::fmt;

/// Represents a single named geographic point with coordinates given in degrees.
///
/// Latitude is expected within `[-90, 90]` and longitude within `[-180, 180]`, positive to
/// the north and east respectively. The expectation is not enforced: out of range values
/// produce a mathematically defined, semantically meaningless distance.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoPoint {
    /// A city name.
    pub name: String,
    /// A country or region name.
    pub region: String,
    /// A latitude in degrees.
    pub latitude: f64,
    /// A longitude in degrees.
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new `GeoPoint`.
    pub fn new(name: &str, region: &str, latitude: f64, longitude: f64) -> Self {
        Self { name: name.to_string(), region: region.to_string(), latitude, longitude }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.region)
    }
}
