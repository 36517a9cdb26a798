use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS84 coordinate pair.
///
/// `0.0` in either component means "unset", so points on the equator or the
/// prime meridian cannot be expressed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(rename = "Lat", alias = "lat")]
    pub lat: f64,
    #[serde(rename = "Lng", alias = "lng")]
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_set(&self) -> bool {
        self.lat != 0.0 && self.lng != 0.0
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat: {} lng: {}", self.lat, self.lng)
    }
}
