use serde::{Deserialize, Serialize};

/// A decoded polyline vertex, in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavCoord {
    pub lat: f64,
    pub lng: f64,
}

impl NavCoord {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl From<NavCoord> for geo_types::Point<f64> {
    fn from(coord: NavCoord) -> Self {
        geo_types::Point::new(coord.lng, coord.lat)
    }
}

impl From<&NavCoord> for geo_types::Point<f64> {
    fn from(coord: &NavCoord) -> Self {
        (*coord).into()
    }
}

impl From<NavCoord> for geo_types::Coord<f64> {
    fn from(coord: NavCoord) -> Self {
        geo_types::Coord {
            x: coord.lng,
            y: coord.lat,
        }
    }
}

impl From<geo_types::Point<f64>> for NavCoord {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self {
            lat: point.y(),
            lng: point.x(),
        }
    }
}
