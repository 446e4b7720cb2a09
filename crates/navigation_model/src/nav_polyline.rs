use geojson::{Feature, Geometry};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::{
    error::{NavPolylineError, PolylineError},
    nav_coord::NavCoord,
    polyline::{self, DEFAULT_PRECISION},
};

pub const POINTS_KEY: &str = "points";

/// The encoded geometry of a navigation leg or step.
///
/// Only the raw `points` string is stored. Coordinates are decoded again on
/// every access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavPolyline {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    points: Option<String>,
}

/// Anything other than a JSON string is read as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(points) => Some(points),
        _ => None,
    })
}

impl NavPolyline {
    pub fn new(points: impl Into<String>) -> Self {
        Self {
            points: Some(points.into()),
        }
    }

    pub fn from_json(json: &serde_json::Value) -> Self {
        Self {
            points: json
                .get(POINTS_KEY)
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned),
        }
    }

    pub fn from_coordinates(coordinates: &[NavCoord]) -> Result<Self, PolylineError> {
        Ok(Self::new(polyline::encode(coordinates)?))
    }

    pub fn points(&self) -> Option<&str> {
        self.points.as_deref()
    }

    pub fn coordinates(&self) -> Option<Vec<NavCoord>> {
        self.coordinates_with_precision(DEFAULT_PRECISION)
    }

    /// Absent and malformed points both come back as `None`. Use
    /// [`NavPolyline::try_coordinates_with_precision`] to tell them apart.
    pub fn coordinates_with_precision(&self, precision: u32) -> Option<Vec<NavCoord>> {
        match self.try_coordinates_with_precision(precision) {
            Ok(coordinates) => Some(coordinates),
            Err(NavPolylineError::MissingPoints) => None,
            Err(NavPolylineError::Decode(error)) => {
                warn!("NavPolyline: discarding undecodable points: {}", error);
                None
            }
        }
    }

    pub fn try_coordinates(&self) -> Result<Vec<NavCoord>, NavPolylineError> {
        self.try_coordinates_with_precision(DEFAULT_PRECISION)
    }

    pub fn try_coordinates_with_precision(
        &self,
        precision: u32,
    ) -> Result<Vec<NavCoord>, NavPolylineError> {
        let points = self.points().ok_or(NavPolylineError::MissingPoints)?;
        Ok(polyline::decode_with_precision(points, precision)?)
    }

    pub fn display_coordinates(&self) -> Option<Vec<geo_types::Point<f64>>> {
        self.coordinates()
            .map(|coordinates| coordinates.into_iter().map(geo_types::Point::from).collect())
    }

    pub fn line_string(&self) -> Option<geo_types::LineString<f64>> {
        self.coordinates().map(|coordinates| {
            coordinates
                .into_iter()
                .map(geo_types::Coord::from)
                .collect()
        })
    }

    pub fn to_feature(&self) -> Option<Feature> {
        self.coordinates().map(|coordinates| line_string_feature(&coordinates))
    }
}

/// Renders a path as a GeoJSON `LineString` feature without properties.
pub fn line_string_feature(coordinates: &[NavCoord]) -> Feature {
    let line_string: geo_types::LineString<f64> = coordinates
        .iter()
        .copied()
        .map(geo_types::Coord::from)
        .collect();

    Feature {
        geometry: Some(Geometry::from(&line_string)),
        ..Default::default()
    }
}

impl From<&serde_json::Value> for NavPolyline {
    fn from(json: &serde_json::Value) -> Self {
        Self::from_json(json)
    }
}
