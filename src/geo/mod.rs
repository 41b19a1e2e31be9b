mod distance;


pub use distance::{haversine_m, EARTH_RADIUS_M};

use crate::clusterer::ClusterError;
use serde::{Deserialize, Serialize};

/// A geocoded point entering a clustering run
///
/// Identity is the `id`; coordinates are immutable once the point enters
/// the engine. Latitude is degrees north (-90 to 90), longitude degrees
/// east (-180 to 180).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Caller-assigned identifier (e.g., incident number)
    pub id: i64,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Point {
    pub fn new(id: i64, lat: f64, lng: f64) -> Self {
        Self { id, lat, lng }
    }

    /// Whether both coordinates are finite and within geographic range
    pub fn has_valid_coordinates(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Validate a point sequence before it enters the engine.
///
/// Ingestion is expected to filter bad coordinates already; this is the
/// engine's own check so an unfiltered caller fails fast instead of
/// producing NaN distances.
pub fn validate_points(points: &[Point]) -> Result<(), ClusterError> {
    if points.is_empty() {
        return Err(ClusterError::EmptyInput);
    }

    for (index, point) in points.iter().enumerate() {
        if !point.has_valid_coordinates() {
            return Err(ClusterError::InvalidCoordinate {
                index,
                lat: point.lat,
                lng: point.lng,
            });
        }
    }

    Ok(())
}
