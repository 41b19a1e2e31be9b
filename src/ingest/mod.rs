mod partition;


pub use partition::{partition_by_quarter, quarter_of_month};

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::io::Read;
use thiserror::Error;

use crate::geo::Point;

/// Timestamp formats accepted in the `occurred_at` column, tried in order
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%m/%d/%Y %H:%M"];

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),
}

/// A cleaned incident row ready for partitioning and clustering
#[derive(Debug, Clone)]
pub struct IncidentRecord {
    /// Source row identifier (e.g., incident number)
    pub id: i64,
    /// When the incident occurred
    pub occurred_at: NaiveDateTime,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl IncidentRecord {
    /// Project the record down to the engine's point type
    pub fn to_point(&self) -> Point {
        Point::new(self.id, self.lat, self.lng)
    }
}

/// Inclusive geographic bounding box used to drop mis-geocoded rows
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

/// Counters describing what ingest kept and dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Rows that survived cleaning
    pub kept: usize,
    /// Rows skipped for a bad timestamp or coordinate string
    pub malformed: usize,
    /// Rows with coordinates outside the bounding box
    pub out_of_bounds: usize,
}

/// Raw CSV row shape: `id,occurred_at,location`
///
/// `location` is a single `"lat,lng"` field as exported by the source
/// system; ingest splits it into numeric coordinates.
#[derive(Debug, Deserialize)]
struct RawRow {
    id: i64,
    occurred_at: String,
    location: String,
}

/// Read and clean incident rows from CSV.
///
/// Cleaning policy: malformed rows (unparseable timestamp or coordinates)
/// and rows outside `bounds` are dropped with a logged warning and counted
/// in the returned stats, never fatal. A CSV-level read failure is fatal.
pub fn read_incidents<R: Read>(
    reader: R,
    bounds: &BoundingBox,
) -> Result<(Vec<IncidentRecord>, IngestStats), IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    let mut stats = IngestStats::default();

    for row in csv_reader.deserialize() {
        let raw: RawRow = row?;

        let occurred_at = match parse_timestamp(&raw.occurred_at) {
            Some(t) => t,
            None => {
                log::warn!("row {}: unparseable timestamp {:?}", raw.id, raw.occurred_at);
                stats.malformed += 1;
                continue;
            }
        };

        let (lat, lng) = match split_coordinates(&raw.location) {
            Some(coords) => coords,
            None => {
                log::warn!("row {}: unparseable location {:?}", raw.id, raw.location);
                stats.malformed += 1;
                continue;
            }
        };

        if !bounds.contains(lat, lng) {
            stats.out_of_bounds += 1;
            continue;
        }

        stats.kept += 1;
        records.push(IncidentRecord {
            id: raw.id,
            occurred_at,
            lat,
            lng,
        });
    }

    Ok((records, stats))
}

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text.trim(), format).ok())
}

/// Split a `"lat,lng"` location field into numeric coordinates.
///
/// Tolerates surrounding whitespace and parentheses (`"(36.84, -76.28)"`).
fn split_coordinates(location: &str) -> Option<(f64, f64)> {
    let trimmed = location.trim().trim_matches(|c| c == '(' || c == ')');
    let (lat_text, lng_text) = trimmed.split_once(',')?;

    let lat: f64 = lat_text.trim().parse().ok()?;
    let lng: f64 = lng_text.trim().parse().ok()?;

    if !lat.is_finite() || !lng.is_finite() {
        return None;
    }

    Some((lat, lng))
}
