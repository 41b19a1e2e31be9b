use super::Point;

/// Mean Earth radius in meters (spherical model)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters.
///
/// Haversine formula on a spherical Earth. Symmetric, zero for identical
/// coordinates. Accurate to ~0.5% of the true geodesic distance, which is
/// well inside the tolerance of a city-scale cut threshold.
///
/// Expects validated coordinates (see [`validate_points`](super::validate_points));
/// non-finite inputs propagate as NaN rather than panicking.
pub fn haversine_m(a: &Point, b: &Point) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);

    // sqrt(h) can exceed 1 by a rounding error for near-antipodal points
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}
