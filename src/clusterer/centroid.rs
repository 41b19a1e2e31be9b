use crate::clusterer::{ClusterAssignment, ClusterError};
use crate::geo::Point;
use serde::Serialize;

/// Representative coordinate for one cluster
///
/// Computed as the arithmetic mean of member latitudes and longitudes — a
/// planar average of spherical coordinates, not a true geodesic centroid.
/// The error grows with cluster extent; at the city scale this engine
/// targets it is well below coordinate noise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Centroid {
    /// Cluster id from the assignment (1-based)
    pub cluster_id: u32,
    /// Mean latitude of the member points
    pub lat: f64,
    /// Mean longitude of the member points
    pub lng: f64,
}

/// Compute one centroid per cluster id, ordered by ascending id.
///
/// A cluster id with zero members cannot occur for an assignment produced
/// by [`cut`](crate::clusterer::cut); hitting one here means the cut logic
/// is broken and is reported as an invariant violation.
pub fn centroids(
    points: &[Point],
    assignment: &ClusterAssignment,
) -> Result<Vec<Centroid>, ClusterError> {
    if points.len() != assignment.len() {
        return Err(ClusterError::InvariantViolation {
            step: "centroid computation",
            detail: format!("{} points but {} labels", points.len(), assignment.len()),
        });
    }

    let k = assignment.num_clusters();
    let mut lat_sums = vec![0.0; k];
    let mut lng_sums = vec![0.0; k];
    let mut counts = vec![0usize; k];

    for (point, &label) in points.iter().zip(assignment.labels()) {
        let slot = (label - 1) as usize;
        lat_sums[slot] += point.lat;
        lng_sums[slot] += point.lng;
        counts[slot] += 1;
    }

    let mut result = Vec::with_capacity(k);
    for slot in 0..k {
        let cluster_id = (slot + 1) as u32;
        if counts[slot] == 0 {
            return Err(ClusterError::InvariantViolation {
                step: "centroid computation",
                detail: format!("cluster {cluster_id} has no members"),
            });
        }

        let n = counts[slot] as f64;
        result.push(Centroid {
            cluster_id,
            lat: lat_sums[slot] / n,
            lng: lng_sums[slot] / n,
        });
    }

    Ok(result)
}
