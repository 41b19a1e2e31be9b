
use crate::clusterer::{
    centroids, cluster, cut, Centroid, ClusterAssignment, ClusterError, DistanceMatrix,
};
use crate::geo::Point;
use serde::Serialize;
use std::fmt;

/// Year/quarter label re-attached to a clustering run's output.
///
/// Supplied by the caller for downstream grouping and reporting; the
/// clustering algorithm itself never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionLabel {
    pub year: i32,
    /// Calendar quarter, 1 through 4
    pub quarter: u8,
}

impl fmt::Display for PartitionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Q{}", self.year, self.quarter)
    }
}

/// Output of one clustering run
#[derive(Debug, Clone)]
pub struct Clustering {
    /// Point index → cluster id
    pub assignment: ClusterAssignment,
    /// One centroid per cluster id, ascending
    pub centroids: Vec<Centroid>,
}

/// A clustering run's output with its partition label re-attached
#[derive(Debug, Clone)]
pub struct PartitionClustering {
    pub label: PartitionLabel,
    pub clustering: Clustering,
}

/// One clustering run configuration: a cut threshold in meters.
///
/// Pure composition of the engine stages — distance matrix, agglomerative
/// merge, tree cut, centroids. A session holds no mutable state, so
/// independent partitions may be clustered concurrently with separate
/// sessions (or the same one; `run` takes `&self`).
pub struct ClusterSession {
    threshold_m: f64,
}

impl ClusterSession {
    /// Create a session with a cut threshold in meters.
    ///
    /// The threshold must be positive and finite.
    pub fn new(threshold_m: f64) -> Result<Self, ClusterError> {
        if !threshold_m.is_finite() || threshold_m <= 0.0 {
            return Err(ClusterError::InvalidThreshold(threshold_m));
        }
        Ok(Self { threshold_m })
    }

    pub fn threshold_m(&self) -> f64 {
        self.threshold_m
    }

    /// Cluster a point sequence: matrix → dendrogram → cut → centroids.
    ///
    /// Inherits the O(n²) memory cost of [`DistanceMatrix`]; callers
    /// pre-partition large datasets.
    pub fn run(&self, points: &[Point]) -> Result<Clustering, ClusterError> {
        let matrix = DistanceMatrix::build(points)?;
        let tree = cluster(&matrix)?;
        let assignment = cut(&tree, self.threshold_m)?;
        let centroids = centroids(points, &assignment)?;

        log::debug!(
            "clustered {} points into {} clusters at {:.0} m",
            points.len(),
            assignment.num_clusters(),
            self.threshold_m
        );

        Ok(Clustering {
            assignment,
            centroids,
        })
    }

    /// Cluster one partition's points and re-attach its label
    pub fn run_partition(
        &self,
        label: PartitionLabel,
        points: &[Point],
    ) -> Result<PartitionClustering, ClusterError> {
        let clustering = self.run(points)?;
        Ok(PartitionClustering { label, clustering })
    }
}
