// Public API exports
pub mod clusterer;
pub mod geo;
pub mod ingest;
pub mod report;
pub mod session;

// Re-export main types for convenience
pub use geo::{haversine_m, validate_points, Point, EARTH_RADIUS_M};

pub use clusterer::{
    centroids, cluster, cut, Centroid, ClusterAssignment, ClusterError, Dendrogram,
    DistanceMatrix, MergeNode, DEFAULT_THRESHOLD_M,
};

pub use session::{ClusterSession, Clustering, PartitionClustering, PartitionLabel};

pub use ingest::{
    partition_by_quarter, read_incidents, BoundingBox, IncidentRecord, IngestError, IngestStats,
};

pub use report::{render_table, PartitionReport};
