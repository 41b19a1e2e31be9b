mod agglomerative;
mod centroid;
mod cut;
mod error;
mod matrix;

#[cfg(test)]
mod tests;

pub use agglomerative::{cluster, Dendrogram, MergeNode};
pub use centroid::{centroids, Centroid};
pub use cut::{cut, ClusterAssignment};
pub use error::ClusterError;
pub use matrix::DistanceMatrix;

/// Historical default cut threshold: an 8-mile radius, in meters
pub const DEFAULT_THRESHOLD_M: f64 = 12_875.0;
