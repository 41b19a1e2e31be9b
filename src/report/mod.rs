
use serde::Serialize;

use crate::clusterer::Centroid;
use crate::session::PartitionClustering;

/// Summary of one partition's clustering for downstream reporting
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionReport {
    pub year: i32,
    pub quarter: u8,
    /// Points clustered in this partition
    pub point_count: usize,
    /// Distinct clusters after the cut
    pub cluster_count: usize,
    /// Member count of the largest cluster
    pub largest_cluster_size: usize,
    /// One representative coordinate per cluster, ascending by id
    pub centroids: Vec<Centroid>,
}

impl PartitionReport {
    pub fn from_clustering(run: &PartitionClustering) -> Self {
        let assignment = &run.clustering.assignment;

        let largest_cluster_size = (1..=assignment.num_clusters() as u32)
            .map(|cluster_id| assignment.members(cluster_id).len())
            .max()
            .unwrap_or(0);

        Self {
            year: run.label.year,
            quarter: run.label.quarter,
            point_count: assignment.len(),
            cluster_count: assignment.num_clusters(),
            largest_cluster_size,
            centroids: run.clustering.centroids.clone(),
        }
    }
}

/// Render reports as a fixed-width text table, one row per partition
pub fn render_table(reports: &[PartitionReport]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<10} {:>8} {:>10} {:>16}\n",
        "Partition", "Points", "Clusters", "Largest cluster"
    ));

    for report in reports {
        out.push_str(&format!(
            "{:<10} {:>8} {:>10} {:>16}\n",
            format!("{} Q{}", report.year, report.quarter),
            report.point_count,
            report.cluster_count,
            report.largest_cluster_size,
        ));
    }

    out
}
