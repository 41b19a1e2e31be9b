use chrono::Datelike;
use std::collections::BTreeMap;

use super::IncidentRecord;
use crate::geo::Point;
use crate::session::PartitionLabel;

/// Calendar quarter (1-4) for a month (1-12)
pub fn quarter_of_month(month: u32) -> u8 {
    ((month - 1) / 3 + 1) as u8
}

/// Group records into (year, quarter) buckets of engine points.
///
/// Buckets are ordered ascending by label; within a bucket, points keep
/// the input row order. This is the pre-partitioning step that bounds the
/// O(n²) distance matrix per clustering run.
pub fn partition_by_quarter(records: &[IncidentRecord]) -> BTreeMap<PartitionLabel, Vec<Point>> {
    let mut partitions: BTreeMap<PartitionLabel, Vec<Point>> = BTreeMap::new();

    for record in records {
        let label = PartitionLabel {
            year: record.occurred_at.year(),
            quarter: quarter_of_month(record.occurred_at.month()),
        };
        partitions.entry(label).or_default().push(record.to_point());
    }

    partitions
}
