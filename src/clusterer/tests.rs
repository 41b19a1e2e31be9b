use super::*;
use crate::geo::{haversine_m, Point};

fn make_points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(lat, lng))| Point::new(i as i64, lat, lng))
        .collect()
}

#[test]
fn test_matrix_symmetry_and_zero_diagonal() {
    let points = make_points(&[(36.80, -76.10), (36.85, -76.20), (36.90, -76.05)]);
    let matrix = DistanceMatrix::build(&points).unwrap();

    assert_eq!(matrix.len(), 3);
    for i in 0..3 {
        assert_eq!(matrix.get(i, i), 0.0);
        for j in 0..3 {
            assert_eq!(matrix.get(i, j), matrix.get(j, i));
        }
    }
}

#[test]
fn test_matrix_matches_direct_distance() {
    let points = make_points(&[(36.80, -76.10), (36.90, -76.20)]);
    let matrix = DistanceMatrix::build(&points).unwrap();

    let direct = haversine_m(&points[0], &points[1]);
    assert_eq!(matrix.get(0, 1), direct);
}

#[test]
fn test_matrix_rejects_empty_input() {
    assert!(matches!(
        DistanceMatrix::build(&[]),
        Err(ClusterError::EmptyInput)
    ));
}

#[test]
fn test_matrix_rejects_invalid_coordinate() {
    let points = vec![Point::new(0, 36.8, -76.1), Point::new(1, 200.0, 0.0)];
    assert!(matches!(
        DistanceMatrix::build(&points),
        Err(ClusterError::InvalidCoordinate { index: 1, .. })
    ));
}

#[test]
fn test_single_point_dendrogram() {
    let points = make_points(&[(36.80, -76.10)]);
    let matrix = DistanceMatrix::build(&points).unwrap();
    let tree = cluster(&matrix).unwrap();

    assert_eq!(tree.n_points(), 1);
    assert_eq!(tree.root_height(), 0.0);
    assert!(matches!(tree.node(tree.root()), MergeNode::Leaf(0)));

    let assignment = cut(&tree, 1000.0).unwrap();
    assert_eq!(assignment.labels(), &[1]);
    assert_eq!(assignment.num_clusters(), 1);
}

#[test]
fn test_merge_heights_on_collinear_points() {
    // Three points along the equator: the near pair merges first, then
    // the far point joins at the full end-to-end distance (complete
    // linkage takes the max pairwise distance).
    let points = make_points(&[(0.0, 0.0), (0.0, 0.01), (0.0, 0.03)]);
    let matrix = DistanceMatrix::build(&points).unwrap();
    let tree = cluster(&matrix).unwrap();

    let d01 = matrix.get(0, 1);
    let d02 = matrix.get(0, 2);
    assert!((tree.root_height() - d02).abs() < 1e-9);

    // Cutting between the two merge heights separates the far point
    let assignment = cut(&tree, (d01 + d02) / 2.0).unwrap();
    assert_eq!(assignment.labels(), &[1, 1, 2]);
}

#[test]
fn test_tie_break_prefers_lowest_index_pair() {
    // Equally spaced points on the equator: the 0-1 and 1-2 gaps are
    // exactly equal, so the first merge is a genuine tie. The lowest
    // index pair (0, 1) must win, every run.
    let points = make_points(&[(0.0, 0.0), (0.0, 0.01), (0.0, 0.02)]);
    let matrix = DistanceMatrix::build(&points).unwrap();
    let d01 = matrix.get(0, 1);
    assert_eq!(d01, matrix.get(1, 2), "test relies on an exact tie");

    let tree = cluster(&matrix).unwrap();
    let assignment = cut(&tree, d01 * 1.5).unwrap();
    assert_eq!(assignment.labels(), &[1, 1, 2]);
}

#[test]
fn test_cut_assigns_every_point_exactly_once() {
    let points = make_points(&[
        (36.80, -76.10),
        (36.81, -76.11),
        (36.95, -76.30),
        (36.96, -76.31),
        (36.70, -75.95),
    ]);
    let matrix = DistanceMatrix::build(&points).unwrap();
    let tree = cluster(&matrix).unwrap();
    let assignment = cut(&tree, 5_000.0).unwrap();

    assert_eq!(assignment.len(), points.len());
    let k = assignment.num_clusters() as u32;
    for &label in assignment.labels() {
        assert!(label >= 1 && label <= k);
    }
    for cluster_id in 1..=k {
        assert!(!assignment.members(cluster_id).is_empty());
    }
}

#[test]
fn test_cut_zero_threshold_yields_singletons() {
    let points = make_points(&[(36.80, -76.10), (36.85, -76.20), (36.90, -76.05)]);
    let matrix = DistanceMatrix::build(&points).unwrap();
    let tree = cluster(&matrix).unwrap();

    let assignment = cut(&tree, 0.0).unwrap();
    assert_eq!(assignment.num_clusters(), 3);
    assert_eq!(assignment.labels(), &[1, 2, 3]);
}

#[test]
fn test_cut_at_root_height_yields_one_cluster() {
    let points = make_points(&[(36.80, -76.10), (36.85, -76.20), (36.90, -76.05)]);
    let matrix = DistanceMatrix::build(&points).unwrap();
    let tree = cluster(&matrix).unwrap();

    let assignment = cut(&tree, tree.root_height()).unwrap();
    assert_eq!(assignment.num_clusters(), 1);
    assert_eq!(assignment.labels(), &[1, 1, 1]);
}

#[test]
fn test_cluster_count_is_monotonic_in_threshold() {
    let points = make_points(&[
        (36.80, -76.10),
        (36.801, -76.101),
        (36.85, -76.15),
        (36.95, -76.30),
        (36.70, -75.95),
        (36.71, -75.96),
    ]);
    let matrix = DistanceMatrix::build(&points).unwrap();
    let tree = cluster(&matrix).unwrap();

    let thresholds = [0.0, 200.0, 2_000.0, 10_000.0, 50_000.0, 1e7];
    let mut previous = usize::MAX;
    for threshold in thresholds {
        let count = cut(&tree, threshold).unwrap().num_clusters();
        assert!(
            count <= previous,
            "cluster count rose from {previous} to {count} at threshold {threshold}"
        );
        previous = count;
    }
}

#[test]
fn test_cut_rejects_non_finite_threshold() {
    let points = make_points(&[(36.80, -76.10), (36.85, -76.20)]);
    let matrix = DistanceMatrix::build(&points).unwrap();
    let tree = cluster(&matrix).unwrap();

    assert!(matches!(
        cut(&tree, f64::NAN),
        Err(ClusterError::InvalidThreshold(_))
    ));
}

#[test]
fn test_centroid_is_arithmetic_mean() {
    let points = make_points(&[(36.80, -76.10), (36.82, -76.12)]);
    let matrix = DistanceMatrix::build(&points).unwrap();
    let tree = cluster(&matrix).unwrap();
    let assignment = cut(&tree, tree.root_height()).unwrap();

    let result = centroids(&points, &assignment).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].cluster_id, 1);
    assert!((result[0].lat - 36.81).abs() < 1e-9);
    assert!((result[0].lng - (-76.11)).abs() < 1e-9);
}

#[test]
fn test_centroids_ordered_by_cluster_id() {
    let points = make_points(&[
        (36.95, -76.30),
        (36.80, -76.10),
        (36.951, -76.301),
        (36.801, -76.101),
    ]);
    let matrix = DistanceMatrix::build(&points).unwrap();
    let tree = cluster(&matrix).unwrap();
    let assignment = cut(&tree, 1_000.0).unwrap();

    let result = centroids(&points, &assignment).unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].cluster_id, 1);
    assert_eq!(result[1].cluster_id, 2);
}

#[test]
fn test_centroids_reject_length_mismatch() {
    let points = make_points(&[(36.80, -76.10), (36.82, -76.12)]);
    let matrix = DistanceMatrix::build(&points).unwrap();
    let tree = cluster(&matrix).unwrap();
    let assignment = cut(&tree, tree.root_height()).unwrap();

    let truncated = &points[..1];
    assert!(matches!(
        centroids(truncated, &assignment),
        Err(ClusterError::InvariantViolation { .. })
    ));
}
