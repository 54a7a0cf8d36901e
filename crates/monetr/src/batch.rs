//! Grouping and chunking of bulk report batches.

use crate::types::DataPoint;

/// Maximum number of data points per bulk report request.
pub const BATCH_SIZE: usize = 200;

/// Group data points by project, preserving first-seen project order.
///
/// Within each group the original order of points is kept.
pub(crate) fn group_by_project(points: Vec<DataPoint>) -> Vec<(String, Vec<DataPoint>)> {
    let mut groups: Vec<(String, Vec<DataPoint>)> = Vec::new();

    for point in points {
        match groups.iter_mut().find(|(id, _)| *id == point.project_id) {
            Some((_, group)) => group.push(point),
            None => groups.push((point.project_id.clone(), vec![point])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(project: &str, value: f64) -> DataPoint {
        DataPoint::new(project, 1, 1, value, 1706400000000)
    }

    #[test]
    fn test_groups_preserve_first_seen_order() {
        let points = vec![
            point("p2", 1.0),
            point("p1", 2.0),
            point("p2", 3.0),
            point("p3", 4.0),
            point("p1", 5.0),
        ];

        let groups = group_by_project(points);

        let order: Vec<&str> = groups.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, ["p2", "p1", "p3"]);
    }

    #[test]
    fn test_groups_preserve_within_project_order() {
        let points = vec![
            point("p1", 1.0),
            point("p2", 9.0),
            point("p1", 2.0),
            point("p1", 3.0),
        ];

        let groups = group_by_project(points);

        let values: Vec<f64> = groups[0].1.iter().map(|p| p.value).collect();
        assert_eq!(values, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(group_by_project(Vec::new()).is_empty());
    }

    #[test]
    fn test_chunking_250_points_gives_two_blocks() {
        let points: Vec<DataPoint> = (0..250).map(|i| point("p1", i as f64)).collect();

        let groups = group_by_project(points);
        assert_eq!(groups.len(), 1);

        let blocks: Vec<&[DataPoint]> = groups[0].1.chunks(BATCH_SIZE).collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].len(), 200);
        assert_eq!(blocks[1].len(), 50);
        // Original order survives grouping and chunking.
        assert_eq!(blocks[1][0].value, 200.0);
    }
}
