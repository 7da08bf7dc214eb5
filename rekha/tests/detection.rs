//! End-to-end detection tests: bitmap text in, report out.

use approx::assert_relative_eq;
use rekha::core::Point2D;
use rekha::extraction::{RansacLineConfig, RansacLineDetector, detect_lines};
use rekha::features::LineSegment;
use rekha::io::{Bitmap, Report};

const SINGLE_ROW: &str = include_str!("fixtures/single_row.w");
const PARALLEL_ROWS: &str = include_str!("fixtures/parallel_rows.w");
const CORNER_ARMS: &str = include_str!("fixtures/corner_arms.w");

fn detect(input: &str, seed: u64) -> Report {
    let bitmap: Bitmap = input.parse().unwrap();
    let config = RansacLineConfig::default().with_seed(seed);
    Report::from(RansacLineDetector::new(bitmap.points, config).run())
}

fn sorted_lines(report: &Report) -> Vec<String> {
    let mut lines: Vec<String> = report.segments.iter().map(|s| s.to_string()).collect();
    lines.sort();
    lines
}

#[test]
fn test_single_row_report() {
    for seed in 1..=10 {
        assert_eq!(
            detect(SINGLE_ROW, seed).to_string(),
            "number of circles: 0\nnumber of lines: 1\n0.0 0.0 9.0 0.0\n"
        );
    }
}

#[test]
fn test_parallel_rows_give_two_lines() {
    for seed in 1..=20 {
        let report = detect(PARALLEL_ROWS, seed);
        assert_eq!(
            sorted_lines(&report),
            vec!["0.0 2.0 19.0 2.0", "0.0 9.0 19.0 9.0"],
            "seed {seed}"
        );
    }
}

#[test]
fn test_corner_arms_ignore_stray_pixels() {
    for seed in 1..=20 {
        let report = detect(CORNER_ARMS, seed);
        assert_eq!(
            sorted_lines(&report),
            vec!["0.0 5.0 0.0 20.0", "5.0 0.0 20.0 0.0"],
            "seed {seed}"
        );
    }
}

#[test]
fn test_empty_bitmap() {
    let report = detect("5\n3\n.....\n.....\n.....\n", 1);
    assert_eq!(
        report.to_string(),
        "number of circles: 0\nnumber of lines: 0\n"
    );
}

#[test]
fn test_too_few_pixels_for_a_line() {
    let report = detect("6\n1\n######\n", 1);
    assert!(report.segments.is_empty());
}

#[test]
fn test_diagonal_segment_endpoints() {
    let points: Vec<Point2D> = (0..15).map(|i| Point2D::new(i as f64, i as f64)).collect();
    let detection = detect_lines(points, &RansacLineConfig::default().with_seed(11));

    assert_eq!(detection.segments.len(), 1);
    let seg = detection.segments[0];
    let (start, end) = if seg.a.x < seg.b.x {
        (seg.a, seg.b)
    } else {
        (seg.b, seg.a)
    };
    assert_relative_eq!(start.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(start.y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(end.x, 14.0, epsilon = 1e-9);
    assert_relative_eq!(end.y, 14.0, epsilon = 1e-9);
}

#[test]
fn test_segments_are_dense_and_large() {
    let bitmap: Bitmap = CORNER_ARMS.parse().unwrap();
    let config = RansacLineConfig::default().with_seed(5);
    let detection = RansacLineDetector::new(bitmap.points.clone(), config.clone()).run();

    let consumed = bitmap.points.len() - detection.remaining.len();
    assert_eq!(consumed, 32);
    for seg in &detection.segments {
        // Pixels are one apart, so a qualifying run spans at least min_inliers - 1
        assert!(seg.length() >= (config.min_inliers - 1) as f64);
    }
}

#[test]
fn test_same_seed_is_reproducible() {
    let bitmap: Bitmap = PARALLEL_ROWS.parse().unwrap();
    let config = RansacLineConfig::default().with_seed(1234);

    let first = detect_lines(bitmap.points.clone(), &config);
    let second = detect_lines(bitmap.points, &config);
    assert_eq!(first.segments, second.segments);
    assert_eq!(first.attempts, second.attempts);
}

#[test]
fn test_collinear_clusters_stay_separate() {
    let input = "30\n1\n##########..........##########\n";
    let report = detect(input, 3);
    assert_eq!(
        sorted_lines(&report),
        vec!["0.0 0.0 9.0 0.0", "20.0 0.0 29.0 0.0"]
    );
}

#[test]
fn test_removed_points_never_return() {
    let bitmap: Bitmap = PARALLEL_ROWS.parse().unwrap();
    let mut detector =
        RansacLineDetector::new(bitmap.points, RansacLineConfig::default().with_seed(8));

    let mut consumed: Vec<Point2D> = Vec::new();
    while !detector.is_exhausted() {
        let before: Vec<Point2D> = detector.point_set().points().to_vec();
        detector.step();
        let after = detector.point_set().points();
        consumed.extend(before.iter().filter(|p| !after.contains(p)));
        assert!(consumed.iter().all(|p| !detector.point_set().contains(*p)));
    }
    assert_eq!(consumed.len(), 40);
}

#[test]
fn test_segment_order_is_irrelevant_for_equality() {
    let seg = LineSegment::new(Point2D::new(1.0, 2.0), Point2D::new(3.0, 4.0));
    assert!(seg.same_endpoints(&seg.reversed()));
}
