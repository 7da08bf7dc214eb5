//! Splitting inliers into contiguous runs along a line.
//!
//! Inliers of one candidate line can belong to several unrelated features
//! that happen to be collinear. Runs are maximal groups with no internal
//! gap above `max_gap`; only dense runs are eligible for acceptance.

use crate::core::Point2D;
use crate::features::{Line, LineSegment};

/// Inliers ordered along a line with no internal gap above the threshold.
pub type Run = Vec<Point2D>;

/// Sort `points` along `line` and split wherever consecutive points are more
/// than `max_gap` apart.
///
/// Returns runs in sort order; an empty input yields no runs.
pub fn split_at_gaps(points: &[Point2D], line: &Line, max_gap: f64) -> Vec<Run> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| line.position(*a).total_cmp(&line.position(*b)));

    let mut runs: Vec<Run> = Vec::new();
    let mut current: Run = Vec::new();

    for p in sorted {
        if let Some(&last) = current.last()
            && p.distance(last) > max_gap
        {
            runs.push(std::mem::take(&mut current));
        }
        current.push(p);
    }

    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// Points per unit length between a run's first and last point.
///
/// A zero-length run counts as infinitely dense.
pub fn run_density(run: &[Point2D]) -> f64 {
    match (run.first(), run.last()) {
        (Some(first), Some(last)) => {
            let span = first.distance(*last);
            if span > 0.0 {
                run.len() as f64 / span
            } else {
                f64::INFINITY
            }
        }
        _ => 0.0,
    }
}

/// Pick the largest run with at least `min_inliers` points and density above
/// `min_density`.
///
/// Ties keep the earliest run in sort order.
pub fn select_run(runs: Vec<Run>, min_inliers: usize, min_density: f64) -> Option<Run> {
    let mut best: Option<Run> = None;

    for run in runs {
        if run.len() < min_inliers || run_density(&run) <= min_density {
            continue;
        }
        if best.as_ref().is_none_or(|b| run.len() > b.len()) {
            best = Some(run);
        }
    }

    best
}

/// Split and select in one step.
pub fn best_run(
    points: &[Point2D],
    line: &Line,
    max_gap: f64,
    min_inliers: usize,
    min_density: f64,
) -> Option<Run> {
    let runs = split_at_gaps(points, line, max_gap);
    log::trace!("Split {} inliers into {} runs", points.len(), runs.len());
    select_run(runs, min_inliers, min_density)
}

/// Segment between the projections of a run's extremal points onto `line`.
///
/// Returns `None` for an empty run.
pub fn span_segment(run: &[Point2D], line: &Line) -> Option<LineSegment> {
    let first = run.first()?;
    let last = run.last()?;
    Some(LineSegment::new(line.projection(*first), line.projection(*last)))
}
