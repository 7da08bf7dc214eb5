//! Line segment extraction from unordered foreground points.
//!
//! # Algorithms
//!
//! - **Line Fitting**: Total Least Squares (orthogonal regression)
//! - **Segmentation**: splitting a line's inliers at gaps and picking the
//!   best dense run
//! - **RANSAC Lines**: sample, refit to a fixed point, segment, remove
//!
//! # Example
//!
//! ```rust
//! use rekha::core::Point2D;
//! use rekha::extraction::{RansacLineConfig, detect_lines};
//!
//! let points: Vec<Point2D> = (0..10).map(|y| Point2D::new(2.0, y as f64)).collect();
//! let detection = detect_lines(points, &RansacLineConfig::default().with_seed(1));
//! assert_eq!(detection.segments.len(), 1);
//! ```

use crate::core::Point2D;

pub mod line_fitting;
pub mod ransac_lines;
pub mod segmentation;

pub use line_fitting::{fit_line, fitting_error};
pub use ransac_lines::{
    AttemptOutcome, Detection, DetectorState, RansacLineConfig, RansacLineDetector, RefitOutcome,
    RejectReason, refine_line,
};
pub use segmentation::{Run, best_run, run_density, select_run, span_segment, split_at_gaps};

/// Run RANSAC line detection to completion over `points`.
///
/// Sampling uses a [`rand::rngs::StdRng`] seeded from `config.seed`.
pub fn detect_lines<I>(points: I, config: &RansacLineConfig) -> Detection
where
    I: IntoIterator<Item = Point2D>,
{
    RansacLineDetector::new(points, config.clone()).run()
}
