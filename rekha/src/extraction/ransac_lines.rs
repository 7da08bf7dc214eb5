//! RANSAC-based line segment detection.
//!
//! Each attempt samples two random points, refines the line they define by
//! alternating inlier collection and Total Least Squares refits, splits the
//! inliers into contiguous runs and accepts the best dense run as a segment.
//! Accepted points are removed from the working set, so later attempts find
//! different lines.
//!
//! # Usage
//!
//! ```rust
//! use rekha::core::Point2D;
//! use rekha::extraction::{RansacLineConfig, RansacLineDetector};
//!
//! let points: Vec<Point2D> = (0..10).map(|x| Point2D::new(x as f64, 0.0)).collect();
//! let config = RansacLineConfig::default().with_seed(42);
//!
//! let detection = RansacLineDetector::new(points, config).run();
//! assert_eq!(detection.segments.len(), 1);
//! ```
//!
//! # Attempt States
//!
//! ```text
//! NoAttemptYet ──► Sampling ──► Refitting ──► Segmenting ──► Accepted
//!                     │             │              │
//!                     └─────────────┴──────────────┴──► (rejected, next attempt)
//!
//! budget spent or too few points left ──► Exhausted
//! ```

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::core::{IndexSampler, Point2D, PointSet};
use crate::error::GeometryError;
use crate::features::{Line, LineSegment};

use super::line_fitting::fit_line;
use super::segmentation::{Run, best_run, select_run, span_segment, split_at_gaps};

/// Configuration for RANSAC line detection.
///
/// Distances are in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RansacLineConfig {
    /// Number of sample → refit → segment attempts.
    /// Default: 500
    pub max_attempts: usize,

    /// Maximum refits per attempt before giving up on a fixed point.
    /// Default: 32
    pub max_refits: usize,

    /// Inlier distance threshold.
    /// Points within this perpendicular distance of a line are inliers.
    /// Default: 4.0
    pub inlier_tolerance: f64,

    /// Maximum gap between consecutive inliers along a line.
    /// Larger gaps split the inliers into separate runs.
    /// Default: 3.5
    pub max_point_gap: f64,

    /// Minimum points for a valid segment.
    /// Detection stops once fewer points than this remain.
    /// Default: 7
    pub min_inliers: usize,

    /// Minimum run density (points per pixel of span), exclusive.
    /// Default: 0.7
    pub min_density: f64,

    /// Re-collect inliers around the accepted run's own line before
    /// removing it, adopting the grown run when it is at least as large.
    /// Default: true
    pub consolidate_runs: bool,

    /// Random seed for reproducibility.
    /// 0 = use entropy-based seed (non-deterministic).
    /// Default: 0
    pub seed: u64,
}

impl Default for RansacLineConfig {
    fn default() -> Self {
        Self {
            max_attempts: 500,
            max_refits: 32,
            inlier_tolerance: 4.0,
            max_point_gap: 3.5,
            min_inliers: 7,
            min_density: 0.7,
            consolidate_runs: true,
            seed: 0,
        }
    }
}

impl RansacLineConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the attempt budget.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Builder-style setter for the refit budget.
    pub fn with_max_refits(mut self, refits: usize) -> Self {
        self.max_refits = refits;
        self
    }

    /// Builder-style setter for inlier tolerance.
    pub fn with_inlier_tolerance(mut self, tolerance: f64) -> Self {
        self.inlier_tolerance = tolerance;
        self
    }

    /// Builder-style setter for maximum point gap.
    pub fn with_max_point_gap(mut self, gap: f64) -> Self {
        self.max_point_gap = gap;
        self
    }

    /// Builder-style setter for minimum inliers.
    pub fn with_min_inliers(mut self, min_inliers: usize) -> Self {
        self.min_inliers = min_inliers;
        self
    }

    /// Builder-style setter for minimum density.
    pub fn with_min_density(mut self, density: f64) -> Self {
        self.min_density = density;
        self
    }

    /// Builder-style setter for run consolidation.
    pub fn with_consolidate_runs(mut self, enabled: bool) -> Self {
        self.consolidate_runs = enabled;
        self
    }

    /// Builder-style setter for random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// How the refit loop of one attempt ended.
#[derive(Clone, Debug, PartialEq)]
pub enum RefitOutcome {
    /// Inlier count stopped changing: the line is a fixed point.
    Converged {
        /// Last fitted line
        line: Line,
        /// Points within tolerance of `line`
        inliers: Vec<Point2D>,
        /// Refits performed
        refits: usize,
    },
    /// Refit budget spent while the inlier count was still changing.
    /// The last fit is kept.
    Stalled {
        /// Last fitted line
        line: Line,
        /// Points within tolerance of `line`
        inliers: Vec<Point2D>,
    },
    /// Too few inliers to fit, or the fit itself failed.
    Degenerate(GeometryError),
}

/// Alternate inlier collection and TLS refits, starting from `initial`.
///
/// Bounded by `config.max_refits`; stops early at a fixed point.
pub fn refine_line<S>(points: &PointSet<S>, initial: Line, config: &RansacLineConfig) -> RefitOutcome {
    let mut line = initial;
    let mut inliers = points.close_points(&line, config.inlier_tolerance);

    for refit in 1..=config.max_refits {
        if inliers.len() < 2 {
            return RefitOutcome::Degenerate(GeometryError::InsufficientPoints {
                required: 2,
                found: inliers.len(),
            });
        }

        line = match fit_line(&inliers) {
            Ok(fitted) => fitted,
            Err(e) => return RefitOutcome::Degenerate(e),
        };

        let next = points.close_points(&line, config.inlier_tolerance);
        let fixed_point = next.len() == inliers.len();
        inliers = next;

        if fixed_point {
            return RefitOutcome::Converged {
                line,
                inliers,
                refits: refit,
            };
        }
    }

    RefitOutcome::Stalled { line, inliers }
}

/// Where the detector is in its attempt cycle.
///
/// After [`RansacLineDetector::step`] returns, this is the phase the attempt
/// ended in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectorState {
    /// No attempt has run.
    NoAttemptYet,
    /// Drawing a candidate line from two random points.
    Sampling,
    /// Refining the candidate line.
    Refitting,
    /// Splitting inliers into runs and picking one.
    Segmenting,
    /// The last attempt produced a segment.
    Accepted,
    /// Attempt budget spent or too few points left.
    Exhausted,
}

/// Why an attempt produced no segment.
#[derive(Clone, Debug, PartialEq)]
pub enum RejectReason {
    /// Two points could not be sampled or joined.
    Sampling(GeometryError),
    /// The refit loop degenerated.
    Refit(GeometryError),
    /// The refined line has too few inliers.
    TooFewInliers {
        /// Inliers of the refined line
        found: usize,
        /// Configured minimum
        required: usize,
    },
    /// No run is large and dense enough.
    NoQualifyingRun {
        /// Inliers that were segmented
        inliers: usize,
    },
}

/// Result of one attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AttemptOutcome {
    /// A segment was accepted and its points removed.
    Accepted(LineSegment),
    /// The attempt was abandoned; the point set is unchanged.
    Rejected(RejectReason),
    /// No attempt was made: the detector is exhausted.
    Exhausted,
}

/// Result of a complete detection run.
#[derive(Clone, Debug, Default)]
pub struct Detection {
    /// Accepted segments in discovery order.
    pub segments: Vec<LineSegment>,
    /// Attempts performed.
    pub attempts: usize,
    /// Attempts that were rejected.
    pub rejected: usize,
    /// Points not consumed by any segment.
    pub remaining: Vec<Point2D>,
}

/// RANSAC driver owning the working point set.
///
/// The detector is the only writer of its [`PointSet`].
#[derive(Clone, Debug)]
pub struct RansacLineDetector<S = StdRng> {
    config: RansacLineConfig,
    points: PointSet<S>,
    segments: Vec<LineSegment>,
    attempts: usize,
    rejected: usize,
    state: DetectorState,
}

impl RansacLineDetector<StdRng> {
    /// Create a detector sampling with a [`StdRng`] seeded from `config.seed`.
    pub fn new<I>(points: I, config: RansacLineConfig) -> Self
    where
        I: IntoIterator<Item = Point2D>,
    {
        let points = PointSet::from_points(points, config.seed);
        Self::with_point_set(points, config)
    }
}

impl<S: IndexSampler> RansacLineDetector<S> {
    /// Create a detector over an existing point set and its sampler.
    pub fn with_point_set(points: PointSet<S>, config: RansacLineConfig) -> Self {
        Self {
            config,
            points,
            segments: Vec::new(),
            attempts: 0,
            rejected: 0,
            state: DetectorState::NoAttemptYet,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &RansacLineConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> DetectorState {
        self.state
    }

    /// Unconsumed points.
    pub fn point_set(&self) -> &PointSet<S> {
        &self.points
    }

    /// Segments accepted so far, in discovery order.
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Attempts performed so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// True once the attempt budget is spent or too few points remain to
    /// form a segment.
    pub fn is_exhausted(&self) -> bool {
        self.attempts >= self.config.max_attempts
            || self.points.len() < self.config.min_inliers.max(2)
    }

    /// Run until exhausted.
    pub fn run(mut self) -> Detection {
        while self.step() != AttemptOutcome::Exhausted {}

        log::debug!(
            "Detected {} segments in {} attempts ({} rejected), {} points left",
            self.segments.len(),
            self.attempts,
            self.rejected,
            self.points.len()
        );

        Detection {
            segments: self.segments,
            attempts: self.attempts,
            rejected: self.rejected,
            remaining: self.points.into_points(),
        }
    }

    /// Perform one attempt.
    pub fn step(&mut self) -> AttemptOutcome {
        if self.is_exhausted() {
            self.state = DetectorState::Exhausted;
            return AttemptOutcome::Exhausted;
        }

        self.attempts += 1;
        match self.attempt() {
            Ok(segment) => {
                self.state = DetectorState::Accepted;
                AttemptOutcome::Accepted(segment)
            }
            Err(reason) => {
                log::trace!("Attempt {} rejected: {:?}", self.attempts, reason);
                self.rejected += 1;
                AttemptOutcome::Rejected(reason)
            }
        }
    }

    fn attempt(&mut self) -> Result<LineSegment, RejectReason> {
        self.state = DetectorState::Sampling;
        let candidate = self
            .points
            .bootstrap_line()
            .map_err(RejectReason::Sampling)?;

        self.state = DetectorState::Refitting;
        let (line, inliers) = match refine_line(&self.points, candidate, &self.config) {
            RefitOutcome::Converged {
                line,
                inliers,
                refits,
            } => {
                log::trace!("Converged after {} refits with {} inliers", refits, inliers.len());
                (line, inliers)
            }
            RefitOutcome::Stalled { line, inliers } => {
                log::trace!(
                    "No fixed point after {} refits, keeping {} inliers",
                    self.config.max_refits,
                    inliers.len()
                );
                (line, inliers)
            }
            RefitOutcome::Degenerate(e) => return Err(RejectReason::Refit(e)),
        };

        if inliers.len() < self.config.min_inliers {
            return Err(RejectReason::TooFewInliers {
                found: inliers.len(),
                required: self.config.min_inliers,
            });
        }

        self.state = DetectorState::Segmenting;
        let run = best_run(
            &inliers,
            &line,
            self.config.max_point_gap,
            self.config.min_inliers,
            self.config.min_density,
        )
        .ok_or(RejectReason::NoQualifyingRun {
            inliers: inliers.len(),
        })?;

        let (run, run_line) = self.settle_run(run, line);
        let segment = span_segment(&run, &run_line).ok_or(RejectReason::NoQualifyingRun {
            inliers: inliers.len(),
        })?;

        let removed = self.points.remove(&run);
        self.segments.push(segment);

        log::debug!(
            "Attempt {}: accepted {} ({} points, {} left)",
            self.attempts,
            segment,
            removed,
            self.points.len()
        );

        Ok(segment)
    }

    /// Refit the line to the chosen run and, when enabled, grow the run
    /// around that line. Returns the run sorted along its final line.
    fn settle_run(&self, run: Run, line: Line) -> (Run, Line) {
        let run_line = fit_line(&run).unwrap_or(line);

        let (mut run, run_line) = match self.consolidate(&run, &run_line) {
            Some(grown) => {
                let grown_line = fit_line(&grown).unwrap_or(run_line);
                (grown, grown_line)
            }
            None => (run, run_line),
        };

        run.sort_by(|a, b| run_line.position(*a).total_cmp(&run_line.position(*b)));
        (run, run_line)
    }

    /// The qualifying run around `run_line` that contains the run's first
    /// point, if it is at least as large as `run`.
    fn consolidate(&self, run: &[Point2D], run_line: &Line) -> Option<Run> {
        if !self.config.consolidate_runs {
            return None;
        }
        let anchor = *run.first()?;

        let inliers = self
            .points
            .close_points(run_line, self.config.inlier_tolerance);
        let around = split_at_gaps(&inliers, run_line, self.config.max_point_gap)
            .into_iter()
            .find(|r| r.contains(&anchor))?;

        select_run(
            vec![around],
            self.config.min_inliers,
            self.config.min_density,
        )
        .filter(|grown| grown.len() >= run.len())
    }
}
