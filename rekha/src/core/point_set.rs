//! Working set of unconsumed foreground points.
//!
//! The set is created once from the parsed bitmap and only ever shrinks:
//! the RANSAC driver removes the points of every accepted segment so later
//! attempts find different lines.

use std::collections::HashSet;

use rand::rngs::StdRng;

use super::Point2D;
use super::sampling::{IndexSampler, seeded_rng};
use crate::error::GeometryError;
use crate::features::{Line, LineSegment};

/// De-duplicated, shrinking collection of foreground points.
///
/// Owns the sampler used for candidate lines. Points keep their insertion
/// order, so a seeded sampler makes every query and sample reproducible.
#[derive(Clone, Debug)]
pub struct PointSet<S = StdRng> {
    points: Vec<Point2D>,
    sampler: S,
}

impl PointSet<StdRng> {
    /// Create a point set sampled by a [`StdRng`] seeded with `seed`
    /// (`0` = OS entropy).
    pub fn from_points<I>(points: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = Point2D>,
    {
        Self::with_sampler(points, seeded_rng(seed))
    }
}

impl<S> PointSet<S> {
    /// Create a point set with an explicit sampler.
    ///
    /// Duplicates keep their first occurrence. Non-finite points are dropped.
    pub fn with_sampler<I>(points: I, sampler: S) -> Self
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        let mut dropped = 0usize;

        for p in points {
            if !p.is_finite() {
                dropped += 1;
                continue;
            }
            if seen.insert(p) {
                unique.push(p);
            }
        }

        if dropped > 0 {
            log::warn!("Dropped {} non-finite points", dropped);
        }

        Self {
            points: unique,
            sampler,
        }
    }

    /// Number of points remaining.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no points remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Remaining points in insertion order.
    #[inline]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Check whether a point is still in the set.
    pub fn contains(&self, p: Point2D) -> bool {
        self.points.contains(&p)
    }

    /// All points within `tolerance` (inclusive) of `line`, in set order.
    pub fn close_points(&self, line: &Line, tolerance: f64) -> Vec<Point2D> {
        self.points
            .iter()
            .copied()
            .filter(|&p| line.distance(p) <= tolerance)
            .collect()
    }

    /// Remove the given points. Points not in the set are ignored.
    ///
    /// Returns the number of points actually removed.
    pub fn remove(&mut self, points: &[Point2D]) -> usize {
        if points.is_empty() {
            return 0;
        }

        let doomed: HashSet<Point2D> = points.iter().copied().collect();
        let before = self.points.len();
        self.points.retain(|p| !doomed.contains(p));
        before - self.points.len()
    }

    /// Consume the set, returning the remaining points.
    pub fn into_points(self) -> Vec<Point2D> {
        self.points
    }
}

impl<S: IndexSampler> PointSet<S> {
    /// Pick two distinct points uniformly at random and join them.
    ///
    /// # Errors
    /// - [`GeometryError::InsufficientPoints`] with fewer than two points
    /// - [`GeometryError::DegenerateFit`] if the pair cannot define a line
    pub fn bootstrap_line(&mut self) -> Result<Line, GeometryError> {
        let (a, b) = self.sample_pair()?;
        LineSegment::new(a, b).to_line()
    }

    /// Two distinct points drawn without replacement.
    pub fn sample_pair(&mut self) -> Result<(Point2D, Point2D), GeometryError> {
        let n = self.points.len();
        if n < 2 {
            return Err(GeometryError::InsufficientPoints {
                required: 2,
                found: n,
            });
        }

        let i = self.sampler.sample_index(n);
        // Draw from the n-1 remaining slots and skip over `i`
        let mut j = self.sampler.sample_index(n - 1);
        if j >= i {
            j += 1;
        }

        Ok((self.points[i], self.points[j]))
    }
}
