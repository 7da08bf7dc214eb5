//! Infinite lines and line segments.
//!
//! Lines use slope-intercept form `y = m·x + b`. A vertical line has no
//! finite slope, so it is carried as its own variant instead of letting an
//! infinite slope leak into distance and projection arithmetic.
//!
//! # Point-to-Line Distance
//!
//! ```text
//! distance = |m·x - y + b| / sqrt(m² + 1)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::error::GeometryError;

/// Relative tolerance for the projection consistency check.
const PROJECTION_RTOL: f64 = 1e-6;

/// An infinite 2D line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Line {
    /// `y = slope·x + intercept`
    Sloped {
        /// Slope `m`
        slope: f64,
        /// Y-intercept `b`
        intercept: f64,
    },
    /// `x = x`
    Vertical {
        /// X coordinate shared by every point on the line
        x: f64,
    },
}

impl Line {
    /// Create a line in slope-intercept form.
    #[inline]
    pub fn new(slope: f64, intercept: f64) -> Self {
        debug_assert!(slope.is_finite() && intercept.is_finite());
        Line::Sloped { slope, intercept }
    }

    /// Create a vertical line `x = x`.
    #[inline]
    pub fn vertical(x: f64) -> Self {
        Line::Vertical { x }
    }

    /// Slope, or `None` for a vertical line.
    #[inline]
    pub fn slope(&self) -> Option<f64> {
        match *self {
            Line::Sloped { slope, .. } => Some(slope),
            Line::Vertical { .. } => None,
        }
    }

    /// Y-intercept, or `None` for a vertical line.
    #[inline]
    pub fn intercept(&self) -> Option<f64> {
        match *self {
            Line::Sloped { intercept, .. } => Some(intercept),
            Line::Vertical { .. } => None,
        }
    }

    /// Normalization denominator `sqrt(m² + 1)` used by [`Line::distance`].
    #[inline]
    pub fn denominator(&self) -> f64 {
        match *self {
            Line::Sloped { slope, .. } => (slope * slope + 1.0).sqrt(),
            Line::Vertical { .. } => 1.0,
        }
    }

    /// Unit direction vector. Sloped lines point towards increasing x,
    /// vertical lines towards increasing y.
    #[inline]
    pub fn direction(&self) -> Point2D {
        match *self {
            Line::Sloped { slope, .. } => Point2D::new(1.0, slope) * (1.0 / self.denominator()),
            Line::Vertical { .. } => Point2D::new(0.0, 1.0),
        }
    }

    /// Perpendicular distance from a point to the line.
    #[inline]
    pub fn distance(&self, p: Point2D) -> f64 {
        match *self {
            Line::Sloped { slope, intercept } => {
                (slope * p.x - p.y + intercept).abs() / self.denominator()
            }
            Line::Vertical { x } => (p.x - x).abs(),
        }
    }

    /// Orthogonal projection of a point onto the line.
    #[inline]
    pub fn projection(&self, p: Point2D) -> Point2D {
        match *self {
            Line::Sloped { slope, intercept } => {
                let x = p.x + slope / (slope * slope + 1.0) * (p.y - intercept - slope * p.x);
                Point2D::new(x, slope * x + intercept)
            }
            Line::Vertical { x } => Point2D::new(x, p.y),
        }
    }

    /// Scalar position of a point's projection along [`Line::direction`].
    ///
    /// Orders points along the line. For sloped lines it is monotonic in
    /// the projection's x-coordinate.
    #[inline]
    pub fn position(&self, p: Point2D) -> f64 {
        p.dot(self.direction())
    }

    /// Check that the projection of `p` lies on the line and is exactly
    /// [`Line::distance`] away from `p`.
    pub fn projection_is_consistent(&self, p: Point2D) -> bool {
        let offset = match *self {
            Line::Sloped { intercept, .. } => intercept.abs(),
            Line::Vertical { x } => x.abs(),
        };
        let tolerance = PROJECTION_RTOL * (1.0 + p.x.abs() + p.y.abs() + offset);

        let foot = self.projection(p);
        self.distance(foot) <= tolerance && (foot.distance(p) - self.distance(p)).abs() <= tolerance
    }

    /// Intersection point of two lines.
    ///
    /// # Errors
    /// [`GeometryError::ParallelLines`] when the slopes are equal (two
    /// vertical lines included).
    pub fn intersect(&self, other: &Line) -> Result<Point2D, GeometryError> {
        match (*self, *other) {
            (
                Line::Sloped {
                    slope: m1,
                    intercept: b1,
                },
                Line::Sloped {
                    slope: m2,
                    intercept: b2,
                },
            ) => {
                if m1 == m2 {
                    return Err(GeometryError::ParallelLines);
                }
                let x = (b2 - b1) / (m1 - m2);
                Ok(Point2D::new(x, m1 * x + b1))
            }
            (Line::Vertical { x }, Line::Sloped { slope, intercept })
            | (Line::Sloped { slope, intercept }, Line::Vertical { x }) => {
                Ok(Point2D::new(x, slope * x + intercept))
            }
            (Line::Vertical { .. }, Line::Vertical { .. }) => Err(GeometryError::ParallelLines),
        }
    }
}

/// A detected line segment defined by its endpoints.
///
/// Endpoint order follows discovery along the fitted line but carries no
/// meaning for output.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// First endpoint
    pub a: Point2D,
    /// Second endpoint
    pub b: Point2D,
}

impl LineSegment {
    /// Create a new segment.
    #[inline]
    pub fn new(a: Point2D, b: Point2D) -> Self {
        Self { a, b }
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Midpoint of the segment.
    #[inline]
    pub fn midpoint(&self) -> Point2D {
        Point2D::new((self.a.x + self.b.x) * 0.5, (self.a.y + self.b.y) * 0.5)
    }

    /// Same segment with endpoints swapped.
    #[inline]
    pub fn reversed(&self) -> LineSegment {
        LineSegment::new(self.b, self.a)
    }

    /// Infinite line through both endpoints.
    ///
    /// # Errors
    /// [`GeometryError::DegenerateFit`] when the endpoints coincide.
    pub fn to_line(&self) -> Result<Line, GeometryError> {
        if self.a == self.b {
            return Err(GeometryError::DegenerateFit("coincident endpoints"));
        }
        if self.a.x == self.b.x {
            return Ok(Line::vertical(self.a.x));
        }

        let slope = (self.b.y - self.a.y) / (self.b.x - self.a.x);
        let intercept = self.a.y - slope * self.a.x;
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(GeometryError::DegenerateFit("slope overflow"));
        }
        Ok(Line::new(slope, intercept))
    }

    /// Segments are equal regardless of endpoint order.
    pub fn same_endpoints(&self, other: &LineSegment) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// One decimal digit, with `-0.0` folded into `0.0`.
fn fmt_coord(v: f64) -> f64 {
    (v * 10.0).round() / 10.0 + 0.0
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} {:.1} {:.1} {:.1}",
            fmt_coord(self.a.x),
            fmt_coord(self.a.y),
            fmt_coord(self.b.x),
            fmt_coord(self.b.y)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn probe_points() -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, -7.0),
            Point2D::new(-12.5, 4.25),
            Point2D::new(100.0, 33.0),
            Point2D::new(1.0, 1.0),
        ]
    }

    fn probe_lines() -> Vec<Line> {
        vec![
            Line::new(0.0, 2.0),
            Line::new(1.0, 0.0),
            Line::new(-3.5, 10.0),
            Line::new(250.0, -40.0),
            Line::new(0.001, 5.0),
            Line::vertical(4.0),
        ]
    }

    #[test]
    fn test_distance_horizontal() {
        let line = Line::new(0.0, 2.0);
        assert_relative_eq!(line.distance(Point2D::new(5.0, 7.0)), 5.0);
        assert_relative_eq!(line.distance(Point2D::new(-1.0, 2.0)), 0.0);
    }

    #[test]
    fn test_distance_diagonal() {
        // y = x; (0, 2) is sqrt(2) away
        let line = Line::new(1.0, 0.0);
        assert_relative_eq!(
            line.distance(Point2D::new(0.0, 2.0)),
            std::f64::consts::SQRT_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_distance_vertical() {
        let line = Line::vertical(3.0);
        assert_relative_eq!(line.distance(Point2D::new(-1.0, 9.0)), 4.0);
    }

    #[test]
    fn test_projection_matches_distance() {
        for line in probe_lines() {
            for p in probe_points() {
                let foot = line.projection(p);
                assert_relative_eq!(
                    foot.distance(p),
                    line.distance(p),
                    epsilon = 1e-6,
                    max_relative = 1e-9
                );
                assert!(line.distance(foot) < 1e-6, "{line:?} {p:?}");
                assert!(line.projection_is_consistent(p));
            }
        }
    }

    #[test]
    fn test_projection_onto_diagonal() {
        let line = Line::new(1.0, 0.0);
        let foot = line.projection(Point2D::new(0.0, 2.0));
        assert_relative_eq!(foot.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(foot.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_position_orders_like_projection_x() {
        let line = Line::new(-0.5, 3.0);
        let a = Point2D::new(0.0, 10.0);
        let b = Point2D::new(4.0, -2.0);
        let by_position = line.position(a) < line.position(b);
        let by_x = line.projection(a).x < line.projection(b).x;
        assert_eq!(by_position, by_x);
    }

    #[test]
    fn test_intersect() {
        let a = Line::new(1.0, 0.0);
        let b = Line::new(-1.0, 4.0);
        let p = a.intersect(&b).unwrap();
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.y, 2.0);

        let v = Line::vertical(3.0);
        let q = v.intersect(&a).unwrap();
        assert_relative_eq!(q.x, 3.0);
        assert_relative_eq!(q.y, 3.0);
    }

    #[test]
    fn test_intersect_parallel() {
        let a = Line::new(2.0, 0.0);
        let b = Line::new(2.0, 5.0);
        assert_eq!(a.intersect(&b), Err(GeometryError::ParallelLines));
        assert_eq!(
            Line::vertical(1.0).intersect(&Line::vertical(2.0)),
            Err(GeometryError::ParallelLines)
        );
    }

    #[test]
    fn test_segment_to_line() {
        let seg = LineSegment::new(Point2D::new(1.0, 1.0), Point2D::new(3.0, 5.0));
        let line = seg.to_line().unwrap();
        assert_eq!(line.slope(), Some(2.0));
        assert_eq!(line.intercept(), Some(-1.0));
    }

    #[test]
    fn test_segment_to_line_vertical() {
        let seg = LineSegment::new(Point2D::new(2.0, 0.0), Point2D::new(2.0, 9.0));
        assert_eq!(seg.to_line().unwrap(), Line::vertical(2.0));
    }

    #[test]
    fn test_segment_to_line_coincident() {
        let p = Point2D::new(2.0, 2.0);
        assert!(matches!(
            LineSegment::new(p, p).to_line(),
            Err(GeometryError::DegenerateFit(_))
        ));
    }

    #[test]
    fn test_segment_display() {
        let seg = LineSegment::new(Point2D::new(0.0, -0.01), Point2D::new(9.0, 2.25));
        assert_eq!(seg.to_string(), "0.0 0.0 9.0 2.3");
    }

    #[test]
    fn test_same_endpoints() {
        let seg = LineSegment::new(Point2D::new(0.0, 0.0), Point2D::new(1.0, 2.0));
        assert!(seg.same_endpoints(&seg.reversed()));
        assert_relative_eq!(seg.length(), 5.0_f64.sqrt());
    }
}
