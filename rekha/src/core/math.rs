//! Moment statistics shared by line fitting and segmentation.

use super::Point2D;

/// Sample second moments of a 2D point set about its centroid.
///
/// Represents the symmetric scatter matrix, normalized by `n - 1`:
/// ```text
/// | sxx  sxy |
/// | sxy  syy |
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Moments2D {
    /// Centroid (x̄, ȳ)
    pub centroid: Point2D,
    /// Σ(x - x̄)² / (n - 1)
    pub sxx: f64,
    /// Σ(y - ȳ)² / (n - 1)
    pub syy: f64,
    /// Σ(x - x̄)(y - ȳ) / (n - 1)
    pub sxy: f64,
}

impl Moments2D {
    /// Total variance (trace of the scatter matrix).
    #[inline]
    pub fn spread(&self) -> f64 {
        self.sxx + self.syy
    }
}

/// Compute the centroid of a set of points.
///
/// Returns the origin for an empty slice.
///
/// # Example
/// ```
/// use rekha::core::{Point2D, math::compute_centroid};
///
/// let points = [Point2D::new(0.0, 0.0), Point2D::new(2.0, 0.0), Point2D::new(1.0, 3.0)];
/// let centroid = compute_centroid(&points);
/// assert!((centroid.x - 1.0).abs() < 1e-12);
/// assert!((centroid.y - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn compute_centroid(points: &[Point2D]) -> Point2D {
    if points.is_empty() {
        return Point2D::ZERO;
    }

    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));

    Point2D::new(sum_x / n, sum_y / n)
}

/// Compute the centred sample moments of a point set.
///
/// Returns `None` for fewer than two points, where `n - 1` normalization
/// is undefined.
///
/// # Example
/// ```
/// use rekha::core::{Point2D, math::compute_moments};
///
/// let points = [
///     Point2D::new(0.0, 0.0),
///     Point2D::new(1.0, 1.0),
///     Point2D::new(2.0, 2.0),
/// ];
/// let m = compute_moments(&points).unwrap();
///
/// // Points lie on y = x, so sxx == syy == sxy
/// assert!((m.sxx - m.syy).abs() < 1e-12);
/// assert!((m.sxy - 1.0).abs() < 1e-12);
/// ```
pub fn compute_moments(points: &[Point2D]) -> Option<Moments2D> {
    if points.len() < 2 {
        return None;
    }

    let centroid = compute_centroid(points);
    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;

    for p in points {
        let dx = p.x - centroid.x;
        let dy = p.y - centroid.y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    let dof = (points.len() - 1) as f64;
    Some(Moments2D {
        centroid,
        sxx: sxx / dof,
        syy: syy / dof,
        sxy: sxy / dof,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_centroid_empty() {
        assert_eq!(compute_centroid(&[]), Point2D::ZERO);
    }

    #[test]
    fn test_moments_need_two_points() {
        assert!(compute_moments(&[]).is_none());
        assert!(compute_moments(&[Point2D::new(1.0, 1.0)]).is_none());
    }

    #[test]
    fn test_moments_sample_normalization() {
        // Var of {0, 2} with n-1 normalization is 2
        let points = [Point2D::new(0.0, 5.0), Point2D::new(2.0, 5.0)];
        let m = compute_moments(&points).unwrap();
        assert_relative_eq!(m.sxx, 2.0);
        assert_relative_eq!(m.syy, 0.0);
        assert_relative_eq!(m.sxy, 0.0);
        assert_relative_eq!(m.centroid.x, 1.0);
        assert_relative_eq!(m.centroid.y, 5.0);
    }

    #[test]
    fn test_moments_anticorrelated() {
        let points = [
            Point2D::new(0.0, 2.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 0.0),
        ];
        let m = compute_moments(&points).unwrap();
        assert!(m.sxy < 0.0);
        assert_relative_eq!(m.spread(), 2.0);
    }
}
