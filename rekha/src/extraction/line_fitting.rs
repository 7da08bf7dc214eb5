//! Line fitting using Total Least Squares (Orthogonal Regression).
//!
//! TLS minimizes perpendicular distances to the line, not vertical distances
//! like ordinary least squares. Pixel positions carry the same error in both
//! axes, so vertical residuals would bias steep lines.

use crate::core::Point2D;
use crate::core::math::{Moments2D, compute_moments};
use crate::error::GeometryError;
use crate::features::Line;

/// Relative threshold below which a moment is treated as zero.
const AXIS_EPSILON: f64 = 1e-12;

/// Fit a line to a set of points using Total Least Squares.
///
/// The algorithm:
/// 1. Compute centroid (x̄, ȳ) and sample moments Sxx, Sxy, Syy (÷ n-1)
/// 2. Slope is the principal axis of the scatter matrix:
///    `m = (Syy - Sxx + sqrt((Syy - Sxx)² + 4·Sxy²)) / (2·Sxy)`
/// 3. Intercept `b = ȳ - m·x̄`
///
/// With zero covariance the principal axis is axis-aligned: horizontal when
/// `Sxx > Syy`, vertical when `Syy > Sxx`.
///
/// # Errors
/// - [`GeometryError::InsufficientPoints`] for fewer than 2 points
/// - [`GeometryError::DegenerateFit`] when no unique principal axis exists
///   (coincident points, isotropic spread) or a fitted point fails the
///   projection consistency check
///
/// # Example
/// ```
/// use rekha::extraction::fit_line;
/// use rekha::core::Point2D;
///
/// let points = vec![
///     Point2D::new(0.0, 1.0),
///     Point2D::new(1.0, 3.0),
///     Point2D::new(2.0, 5.0),
///     Point2D::new(3.0, 7.0),
/// ];
///
/// let line = fit_line(&points).unwrap();
/// assert!((line.slope().unwrap() - 2.0).abs() < 1e-9);
/// assert!((line.intercept().unwrap() - 1.0).abs() < 1e-9);
/// ```
pub fn fit_line(points: &[Point2D]) -> Result<Line, GeometryError> {
    let moments = compute_moments(points).ok_or(GeometryError::InsufficientPoints {
        required: 2,
        found: points.len(),
    })?;

    let line = principal_axis(&moments)?;

    if points.iter().any(|&p| !line.projection_is_consistent(p)) {
        return Err(GeometryError::DegenerateFit("projection check failed"));
    }

    Ok(line)
}

fn principal_axis(moments: &Moments2D) -> Result<Line, GeometryError> {
    let Moments2D {
        centroid,
        sxx,
        syy,
        sxy,
    } = *moments;

    let spread = moments.spread();
    if spread <= 0.0 {
        return Err(GeometryError::DegenerateFit("coincident points"));
    }

    let diff = syy - sxx;

    if sxy.abs() <= AXIS_EPSILON * spread {
        if diff.abs() <= AXIS_EPSILON * spread {
            return Err(GeometryError::DegenerateFit("no unique principal axis"));
        }
        return Ok(if diff < 0.0 {
            Line::new(0.0, centroid.y)
        } else {
            Line::vertical(centroid.x)
        });
    }

    let root = (diff * diff + 4.0 * sxy * sxy).sqrt();
    let slope = if diff >= 0.0 {
        (diff + root) / (2.0 * sxy)
    } else {
        // Same root, rationalized to avoid cancellation
        2.0 * sxy / (root - diff)
    };
    let intercept = centroid.y - slope * centroid.x;

    if !slope.is_finite() || !intercept.is_finite() {
        return Err(GeometryError::DegenerateFit("non-finite slope"));
    }

    Ok(Line::new(slope, intercept))
}

/// Compute the perpendicular fitting error (RMS distance to line).
pub fn fitting_error(points: &[Point2D], line: &Line) -> f64 {
    if points.is_empty() {
        return 0.0;
    }

    let sum_sq: f64 = points
        .iter()
        .map(|&p| {
            let d = line.distance(p);
            d * d
        })
        .sum();

    (sum_sq / points.len() as f64).sqrt()
}
