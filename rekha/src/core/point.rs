//! Point type for pixel coordinates.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};

/// A 2D point in image coordinates (`x` = column, `y` = row).
///
/// Equality and hashing are by value. `-0.0` and `0.0` compare and hash
/// equal; points are expected to be finite.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate (column)
    pub x: f64,
    /// Y coordinate (row)
    pub y: f64,
}

impl Point2D {
    /// Origin.
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Create a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at the centre of a pixel cell given by integer indices.
    #[inline]
    pub fn from_pixel(col: usize, row: usize) -> Self {
        Self::new(col as f64, row as f64)
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: Point2D) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Dot product with another point (as vectors)
    #[inline]
    pub fn dot(&self, other: Point2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Length of this point as a vector from origin
    #[inline]
    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Unit vector in the same direction, or the point itself when zero.
    #[inline]
    pub fn normalized(&self) -> Point2D {
        let len = self.length();
        if len > 0.0 {
            Point2D::new(self.x / len, self.y / len)
        } else {
            *self
        }
    }

    /// Both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Eq for Point2D {}

impl Hash for Point2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Adding +0.0 folds -0.0 into 0.0 so Hash agrees with PartialEq.
        (self.x + 0.0).to_bits().hash(state);
        (self.y + 0.0).to_bits().hash(state);
    }
}

impl Add for Point2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Point2D::new(self.x * scalar, self.y * scalar)
    }
}
