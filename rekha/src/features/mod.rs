//! Geometric features produced and consumed by line detection.
//!
//! - [`Line`]: infinite line in slope-intercept form (vertical special-cased)
//! - [`LineSegment`]: detected segment, the output of the RANSAC driver

mod line;

pub use line::{Line, LineSegment};
