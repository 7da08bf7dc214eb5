//! Core types for rekha.
//!
//! - [`Point2D`]: pixel coordinate with value equality
//! - [`PointSet`]: the shrinking working set of foreground points
//! - [`IndexSampler`]: injectable randomness for candidate sampling
//! - [`math`]: moment statistics shared by fitting and segmentation

mod point;
mod point_set;

pub mod math;
pub mod sampling;

pub use point::Point2D;
pub use point_set::PointSet;
pub use sampling::{IndexSampler, seeded_rng};
