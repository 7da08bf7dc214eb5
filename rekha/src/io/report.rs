//! Detection report in the plain-text output format.
//!
//! ```text
//! number of circles: 0
//! number of lines: 1
//! 0.0 0.0 9.0 0.0
//! ```

use std::fmt;

use crate::extraction::Detection;
use crate::features::LineSegment;

/// Segments to report, in discovery order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    /// Detected segments
    pub segments: Vec<LineSegment>,
}

impl Report {
    /// Create a report for the given segments.
    pub fn new(segments: Vec<LineSegment>) -> Self {
        Self { segments }
    }
}

impl From<Detection> for Report {
    fn from(detection: Detection) -> Self {
        Self::new(detection.segments)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Circle detection is not implemented; the count is always zero
        writeln!(f, "number of circles: 0")?;
        writeln!(f, "number of lines: {}", self.segments.len())?;
        for segment in &self.segments {
            writeln!(f, "{segment}")?;
        }
        Ok(())
    }
}
