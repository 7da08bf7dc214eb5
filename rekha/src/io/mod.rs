//! Input parsing and output formatting.
//!
//! - [`bitmap`]: text bitmap reader and ASCII debug rendering
//! - [`report`]: plain-text detection report

pub mod bitmap;
pub mod report;

pub use bitmap::Bitmap;
pub use report::Report;
