//! # Rekha: Line Segment Detection for Text Bitmaps
//!
//! Finds straight line segments among the foreground pixels of a sparse
//! binary bitmap using RANSAC with Total Least Squares refits.
//!
//! ## Quick Start
//!
//! ```rust
//! use rekha::extraction::{RansacLineConfig, RansacLineDetector};
//! use rekha::io::{Bitmap, Report};
//!
//! let bitmap: Bitmap = "10\n1\n##########\n".parse().unwrap();
//! let config = RansacLineConfig::default().with_seed(7);
//! let detection = RansacLineDetector::new(bitmap.points, config).run();
//!
//! let report = Report::from(detection);
//! assert_eq!(
//!     report.to_string(),
//!     "number of circles: 0\nnumber of lines: 1\n0.0 0.0 9.0 0.0\n"
//! );
//! ```
//!
//! ## Coordinate Frame
//!
//! Image coordinates with the origin at the top-left pixel:
//! - **X**: column index, growing to the right
//! - **Y**: row index, growing downward
//!
//! ## Architecture
//!
//! - [`core`]: points, the working point set, moments, sampling
//! - [`features`]: infinite lines and line segments
//! - [`extraction`]: TLS fitting, gap segmentation, RANSAC driver
//! - [`io`]: bitmap parser and report formatting
//! - [`config`]: YAML configuration
//! - [`error`]: error types
//!
//! ## Data Flow
//!
//! ```text
//!   text bitmap ──► Bitmap::parse ──► PointSet
//!                                        │
//!        ┌───────────────────────────────┘
//!        ▼
//!   sample pair ──► refit to fixed point ──► split at gaps ──► best run
//!        ▲                                                        │
//!        └──────────── remove run, record segment ◄───────────────┘
//!                                        │
//!                                        ▼
//!                                     Report
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod extraction;
pub mod features;
pub mod io;

pub use config::RekhaConfig;
pub use crate::core::{Point2D, PointSet};
pub use error::{ConfigError, Error, GeometryError, ParseError, Result};
pub use extraction::{Detection, RansacLineConfig, RansacLineDetector, detect_lines};
pub use features::{Line, LineSegment};
pub use io::{Bitmap, Report};
