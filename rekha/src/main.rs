//! rekha - find line segments in a text bitmap
//!
//! Reads a bitmap from a file (conventionally `*.w`) or standard input and
//! prints the detected segments:
//!
//! ```text
//! $ rekha shapes.w
//! number of circles: 0
//! number of lines: 1
//! 0.0 0.0 9.0 0.0
//! ```
//!
//! Logs go to stderr. Set `RUST_LOG` to override the default level.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use rekha::config::RekhaConfig;
use rekha::error::Result;
use rekha::extraction::RansacLineDetector;
use rekha::io::{Bitmap, Report};

/// Expected input file extension.
const INPUT_EXTENSION: &str = "w";

/// Detect line segments in a text bitmap
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input bitmap (reads standard input when omitted)
    input: Option<PathBuf>,

    /// Configuration file path (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed overriding the configuration (0 = entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Verbose logging and an ASCII dump of unconsumed points
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = match &args.config {
        Some(path) => RekhaConfig::load(path)?,
        None => RekhaConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.detection.seed = seed;
    }

    let bitmap = match &args.input {
        Some(path) => {
            if path.extension().and_then(|e| e.to_str()) != Some(INPUT_EXTENSION) {
                log::warn!(
                    "Input {} does not have a .{} extension",
                    path.display(),
                    INPUT_EXTENSION
                );
            }
            Bitmap::parse(File::open(path)?)?
        }
        None => Bitmap::parse(io::stdin().lock())?,
    };

    let points = bitmap.points.clone();
    let detection = RansacLineDetector::new(points, config.detection).run();

    if args.debug {
        log::debug!(
            "{} of {} points unconsumed:\n{}",
            detection.remaining.len(),
            bitmap.points.len(),
            bitmap.render(&detection.remaining)
        );
    }

    let report = Report::from(detection);
    let mut stdout = io::stdout().lock();
    write!(stdout, "{report}")?;
    stdout.flush()?;

    Ok(())
}
