//! Text bitmap input format.
//!
//! Format:
//! - Optional comment lines starting with `/`
//! - Column count (non-negative integer)
//! - Row count (non-negative integer)
//! - Exactly `rows` rows of exactly `cols` characters; `#` is foreground
//!
//! Pixel `(col, row)` becomes point `(col, row)`: origin at the top-left,
//! `y` grows downward.

use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;

use rand::rngs::StdRng;

use crate::core::{Point2D, PointSet};
use crate::error::ParseError;

/// Foreground pixel marker.
const FOREGROUND: char = '#';

/// Comment line prefix, only recognized before the dimensions.
const COMMENT: char = '/';

/// A parsed bitmap: its dimensions and foreground pixels in row-major order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bitmap {
    /// Declared column count
    pub cols: usize,
    /// Declared row count
    pub rows: usize,
    /// Foreground pixels, row-major
    pub points: Vec<Point2D>,
}

impl Bitmap {
    /// Parse a bitmap from a reader.
    ///
    /// # Errors
    /// Any [`ParseError`]; no partial bitmap is returned.
    pub fn parse<R: Read>(reader: R) -> Result<Self, ParseError> {
        let mut lines = BufReader::new(reader).lines();
        let mut line_no = 0usize;

        let mut next_line = |name: &'static str| -> Result<(usize, String), ParseError> {
            match lines.next() {
                Some(line) => {
                    line_no += 1;
                    Ok((line_no, line?))
                }
                None => Err(ParseError::MissingDimension(name)),
            }
        };

        let (mut cols_line_no, mut cols_text) = next_line("column count")?;
        while cols_text.starts_with(COMMENT) {
            (cols_line_no, cols_text) = next_line("column count")?;
        }
        let cols = parse_dimension("column count", cols_line_no, &cols_text)?;

        let (rows_line_no, rows_text) = next_line("row count")?;
        let rows = parse_dimension("row count", rows_line_no, &rows_text)?;

        let mut points = Vec::new();
        for row in 0..rows {
            let text = match next_line("row") {
                Ok((_, text)) => text,
                Err(ParseError::MissingDimension(_)) => {
                    return Err(ParseError::Truncated {
                        expected: rows,
                        found: row,
                    });
                }
                Err(e) => return Err(e),
            };
            let text = text.strip_suffix('\r').unwrap_or(&text);

            let found = text.chars().count();
            if found != cols {
                return Err(ParseError::RowLengthMismatch {
                    row,
                    expected: cols,
                    found,
                });
            }

            points.extend(
                text.chars()
                    .enumerate()
                    .filter(|&(_, c)| c == FOREGROUND)
                    .map(|(col, _)| Point2D::from_pixel(col, row)),
            );
        }

        log::debug!(
            "Parsed {}x{} bitmap with {} foreground pixels",
            cols,
            rows,
            points.len()
        );

        Ok(Self { cols, rows, points })
    }

    /// Build the working point set, seeded with `seed` (`0` = OS entropy).
    pub fn into_point_set(self, seed: u64) -> PointSet<StdRng> {
        PointSet::from_points(self.points, seed)
    }

    /// ASCII rendering of `points` inside a frame the size of this bitmap.
    ///
    /// `_` rules above and below, `|` on both sides, `o` for each point.
    /// Points outside the frame are skipped.
    pub fn render(&self, points: &[Point2D]) -> String {
        let mut canvas = vec![vec![' '; self.cols]; self.rows];
        for p in points {
            let (col, row) = (p.x.round(), p.y.round());
            if col >= 0.0 && row >= 0.0 && (col as usize) < self.cols && (row as usize) < self.rows
            {
                canvas[row as usize][col as usize] = 'o';
            }
        }

        let rule = format!(" {}\n", "_".repeat(self.cols));
        let mut out = String::with_capacity((self.cols + 3) * (self.rows + 2));
        out.push_str(&rule);
        for line in canvas {
            out.push('|');
            out.extend(line);
            out.push_str("|\n");
        }
        out.push_str(&rule);
        out
    }
}

impl FromStr for Bitmap {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}

fn parse_dimension(name: &'static str, line: usize, text: &str) -> Result<usize, ParseError> {
    text.trim()
        .parse()
        .map_err(|_| ParseError::InvalidDimension {
            name,
            line,
            value: text.to_string(),
        })
}
