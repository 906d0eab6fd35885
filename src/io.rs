//! Reading point sets from text.
//!
//! One point per line, as accepted by [`Point`]'s `FromStr` impl. Blank lines
//! are skipped and `#` starts a comment that runs to the end of the line.
//!
//! ```text
//! # a square with a point inside
//! 0 0
//! 4,0
//! 4, 4
//! 0 4
//! 2 2   # not on the hull
//! ```
use std::fmt;
use std::io::BufRead;

use crate::data::Point;
use crate::Error;

#[derive(Debug)]
pub enum ReadError {
  Io(std::io::Error),
  /// A line that does not hold a valid point. Lines are numbered from one.
  Point { line: usize, error: Error },
}

impl fmt::Display for ReadError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReadError::Io(err) => write!(f, "{}", err),
      ReadError::Point { line, error } => write!(f, "line {}: {}", line, error),
    }
  }
}

impl std::error::Error for ReadError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ReadError::Io(err) => Some(err),
      ReadError::Point { error, .. } => Some(error),
    }
  }
}

impl From<std::io::Error> for ReadError {
  fn from(err: std::io::Error) -> ReadError {
    ReadError::Io(err)
  }
}

/// Read every point from `reader`, stopping at the first malformed line.
///
/// ```rust
/// # use grahamscan::data::Point;
/// # use grahamscan::io::read_points;
/// let input = "# corners\n0 0\n\n1,0  # right\n";
/// let pts = read_points(input.as_bytes())?;
/// assert_eq!(pts, vec![Point::new([0.0, 0.0]), Point::new([1.0, 0.0])]);
/// # Ok::<(), grahamscan::io::ReadError>(())
/// ```
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>, ReadError> {
  let mut points = Vec::new();
  for (idx, line) in reader.lines().enumerate() {
    let line = line?;
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
      continue;
    }
    let pt = content
      .parse::<Point>()
      .map_err(|error| ReadError::Point { line: idx + 1, error })?;
    points.push(pt);
  }
  tracing::debug!(points = points.len(), "read points");
  Ok(points)
}
