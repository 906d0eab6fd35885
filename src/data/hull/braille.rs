use super::{bounding_box, ConvexHull};
use crate::data::Point;
use std::fmt;

/// A pretty-printer for a point set and its hull using Braille Unicode symbols.
///
/// Braille characters (U+2800 to U+28FF) encode 2×4 dot patterns, making them
/// usable as a tiny canvas in a terminal. Each Braille character represents a
/// 2-pixel-wide by 4-pixel-tall cell. Input points are drawn as single dots,
/// hull edges as rasterised lines including the closing edge. The drawing is
/// scaled uniformly to fit the canvas, with the y-axis pointing up.
///
/// # Braille Dot Numbering
///
/// Standard Braille numbering:
/// ```text
/// 1  4
/// 2  5
/// 3  6
/// 7  8
/// ```
///
/// # Examples
///
/// ```
/// use grahamscan::algorithms::convex_hull;
/// use grahamscan::data::{BraillePrinter, Point};
///
/// let pts = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([10.0, 0.0]),
///   Point::new([5.0, 8.0]),
///   Point::new([5.0, 3.0]),
/// ];
/// let hull = convex_hull(&pts);
/// println!("{}", BraillePrinter::new(&pts, &hull).with_size(20, 16));
/// ```
pub struct BraillePrinter<'a> {
  points: &'a [Point],
  hull: &'a ConvexHull,
  width: usize,
  height: usize,
}

impl<'a> BraillePrinter<'a> {
  /// Canvas size in pixels, 40 by 10 characters.
  pub const DEFAULT_SIZE: (usize, usize) = (80, 40);

  /// Create a new Braille printer for a point set and its hull.
  pub fn new(points: &'a [Point], hull: &'a ConvexHull) -> Self {
    let (width, height) = Self::DEFAULT_SIZE;
    BraillePrinter {
      points,
      hull,
      width,
      height,
    }
  }

  /// Set the canvas size in pixels. Both dimensions are at least one pixel.
  #[must_use]
  pub fn with_size(mut self, width: usize, height: usize) -> Self {
    self.width = width.max(1);
    self.height = height.max(1);
    self
  }

  /// Render the points and hull to a string using Braille characters.
  ///
  /// Renders nothing at all when there are no points.
  fn render(&self) -> String {
    let Some((min, max)) = bounding_box(self.points.iter().chain(self.hull.iter())) else {
      return String::new();
    };

    let scale = fit_scale(max.x_coord() - min.x_coord(), self.width)
      .min(fit_scale(max.y_coord() - min.y_coord(), self.height));
    let scale = if scale.is_finite() { scale } else { 0.0 };

    // Flip y so that larger y-coordinates end up at the top of the grid.
    let to_pixel = |pt: &Point| -> (i32, i32) {
      let x = ((pt.x_coord() - min.x_coord()) * scale).round() as i32;
      let y = ((pt.y_coord() - min.y_coord()) * scale).round() as i32;
      (x, self.height as i32 - 1 - y)
    };

    // Create a pixel grid (false = empty, true = filled)
    let mut grid = vec![vec![false; self.width]; self.height];
    let mut plot = |x: i32, y: i32| {
      if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
        grid[y as usize][x as usize] = true;
      }
    };

    for pt in self.points {
      let (x, y) = to_pixel(pt);
      plot(x, y);
    }

    // Rasterize hull edges using Bresenham's line algorithm
    for edge in self.hull.iter_boundary_edges() {
      let (x0, y0) = to_pixel(edge.src);
      let (x1, y1) = to_pixel(edge.dst);
      bresenham_line(x0, y0, x1, y1, &mut plot);
    }

    grid_to_braille(&grid)
  }
}

impl fmt::Display for BraillePrinter<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.render())
  }
}

// Pixels per unit so that `span` fits in `pixels`. Infinite for a zero span.
fn fit_scale(span: f64, pixels: usize) -> f64 {
  (pixels - 1) as f64 / span
}

/// Convert a pixel grid to Braille characters.
fn grid_to_braille(grid: &[Vec<bool>]) -> String {
  let height = grid.len();
  let width = if height > 0 { grid[0].len() } else { 0 };

  // Braille characters are 2 pixels wide and 4 pixels tall
  let braille_rows = height.div_ceil(4);
  let braille_cols = width.div_ceil(2);

  // Dot bits in Unicode order, indexed by [column][row] within a cell.
  const DOTS: [[u8; 4]; 2] = [
    [0b0000_0001, 0b0000_0010, 0b0000_0100, 0b0100_0000],
    [0b0000_1000, 0b0001_0000, 0b0010_0000, 0b1000_0000],
  ];

  let mut result = String::new();
  for row in 0..braille_rows {
    for col in 0..braille_cols {
      let mut dots = 0u8;
      for (dx, column) in DOTS.iter().enumerate() {
        for (dy, bit) in column.iter().enumerate() {
          if get_pixel(grid, col * 2 + dx, row * 4 + dy) {
            dots |= bit;
          }
        }
      }
      // U+2800 is the base Braille pattern (blank)
      result.push(char::from_u32(0x2800 + u32::from(dots)).unwrap_or('?'));
    }
    result.push('\n');
  }
  result
}

/// Get a pixel from the grid, returning false if out of bounds.
fn get_pixel(grid: &[Vec<bool>], x: usize, y: usize) -> bool {
  grid
    .get(y)
    .and_then(|row| row.get(x))
    .copied()
    .unwrap_or(false)
}

/// Bresenham's line drawing algorithm.
///
/// Calls the provided closure for each point along the line from (x0, y0) to (x1, y1).
fn bresenham_line<F>(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: F)
where
  F: FnMut(i32, i32),
{
  let dx = (x1 - x0).abs();
  let dy = -(y1 - y0).abs();
  let sx = if x0 < x1 { 1 } else { -1 };
  let sy = if y0 < y1 { 1 } else { -1 };
  let mut error = dx + dy;

  let mut x = x0;
  let mut y = y0;

  loop {
    plot(x, y);

    if x == x1 && y == y1 {
      break;
    }

    let e2 = 2 * error;

    if e2 >= dy {
      if x == x1 {
        break;
      }
      error += dy;
      x += sx;
    }

    if e2 <= dx {
      if y == y1 {
        break;
      }
      error += dx;
      y += sy;
    }
  }
}
