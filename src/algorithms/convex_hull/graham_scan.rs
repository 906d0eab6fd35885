use ordered_float::OrderedFloat;

use crate::data::{ConvexHull, Point};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    Hulls with three or more vertices are valid convex polygons.
//    No points are outside the resulting hull.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. The input slice is not modified; the points
/// are sorted in a private copy.
///
/// The hull starts at the lowest point (the leftmost of the lowest, if there
/// are several) and runs counter-clockwise. Only strict turns survive:
/// points in the middle of a hull edge are not vertices.
///
/// # Degenerate input
/// * Fewer than three points: the empty hull.
/// * All points coincide: a single vertex.
/// * All points colinear: the two extreme points.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
///
/// # Examples
///
/// ```rust
/// # use grahamscan::algorithms::convex_hull;
/// # use grahamscan::data::Point;
/// let too_few = vec![Point::new([0.0, 0.0]), Point::new([1.0, 1.0])];
/// assert!(convex_hull(&too_few).is_empty());
/// ```
///
/// ```rust
/// # use grahamscan::algorithms::convex_hull;
/// # use grahamscan::data::Point;
/// let colinear = vec![
///   Point::new([2.0, 2.0]),
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 1.0]),
/// ];
/// assert_eq!(
///   convex_hull(&colinear).points(),
///   &[Point::new([0.0, 0.0]), Point::new([2.0, 2.0])]
/// );
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull(pts: &[Point]) -> ConvexHull {
  if pts.len() < 3 {
    tracing::debug!(points = pts.len(), "too few points for a convex hull");
    return ConvexHull::empty();
  }
  let Some(pivot) = smallest_point(pts) else {
    return ConvexHull::empty();
  };

  // Copies of the pivot would form zero-length edges.
  let mut rest: Vec<Point> = pts.iter().filter(|pt| **pt != pivot).copied().collect();
  rest.sort_by_cached_key(|pt| pivot.polar_key(pt));

  // Pop until all consecutive points are oriented counter-clockwise.
  let mut stack: Vec<Point> = Vec::with_capacity(rest.len() + 1);
  stack.push(pivot);
  for pt in rest {
    while let [.., p1, p2] = stack.as_slice() {
      if p1.orientation(p2, &pt).is_ccw() {
        break;
      }
      stack.pop();
    }
    stack.push(pt);
  }

  tracing::debug!(points = pts.len(), vertices = stack.len(), "computed convex hull");
  ConvexHull::new_unchecked(stack)
}

// Find the lowest point, breaking ties by the lowest x-coordinate.
// O(n)
fn smallest_point(pts: &[Point]) -> Option<Point> {
  pts
    .iter()
    .min_by_key(|a| (OrderedFloat(a.y_coord()), OrderedFloat(a.x_coord())))
    .copied()
}
