use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::data::{DirectedEdge, Point, PointLocation};
use crate::{Error, Orientation};

mod braille;

pub use braille::BraillePrinter;

/// Vertices of a convex hull in counter-clockwise order, starting at the
/// lowest (then leftmost) vertex. The closing edge from the last vertex back
/// to the first is implicit.
///
/// Hulls of fewer than three input points are empty. Hulls of colinear
/// points have two vertices, the extremes of the line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConvexHull {
  vertices: Vec<Point>,
}

impl ConvexHull {
  /// The degenerate hull.
  pub fn empty() -> ConvexHull {
    ConvexHull::default()
  }

  /// $O(1)$ Assume that the vertices form a convex hull.
  ///
  /// The caller is responsible for the vertices being strictly convex,
  /// counter-clockwise and starting at the lowest vertex. See
  /// [`ConvexHull::validate`].
  pub fn new_unchecked(vertices: Vec<Point>) -> ConvexHull {
    ConvexHull { vertices }
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// True if the hull does not enclose an area.
  pub fn is_degenerate(&self) -> bool {
    self.vertices.len() < 3
  }

  pub fn points(&self) -> &[Point] {
    &self.vertices
  }

  pub fn into_points(self) -> Vec<Point> {
    self.vertices
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.vertices.iter()
  }

  /// The first vertex: lowest y-coordinate, lowest x-coordinate among ties.
  pub fn pivot(&self) -> Option<&Point> {
    self.vertices.first()
  }

  /// Every edge of the hull, including the edge from the last vertex back
  /// to the first. A two-vertex hull has two edges, one in each direction.
  pub fn iter_boundary_edges(&self) -> impl Iterator<Item = DirectedEdge<'_>> + '_ {
    let n = self.vertices.len();
    let count = if n < 2 { 0 } else { n };
    (0..count).map(move |i| DirectedEdge {
      src: &self.vertices[i],
      dst: &self.vertices[(i + 1) % n],
    })
  }

  /// $O(n)$ Check that the hull is a strictly convex, counter-clockwise
  /// polygon that starts at its lowest vertex.
  ///
  /// # Errors
  /// * [`Error::InsufficientVertices`] if there are fewer than three vertices.
  /// * [`Error::ConvexViolation`] if some consecutive triple is not a strict
  ///   left turn, or the boundary winds around the pivot more than once.
  /// * [`Error::PivotViolation`] if the first vertex is not the lowest one.
  pub fn validate(&self) -> Result<(), Error> {
    let vs = &self.vertices;
    let n = vs.len();
    if n < 3 {
      return Err(Error::InsufficientVertices);
    }
    for i in 0..n {
      if vs[i].orientation(&vs[(i + 1) % n], &vs[(i + 2) % n]) != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    let pivot = &vs[0];
    let angles_increase = vs[1..]
      .windows(2)
      .all(|w| pivot.polar_angle_to(&w[0]) < pivot.polar_angle_to(&w[1]));
    if !angles_increase {
      return Err(Error::ConvexViolation);
    }
    let key = |p: &Point| (OrderedFloat(p.y_coord()), OrderedFloat(p.x_coord()));
    if vs[1..].iter().any(|p| key(p) < key(pivot)) {
      return Err(Error::PivotViolation);
    }
    Ok(())
  }

  /// $O(n)$ Locate a point relative to the hull.
  ///
  /// Degenerate hulls have no inside: a point is [`PointLocation::OnBoundary`]
  /// of a two-vertex hull if it lies on the segment, and of a one-vertex hull
  /// if it equals the vertex.
  ///
  /// ```rust
  /// # use grahamscan::algorithms::convex_hull;
  /// # use grahamscan::data::{Point, PointLocation};
  /// let hull = convex_hull(&[
  ///   Point::new([0.0, 0.0]),
  ///   Point::new([2.0, 0.0]),
  ///   Point::new([0.0, 2.0]),
  /// ]);
  /// assert_eq!(hull.locate(&Point::new([0.5, 0.5])), PointLocation::Inside);
  /// assert_eq!(hull.locate(&Point::new([1.0, 1.0])), PointLocation::OnBoundary);
  /// assert_eq!(hull.locate(&Point::new([2.0, 2.0])), PointLocation::Outside);
  /// ```
  pub fn locate(&self, pt: &Point) -> PointLocation {
    match self.vertices.as_slice() {
      [] => PointLocation::Outside,
      [p] if p == pt => PointLocation::OnBoundary,
      [_] => PointLocation::Outside,
      [a, b] if (DirectedEdge { src: a, dst: b }).contains(pt) => PointLocation::OnBoundary,
      [_, _] => PointLocation::Outside,
      _ => {
        let mut on_boundary = false;
        for edge in self.iter_boundary_edges() {
          match edge.side(pt) {
            Orientation::ClockWise => return PointLocation::Outside,
            Orientation::CoLinear => on_boundary = true,
            Orientation::CounterClockWise => {}
          }
        }
        if on_boundary {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }

  /// Smallest axis-aligned box containing every vertex, as `(min, max)`.
  pub fn bounding_box(&self) -> Option<(Point, Point)> {
    bounding_box(&self.vertices)
  }
}

pub(crate) fn bounding_box<'a, I>(pts: I) -> Option<(Point, Point)>
where
  I: IntoIterator<Item = &'a Point>,
{
  pts.into_iter().fold(None, |acc, p| match acc {
    None => Some((*p, *p)),
    Some((min, max)) => Some((
      Point::new([min.x_coord().min(p.x_coord()), min.y_coord().min(p.y_coord())]),
      Point::new([max.x_coord().max(p.x_coord()), max.y_coord().max(p.y_coord())]),
    )),
  })
}

///////////////////////////////////////////////////////////////////////////////
// Trait Implementations

impl Deref for ConvexHull {
  type Target = [Point];
  fn deref(&self) -> &[Point] {
    &self.vertices
  }
}

impl<'a> IntoIterator for &'a ConvexHull {
  type Item = &'a Point;
  type IntoIter = std::slice::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.iter()
  }
}

impl From<ConvexHull> for Vec<Point> {
  fn from(hull: ConvexHull) -> Vec<Point> {
    hull.vertices
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_ok};

  fn square() -> ConvexHull {
    ConvexHull::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([0.0, 4.0]),
    ])
  }

  #[test]
  fn validate_square() {
    assert_ok!(square().validate());
  }

  #[test]
  fn validate_clockwise() {
    let mut pts = square().into_points();
    pts[1..].reverse();
    assert_err_eq!(
      ConvexHull::new_unchecked(pts).validate(),
      Error::ConvexViolation
    );
  }

  #[test]
  fn validate_colinear() {
    let hull = ConvexHull::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([2.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([0.0, 4.0]),
    ]);
    assert_err_eq!(hull.validate(), Error::ConvexViolation);
  }

  #[test]
  fn validate_pivot() {
    let hull = ConvexHull::new_unchecked(vec![
      Point::new([4.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([0.0, 4.0]),
      Point::new([0.0, 0.0]),
    ]);
    assert_err_eq!(hull.validate(), Error::PivotViolation);
  }

  #[test]
  fn validate_degenerate() {
    assert_err_eq!(ConvexHull::empty().validate(), Error::InsufficientVertices);
    let segment = ConvexHull::new_unchecked(vec![Point::new([0.0, 0.0]), Point::new([1.0, 1.0])]);
    assert_err_eq!(segment.validate(), Error::InsufficientVertices);
  }

  #[test]
  fn locate_square() {
    let hull = square();
    assert_eq!(hull.locate(&Point::new([2.0, 2.0])), PointLocation::Inside);
    assert_eq!(hull.locate(&Point::new([0.0, 0.0])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([4.0, 2.0])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([5.0, 2.0])), PointLocation::Outside);
    assert_eq!(hull.locate(&Point::new([8.0, 0.0])), PointLocation::Outside);
  }

  #[test]
  fn locate_degenerate() {
    let segment = ConvexHull::new_unchecked(vec![Point::new([0.0, 0.0]), Point::new([2.0, 2.0])]);
    assert_eq!(segment.locate(&Point::new([1.0, 1.0])), PointLocation::OnBoundary);
    assert_eq!(segment.locate(&Point::new([3.0, 3.0])), PointLocation::Outside);
    let single = ConvexHull::new_unchecked(vec![Point::new([1.0, 1.0])]);
    assert_eq!(single.locate(&Point::new([1.0, 1.0])), PointLocation::OnBoundary);
    assert_eq!(single.locate(&Point::new([1.0, 2.0])), PointLocation::Outside);
    assert_eq!(
      ConvexHull::empty().locate(&Point::new([0.0, 0.0])),
      PointLocation::Outside
    );
  }

  #[test]
  fn boundary_edges_close_the_loop() {
    let hull = square();
    let edges: Vec<_> = hull.iter_boundary_edges().collect();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[3].src, &Point::new([0.0, 4.0]));
    assert_eq!(edges[3].dst, &Point::new([0.0, 0.0]));
    assert_eq!(ConvexHull::empty().iter_boundary_edges().count(), 0);
    let single = ConvexHull::new_unchecked(vec![Point::new([1.0, 1.0])]);
    assert_eq!(single.iter_boundary_edges().count(), 0);
  }

  #[test]
  fn bounding_box_of_square() {
    assert_eq!(
      square().bounding_box(),
      Some((Point::new([0.0, 0.0]), Point::new([4.0, 4.0])))
    );
    assert_eq!(ConvexHull::empty().bounding_box(), None);
  }

  #[test]
  fn serialize_as_list() {
    let json = serde_json::to_string(&square()).unwrap();
    assert_eq!(json, "[[0.0,0.0],[4.0,0.0],[4.0,4.0],[0.0,4.0]]");
  }
}
