use super::Point;
use crate::Orientation;

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

#[derive(Debug, Clone, Copy, PartialEq)]
// Directed edge from A to B, borrowed from a hull.
pub struct DirectedEdge<'a> {
  pub src: &'a Point,
  pub dst: &'a Point,
}

impl DirectedEdge<'_> {
  /// Which side of the supporting line `pt` lies on. Points to the left of
  /// the edge are [`Orientation::CounterClockWise`].
  pub fn side(&self, pt: &Point) -> Orientation {
    self.src.orientation(self.dst, pt)
  }

  /// True if `pt` lies on the closed segment between `src` and `dst`.
  pub fn contains(&self, pt: &Point) -> bool {
    self.side(pt).is_colinear()
      && within(pt.x_coord(), self.src.x_coord(), self.dst.x_coord())
      && within(pt.y_coord(), self.src.y_coord(), self.dst.y_coord())
  }

  pub fn squared_length(&self) -> f64 {
    self.src.squared_euclidean_distance(self.dst)
  }
}

fn within(v: f64, a: f64, b: f64) -> bool {
  a.min(b) <= v && v <= a.max(b)
}
