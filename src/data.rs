mod directed_edge;
pub mod hull;
pub(crate) mod point;

pub use directed_edge::DirectedEdge;

#[doc(inline)]
pub use crate::data::hull::{BraillePrinter, ConvexHull};
pub use point::{Point, PolarKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
