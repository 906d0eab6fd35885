#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls of planar point sets using the [Graham scan][wiki].
//!
//! ```rust
//! use grahamscan::algorithms::convex_hull;
//! use grahamscan::data::Point;
//!
//! let pts = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([4.0, 0.0]),
//!   Point::new([2.0, 2.0]),
//!   Point::new([4.0, 4.0]),
//!   Point::new([0.0, 4.0]),
//! ];
//! let hull = convex_hull(&pts);
//! assert_eq!(hull.len(), 4);
//! assert_eq!(hull.pivot(), Some(&Point::new([0.0, 0.0])));
//! ```
//!
//! Coordinates are `f64`. NaN and infinite coordinates are not supported and
//! lead to an unspecified (but non-panicking) hull. Use [`data::Point::try_new`]
//! to reject them up front.
//!
//! [wiki]: https://en.wikipedia.org/wiki/Graham_scan

pub mod algorithms;
pub mod data;
pub mod io;
mod orientation;
pub mod session;

#[cfg(test)]
pub mod testing;

pub use orientation::Orientation;
pub use session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  /// Two consecutive hull edges are either colinear or oriented clockwise.
  ConvexViolation,
  /// The first hull vertex is not the lowest (then leftmost) vertex.
  PivotViolation,
  NonFiniteCoordinate,
  MalformedPoint,
  /// A computation has already been scheduled.
  Busy,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::PivotViolation => write!(f, "Hull does not start at its lowest vertex"),
      Error::NonFiniteCoordinate => write!(f, "Coordinates must be finite"),
      Error::MalformedPoint => write!(f, "Expected two coordinates, 'x y' or 'x,y'"),
      Error::Busy => write!(f, "A hull computation is already scheduled"),
    }
  }
}

impl std::error::Error for Error {}
