//! Front-end state between collecting points and showing their hull.
//!
//! A front end adds points as the user supplies them, schedules a single
//! computation once there are enough, waits (typically [`DEFAULT_DELAY`]),
//! and then fires it. While a computation is scheduled, new points and new
//! triggers are refused.
//!
//! ```rust
//! # use grahamscan::{Error, Session};
//! # use grahamscan::data::Point;
//! let mut session = Session::new();
//! session.add_point(Point::new([0.0, 0.0]));
//! session.add_point(Point::new([4.0, 0.0]));
//! assert_eq!(session.trigger(), Err(Error::InsufficientVertices));
//!
//! session.add_point(Point::new([0.0, 4.0]));
//! session.trigger()?;
//! assert!(!session.add_point(Point::new([1.0, 1.0])));
//!
//! let hull = session.fire().expect("scheduled");
//! assert_eq!(hull.len(), 3);
//! # Ok::<(), Error>(())
//! ```
use std::time::Duration;

use crate::algorithms::convex_hull;
use crate::data::{ConvexHull, Point};
use crate::Error;

/// Delay between triggering and firing a computation.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
  #[default]
  Idle,
  Scheduled,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
  points: Vec<Point>,
  hull: Option<ConvexHull>,
  state: State,
}

impl Session {
  pub fn new() -> Session {
    Session::default()
  }

  /// Add a point. Returns `false`, leaving the session unchanged, if a
  /// computation is scheduled.
  pub fn add_point(&mut self, pt: Point) -> bool {
    if self.is_scheduled() {
      tracing::debug!(%pt, "ignoring point while a hull is scheduled");
      return false;
    }
    self.points.push(pt);
    true
  }

  /// Schedule one hull computation.
  ///
  /// # Errors
  /// * [`Error::Busy`] if a computation is already scheduled.
  /// * [`Error::InsufficientVertices`] if there are fewer than three points.
  pub fn trigger(&mut self) -> Result<(), Error> {
    if self.is_scheduled() {
      return Err(Error::Busy);
    }
    if self.points.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    self.state = State::Scheduled;
    tracing::debug!(points = self.points.len(), "scheduled hull computation");
    Ok(())
  }

  pub fn is_scheduled(&self) -> bool {
    self.state == State::Scheduled
  }

  /// Run the scheduled computation and return to idle. Returns `None` if
  /// nothing was scheduled.
  pub fn fire(&mut self) -> Option<&ConvexHull> {
    if !self.is_scheduled() {
      return None;
    }
    self.state = State::Idle;
    let hull = self.hull.insert(convex_hull(&self.points));
    Some(&*hull)
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  /// The most recently computed hull, if any.
  pub fn hull(&self) -> Option<&ConvexHull> {
    self.hull.as_ref()
  }

  /// Forget all points and the last hull. A scheduled computation is cancelled.
  pub fn clear(&mut self) {
    *self = Session::default();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_none, assert_ok, assert_some};

  fn triangle() -> Session {
    let mut session = Session::new();
    for pt in [[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]] {
      assert!(session.add_point(Point::new(pt)));
    }
    session
  }

  #[test]
  fn trigger_needs_three_points() {
    let mut session = Session::new();
    session.add_point(Point::new([0.0, 0.0]));
    session.add_point(Point::new([1.0, 0.0]));
    assert_err_eq!(session.trigger(), Error::InsufficientVertices);
    assert!(!session.is_scheduled());
  }

  #[test]
  fn trigger_once() {
    let mut session = triangle();
    assert_ok!(session.trigger());
    assert_err_eq!(session.trigger(), Error::Busy);
  }

  #[test]
  fn points_refused_while_scheduled() {
    let mut session = triangle();
    assert_ok!(session.trigger());
    assert!(!session.add_point(Point::new([1.0, 1.0])));
    assert_eq!(session.points().len(), 3);
    assert_some!(session.fire());
    assert!(session.add_point(Point::new([1.0, 1.0])));
    assert_eq!(session.points().len(), 4);
  }

  #[test]
  fn fire_without_trigger() {
    let mut session = triangle();
    assert_none!(session.fire());
    assert_none!(session.hull());
  }

  #[test]
  fn fire_computes_hull() {
    let mut session = triangle();
    session.add_point(Point::new([1.0, 1.0]));
    assert_ok!(session.trigger());
    let hull = session.fire().cloned();
    assert_eq!(
      hull.as_ref().map(ConvexHull::points),
      Some(&[Point::new([0.0, 0.0]), Point::new([4.0, 0.0]), Point::new([0.0, 4.0])][..])
    );
    assert_eq!(session.hull(), hull.as_ref());
    assert!(!session.is_scheduled());
  }

  #[test]
  fn recompute_after_more_points() {
    let mut session = triangle();
    assert_ok!(session.trigger());
    assert_eq!(session.fire().map(ConvexHull::len), Some(3));
    session.add_point(Point::new([4.0, 4.0]));
    assert_ok!(session.trigger());
    assert_eq!(session.fire().map(ConvexHull::len), Some(4));
  }

  #[test]
  fn clear_resets() {
    let mut session = triangle();
    assert_ok!(session.trigger());
    session.clear();
    assert!(!session.is_scheduled());
    assert!(session.points().is_empty());
    assert_none!(session.hull());
  }
}
