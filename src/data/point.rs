use array_init::array_init;
use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;
use std::str::FromStr;

use crate::orientation::cross;
use crate::{Error, Orientation};

/// A point in the plane.
///
/// Points have no identity beyond their coordinates. They serialize as a
/// two-element array, `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Point {
  pub array: [f64; 2],
}

/// Sort key ordering points by polar angle around an origin, then by distance.
pub type PolarKey = (OrderedFloat<f64>, OrderedFloat<f64>);

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl Point {
  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  /// Like [`Point::new`] but rejects NaN and infinite coordinates.
  ///
  /// # Errors
  /// Returns [`Error::NonFiniteCoordinate`] if either coordinate is not finite.
  pub fn try_new(array: [f64; 2]) -> Result<Point, Error> {
    if array.iter().all(|c| c.is_finite()) {
      Ok(Point { array })
    } else {
      Err(Error::NonFiniteCoordinate)
    }
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1]
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .map(|(a, b)| {
        let diff = a - b;
        diff * diff
      })
      .sum()
  }

  /// Compare the distances from `self` to `p` and to `q`.
  pub fn cmp_distance_to(&self, p: &Point, q: &Point) -> Ordering {
    OrderedFloat(self.squared_euclidean_distance(p))
      .cmp(&OrderedFloat(self.squared_euclidean_distance(q)))
  }

  /// Cross product of `q - self` and `r - self`.
  pub fn cross(&self, q: &Point, r: &Point) -> f64 {
    cross(&self.array, &q.array, &r.array)
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Angle of the vector from `self` to `p`, in radians, as given by `atan2`.
  pub fn polar_angle_to(&self, p: &Point) -> f64 {
    (p.y_coord() - self.y_coord()).atan2(p.x_coord() - self.x_coord())
  }

  /// Key ordering `p` by its polar angle around `self`, nearer points first
  /// when the angles are equal.
  ///
  /// ```rust
  /// # use grahamscan::data::Point;
  /// let origin = Point::new([0.0, 0.0]);
  /// let near = Point::new([1.0, 1.0]);
  /// let far = Point::new([2.0, 2.0]);
  /// let up = Point::new([0.0, 1.0]);
  /// assert!(origin.polar_key(&near) < origin.polar_key(&far));
  /// assert!(origin.polar_key(&far) < origin.polar_key(&up));
  /// ```
  pub fn polar_key(&self, p: &Point) -> PolarKey {
    (
      OrderedFloat(self.polar_angle_to(p)),
      OrderedFloat(self.squared_euclidean_distance(p)),
    )
  }

  pub fn polar_cmp(&self, p: &Point, q: &Point) -> Ordering {
    self.polar_key(p).cmp(&self.polar_key(q))
  }
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl Deref for Point {
  type Target = [f64; 2];
  fn deref(&self) -> &[f64; 2] {
    &self.array
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<[f64; 2]> for Point {
  fn from(array: [f64; 2]) -> Point {
    Point { array }
  }
}

// Same format that FromStr accepts.
impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.x_coord(), self.y_coord())
  }
}

/// Parses `"x y"`, `"x,y"` or `"x, y"`.
///
/// ```rust
/// # use grahamscan::data::Point;
/// # use grahamscan::Error;
/// assert_eq!("1.5, -2".parse::<Point>(), Ok(Point::new([1.5, -2.0])));
/// assert_eq!("1 2 3".parse::<Point>(), Err(Error::MalformedPoint));
/// assert_eq!("NaN 0".parse::<Point>(), Err(Error::NonFiniteCoordinate));
/// ```
impl FromStr for Point {
  type Err = Error;
  fn from_str(s: &str) -> Result<Point, Error> {
    let mut coords = s
      .split(|c: char| c == ',' || c.is_whitespace())
      .filter(|tok| !tok.is_empty())
      .map(str::parse::<f64>);
    match (coords.next(), coords.next(), coords.next()) {
      (Some(Ok(x)), Some(Ok(y)), None) => Point::try_new([x, y]),
      _ => Err(Error::MalformedPoint),
    }
  }
}
