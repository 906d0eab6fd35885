// This module contains strategies for:
//  * points on a small integer grid
//  * points with arbitrary finite coordinates
//  * point sets sampled from the unit square
// A Strategy is a way to generate a shrinkable value.
use crate::data::Point;

use core::ops::Range;
use proptest::collection::*;
use proptest::prelude::*;
use rand::Rng;
use rand::SeedableRng;

///////////////////////////////////////////////////////////////////////////////
// Grid points

// Small integer coordinates keep every cross product exact, so the
// properties of the hull can be checked without rounding noise.
pub fn any_grid() -> impl Strategy<Value = Point> {
  (-100i32..=100, -100i32..=100).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

pub fn any_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_grid(), size)
}

///////////////////////////////////////////////////////////////////////////////
// Finite points

// Arbitrary isn't restricted to finite floats.
pub fn any_finite() -> impl Strategy<Value = Point> {
  use proptest::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
  let coord = POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO;
  (coord.clone(), coord).prop_map(|(x, y)| Point::new([x, y]))
}

///////////////////////////////////////////////////////////////////////////////
// Unit square

pub fn any_unit_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  (size, any::<u64>()).prop_map(|(n, seed)| {
    let rng = &mut rand::rngs::SmallRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen()).collect()
  })
}
