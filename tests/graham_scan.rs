mod graham_scan {
  use grahamscan::algorithms::convex_hull;
  use grahamscan::data::*;
  use grahamscan::*;

  use claims::assert_ok;

  fn pts(coords: &[[f64; 2]]) -> Vec<Point> {
    coords.iter().copied().map(Point::new).collect()
  }

  #[test]
  fn colinear_keeps_extremes() {
    let hull = convex_hull(&pts(&[[0., 0.], [1., 1.], [2., 2.]]));
    assert_eq!(hull.points(), pts(&[[0., 0.], [2., 2.]]));
    assert!(hull.is_degenerate());
  }

  #[test]
  fn square_with_interior_point() {
    let input = pts(&[[0., 0.], [4., 0.], [4., 4.], [0., 4.], [2., 2.]]);
    let hull = convex_hull(&input);
    assert_eq!(hull.points(), pts(&[[0., 0.], [4., 0.], [4., 4.], [0., 4.]]));
    assert_eq!(hull.locate(&Point::new([2.0, 2.0])), PointLocation::Inside);
  }

  #[test]
  fn unit_square() -> Result<(), Error> {
    let hull = convex_hull(&pts(&[[0., 0.], [1., 0.], [1., 1.], [0., 1.]]));
    hull.validate()?;
    assert_eq!(hull.points(), pts(&[[0., 0.], [1., 0.], [1., 1.], [0., 1.]]));
    Ok(())
  }

  #[test]
  fn duplicate_points() {
    let hull = convex_hull(&pts(&[[0., 0.], [0., 0.], [1., 1.], [2., 0.]]));
    assert_ok!(hull.validate());
    assert_eq!(hull.points(), pts(&[[0., 0.], [2., 0.], [1., 1.]]));
  }

  #[test]
  fn caller_order_is_kept() {
    let input = pts(&[[4., 4.], [2., 2.], [0., 0.], [4., 0.], [0., 4.]]);
    let copy = input.clone();
    let _ = convex_hull(&input);
    assert_eq!(input, copy);
  }

  #[test]
  fn circle() -> Result<(), Error> {
    // 64 points on a circle plus its center: every point but the center is a vertex.
    let mut input: Vec<Point> = (0..64)
      .map(|i| {
        let angle = f64::from(i) * std::f64::consts::TAU / 64.0;
        Point::new([100.0 * angle.cos(), 100.0 * angle.sin()])
      })
      .collect();
    input.push(Point::new([0.0, 0.0]));
    let hull = convex_hull(&input);
    hull.validate()?;
    assert_eq!(hull.len(), 64);
    assert!(!hull.contains(&Point::new([0.0, 0.0])));
    Ok(())
  }

  #[test]
  fn hull_of_hull() {
    let input = pts(&[[3., 1.], [0., 0.], [5., 5.], [2., 7.], [1., 3.], [-2., 4.], [3., 3.]]);
    let hull = convex_hull(&input);
    assert_eq!(convex_hull(hull.points()), hull);
  }
}
