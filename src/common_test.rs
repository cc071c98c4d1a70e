use proptest::prelude::*;

use crate::{
  common::{
    distance, foot_of_perpendicular, is_between, line_through, Line, Point,
  },
  PlayError,
};

fn point(x: f64, y: f64) -> Point {
  Point::new(x, y).unwrap()
}

macro_rules! assert_point_near {
  ($left: expr, $right: expr, $eps: expr) => {{
    let left = $left;
    let right = $right;
    let eps = $eps;
    assert!(
      distance(left, right) < eps,
      "left: {:?}, right: {:?}, epsilon: {}",
      left,
      right,
      eps
    );
  }};
}

#[test]
fn rejects_non_finite_coordinates() {
  assert!(matches!(Point::new(f64::NAN, 0.0), Err(PlayError::InvalidInput(_))));
  assert!(matches!(Point::new(0.0, f64::NAN), Err(PlayError::InvalidInput(_))));
  assert!(matches!(
    Point::new(f64::INFINITY, 0.0),
    Err(PlayError::InvalidInput(_))
  ));
  assert!(Point::try_from(glam::DVec2::new(1.0, f64::NEG_INFINITY)).is_err());
}

#[test]
fn distance_is_euclidean() {
  assert_eq!(distance(point(0.0, 0.0), point(3.0, 4.0)), 5.0);
  assert_eq!(distance(point(-1.0, 2.0), point(-1.0, 2.0)), 0.0);
}

#[test]
fn line_coefficients() {
  let line = line_through(point(1.0, 2.0), point(4.0, 6.0)).unwrap();
  assert_eq!(line, Line { a: -4.0, b: -3.0, c: 1.0 * 6.0 - 4.0 * 2.0 });
}

#[test]
fn line_contains_its_points() {
  let line = Line::through(point(1.0, 1.0), point(3.0, 5.0)).unwrap();
  assert!(line.contains(point(1.0, 1.0)));
  assert!(line.contains(point(3.0, 5.0)));
  assert!(line.contains(point(2.0, 3.0)));
  assert!(line.contains(point(10.0, 19.0)));
  assert!(!line.contains(point(2.0, 3.1)));
  assert_eq!(line.y_at(2.0), Some(3.0));
}

#[test]
fn vertical_line_has_no_y() {
  let line = Line::through(point(2.0, 0.0), point(2.0, 8.0)).unwrap();
  assert!(line.is_vertical());
  assert_eq!(line.y_at(2.0), None);
  assert!(line.contains(point(2.0, 100.0)));
}

#[test]
fn coincident_points_are_degenerate() {
  assert!(matches!(
    line_through(point(1.0, 1.0), point(1.0, 1.0)),
    Err(PlayError::DegenerateGeometry(_))
  ));
  assert!(matches!(
    foot_of_perpendicular(point(0.0, 5.0), point(1.0, 1.0), point(1.0, 1.0)),
    Err(PlayError::DegenerateGeometry(_))
  ));
  assert!(is_between(point(0.0, 5.0), point(1.0, 1.0), point(1.0, 1.0)).is_err());
}

#[test]
fn foot_on_horizontal_line() {
  assert_point_near!(
    foot_of_perpendicular(point(3.0, 7.0), point(0.0, 0.0), point(10.0, 0.0))
      .unwrap(),
    point(3.0, 0.0),
    1e-9
  );
}

#[test]
fn foot_on_diagonal_line() {
  assert_point_near!(
    foot_of_perpendicular(point(0.0, 2.0), point(0.0, 0.0), point(4.0, 4.0))
      .unwrap(),
    point(1.0, 1.0),
    1e-9
  );
  // The foot may lie outside the segment.
  assert_point_near!(
    foot_of_perpendicular(point(-4.0, -2.0), point(0.0, 0.0), point(4.0, 4.0))
      .unwrap(),
    point(-3.0, -3.0),
    1e-9
  );
}

#[test]
fn between_requires_foot_strictly_inside() {
  let a = point(0.0, 0.0);
  let b = point(10.0, 5.0);
  assert!(is_between(point(5.0, 10.0), a, b).unwrap());
  assert!(is_between(point(5.0, 10.0), b, a).unwrap());
  assert!(!is_between(point(-5.0, 0.0), a, b).unwrap());
  assert!(!is_between(point(20.0, 10.0), a, b).unwrap());
  // Foot exactly on an endpoint.
  assert!(!is_between(point(0.0, 3.0), a, point(10.0, 0.0)).unwrap());
}

#[test]
fn between_never_holds_on_vertical_segments() {
  let a = point(4.0, 0.0);
  let b = point(4.0, 10.0);
  assert!(!is_between(point(4.0, 5.0), a, b).unwrap());
  assert!(!is_between(point(6.0, 5.0), a, b).unwrap());
}

proptest! {
  #[test]
  fn distance_is_symmetric(
    x1 in -1000.0f64..1000.0,
    y1 in -1000.0f64..1000.0,
    x2 in -1000.0f64..1000.0,
    y2 in -1000.0f64..1000.0,
  ) {
    let p = point(x1, y1);
    let q = point(x2, y2);
    prop_assert_eq!(distance(p, q), distance(q, p));
    prop_assert_eq!(distance(p, p), 0.0);
    prop_assert!(distance(p, q) >= 0.0);
  }

  #[test]
  fn foot_lies_on_line(
    x in -500.0f64..500.0,
    y in -500.0f64..500.0,
    dx in 1.0f64..300.0,
    dy in -300.0f64..300.0,
  ) {
    let p1 = point(0.0, 0.0);
    let p2 = point(dx, dy);
    let foot = foot_of_perpendicular(point(x, y), p1, p2).unwrap();
    prop_assert!(Line::through(p1, p2).unwrap().distance_to(foot) < 1e-6);
  }
}
