use proptest::prelude::*;

use crate::{
  common::Point,
  obstacles::{line_of_sight_clear, Obstacle},
  PlayError,
};

fn point(x: f64, y: f64) -> Point {
  Point::new(x, y).unwrap()
}

fn obstacle(x: f64, y: f64, radius: f64) -> Obstacle {
  Obstacle::new(point(x, y), radius).unwrap()
}

#[test]
fn rejects_bad_radius() {
  assert!(matches!(
    Obstacle::new(point(0.0, 0.0), -1.0),
    Err(PlayError::InvalidInput(_))
  ));
  assert!(Obstacle::new(point(0.0, 0.0), f64::NAN).is_err());
  assert!(Obstacle::new(point(0.0, 0.0), 0.0).is_ok());
}

#[test]
fn zero_radius_on_midpoint_blocks() {
  let start = point(0.0, 0.0);
  let end = point(10.0, 6.0);
  assert!(!line_of_sight_clear(start, end, &[obstacle(5.0, 3.0, 0.0)]).unwrap());
}

#[test]
fn obstacle_within_radius_blocks() {
  let start = point(0.0, 0.0);
  let end = point(10.0, 0.0);
  assert!(!line_of_sight_clear(start, end, &[obstacle(5.0, 1.0, 1.5)]).unwrap());
  assert!(!line_of_sight_clear(end, start, &[obstacle(5.0, -1.0, 1.5)]).unwrap());
}

#[test]
fn grazing_at_radius_is_clear() {
  let start = point(0.0, 0.0);
  let end = point(10.0, 0.0);
  assert!(line_of_sight_clear(start, end, &[obstacle(5.0, 2.0, 2.0)]).unwrap());
  assert!(line_of_sight_clear(start, end, &[obstacle(5.0, 2.5, 2.0)]).unwrap());
}

#[test]
fn obstacle_beyond_the_ends_is_clear() {
  let start = point(0.0, 0.0);
  let end = point(10.0, 0.0);
  // Behind the kicker, close enough to the line to block if it were between.
  assert!(line_of_sight_clear(start, end, &[obstacle(-1.0, 0.5, 3.0)]).unwrap());
  assert!(line_of_sight_clear(start, end, &[obstacle(12.0, 0.0, 3.0)]).unwrap());
}

#[test]
fn vertical_segments_are_never_blocked() {
  let start = point(3.0, 0.0);
  let end = point(3.0, 10.0);
  assert!(line_of_sight_clear(start, end, &[obstacle(3.0, 5.0, 4.0)]).unwrap());
}

#[test]
fn any_blocking_obstacle_blocks() {
  let start = point(0.0, 0.0);
  let end = point(10.0, 10.0);
  let obstacles = [
    obstacle(-5.0, 5.0, 1.0),
    obstacle(20.0, 0.0, 1.0),
    obstacle(6.0, 6.5, 1.0),
  ];
  assert!(!line_of_sight_clear(start, end, &obstacles).unwrap());
  assert!(line_of_sight_clear(start, end, &obstacles[..2]).unwrap());
}

#[test]
fn coincident_ends_with_obstacles_are_degenerate() {
  let p = point(1.0, 1.0);
  assert!(matches!(
    line_of_sight_clear(p, p, &[obstacle(5.0, 5.0, 1.0)]),
    Err(PlayError::DegenerateGeometry(_))
  ));
}

proptest! {
  #[test]
  fn no_obstacles_never_block(
    x1 in -1000.0f64..1000.0,
    y1 in -1000.0f64..1000.0,
    x2 in -1000.0f64..1000.0,
    y2 in -1000.0f64..1000.0,
  ) {
    prop_assert!(line_of_sight_clear(point(x1, y1), point(x2, y2), &[]).unwrap());
  }
}
