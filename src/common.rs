use glam::DVec2;

use crate::PlayError;

/// The distance below which two points are considered coincident, a point is
/// considered to lie on a line, or the ball is considered to have reached a
/// waypoint.
pub const TOLERANCE: f64 = 1e-6;

/// A position on the pitch. Both coordinates are always finite.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point(DVec2);

impl Point {
  /// Creates a point, failing if either coordinate is NaN or infinite.
  pub fn new(x: f64, y: f64) -> Result<Point, PlayError> {
    if !x.is_finite() || !y.is_finite() {
      return Err(PlayError::InvalidInput(format!(
        "point coordinates must be finite, got ({x}, {y})"
      )));
    }
    Ok(Point(DVec2::new(x, y)))
  }

  /// Wraps a vector computed from already-validated points.
  pub(crate) fn from_vec(vec: DVec2) -> Point {
    debug_assert!(vec.is_finite(), "computed a non-finite point: {vec}");
    Point(vec)
  }

  pub fn x(self) -> f64 {
    self.0.x
  }

  pub fn y(self) -> f64 {
    self.0.y
  }

  pub fn as_vec(self) -> DVec2 {
    self.0
  }

  /// Returns whether `self` and `other` are within [`TOLERANCE`] of each other.
  pub fn coincides_with(self, other: Point) -> bool {
    distance(self, other) <= TOLERANCE
  }
}

impl TryFrom<DVec2> for Point {
  type Error = PlayError;

  fn try_from(vec: DVec2) -> Result<Point, PlayError> {
    Point::new(vec.x, vec.y)
  }
}

impl From<Point> for DVec2 {
  fn from(point: Point) -> DVec2 {
    point.0
  }
}

/// The Euclidean distance between `p` and `q`.
pub fn distance(p: Point, q: Point) -> f64 {
  p.0.distance(q.0)
}

/// The implicit line through two points. The coefficients are kept in the
/// form `a = p.y - q.y`, `b = p.x - q.x`, `c = p.x * q.y - q.x * p.y`, so a
/// point `(x, y)` on the line satisfies `a * x - b * y + c = 0`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Line {
  pub a: f64,
  pub b: f64,
  pub c: f64,
}

impl Line {
  /// The line through `p` and `q`. Fails if the points coincide, since no
  /// unique line exists.
  pub fn through(p: Point, q: Point) -> Result<Line, PlayError> {
    if p.coincides_with(q) {
      return Err(PlayError::DegenerateGeometry(
        "a line needs two distinct points",
      ));
    }
    Ok(Line {
      a: p.y() - q.y(),
      b: p.x() - q.x(),
      c: p.x() * q.y() - q.x() * p.y(),
    })
  }

  /// Evaluates the implicit equation at `point`. Zero on the line.
  pub fn evaluate(&self, point: Point) -> f64 {
    self.a * point.x() - self.b * point.y() + self.c
  }

  /// The perpendicular distance from `point` to the line.
  pub fn distance_to(&self, point: Point) -> f64 {
    self.evaluate(point).abs() / (self.a * self.a + self.b * self.b).sqrt()
  }

  /// Whether `point` lies on the line, up to [`TOLERANCE`].
  pub fn contains(&self, point: Point) -> bool {
    self.distance_to(point) <= TOLERANCE
  }

  /// Whether the line runs parallel to the y axis.
  pub fn is_vertical(&self) -> bool {
    self.b.abs() <= TOLERANCE
  }

  /// The y coordinate of the line at `x`. Returns None for vertical lines.
  pub fn y_at(&self, x: f64) -> Option<f64> {
    if self.is_vertical() {
      None
    } else {
      Some((self.a * x + self.c) / self.b)
    }
  }
}

/// The coefficients of the line through `p` and `q`. See [`Line`].
pub fn line_through(p: Point, q: Point) -> Result<Line, PlayError> {
  Line::through(p, q)
}

/// The point where the perpendicular dropped from `p3` meets the line through
/// `p1` and `p2`.
pub fn foot_of_perpendicular(
  p3: Point,
  p1: Point,
  p2: Point,
) -> Result<Point, PlayError> {
  let Line { a, b, .. } = Line::through(p1, p2)?;
  let k = (a * (p3.x() - p1.x()) - b * (p3.y() - p1.y())) / (a * a + b * b);
  Ok(Point::from_vec(DVec2::new(p3.x() - k * a, p3.y() + k * b)))
}

/// Whether the perpendicular foot of `p3` lies strictly between `p1` and `p2`.
///
/// Only the x coordinates take part in the comparison, so a vertical segment
/// (equal x coordinates) never reports a point as between its ends.
pub fn is_between(p3: Point, p1: Point, p2: Point) -> Result<bool, PlayError> {
  let foot = foot_of_perpendicular(p3, p1, p2)?;
  Ok((foot.x() - p2.x()) * (p1.x() - foot.x()) > 0.0)
}

#[cfg(test)]
#[path = "common_test.rs"]
mod test;
