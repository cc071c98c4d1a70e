use crate::{
  common::{distance, foot_of_perpendicular, is_between, Line, Point},
  PlayError,
};

/// An opponent, seen by the planner as an opaque disc. The radius is the
/// collision buffer around the center: opponent body radius plus ball radius.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Obstacle {
  pub center: Point,
  pub radius: f64,
}

impl Obstacle {
  /// Creates an obstacle, failing if the radius is negative or not finite.
  pub fn new(center: Point, radius: f64) -> Result<Obstacle, PlayError> {
    if !radius.is_finite() || radius < 0.0 {
      return Err(PlayError::InvalidInput(format!(
        "obstacle radius must be finite and non-negative, got {radius}"
      )));
    }
    Ok(Obstacle { center, radius })
  }

  /// Whether this obstacle intercepts the segment from `start` to `end`.
  ///
  /// The obstacle must project strictly between the two ends. It then blocks
  /// if its center sits closer to the line than its radius, or lies on the
  /// line itself. A line grazing exactly at the radius is not blocked.
  pub fn blocks(&self, start: Point, end: Point) -> Result<bool, PlayError> {
    if !is_between(self.center, end, start)? {
      return Ok(false);
    }

    let foot = foot_of_perpendicular(self.center, end, start)?;
    if distance(foot, self.center) < self.radius {
      return Ok(true);
    }

    Ok(Line::through(start, end)?.contains(self.center))
  }
}

/// Whether the straight segment from `start` to `end` avoids every obstacle.
///
/// With no obstacles this is always true, even for coincident ends. Otherwise
/// `start` and `end` must be distinct.
pub fn line_of_sight_clear(
  start: Point,
  end: Point,
  obstacles: &[Obstacle],
) -> Result<bool, PlayError> {
  for obstacle in obstacles {
    if obstacle.blocks(start, end)? {
      return Ok(false);
    }
  }
  Ok(true)
}

#[cfg(test)]
#[path = "obstacles_test.rs"]
mod test;
