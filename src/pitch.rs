use rand::Rng;
use tracing::debug;

use crate::{
  common::Point,
  config::{PitchConfig, PlayConfig},
  obstacles::Obstacle,
  PlayError, Scenario,
};

/// A closed interval of pixel coordinates.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Span {
  pub min: f64,
  pub max: f64,
}

impl Span {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
    rng.random_range(self.min..=self.max)
  }
}

/// The pitch laid out in pixels, centered in the render target. The team in
/// possession attacks the goal at the top of the screen (smallest y).
#[derive(Clone, PartialEq, Debug)]
pub struct Pitch {
  /// Pixels per meter.
  pub scale: f64,
  pub line_width: f64,
  pub field_x: Span,
  pub field_y: Span,
  pub upper_half_y: Span,
  pub penalty_area_x: Span,
  pub penalty_area_y: Span,
  pub goal_area_x: Span,
  pub goal_area_y: Span,
  pub center_spot: Point,
  /// Radius of the centre circle, in pixels.
  pub center_circle_radius: f64,
  pub goal_line_y: f64,
}

impl Pitch {
  /// Fits the pitch described by `config` into its window, at the scale given
  /// by [`PlayConfig::pixel_scale`]. Fails if `config` does not validate.
  pub fn new(config: &PlayConfig) -> Result<Pitch, PlayError> {
    config.validate()?;
    let PitchConfig {
      field_width,
      field_length,
      penalty_area_width,
      penalty_area_length,
      goal_area_width,
      goal_area_length,
      center_circle_radius,
      line_width,
    } = config.pitch;
    let (window_width, window_height) =
      (config.window_width, config.window_height);
    let scale = config.pixel_scale()?;

    let x_span = |meters: f64| Span {
      min: (window_width - meters * scale) / 2.0,
      max: (window_width + meters * scale) / 2.0,
    };
    let y_span = |meters: f64| Span {
      min: (window_height - meters * scale) / 2.0,
      max: (window_height + meters * scale) / 2.0,
    };

    let field_y = y_span(field_length);
    let goal_line_y = field_y.min - line_width;
    let pitch = Pitch {
      scale,
      line_width,
      field_x: x_span(field_width),
      field_y,
      upper_half_y: Span { min: field_y.min, max: window_height / 2.0 },
      penalty_area_x: x_span(penalty_area_width),
      penalty_area_y: Span {
        min: field_y.min,
        max: field_y.min + penalty_area_length * scale,
      },
      goal_area_x: x_span(goal_area_width),
      goal_area_y: Span {
        min: goal_line_y - goal_area_length * scale,
        max: goal_line_y,
      },
      center_spot: Point::new(window_width / 2.0, window_height / 2.0)?,
      center_circle_radius: center_circle_radius * scale,
      goal_line_y,
    };
    debug!(scale, goal_line_y, "laid out pitch");
    Ok(pitch)
  }

  /// Candidate scoring points: every whole pixel across the goal mouth, on the
  /// goal line, by increasing x.
  pub fn goal_line_samples(&self) -> Vec<Point> {
    let first = self.goal_area_x.min.ceil() as i64;
    let last = self.goal_area_x.max.floor() as i64;
    (first..=last)
      .filter_map(|x| Point::new(x as f64, self.goal_line_y).ok())
      .collect()
  }

  pub fn random_upper_half_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point::from_vec(glam::DVec2::new(
      self.field_x.sample(rng),
      self.upper_half_y.sample(rng),
    ))
  }

  pub fn random_penalty_area_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point::from_vec(glam::DVec2::new(
      self.penalty_area_x.sample(rng),
      self.penalty_area_y.sample(rng),
    ))
  }

  /// A team of `team_size` players: all but one spread over the attacking
  /// half, the last one inside the penalty area.
  pub fn random_team<R: Rng + ?Sized>(
    &self,
    rng: &mut R,
    team_size: usize,
  ) -> Vec<Point> {
    let mut team = (0..team_size.saturating_sub(1))
      .map(|_| self.random_upper_half_point(rng))
      .collect::<Vec<Point>>();
    team.push(self.random_penalty_area_point(rng));
    team
  }

  /// A fresh build-up: the kicker on the centre spot, a random team of
  /// teammates, and a random team of opponents each blocking
  /// `collision_radius` pixels around them.
  pub fn random_scenario<R: Rng + ?Sized>(
    &self,
    rng: &mut R,
    team_size: usize,
    collision_radius: f64,
  ) -> Result<Scenario, PlayError> {
    let teammates = self.random_team(rng, team_size);
    let opponents = self
      .random_team(rng, team_size)
      .into_iter()
      .map(|center| Obstacle::new(center, collision_radius))
      .collect::<Result<Vec<Obstacle>, PlayError>>()?;

    Scenario::new(self.center_spot, teammates, opponents, self.goal_line_samples())
  }
}

#[cfg(test)]
#[path = "pitch_test.rs"]
mod test;
