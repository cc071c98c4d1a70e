use std::path::Path;

use serde::Deserialize;

use crate::PlayError;

/// Pitch dimensions in meters, plus the painted line width in pixels.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PitchConfig {
  pub field_width: f64,
  pub field_length: f64,
  pub penalty_area_width: f64,
  pub penalty_area_length: f64,
  pub goal_area_width: f64,
  pub goal_area_length: f64,
  pub center_circle_radius: f64,
  pub line_width: f64,
}

impl Default for PitchConfig {
  fn default() -> Self {
    Self {
      field_width: 68.0,
      field_length: 105.0,
      penalty_area_width: 40.3,
      penalty_area_length: 16.5,
      goal_area_width: 18.32,
      goal_area_length: 5.5,
      center_circle_radius: 9.15,
      line_width: 5.0,
    }
  }
}

/// Everything needed to generate and play back a scenario.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
  pub pitch: PitchConfig,
  /// The size of the render target, in pixels.
  pub window_width: f64,
  pub window_height: f64,
  /// Players per side, including the kicker's teammates but not the kicker.
  pub team_size: usize,
  /// Distance the ball covers per tick, in pixels.
  pub ball_speed: f64,
  pub frame_time_ms: u64,
  /// Opponent body radius plus ball radius, in pixels.
  pub collision_radius: f64,
  /// Seed for scenario generation. A fresh seed is drawn when absent.
  pub seed: Option<u64>,
}

impl Default for PlayConfig {
  fn default() -> Self {
    let pitch = PitchConfig::default();
    // Players are drawn with twice the line width, the ball with one.
    let collision_radius = 3.0 * pitch.line_width;
    Self {
      pitch,
      window_width: 1920.0,
      window_height: 1080.0,
      team_size: 3,
      ball_speed: 0.5,
      frame_time_ms: 50,
      collision_radius,
      seed: None,
    }
  }
}

impl PlayConfig {
  /// Parses a config from TOML. Missing fields take their defaults.
  pub fn from_toml_str(content: &str) -> Result<PlayConfig, PlayError> {
    let config: PlayConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
  }

  /// Loads and validates a config from a TOML file.
  pub fn load(path: &Path) -> Result<PlayConfig, PlayError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
      PlayError::ConfigIo { path: path.to_path_buf(), source }
    })?;
    Self::from_toml_str(&content)
  }

  pub fn validate(&self) -> Result<(), PlayError> {
    let pitch = &self.pitch;
    let positive = [
      ("pitch.field_width", pitch.field_width),
      ("pitch.field_length", pitch.field_length),
      ("pitch.penalty_area_width", pitch.penalty_area_width),
      ("pitch.penalty_area_length", pitch.penalty_area_length),
      ("pitch.goal_area_width", pitch.goal_area_width),
      ("pitch.goal_area_length", pitch.goal_area_length),
      ("pitch.center_circle_radius", pitch.center_circle_radius),
      ("window_width", self.window_width),
      ("window_height", self.window_height),
      ("ball_speed", self.ball_speed),
    ];
    for (name, value) in positive {
      if !value.is_finite() || value <= 0.0 {
        return Err(PlayError::InvalidConfig(format!(
          "{name} must be positive, got {value}"
        )));
      }
    }

    for (name, value) in [
      ("pitch.line_width", pitch.line_width),
      ("collision_radius", self.collision_radius),
    ] {
      if !value.is_finite() || value < 0.0 {
        return Err(PlayError::InvalidConfig(format!(
          "{name} must be non-negative, got {value}"
        )));
      }
    }

    if self.team_size == 0 {
      return Err(PlayError::InvalidConfig(
        "team_size must be at least 1".to_string(),
      ));
    }

    if pitch.penalty_area_width > pitch.field_width
      || pitch.goal_area_width > pitch.penalty_area_width
    {
      return Err(PlayError::InvalidConfig(
        "penalty and goal areas must fit inside the field".to_string(),
      ));
    }

    self.pixel_scale()?;
    Ok(())
  }

  /// The largest whole number of pixels per meter that fits the field, its
  /// lines and both goal areas behind the goal lines into the window. Fails
  /// if that is less than one pixel per meter.
  pub fn pixel_scale(&self) -> Result<f64, PlayError> {
    let pitch = &self.pitch;
    let scale = ((self.window_width - 2.0 * pitch.line_width)
      / pitch.field_width)
      .min(
        (self.window_height - 4.0 * pitch.line_width)
          / (pitch.field_length + 2.0 * pitch.goal_area_length),
      )
      .floor();
    if !scale.is_finite() || scale < 1.0 {
      return Err(PlayError::InvalidConfig(format!(
        "a {}x{} window is too small for the pitch",
        self.window_width, self.window_height
      )));
    }
    Ok(scale)
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod test;
