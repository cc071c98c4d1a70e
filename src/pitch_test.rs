use rand::{rngs::StdRng, SeedableRng};

use crate::{
  common::Point,
  config::PlayConfig,
  pitch::{Pitch, Span},
  PlayError,
};

fn contains(span: Span, value: f64) -> bool {
  span.min <= value && value <= span.max
}

#[test]
fn lays_out_default_pitch() {
  let pitch = Pitch::new(&PlayConfig::default()).unwrap();

  assert_eq!(pitch.scale, 9.0);
  assert_eq!(pitch.field_y, Span { min: 67.5, max: 1012.5 });
  assert_eq!(pitch.upper_half_y, Span { min: 67.5, max: 540.0 });
  assert_eq!(pitch.penalty_area_y, Span { min: 67.5, max: 216.0 });
  assert_eq!(pitch.goal_line_y, 62.5);
  assert_eq!(pitch.center_spot, Point::new(960.0, 540.0).unwrap());
  assert!((pitch.goal_area_x.min - 877.56).abs() < 1e-9);
  assert!((pitch.goal_area_x.max - 1042.44).abs() < 1e-9);
  assert!((pitch.center_circle_radius - 82.35).abs() < 1e-9);
}

#[test]
fn samples_every_pixel_of_the_goal_mouth() {
  let pitch = Pitch::new(&PlayConfig::default()).unwrap();
  let samples = pitch.goal_line_samples();

  assert_eq!(samples.len(), 165);
  assert_eq!(samples[0], Point::new(878.0, 62.5).unwrap());
  assert_eq!(samples[164], Point::new(1042.0, 62.5).unwrap());
  assert!(samples.windows(2).all(|pair| pair[1].x() - pair[0].x() == 1.0));
}

#[test]
fn tiny_window_is_rejected() {
  let config =
    PlayConfig { window_width: 50.0, window_height: 50.0, ..Default::default() };
  assert!(matches!(Pitch::new(&config), Err(PlayError::InvalidConfig(_))));
}

#[test]
fn invalid_pitch_is_rejected_before_layout() {
  let mut config = PlayConfig::default();
  config.pitch.penalty_area_width = -10.0;
  assert!(matches!(Pitch::new(&config), Err(PlayError::InvalidConfig(_))));

  config.pitch.penalty_area_width = f64::NAN;
  assert!(matches!(Pitch::new(&config), Err(PlayError::InvalidConfig(_))));

  let config = PlayConfig { team_size: 0, ..Default::default() };
  assert!(matches!(Pitch::new(&config), Err(PlayError::InvalidConfig(_))));
}

#[test]
fn random_scenario_places_players_in_their_areas() {
  let config = PlayConfig::default();
  let pitch = Pitch::new(&config).unwrap();
  let mut rng = StdRng::seed_from_u64(7);

  let scenario = pitch
    .random_scenario(&mut rng, config.team_size, config.collision_radius)
    .unwrap();

  assert_eq!(scenario.kicker(), pitch.center_spot);
  assert_eq!(scenario.teammates().len(), 3);
  assert_eq!(scenario.opponents().len(), 3);
  assert_eq!(scenario.goal_points(), pitch.goal_line_samples().as_slice());

  let opponents =
    scenario.opponents().iter().map(|opponent| opponent.center).collect::<Vec<_>>();
  for team in [scenario.teammates().to_vec(), opponents] {
    for player in &team[..2] {
      assert!(contains(pitch.field_x, player.x()));
      assert!(contains(pitch.upper_half_y, player.y()));
    }
    assert!(contains(pitch.penalty_area_x, team[2].x()));
    assert!(contains(pitch.penalty_area_y, team[2].y()));
  }
  assert!(scenario.opponents().iter().all(|opponent| opponent.radius == 15.0));

  // Whatever the layout, planning succeeds.
  scenario.plan().unwrap();
}

#[test]
fn same_seed_same_scenario() {
  let config = PlayConfig::default();
  let pitch = Pitch::new(&config).unwrap();

  let first = pitch
    .random_scenario(&mut StdRng::seed_from_u64(99), 3, 15.0)
    .unwrap();
  let second = pitch
    .random_scenario(&mut StdRng::seed_from_u64(99), 3, 15.0)
    .unwrap();
  assert_eq!(first, second);
}
