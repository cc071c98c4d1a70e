#![doc = include_str!("../README.md")]

mod common;
mod config;
mod error;
mod obstacles;
mod paths;
mod pitch;
mod playback;
mod simulator;
mod visibility_graph;

use tracing::info;

pub use common::{
  distance, foot_of_perpendicular, is_between, line_through, Line, Point,
  TOLERANCE,
};
pub use config::{PitchConfig, PlayConfig};
pub use error::PlayError;
pub use glam::DVec2;
pub use obstacles::{line_of_sight_clear, Obstacle};
pub use paths::{enumerate_paths, path_cost, rank_paths, Path, RankedPath};
pub use pitch::{Pitch, Span};
pub use playback::{
  run_playback, EventSource, Frame, FrameScheduler, PlaybackSummary, Renderer,
};
pub use simulator::{
  BallCursor, BallSimulator, InputEvent, MotionState, TickReport,
};
pub use visibility_graph::{Edge, GraphNode, NodeId, NodeKind, VisibilityGraph};

/// A fixed snapshot of a build-up: who has the ball, who can receive it, who
/// is in the way, and where a shot may land.
#[derive(Clone, PartialEq, Debug)]
pub struct Scenario {
  kicker: Point,
  teammates: Vec<Point>,
  opponents: Vec<Obstacle>,
  goal_points: Vec<Point>,
}

impl Scenario {
  /// Creates a scenario. Fails if an opponent's radius is invalid or if two
  /// players (the kicker included) stand on the same spot.
  pub fn new(
    kicker: Point,
    teammates: Vec<Point>,
    opponents: Vec<Obstacle>,
    goal_points: Vec<Point>,
  ) -> Result<Scenario, PlayError> {
    for opponent in &opponents {
      Obstacle::new(opponent.center, opponent.radius)?;
    }

    let players = std::iter::once(&kicker).chain(&teammates).collect::<Vec<_>>();
    for (i, a) in players.iter().enumerate() {
      if players[(i + 1)..].iter().any(|b| a.coincides_with(**b)) {
        return Err(PlayError::InvalidInput(format!(
          "two players share the position ({}, {})",
          a.x(),
          a.y()
        )));
      }
    }

    Ok(Scenario { kicker, teammates, opponents, goal_points })
  }

  pub fn kicker(&self) -> Point {
    self.kicker
  }

  pub fn teammates(&self) -> &[Point] {
    &self.teammates
  }

  pub fn opponents(&self) -> &[Obstacle] {
    &self.opponents
  }

  pub fn goal_points(&self) -> &[Point] {
    &self.goal_points
  }

  /// Builds the visibility graph, finds every scoring path and ranks them.
  pub fn plan(&self) -> Result<Plan, PlayError> {
    let graph = VisibilityGraph::build(
      self.kicker,
      &self.teammates,
      &self.opponents,
      &self.goal_points,
    )?;
    let ranked_paths = rank_paths(enumerate_paths(&graph));
    if ranked_paths.is_empty() {
      info!("no scoring option");
    }
    Ok(Plan { graph, ranked_paths })
  }
}

/// The result of planning a scenario. Immutable once built.
#[derive(Clone, Debug)]
pub struct Plan {
  graph: VisibilityGraph,
  ranked_paths: Vec<RankedPath>,
}

/// Whether a scenario has a play worth animating.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PlayOutcome<'a> {
  /// The cheapest scoring path.
  Scoring(&'a RankedPath),
  /// No teammate can be reached who has a clear shot.
  NoScoringOption,
}

impl Plan {
  pub fn graph(&self) -> &VisibilityGraph {
    &self.graph
  }

  /// Every scoring path, cheapest first.
  pub fn ranked_paths(&self) -> &[RankedPath] {
    &self.ranked_paths
  }

  pub fn best(&self) -> Option<&RankedPath> {
    self.ranked_paths.first()
  }

  pub fn outcome(&self) -> PlayOutcome<'_> {
    match self.best() {
      Some(best) => PlayOutcome::Scoring(best),
      None => PlayOutcome::NoScoringOption,
    }
  }

  /// A simulator that plays back the best path at `speed`, or None if there
  /// is nothing to play back.
  pub fn simulator(
    &self,
    speed: f64,
  ) -> Result<Option<BallSimulator>, PlayError> {
    self
      .best()
      .map(|best| BallSimulator::new(&best.path.waypoints(), speed))
      .transpose()
  }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
