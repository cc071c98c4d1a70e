use glam::DVec2;
use tracing::debug;

use crate::{
  common::{distance, Line, Point, TOLERANCE},
  PlayError,
};

/// Where the ball is in its journey along the chosen path.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MotionState {
  /// With the kicker, before the first tick.
  AtStart,
  /// Travelling from waypoint `segment` to waypoint `segment + 1`.
  Moving { segment: usize },
  /// Just reached waypoint `segment + 1`.
  ArrivedAtWaypoint { segment: usize },
  /// Reached the goal line. Nothing moves anymore.
  Done,
}

impl MotionState {
  /// A stable name for the state, for renderers.
  pub fn tag(&self) -> &'static str {
    match self {
      MotionState::AtStart => "AT_START",
      MotionState::Moving { .. } => "MOVING",
      MotionState::ArrivedAtWaypoint { .. } => "ARRIVED_AT_WAYPOINT",
      MotionState::Done => "DONE",
    }
  }
}

/// Input observed by the driver since the previous tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
  /// Stop playback immediately.
  Quit,
}

/// The only mutable part of playback: the state, the ball, and the length of
/// the segments already completed.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BallCursor {
  pub state: MotionState,
  pub ball: Point,
  pub completed_cost: f64,
}

/// What a single tick produced, for the renderer.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TickReport {
  /// 1 for the first tick.
  pub tick: u64,
  pub ball: Point,
  pub state: MotionState,
  /// The index of the active segment, or of the last one once done.
  pub segment: usize,
  /// The distance the ball has travelled so far.
  pub running_cost: f64,
  /// The waypoint index the ball reached during this tick, if any.
  pub reached_waypoint: Option<usize>,
}

#[derive(Clone, Copy, Debug)]
struct Segment {
  start: Point,
  end: Point,
  length: f64,
  // None for zero-length segments.
  line: Option<Line>,
}

/// Moves a ball along a fixed list of waypoints at constant speed, one tick at
/// a time.
#[derive(Clone, Debug)]
pub struct BallSimulator {
  segments: Vec<Segment>,
  speed: f64,
  cursor: BallCursor,
  ticks: u64,
}

impl BallSimulator {
  /// Creates a simulator for `waypoints`, covering `speed` distance units per
  /// tick. At least two waypoints are required, and `speed` must be positive.
  pub fn new(waypoints: &[Point], speed: f64) -> Result<BallSimulator, PlayError> {
    if waypoints.len() < 2 {
      return Err(PlayError::InvalidInput(format!(
        "playback needs at least two waypoints, got {}",
        waypoints.len()
      )));
    }
    if !speed.is_finite() || speed <= 0.0 {
      return Err(PlayError::InvalidInput(format!(
        "ball speed must be positive and finite, got {speed}"
      )));
    }

    let segments = waypoints
      .windows(2)
      .map(|pair| Segment {
        start: pair[0],
        end: pair[1],
        length: distance(pair[0], pair[1]),
        line: Line::through(pair[0], pair[1]).ok(),
      })
      .collect();

    Ok(BallSimulator {
      segments,
      speed,
      cursor: BallCursor {
        state: MotionState::AtStart,
        ball: waypoints[0],
        completed_cost: 0.0,
      },
      ticks: 0,
    })
  }

  pub fn cursor(&self) -> BallCursor {
    self.cursor
  }

  pub fn speed(&self) -> f64 {
    self.speed
  }

  pub fn is_done(&self) -> bool {
    self.cursor.state == MotionState::Done
  }

  /// The distance travelled so far by the ball described by `cursor`.
  pub fn running_cost(&self, cursor: BallCursor) -> f64 {
    match cursor.state {
      MotionState::Moving { segment } => {
        cursor.completed_cost + distance(self.segments[segment].start, cursor.ball)
      }
      _ => cursor.completed_cost,
    }
  }

  /// Advances playback by one tick, unless `events` asks to quit, in which case
  /// nothing changes and None is returned.
  pub fn tick(&mut self, events: &[InputEvent]) -> Option<TickReport> {
    if events.contains(&InputEvent::Quit) {
      debug!(tick = self.ticks, "playback cancelled");
      return None;
    }

    let (cursor, reached_waypoint) = self.advance(self.cursor);
    if cursor.state != self.cursor.state {
      debug!(from = ?self.cursor.state, to = ?cursor.state, "ball state changed");
    }
    self.cursor = cursor;
    self.ticks += 1;

    Some(TickReport {
      tick: self.ticks,
      ball: cursor.ball,
      state: cursor.state,
      segment: match cursor.state {
        MotionState::AtStart => 0,
        MotionState::Moving { segment }
        | MotionState::ArrivedAtWaypoint { segment } => segment,
        MotionState::Done => self.segments.len() - 1,
      },
      running_cost: self.running_cost(cursor),
      reached_waypoint,
    })
  }

  /// One tick worth of transitions, starting from `cursor`. Exactly one
  /// movement step is taken; the transient states on either side of it
  /// (`AtStart` and `ArrivedAtWaypoint`) are passed through in the same tick.
  /// Also returns the index of the waypoint reached, if one was.
  pub fn advance(&self, mut cursor: BallCursor) -> (BallCursor, Option<usize>) {
    let mut moved = false;
    let mut reached_waypoint = None;
    loop {
      match cursor.state {
        MotionState::Done => break,
        MotionState::Moving { .. } if moved => break,
        MotionState::Moving { .. } => moved = true,
        MotionState::ArrivedAtWaypoint { segment } => {
          reached_waypoint = Some(segment + 1);
        }
        MotionState::AtStart => {}
      }
      cursor = self.transition(cursor);
    }
    (cursor, reached_waypoint)
  }

  /// Takes a single edge of the state machine.
  pub fn transition(&self, cursor: BallCursor) -> BallCursor {
    match cursor.state {
      MotionState::AtStart => BallCursor {
        state: MotionState::Moving { segment: 0 },
        ball: self.segments[0].start,
        ..cursor
      },
      MotionState::Moving { segment } => self.step(cursor, segment),
      MotionState::ArrivedAtWaypoint { segment } => BallCursor {
        state: if segment + 1 == self.segments.len() {
          MotionState::Done
        } else {
          MotionState::Moving { segment: segment + 1 }
        },
        completed_cost: cursor.completed_cost + self.segments[segment].length,
        ..cursor
      },
      MotionState::Done => cursor,
    }
  }

  /// Moves the ball `speed` units along segment `index`, snapping it to the
  /// segment's end if it would reach or pass it.
  fn step(&self, cursor: BallCursor, index: usize) -> BallCursor {
    let segment = &self.segments[index];
    let arrived = BallCursor {
      state: MotionState::ArrivedAtWaypoint { segment: index },
      ball: segment.end,
      ..cursor
    };

    let Some(line) = segment.line else {
      return arrived;
    };

    let ball = cursor.ball.as_vec();
    let end = segment.end.as_vec();
    let adjacent = (end.x - ball.x).abs();

    let next = if adjacent <= TOLERANCE {
      // Straight up or down the pitch: there is no x ratio to scale by.
      let opposite = (end.y - ball.y).abs();
      if opposite - self.speed <= TOLERANCE {
        return arrived;
      }
      DVec2::new(ball.x, ball.y + self.speed * (end.y - ball.y).signum())
    } else {
      let segment_adjacent = (end.x - segment.start.x()).abs();
      let step = segment_adjacent / segment.length * self.speed;
      if adjacent - step <= TOLERANCE {
        return arrived;
      }
      let x = ball.x + step * (end.x - ball.x).signum();
      let y = if (end.y - ball.y).abs() <= TOLERANCE {
        ball.y
      } else {
        line.y_at(x).unwrap_or(ball.y)
      };
      DVec2::new(x, y)
    };

    let ball = Point::from_vec(next);
    debug_assert!(
      line.distance_to(ball) <= TOLERANCE * segment.length.max(1.0),
      "ball left segment {index}"
    );
    BallCursor { ball, ..cursor }
  }
}

#[cfg(test)]
#[path = "simulator_test.rs"]
mod test;
