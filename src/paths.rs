use tracing::{debug, info};

use crate::{
  common::{distance, Point},
  visibility_graph::{GraphNode, NodeId, NodeKind, VisibilityGraph},
};

/// A sequence of passes ending in a shot: starts at the kicker, ends on the
/// goal line, and never visits the same node twice.
#[derive(Clone, PartialEq, Debug)]
pub struct Path {
  nodes: Vec<GraphNode>,
}

impl Path {
  pub fn new(nodes: Vec<GraphNode>) -> Path {
    Path { nodes }
  }

  pub fn nodes(&self) -> &[GraphNode] {
    &self.nodes
  }

  /// The positions the ball travels through, in order.
  pub fn waypoints(&self) -> Vec<Point> {
    self.nodes.iter().map(|node| node.position).collect()
  }

  /// The total distance the ball travels along this path.
  pub fn cost(&self) -> f64 {
    path_cost(&self.waypoints())
  }

  /// The teammate who takes the shot, i.e. the last player before the goal.
  pub fn assist(&self) -> Option<usize> {
    self.nodes.iter().rev().find_map(|node| match node.kind {
      NodeKind::Teammate(index) => Some(index),
      _ => None,
    })
  }

  /// Human readable form, e.g. `Kicker -> 2 -> 1 -> Goal`. Teammates are
  /// written by their 1-based ordinal.
  pub fn notation(&self) -> String {
    self
      .nodes
      .iter()
      .map(|node| match node.kind {
        NodeKind::Kicker => "Kicker".to_string(),
        NodeKind::Teammate(index) => (index + 1).to_string(),
        NodeKind::Goal => "Goal".to_string(),
      })
      .collect::<Vec<String>>()
      .join(" -> ")
  }
}

/// The sum of the distances between consecutive waypoints.
pub fn path_cost(waypoints: &[Point]) -> f64 {
  waypoints.windows(2).map(|pair| distance(pair[0], pair[1])).sum()
}

/// Finds every simple path from the kicker to a terminal node, in depth-first
/// discovery order. Each stack entry carries its own trail, and a node already
/// on the trail is never entered again.
pub fn enumerate_paths(graph: &VisibilityGraph) -> Vec<Path> {
  let mut paths = Vec::new();
  let mut stack: Vec<Vec<NodeId>> = vec![vec![graph.kicker()]];

  while let Some(trail) = stack.pop() {
    let Some(&current) = trail.last() else {
      continue;
    };

    if graph.node(current).is_terminal() {
      paths.push(Path::new(trail.iter().map(|&id| *graph.node(id)).collect()));
      continue;
    }

    // Reversed so the first neighbour is explored first.
    for &next in graph.neighbours(current).iter().rev() {
      if trail.contains(&next) {
        continue;
      }
      let mut extended = trail.clone();
      extended.push(next);
      stack.push(extended);
    }
  }

  debug!(count = paths.len(), "enumerated scoring paths");
  paths
}

/// A path together with its cost.
#[derive(Clone, PartialEq, Debug)]
pub struct RankedPath {
  pub path: Path,
  pub cost: f64,
}

impl RankedPath {
  pub fn notation(&self) -> String {
    self.path.notation()
  }

  pub fn assist(&self) -> Option<usize> {
    self.path.assist()
  }
}

/// Orders `paths` from cheapest to most expensive. Paths of equal cost keep
/// their original order.
pub fn rank_paths(paths: Vec<Path>) -> Vec<RankedPath> {
  let mut ranked = paths
    .into_iter()
    .map(|path| {
      let cost = path.cost();
      RankedPath { path, cost }
    })
    .collect::<Vec<RankedPath>>();
  ranked.sort_by(|a, b| a.cost.total_cmp(&b.cost));

  if let Some(best) = ranked.first() {
    info!(cost = best.cost, "chosen play: {}", best.notation());
  }
  ranked
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod test;
