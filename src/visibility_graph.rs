use tracing::{debug, warn};

use crate::{
  common::{distance, Point},
  obstacles::{line_of_sight_clear, Obstacle},
  PlayError,
};

/// Index of a node within a [`VisibilityGraph`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(pub usize);

/// What a graph node stands for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeKind {
  Kicker,
  /// A teammate, by its index in the scenario's teammate list.
  Teammate(usize),
  /// A scoring point on the goal line.
  Goal,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GraphNode {
  pub position: Point,
  pub kind: NodeKind,
}

impl GraphNode {
  /// Terminal nodes end a scoring path. Only goal-line points are terminal.
  pub fn is_terminal(&self) -> bool {
    self.kind == NodeKind::Goal
  }
}

/// An unobstructed connection between two nodes. Player-to-player edges are
/// undirected; edges into the goal line are directed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Edge {
  pub from: NodeId,
  pub to: NodeId,
  pub directed: bool,
}

/// The graph of unobstructed passes and shots for one scenario. Built once and
/// never modified afterwards.
#[derive(Clone, Debug)]
pub struct VisibilityGraph {
  nodes: Vec<GraphNode>,
  edges: Vec<Edge>,
  // Outgoing neighbours of each node, in the order the edges were added.
  adjacency: Vec<Vec<NodeId>>,
}

impl VisibilityGraph {
  /// Builds the graph for a kicker, its teammates, the opponents to pass
  /// around, and the candidate scoring points on the goal line.
  ///
  /// The kicker is connected to every teammate in clear line of sight,
  /// teammates are connected to each other likewise, and each teammate gets at
  /// most one directed edge to the nearest goal point it can see.
  pub fn build(
    kicker: Point,
    teammates: &[Point],
    opponents: &[Obstacle],
    goal_points: &[Point],
  ) -> Result<VisibilityGraph, PlayError> {
    let mut graph =
      VisibilityGraph { nodes: Vec::new(), edges: Vec::new(), adjacency: Vec::new() };

    graph.insert_node(GraphNode { position: kicker, kind: NodeKind::Kicker })?;
    let teammate_ids = teammates
      .iter()
      .enumerate()
      .map(|(index, &position)| {
        graph.insert_node(GraphNode { position, kind: NodeKind::Teammate(index) })
      })
      .collect::<Result<Vec<NodeId>, PlayError>>()?;

    for (&teammate_id, &teammate) in teammate_ids.iter().zip(teammates) {
      if line_of_sight_clear(kicker, teammate, opponents)? {
        graph.add_edge(graph.kicker(), teammate_id, false);
      }
    }

    for i in 0..teammates.len() {
      for j in (i + 1)..teammates.len() {
        if line_of_sight_clear(teammates[i], teammates[j], opponents)? {
          graph.add_edge(teammate_ids[i], teammate_ids[j], false);
        }
      }
    }

    for (&teammate_id, &teammate) in teammate_ids.iter().zip(teammates) {
      let Some(goal) = graph.nearest_visible_goal(teammate, opponents, goal_points)?
      else {
        debug!(?teammate_id, "teammate has no clear shot at the goal line");
        continue;
      };

      // Teammates aiming at the same point share one terminal node.
      let goal_id = graph.find_node(goal).unwrap_or_else(|| {
        graph.push_node(GraphNode { position: goal, kind: NodeKind::Goal })
      });
      debug!(?teammate_id, ?goal_id, "teammate shoots at ({}, {})", goal.x(), goal.y());
      graph.add_edge(teammate_id, goal_id, true);
    }

    Ok(graph)
  }

  /// The node the ball starts at.
  pub fn kicker(&self) -> NodeId {
    NodeId(0)
  }

  pub fn node(&self, id: NodeId) -> &GraphNode {
    &self.nodes[id.0]
  }

  pub fn nodes(&self) -> &[GraphNode] {
    &self.nodes
  }

  pub fn edges(&self) -> &[Edge] {
    &self.edges
  }

  /// The nodes reachable from `id` over a single edge.
  pub fn neighbours(&self, id: NodeId) -> &[NodeId] {
    &self.adjacency[id.0]
  }

  pub fn terminal_count(&self) -> usize {
    self.nodes.iter().filter(|node| node.is_terminal()).count()
  }

  /// Whether a pass or shot may travel from `from` to `to`.
  pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
    self.adjacency[from.0].contains(&to)
  }

  /// Scans `goal_points` by increasing x and returns the nearest one with a
  /// clear line of sight from `shooter`. Equal distances keep the lower x.
  fn nearest_visible_goal(
    &self,
    shooter: Point,
    opponents: &[Obstacle],
    goal_points: &[Point],
  ) -> Result<Option<Point>, PlayError> {
    let mut candidates = goal_points.to_vec();
    candidates.sort_by(|a, b| a.x().total_cmp(&b.x()));

    let mut best: Option<(Point, f64)> = None;
    for candidate in candidates {
      if self.find_node(candidate).is_some_and(|id| !self.node(id).is_terminal())
      {
        warn!(
          "skipping goal point ({}, {}) that coincides with a player",
          candidate.x(),
          candidate.y()
        );
        continue;
      }

      let candidate_distance = distance(shooter, candidate);
      if best.is_some_and(|(_, best_distance)| candidate_distance >= best_distance)
      {
        continue;
      }
      if line_of_sight_clear(shooter, candidate, opponents)? {
        best = Some((candidate, candidate_distance));
      }
    }
    Ok(best.map(|(point, _)| point))
  }

  fn find_node(&self, position: Point) -> Option<NodeId> {
    self
      .nodes
      .iter()
      .position(|node| node.position.coincides_with(position))
      .map(NodeId)
  }

  /// Adds a player node, rejecting a position already taken by another node.
  fn insert_node(&mut self, node: GraphNode) -> Result<NodeId, PlayError> {
    if let Some(existing) = self.find_node(node.position) {
      return Err(PlayError::InvalidInput(format!(
        "{:?} at ({}, {}) coincides with {:?}",
        node.kind,
        node.position.x(),
        node.position.y(),
        self.node(existing).kind
      )));
    }
    Ok(self.push_node(node))
  }

  fn push_node(&mut self, node: GraphNode) -> NodeId {
    self.nodes.push(node);
    self.adjacency.push(Vec::new());
    NodeId(self.nodes.len() - 1)
  }

  fn add_edge(&mut self, from: NodeId, to: NodeId, directed: bool) {
    assert_ne!(from, to, "self-loops are not allowed");
    debug!(?from, ?to, directed, "adding edge");

    self.edges.push(Edge { from, to, directed });
    self.adjacency[from.0].push(to);
    if !directed {
      self.adjacency[to.0].push(from);
    }
  }
}

#[cfg(test)]
#[path = "visibility_graph_test.rs"]
mod test;
