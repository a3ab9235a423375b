use tracing::{debug, info};

use crate::core::{Direction, MazeModel, MoveResult};
use crate::state_graph::models::{Edge, ExploreStats, NodeState, PopulateResult, StateGraph};

pub fn populate_node(graph: &mut StateGraph, from_id: usize) {
    let Some(from_state) = graph.get_state(from_id) else {
        return;
    };
    let from_state = from_state.clone();

    for direction in Direction::ALL {
        let mut next = from_state.clone();
        if let MoveResult::Moved { change, .. } = next.attempt_move(direction) {
            let to = graph.upsert_state(next);
            graph.add_edge(Edge { from: from_id, to, direction, change });
        }
    }

    graph.get_node_meta_mut(from_id).state = NodeState::Visited;
}

/// Expands the oldest unvisited node, so the graph grows breadth-first.
pub fn populate_step(graph: &mut StateGraph) -> PopulateResult {
    while let Some(node_id) = graph.frontier.pop_front() {
        if graph.metadata.get(&node_id).is_some_and(|m| m.state == NodeState::Visited) {
            continue;
        }
        populate_node(graph, node_id);
        return PopulateResult::Populated(node_id);
    }
    PopulateResult::AllVisited
}

/// Adds `start` to the graph and expands reachable states until none are left
/// or the graph holds `max_states` nodes.
pub fn explore(graph: &mut StateGraph, start: MazeModel, max_states: usize) -> (usize, ExploreStats) {
    let start_id = graph.upsert_state(start);
    let mut truncated = false;
    let mut expanded = 0usize;

    loop {
        if graph.nodes.len() >= max_states {
            truncated = !graph.frontier.is_empty();
            break;
        }
        let PopulateResult::Populated(_) = populate_step(graph) else {
            break;
        };
        expanded += 1;
        if expanded % 10_000 == 0 {
            debug!(expanded, nodes = graph.nodes.len(), "exploring states");
        }
    }

    let stats = ExploreStats {
        nodes: graph.nodes.len(),
        edges: graph.edges.len(),
        won_nodes: graph.won_nodes().count(),
        truncated,
    };
    info!(nodes = stats.nodes, edges = stats.edges, won = stats.won_nodes, truncated, "exploration finished");
    (start_id, stats)
}
