use std::collections::{HashMap, HashSet};

use petgraph::Directed;
use petgraph::graph::NodeIndex;

use crate::core::{Direction, GameChangeType, MazeModel};
use crate::state_graph::models::{Edge, Hint, SolveReport, StateGraph};
use crate::state_graph::populate::explore;

pub fn convert_to_petgraph(
    graph: &StateGraph,
) -> (petgraph::Graph<usize, Edge, Directed>, HashMap<usize, NodeIndex>) {
    let mut petgraph = petgraph::Graph::new();

    let node_map: HashMap<usize, NodeIndex> = graph
        .nodes
        .right_values()
        .map(|&id| (id, petgraph.add_node(id)))
        .collect();

    for edge in &graph.edges {
        if let (Some(&from_index), Some(&to_index)) = (node_map.get(&edge.from), node_map.get(&edge.to)) {
            petgraph.add_edge(from_index, to_index, *edge);
        }
    }

    (petgraph, node_map)
}

/// Fewest moves from `start_id` to any winning state in the graph.
pub fn shortest_solution(graph: &StateGraph, start_id: usize) -> Option<Vec<Edge>> {
    let (petgraph, node_map) = convert_to_petgraph(graph);
    let start = *node_map.get(&start_id)?;
    let won: HashSet<usize> = graph.won_nodes().collect();

    let (_cost, path) = petgraph::algo::astar(
        &petgraph,
        start,
        |n| won.contains(&petgraph[n]),
        |_| 1usize,
        |_| 0usize,
    )?;

    path.windows(2)
        .map(|pair| {
            let edge = petgraph.find_edge(pair[0], pair[1])?;
            Some(petgraph[edge])
        })
        .collect()
}

/// Explores every state reachable from `maze` (up to `max_states`) and finds the
/// shortest winning move sequence.
pub fn solve(maze: &MazeModel, max_states: usize) -> SolveReport {
    let mut graph = StateGraph::new();
    let (start_id, stats) = explore(&mut graph, maze.clone(), max_states);
    let path = shortest_solution(&graph, start_id);
    SolveReport {
        stats,
        pushes: path.as_ref().map_or(0, |edges| {
            edges
                .iter()
                .filter(|e| matches!(e.change, GameChangeType::PlayerAndObjectMove(_)))
                .count()
        }),
        solution: path.map(|edges| edges.iter().map(|e| e.direction).collect()),
    }
}

/// Next step towards a win from `maze`.
pub fn next_move(maze: &MazeModel, max_states: usize) -> Hint {
    let report = solve(maze, max_states);
    match report.solution {
        Some(moves) => match moves.first() {
            Some(&first) => Hint::Move(first, moves.len()),
            None => Hint::AlreadyWon,
        },
        None if report.stats.truncated => Hint::GaveUp(report.stats.nodes),
        None => Hint::Unsolvable,
    }
}
