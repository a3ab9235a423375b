use crate::core::Direction::*;
use crate::core::*;
use crate::state_graph::*;
use crate::test::test_util::MazeTestState;

// objects in the top row can only ever slide sideways, which keeps the state space tiny
const ONE_PUSH_FROM_WIN: &str = r#"
########
#-2-345#
#0-----#
########
"#;

#[test]
fn solve_finds_shortest_solution() {
    let game = MazeTestState::new(ONE_PUSH_FROM_WIN);
    let report = solve(&game.maze, DEFAULT_MAX_STATES);

    assert_eq!(report.solution, Some(vec![Up, Right]));
    assert_eq!(report.pushes, 1);
    assert!(!report.stats.truncated);
    assert!(report.stats.won_nodes >= 1);
}

#[test]
fn solution_replays_to_a_win() {
    let mut game = MazeTestState::new(r#"
xxxxxxx
x-----x
x-2-3-x
x---4-x
x0--5-x
xxxxxxx
"#);
    let report = solve(&game.maze, 20_000);
    let Some(moves) = report.solution else {
        panic!("expected a solution, explored: {}", report.stats);
    };

    game.assert_moves(&moves);
    assert!(game.maze.is_won());
}

#[test]
fn solve_reports_unsolvable_maze() {
    let game = MazeTestState::new(r#"
0#2#3
##4#5
"#);
    let report = solve(&game.maze, DEFAULT_MAX_STATES);

    assert_eq!(report.solution, None);
    assert_eq!(report.stats, ExploreStats { nodes: 1, edges: 0, won_nodes: 0, truncated: false });
}

#[test]
fn solve_stops_at_state_limit() {
    let game = MazeTestState::new(ONE_PUSH_FROM_WIN);
    let report = solve(&game.maze, 2);

    assert!(report.stats.truncated);
    assert_eq!(report.solution, None);
}

#[test]
fn won_states_have_no_outgoing_edges() {
    let game = MazeTestState::new("0-2345");
    let mut graph = StateGraph::new();
    let (start_id, stats) = explore(&mut graph, game.maze.clone(), DEFAULT_MAX_STATES);

    assert_eq!(stats, ExploreStats { nodes: 2, edges: 1, won_nodes: 1, truncated: false });
    assert_eq!(graph.edges[0].from, start_id);
    assert_eq!(graph.edges[0].direction, Right);
    assert_eq!(graph.edges[0].change, GameChangeType::PlayerMove);
    assert_eq!(shortest_solution(&graph, start_id).map(|p| p.len()), Some(1));
}

#[test]
fn populate_step_expands_each_node_once() {
    let game = MazeTestState::new("0--!234!5--");
    let mut graph = StateGraph::new();
    let start_id = graph.upsert_state(game.maze.clone());

    assert_eq!(populate_step(&mut graph), PopulateResult::Populated(start_id));
    assert_eq!(graph.metadata[&start_id].state, NodeState::Visited);

    let mut steps = 1;
    while let PopulateResult::Populated(_) = populate_step(&mut graph) {
        steps += 1;
    }
    assert_eq!(steps, graph.nodes.len());
    assert!(graph.metadata.values().all(|m| m.state == NodeState::Visited));
}

#[test]
fn upsert_returns_existing_id_for_equal_state() {
    let mut game = MazeTestState::new(ONE_PUSH_FROM_WIN);
    let mut graph = StateGraph::new();
    let first = graph.upsert_state(game.maze.clone());

    game.assert_moves(&[Right, Left]);
    let again = graph.upsert_state(game.maze.clone());

    assert_eq!(first, again);
    assert_eq!(graph.nodes.len(), 1);
}

#[test]
fn petgraph_mirrors_state_graph() {
    let game = MazeTestState::new(ONE_PUSH_FROM_WIN);
    let mut graph = StateGraph::new();
    explore(&mut graph, game.maze.clone(), DEFAULT_MAX_STATES);
    let (petgraph, node_map) = convert_to_petgraph(&graph);

    assert_eq!(petgraph.node_count(), graph.nodes.len());
    assert_eq!(petgraph.edge_count(), graph.edges.len());
    assert_eq!(node_map.len(), graph.nodes.len());
}

#[test]
fn next_move_gives_first_step_and_distance() {
    let game = MazeTestState::new(ONE_PUSH_FROM_WIN);

    assert_eq!(next_move(&game.maze, DEFAULT_MAX_STATES), Hint::Move(Up, 2));
}

#[test]
fn next_move_on_cut_off_search_is_not_reported_unsolvable() {
    let game = MazeTestState::new(ONE_PUSH_FROM_WIN);
    let hint = next_move(&game.maze, 2);

    assert_eq!(hint, Hint::GaveUp(3));
    assert_eq!(hint.to_string(), "Hint: no solution within 3 states");
}

#[test]
fn next_move_on_exhausted_search_is_unsolvable() {
    let game = MazeTestState::new(r#"
0#2#3
##4#5
"#);
    let hint = next_move(&game.maze, DEFAULT_MAX_STATES);

    assert_eq!(hint, Hint::Unsolvable);
    assert_eq!(hint.to_string(), "Hint: no solution from here");
}

#[test]
fn next_move_after_win_has_nothing_to_suggest() {
    let mut game = MazeTestState::new(ONE_PUSH_FROM_WIN);
    game.assert_moves(&[Up, Right]);

    assert_eq!(next_move(&game.maze, DEFAULT_MAX_STATES), Hint::AlreadyWon);
}
