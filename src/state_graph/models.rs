use std::collections::{HashMap, VecDeque};
use std::fmt;

use crate::core::{Direction, GameChangeType, MazeModel};

pub struct StateGraph {
    // map from maze state to node id
    pub nodes: bimap::BiMap<MazeModel, usize>,
    pub metadata: HashMap<usize, NodeMeta>,
    pub edges: Vec<Edge>,
    pub(super) frontier: VecDeque<usize>,
}

#[derive(Default, Clone)]
pub struct NodeMeta {
    pub state: NodeState,
    pub won: bool,
}

#[derive(Eq, PartialEq, Default, Clone, Copy, Debug)]
pub enum NodeState {
    #[default]
    Unvisited,
    Visited,
}

#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub change: GameChangeType,
}

#[derive(Debug, PartialEq, Eq)]
pub enum PopulateResult {
    AllVisited,
    Populated(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExploreStats {
    pub nodes: usize,
    pub edges: usize,
    pub won_nodes: usize,
    /// The node cap was hit before every reachable state was expanded.
    pub truncated: bool,
}

impl fmt::Display for ExploreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph has {} nodes, {} edges, {} winning nodes.",
            self.nodes, self.edges, self.won_nodes
        )?;
        if self.truncated {
            write!(f, " Search stopped at the state limit.")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub stats: ExploreStats,
    /// Shortest move sequence to a won state, if one was found.
    pub solution: Option<Vec<Direction>>,
    /// How many moves of the solution push an object.
    pub pushes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// First move of a shortest solution and how many moves the whole solution takes.
    Move(Direction, usize),
    AlreadyWon,
    /// Every reachable state was explored and none of them wins.
    Unsolvable,
    /// The search stopped after this many states without finding a win.
    GaveUp(usize),
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Move(direction, moves) => write!(f, "Hint: {:?} ({} moves to win)", direction, moves),
            Hint::AlreadyWon => write!(f, "Hint: already won"),
            Hint::Unsolvable => write!(f, "Hint: no solution from here"),
            Hint::GaveUp(nodes) => write!(f, "Hint: no solution within {} states", nodes),
        }
    }
}
