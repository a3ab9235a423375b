use std::collections::{HashMap, VecDeque};

use crate::core::MazeModel;
use crate::state_graph::models::{Edge, NodeMeta, NodeState, StateGraph};

impl StateGraph {
    pub fn new() -> Self {
        StateGraph {
            nodes: bimap::BiMap::new(),
            metadata: HashMap::new(),
            edges: Vec::new(),
            frontier: VecDeque::new(),
        }
    }

    /// Returns the id of `state`, adding it as an unvisited node if it is new.
    pub fn upsert_state(&mut self, state: MazeModel) -> usize {
        if let Some(&id) = self.nodes.get_by_left(&state) {
            return id;
        }
        let id = self.nodes.len();
        let won = state.is_won();
        self.nodes.insert(state, id);
        self.metadata.insert(id, NodeMeta { state: NodeState::Unvisited, won });
        self.frontier.push_back(id);
        id
    }

    pub fn get_state(&self, id: usize) -> Option<&MazeModel> {
        self.nodes.get_by_right(&id)
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn get_node_meta_mut(&mut self, node_id: usize) -> &mut NodeMeta {
        self.metadata.entry(node_id).or_default()
    }

    pub fn won_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.metadata.iter().filter(|(_, m)| m.won).map(|(&id, _)| id)
    }
}

impl Default for StateGraph {
    fn default() -> Self {
        Self::new()
    }
}
