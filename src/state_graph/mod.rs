mod graph;
mod models;
mod populate;
mod solve;

pub use solve::{next_move, solve};

#[cfg(test)]
pub use models::{ExploreStats, Hint, NodeState, PopulateResult, StateGraph};
#[cfg(test)]
pub use populate::{explore, populate_step};
#[cfg(test)]
pub use solve::{convert_to_petgraph, shortest_solution};
