mod bounded_grid;
mod bounds;
mod consts;
mod level;
mod model_helpers;
mod models;
mod update;

pub use consts::*;
pub use level::{level_rows, parse_level, LevelError};
#[cfg(test)]
pub use level::render_level;
pub use models::{
    BlockReason, Cell, Direction, GameChangeType, GameState, MazeModel, MoveResult, Pushable,
    UserAction, Vec2,
};
