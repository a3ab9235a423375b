use crate::core::{GameChangeType, MazeModel};

pub struct GameRenderState<'a> {
    pub game: &'a MazeModel,
    pub won: bool,
    pub error: Option<String>,
    pub last_change: Option<GameChangeType>,
    pub hint: Option<String>,
}
