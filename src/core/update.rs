use tracing::{debug, info, trace};

use crate::core::Cell::{Empty, Floor, Goal, Object, Player};
use crate::core::{BlockReason, Direction, GameChangeType, GameState, MazeModel, MoveResult};

impl MazeModel {
    /// Moves the player one step, pushing an object ahead if there is one.
    ///
    /// Blocked moves leave the maze untouched. Once the game is won every move is refused.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveResult {
        if self.state == GameState::Won {
            return MoveResult::GameOver;
        }

        let dir = direction.offset();
        let next = self.player + dir;
        let Some(&dest) = self.grid.get(&next) else {
            return blocked(direction, BlockReason::OutOfBounds);
        };

        let change = match dest {
            Floor | Player | Goal => GameChangeType::PlayerMove,
            Object(object) => {
                let beyond_pos = next + dir;
                let Some(&beyond) = self.grid.get(&beyond_pos) else {
                    return blocked(direction, BlockReason::PushOutOfBounds);
                };
                // Filler can take an object even though the player can never walk onto it.
                if !(beyond == Floor || beyond == Empty) {
                    return blocked(direction, BlockReason::PushBlocked);
                }
                self.grid[&beyond_pos] = Object(object);
                debug!(%object, from = %next, to = %beyond_pos, "pushed object");
                GameChangeType::PlayerAndObjectMove(object)
            }
            _ => return blocked(direction, BlockReason::Wall),
        };

        let previous = self.player;
        self.grid[&previous] = Floor;
        self.grid[&next] = Player;
        self.player = next;
        debug!(?direction, from = %previous, to = %next, "player moved");

        let won = self.check_win();
        if won {
            self.state = GameState::Won;
            info!("objects chained, game won");
        }
        MoveResult::Moved { change, won }
    }
}

fn blocked(direction: Direction, reason: BlockReason) -> MoveResult {
    trace!(?direction, %reason, "move blocked");
    MoveResult::Blocked(reason)
}
