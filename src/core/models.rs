use std::fmt;

use crate::core::bounded_grid::BoundedGrid;

/// One of the four objects the player can push around the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pushable {
    Shovel,
    Bean,
    Fertilizer,
    Water,
}

impl Pushable {
    /// The order the objects must be chained in for the game to be won.
    pub const CHAIN: [Pushable; 4] = [
        Pushable::Shovel,
        Pushable::Bean,
        Pushable::Fertilizer,
        Pushable::Water,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pushable::Shovel => "shovel",
            Pushable::Bean => "bean",
            Pushable::Fertilizer => "fertilizer",
            Pushable::Water => "water",
        }
    }
}

impl fmt::Display for Pushable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    /// Filler outside the maze. The player cannot enter it, but objects can be pushed onto it.
    Empty,
    Floor,
    Player,
    Object(Pushable),
    Goal,
}

impl Cell {
    pub fn from_code(code: char) -> Option<Cell> {
        Some(match code {
            '#' => Cell::Wall,
            '-' => Cell::Floor,
            '0' => Cell::Player,
            '2' => Cell::Object(Pushable::Shovel),
            '3' => Cell::Object(Pushable::Bean),
            '4' => Cell::Object(Pushable::Fertilizer),
            '5' => Cell::Object(Pushable::Water),
            '7' => Cell::Goal,
            'x' => Cell::Empty,
            _ => return None,
        })
    }

    pub fn code(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Empty => 'x',
            Cell::Floor => '-',
            Cell::Player => '0',
            Cell::Object(Pushable::Shovel) => '2',
            Cell::Object(Pushable::Bean) => '3',
            Cell::Object(Pushable::Fertilizer) => '4',
            Cell::Object(Pushable::Water) => '5',
            Cell::Goal => '7',
        }
    }

    /// Character used by the terminal renderer.
    pub fn glyph(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Empty => ' ',
            Cell::Floor => '.',
            Cell::Player => '@',
            Cell::Object(Pushable::Shovel) => 'S',
            Cell::Object(Pushable::Bean) => 'B',
            Cell::Object(Pushable::Fertilizer) => 'F',
            Cell::Object(Pushable::Water) => 'W',
            Cell::Goal => 'X',
        }
    }
}

/// A grid position: `i` is the row, `j` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Vec2 {
    pub const fn new(i: i32, j: i32) -> Vec2 {
        Vec2 { i, j }
    }

    pub fn manhattan(&self, other: &Vec2) -> i32 {
        (self.i - other.i).abs() + (self.j - other.j).abs()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn offset(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Hint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
}

/// The whole game: the grid of cells plus where the player currently stands.
///
/// The player position is kept alongside the grid so moves never have to search for it;
/// `grid[player]` is always `Cell::Player`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MazeModel {
    pub(crate) grid: BoundedGrid<Cell>,
    pub(crate) player: Vec2,
    pub(crate) state: GameState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndObjectMove(Pushable),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    OutOfBounds,
    Wall,
    PushOutOfBounds,
    PushBlocked,
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockReason::OutOfBounds => "Cannot move out of bounds",
            BlockReason::Wall => "Cannot walk there",
            BlockReason::PushOutOfBounds => "Cannot push object out of bounds",
            BlockReason::PushBlocked => "Cannot push object",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Moved { change: GameChangeType, won: bool },
    Blocked(BlockReason),
    GameOver,
}

impl MoveResult {
    pub fn moved(&self) -> bool {
        matches!(self, MoveResult::Moved { .. })
    }

    pub fn won(&self) -> bool {
        match self {
            MoveResult::Moved { won, .. } => *won,
            MoveResult::GameOver => true,
            MoveResult::Blocked(_) => false,
        }
    }
}
