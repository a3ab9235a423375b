use crate::core::{Cell, GameState, MazeModel, Pushable, Vec2};

impl MazeModel {
    pub fn rows(&self) -> i32 {
        self.grid.size().extent.i
    }

    pub fn cols(&self) -> i32 {
        self.grid.size().extent.j
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    /// Cell at `row`, `col`, or `None` outside the grid.
    pub fn get_cell(&self, row: i32, col: i32) -> Option<Cell> {
        self.grid.get(&Vec2::new(row, col)).copied()
    }

    /// Position of `object` if it appears exactly once on the grid.
    pub fn find(&self, object: Pushable) -> Option<Vec2> {
        let mut found = self
            .grid
            .iter()
            .filter(|&(_, &c)| c == Cell::Object(object))
            .map(|(pos, _)| pos);
        match (found.next(), found.next()) {
            (Some(pos), None) => Some(pos),
            _ => None,
        }
    }

    /// True when shovel, bean, fertilizer and water each sit orthogonally next to the
    /// following one in that order. A missing or duplicated object is never a win.
    pub fn check_win(&self) -> bool {
        let mut chain = Vec::with_capacity(Pushable::CHAIN.len());
        for object in Pushable::CHAIN {
            let Some(pos) = self.find(object) else {
                return false;
            };
            chain.push(pos);
        }
        chain.windows(2).all(|pair| pair[0].manhattan(&pair[1]) == 1)
    }
}
