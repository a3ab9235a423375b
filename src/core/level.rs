use thiserror::Error;

use crate::core::bounded_grid::BoundedGrid;
use crate::core::consts::LEVEL_ROW_DELIMITER;
use crate::core::models::{Cell, GameState, MazeModel, Pushable, Vec2};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("level has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("unknown cell code {code:?} at row {row}, column {col}")]
    UnknownCode { row: usize, col: usize, code: char },
    #[error("level has no player start")]
    MissingPlayer,
    #[error("level has a second player start at {second}, first one is at {first}")]
    DuplicatePlayer { first: Vec2, second: Vec2 },
    #[error("level has no {0}")]
    MissingObject(Pushable),
    #[error("level has more than one {0}")]
    DuplicateObject(Pushable),
}

/// Builds a maze from level text.
///
/// Rows are separated by `!`; newlines are accepted too so levels can be written as
/// multi-line literals. Every row must have the same width, every code must be known,
/// and the player and each of the four objects must appear exactly once.
pub fn parse_level(s: &str) -> Result<MazeModel, LevelError> {
    let text = s.trim();
    if text.is_empty() {
        return Err(LevelError::Empty);
    }

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut player: Option<Vec2> = None;
    let mut objects = [0usize; 4];
    let mut width = None;

    for (i, line) in text.split([LEVEL_ROW_DELIMITER, '\n']).enumerate() {
        let line = line.trim_end_matches('\r');
        let expected = *width.get_or_insert(line.chars().count());
        let found = line.chars().count();
        if found != expected || expected == 0 {
            return Err(LevelError::RaggedRow { row: i, expected, found });
        }

        let mut row = Vec::with_capacity(found);
        for (j, code) in line.chars().enumerate() {
            let cell = Cell::from_code(code).ok_or(LevelError::UnknownCode { row: i, col: j, code })?;
            match cell {
                Cell::Player => {
                    let pos = Vec2::new(i as i32, j as i32);
                    if let Some(first) = player {
                        return Err(LevelError::DuplicatePlayer { first, second: pos });
                    }
                    player = Some(pos);
                }
                Cell::Object(object) => {
                    objects[object as usize] += 1;
                    if objects[object as usize] > 1 {
                        return Err(LevelError::DuplicateObject(object));
                    }
                }
                _ => {}
            }
            row.push(cell);
        }
        rows.push(row);
    }

    let player = player.ok_or(LevelError::MissingPlayer)?;
    if let Some(&missing) = Pushable::CHAIN.iter().find(|&&o| objects[o as usize] == 0) {
        return Err(LevelError::MissingObject(missing));
    }

    Ok(MazeModel {
        grid: BoundedGrid::from_rows(rows),
        player,
        state: GameState::InProgress,
    })
}

/// The grid written back in level codes, one string per row.
pub fn level_rows(maze: &MazeModel) -> Vec<String> {
    maze.grid
        .rows()
        .map(|row| row.iter().map(Cell::code).collect())
        .collect()
}

#[cfg(test)]
pub fn render_level(maze: &MazeModel) -> String {
    level_rows(maze).join("\n")
}
