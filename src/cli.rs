//! Non-interactive commands.

use tracing::{error, info};

use crate::core::{parse_level, LevelError, MazeModel, LEVEL};
use crate::export::get_json_data;
use crate::state_graph::solve;

/// The maze the game ships with.
pub fn builtin_maze() -> Result<MazeModel, LevelError> {
    parse_level(LEVEL).inspect_err(|err| error!(%err, "built-in level is invalid"))
}

/// Explore the maze and print the shortest winning sequence.
pub fn solve_maze(maze: &MazeModel, max_states: usize) -> Result<(), Box<dyn std::error::Error>> {
    info!(max_states, "solving");
    let start_time = std::time::Instant::now();
    let report = solve(maze, max_states);

    println!("{}", report.stats);
    println!("Explored in {:.2?}", start_time.elapsed());
    match report.solution {
        Some(moves) => {
            println!("Solution: {} moves, {} pushes", moves.len(), report.pushes);
            let steps: Vec<String> = moves.iter().map(|d| format!("{:?}", d)).collect();
            println!("{}", steps.join(" "));
        }
        None if report.stats.truncated => {
            println!("No solution within {} states; try a larger --max-states", max_states);
        }
        None => println!("No solution: no reachable state chains the objects"),
    }
    Ok(())
}

/// Print the current board as JSON.
pub fn export_maze(maze: &MazeModel) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", get_json_data(maze)?);
    Ok(())
}
