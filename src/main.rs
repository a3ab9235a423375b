// Beanstalk: push the shovel, bean, fertilizer and water into a chain.
// Controls: W/A/S/D or arrow keys (immediate response). H for a hint. Q to quit.
// Tiles: '#' wall, '.' floor, '@' player, 'S'/'B'/'F'/'W' objects, 'X' goal, ' ' outside the maze.

mod cli;
mod console_interface;
mod core;
mod export;
mod logging;
mod models;
mod state_graph;
#[cfg(test)]
mod test;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use crate::console_interface::{
    cleanup_terminal, handle_input, render_game, setup_terminal, ConsoleInput,
};
use crate::core::{MazeModel, MoveResult, UserAction, DEFAULT_MAX_STATES};
use crate::logging::LogTarget;
use crate::models::GameRenderState;
use crate::state_graph::next_move;

#[derive(Parser)]
#[command(name = "beanstalk", version, about = "Push the objects together to grow the beanstalk")]
struct Cli {
    /// Write tracing output to this file (filter with RUST_LOG).
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Most distinct states the solver explores for `solve` and hints.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_STATES)]
    max_states: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, Default)]
enum Command {
    /// Play in the terminal (default).
    #[default]
    Play,
    /// Print the shortest solution of the built-in maze.
    Solve,
    /// Print the starting board as JSON.
    Export,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let log_target = match (&cli.log_file, command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Command::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(log_target)?;

    let maze = cli::builtin_maze()?;

    match command {
        Command::Play => {
            let mut terminal = setup_terminal()?;
            let result = run_interactive(maze, cli.max_states, &mut terminal);
            cleanup_terminal()?;
            result
        }
        Command::Solve => cli::solve_maze(&maze, cli.max_states),
        Command::Export => cli::export_maze(&maze),
    }
}

fn run_interactive(
    maze: MazeModel,
    max_states: usize,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut maze = maze;
    let mut hint: Option<String> = None;
    // Initial render
    render_game(terminal, &GameRenderState {
        game: &maze,
        won: false,
        error: None,
        last_change: None,
        hint: None,
    })?;

    loop {
        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::UserAction(UserAction::Hint) => {
                // the search can take a while on the full maze
                render_game(terminal, &GameRenderState {
                    game: &maze,
                    won: maze.is_won(),
                    error: None,
                    last_change: None,
                    hint: Some("Hint: searching...".to_string()),
                })?;
                hint = Some(next_move(&maze, max_states).to_string());
                render_game(terminal, &GameRenderState {
                    game: &maze,
                    won: maze.is_won(),
                    error: None,
                    last_change: None,
                    hint: hint.clone(),
                })?;
            }
            ConsoleInput::UserAction(UserAction::Move(direction)) => {
                let result = maze.attempt_move(direction);
                // a refused move leaves the maze as it was, so the last hint still holds
                if result.moved() {
                    hint = None;
                }
                let (change, error) = match result {
                    MoveResult::Moved { change, .. } => (Some(change), None),
                    MoveResult::Blocked(reason) => (None, Some(reason.to_string())),
                    MoveResult::GameOver => (None, None),
                };
                render_game(terminal, &GameRenderState {
                    game: &maze,
                    won: result.won(),
                    error,
                    last_change: change,
                    hint: hint.clone(),
                })?;

                if result.won() {
                    // Keep showing the win screen until user inputs
                    loop {
                        match handle_input()? {
                            ConsoleInput::Timeout => {}
                            _ => break,
                        }
                    }
                    break;
                }
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => {
                // No input, continue polling
            }
        }
    }

    Ok(())
}
