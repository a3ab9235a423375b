use crate::core::{Direction, MazeModel, UserAction};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const LEGEND: &str = "@ you  S shovel  B bean  F fertilizer  W water  X goal";

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());

        // Game area
        let game_text = render_maze_to_string(state.game);
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title("Beanstalk"))
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let legend_paragraph = Paragraph::new(LEGEND)
            .block(Block::default().borders(Borders::ALL).title("Legend"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(legend_paragraph, chunks[1]);

        // Instructions
        let instructions = if state.won {
            "You grew the beanstalk! Press any key to quit."
        } else {
            "Controls: WASD or Arrow keys to move, H for a hint, Q to quit"
        };

        let mut instructions = instructions.to_string();
        if let Some(err) = &state.error {
            instructions = format!("{} | {}", instructions, err);
        }
        if let Some(change_type) = &state.last_change {
            instructions = format!("{} | Last: {:?}", instructions, change_type);
        }
        if let Some(hint) = &state.hint {
            instructions = format!("{} | {}", instructions, hint);
        }

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub fn render_maze_to_string(maze: &MazeModel) -> String {
    let mut result = String::new();
    for i in 0..maze.rows() {
        for j in 0..maze.cols() {
            if let Some(c) = maze.get_cell(i, j) {
                result.push(c.glyph());
            }
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                KeyCode::Char('h') | KeyCode::Char('H') => ConsoleInput::UserAction(UserAction::Hint),
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::parse_level;

    #[test]
    fn test_render_uses_glyphs() {
        let maze = parse_level("x#-0!2345!---7").expect("parses");
        assert_eq!(render_maze_to_string(&maze), " #.@\nSBFW\n...X\n");
    }
}
