use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{DropOutcome, Game, GameStatus, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{debug, warn};

pub struct App {
    game: Game,
    config: GameConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Ok(App {
            game: Game::new(config.starting_player)?,
            config,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_disc();
            }
            KeyCode::Char(digit @ '1'..='7') => {
                self.selected_column = digit as usize - '1' as usize;
                self.drop_disc();
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.message = Some(match self.game.reset(self.config.starting_player) {
            Ok(()) => "New game started!".to_string(),
            Err(err) => err.to_string(),
        });
        self.selected_column = COLS / 2;
    }

    /// Drop a disc in the selected column
    fn drop_disc(&mut self) {
        let column = self.selected_column as isize;
        let result = if self.config.strict {
            self.game.drop_strict(column)
        } else {
            self.game.drop(column)
        };

        match result {
            Ok(DropOutcome::Placed { row }) => {
                debug!(row, column, "disc placed");
                self.message = match self.game.status() {
                    GameStatus::Won(player) => Some(format!("{} wins!", player.name())),
                    GameStatus::Drawn => Some("It's a draw!".to_string()),
                    GameStatus::InProgress => None,
                };
            }
            Ok(DropOutcome::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(GameError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                warn!(%err, column, "drop rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_column, &self.message);
    }
}
