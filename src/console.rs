//! Line-oriented console front-end: reads one command per line and prints
//! the game after each one.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::{info, warn};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Cell, DropOutcome, Game, COLS};

pub const PROMPT: &str = "Command [1 .. 7, (r)estart, (q)uit, (h)elp] > ";

pub const HELP: &str = "
Available commands:
-------------------
1 .. 7 --> drop disc in column
r      --> restart game
q      --> quit game
h      --> show help
";

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop into the zero-based column.
    Drop(usize),
    Restart,
    Quit,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown command")]
pub struct UnknownCommand;

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "r" => Ok(Command::Restart),
            "q" => Ok(Command::Quit),
            "h" => Ok(Command::Help),
            other => match other.parse::<usize>() {
                Ok(n @ 1..=COLS) => Ok(Command::Drop(n - 1)),
                _ => Err(UnknownCommand),
            },
        }
    }
}

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleExit {
    /// The game finished; carries the winner (`Cell::Empty` for a draw).
    GameOver(Cell),
    Quit,
    EndOfInput,
}

pub struct Console<R, W> {
    game: Game,
    config: GameConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(config: GameConfig, input: R, output: W) -> Result<Self, GameError> {
        Ok(Console {
            game: Game::new(config.starting_player)?,
            config,
            input,
            output,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run until the game ends, the player quits, or input runs out.
    pub fn run(&mut self) -> io::Result<ConsoleExit> {
        writeln!(self.output, "Connect Four:")?;
        writeln!(self.output, "=============")?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.game)?;

        while !self.game.is_over() {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                info!("input closed");
                return Ok(ConsoleExit::EndOfInput);
            }

            // Undecodable bytes become U+FFFD and fall through to `Unknown command`
            let line = String::from_utf8_lossy(&buf);
            match line.parse::<Command>() {
                Ok(Command::Quit) => {
                    writeln!(self.output, "Ok, bye.")?;
                    return Ok(ConsoleExit::Quit);
                }
                Ok(command) => self.execute(command)?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
            writeln!(self.output, "{}", self.game)?;
        }

        let winner = self.game.winner();
        writeln!(
            self.output,
            "GAME OVER - Winner: {}",
            winner.name().to_uppercase()
        )?;
        Ok(ConsoleExit::GameOver(winner))
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Drop(col) => {
                let column = col as isize;
                let result = if self.config.strict {
                    self.game.drop_strict(column)
                } else {
                    self.game.drop(column)
                };
                match result {
                    Ok(DropOutcome::Placed { .. }) => {}
                    Ok(DropOutcome::ColumnFull) => {
                        writeln!(self.output, "Column {} is full", col + 1)?;
                    }
                    Err(err) => {
                        warn!(%err, col, "drop rejected");
                        writeln!(self.output, "Error: {err}")?;
                    }
                }
            }
            Command::Restart => {
                if let Err(err) = self.game.reset(self.config.starting_player) {
                    writeln!(self.output, "Error: {err}")?;
                }
            }
            Command::Help => write!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }
}
