use std::fmt;

use tracing::{debug, instrument, warn};

use super::cell::Cell;
use super::grid::{DropOutcome, Grid};
use crate::error::{ArgumentError, GameError};

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Cell),
    Drawn,
}

/// Turn order and terminal-state tracking over one [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    player_on_turn: Cell,
    status: GameStatus,
}

impl Game {
    /// Create a game on an empty grid with `starting` on turn.
    pub fn new(starting: Cell) -> Result<Self, GameError> {
        Self::with_grid(Grid::new(), starting)
    }

    /// Create a game over an existing grid, e.g. to resume a position.
    ///
    /// The grid is taken as is: it is not cleared and no win or draw is
    /// detected until the next drop.
    pub fn with_grid(grid: Grid, starting: Cell) -> Result<Self, GameError> {
        ensure_player(starting)?;
        Ok(Game {
            grid,
            player_on_turn: starting,
            status: GameStatus::InProgress,
        })
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.grid.cell(row, col)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player who moves next. After a win this stays the winner.
    pub fn player_on_turn(&self) -> Cell {
        self.player_on_turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The winning player, or `Cell::Empty` for a draw or a running game.
    pub fn winner(&self) -> Cell {
        match self.status {
            GameStatus::Won(player) => player,
            GameStatus::InProgress | GameStatus::Drawn => Cell::Empty,
        }
    }

    /// Clear the grid and start over with `starting` on turn.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self, starting: Cell) -> Result<(), GameError> {
        ensure_player(starting)?;
        self.grid.reset();
        self.player_on_turn = starting;
        self.status = GameStatus::InProgress;
        Ok(())
    }

    /// Drop a disc for the player on turn.
    ///
    /// A full column is not an error: the game is left unchanged and
    /// [`DropOutcome::ColumnFull`] is returned. Drops after the game is over
    /// are not refused here; use [`Game::drop_strict`] for that.
    #[instrument(level = "debug", skip(self), fields(player = %self.player_on_turn))]
    pub fn drop(&mut self, column: isize) -> Result<DropOutcome, GameError> {
        let player = self.player_on_turn;
        let outcome = self.grid.drop(player, column)?;
        if !outcome.is_placed() {
            return Ok(outcome);
        }

        if self.grid.has_four_in_a_row(player) {
            debug!(%player, "four in a row");
            self.status = GameStatus::Won(player);
        } else if self.grid.is_full() {
            debug!("grid full, game drawn");
            self.status = GameStatus::Drawn;
        } else {
            self.player_on_turn = player.other();
        }

        Ok(outcome)
    }

    /// Like [`Game::drop`], but fails with [`GameError::GameOver`] once the
    /// game has been won or drawn.
    pub fn drop_strict(&mut self, column: isize) -> Result<DropOutcome, GameError> {
        if self.is_over() {
            warn!(column, status = ?self.status, "drop refused, game is over");
            return Err(GameError::GameOver);
        }
        self.drop(column)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player: {}", self.player_on_turn.name().to_uppercase())?;
        writeln!(f)?;
        write!(f, "{}", self.grid)
    }
}

fn ensure_player(player: Cell) -> Result<(), GameError> {
    if player.is_player() {
        Ok(())
    } else {
        Err(ArgumentError::EmptyPlayer.into())
    }
}
