//! Core Connect Four rules: the grid with its structural invariants, and the
//! game state machine that sequences turns over it.

mod cell;
mod grid;
mod state;

pub use cell::{Cell, ParseCellError};
pub use grid::{validate_rows, DropOutcome, Grid, COLS, ROWS, WIN_COUNT};
pub use state::{Game, GameStatus};
