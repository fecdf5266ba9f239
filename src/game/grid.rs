use std::fmt;

use tracing::{debug, instrument, warn};

use super::cell::Cell;
use crate::error::{ArgumentError, GameError, GridViolation};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WIN_COUNT: usize = 4;

/// Line directions as (row offset, column offset): vertical, horizontal,
/// descending diagonal, ascending diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Result of dropping a disc into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The disc landed in `row` of the chosen column.
    Placed { row: usize },
    /// The column had no empty cell; nothing changed.
    ColumnFull,
}

impl DropOutcome {
    pub fn is_placed(self) -> bool {
        matches!(self, DropOutcome::Placed { .. })
    }
}

/// The 6x7 playing grid. Row 0 is the top, row 5 is the bottom.
///
/// Every grid handed out by this type satisfies the structural invariants
/// checked by [`validate_rows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Cell; COLS]; ROWS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a grid from a caller-supplied matrix, rejecting any matrix that
    /// breaks a structural invariant.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, GameError> {
        validate_rows(rows)?;

        let mut grid = Grid::new();
        for (target, source) in grid.cells.iter_mut().zip(rows) {
            target.copy_from_slice(source.as_ref());
        }
        Ok(grid)
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Number of discs `player` has on the grid
    pub fn count(&self, player: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell == player).count()
    }

    /// Check if a column is full. Columns outside the grid count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Check if the grid is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Drop a disc for `player` into `column`.
    ///
    /// The disc lands in the lowest empty row. A full column is reported as
    /// [`DropOutcome::ColumnFull`] and leaves the grid untouched. A placement
    /// that leaves the grid structurally invalid (for example the same player
    /// dropping twice in a row) is rolled back and reported as
    /// [`GameError::InvalidState`].
    #[instrument(level = "debug", skip(self))]
    pub fn drop(&mut self, player: Cell, column: isize) -> Result<DropOutcome, GameError> {
        if !player.is_player() {
            return Err(ArgumentError::EmptyPlayer.into());
        }
        let col = usize::try_from(column)
            .ok()
            .filter(|&col| col < COLS)
            .ok_or(ArgumentError::ColumnOutOfRange { column })?;

        let Some(row) = (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty) else {
            debug!(col, "column full");
            return Ok(DropOutcome::ColumnFull);
        };

        self.cells[row][col] = player;
        if let Err(violation) = self.validate() {
            self.cells[row][col] = Cell::Empty;
            warn!(%violation, row, col, "drop left the grid invalid, rolled back");
            return Err(GameError::InvalidState(violation));
        }

        Ok(DropOutcome::Placed { row })
    }

    /// Check whether `player` owns four consecutive cells along any line.
    ///
    /// Every cell holding `player` is tried as the origin of a walk in each
    /// direction; the grid is small enough that no incremental state is kept.
    pub fn has_four_in_a_row(&self, player: Cell) -> bool {
        if !player.is_player() {
            return false;
        }

        (0..ROWS)
            .flat_map(|row| (0..COLS).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col] == player)
            .any(|(row, col)| {
                DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.run_length(player, row, col, dr, dc) >= WIN_COUNT)
            })
    }

    /// Re-check the structural invariants of this grid.
    pub fn validate(&self) -> Result<(), GridViolation> {
        validate_rows(&self.cells)
    }

    /// Count consecutive `player` cells starting at (row, col) and stepping by
    /// (dr, dc) until leaving the grid or hitting another value.
    fn run_length(&self, player: Cell, row: usize, col: usize, dr: isize, dc: isize) -> usize {
        let mut len = 0;
        let (mut r, mut c) = (row as isize, col as isize);
        while self.get_signed(r, c) == Some(player) {
            len += 1;
            r += dr;
            c += dc;
        }
        len
    }

    fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cells.get(row)?.get(col).copied()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            f.write_str("|")?;
            for cell in row {
                write!(f, " {} ", cell.glyph())?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

/// Check a matrix against the grid invariants and return the first violation:
/// exact dimensions, red/yellow counts differing by at most one, and no empty
/// cell below a disc in any column.
pub fn validate_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<(), GridViolation> {
    if rows.len() != ROWS {
        return Err(GridViolation::RowCount { found: rows.len() });
    }
    for (row, cells) in rows.iter().enumerate() {
        let found = cells.as_ref().len();
        if found != COLS {
            return Err(GridViolation::ColumnCount { row, found });
        }
    }

    let (mut red, mut yellow) = (0usize, 0usize);
    for cell in rows.iter().flat_map(|cells| cells.as_ref()) {
        match cell {
            Cell::Red => red += 1,
            Cell::Yellow => yellow += 1,
            Cell::Empty => {}
        }
    }
    if red.abs_diff(yellow) > 1 {
        return Err(GridViolation::UnbalancedDiscs { red, yellow });
    }

    for col in 0..COLS {
        let mut found_empty = false;
        for row in (0..ROWS).rev() {
            if rows[row].as_ref()[col] == Cell::Empty {
                found_empty = true;
            } else if found_empty {
                return Err(GridViolation::FloatingDisc { row, col });
            }
        }
    }

    Ok(())
}
