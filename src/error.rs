use std::path::PathBuf;

use crate::game::{COLS, ROWS};

/// A structural invariant a grid failed to satisfy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridViolation {
    #[error("invalid number of rows: found {found}, must be {}", ROWS)]
    RowCount { found: usize },

    #[error("invalid number of columns in row {row}: found {found}, must be {}", COLS)]
    ColumnCount { row: usize, found: usize },

    #[error("invalid number of reds ({red}) and yellows ({yellow}): difference must not exceed 1")]
    UnbalancedDiscs { red: usize, yellow: usize },

    #[error("floating disc at row {row}, column {col}: discs must rest at the bottom")]
    FloatingDisc { row: usize, col: usize },
}

/// A caller-supplied value that violates a precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("player must not be Empty")]
    EmptyPlayer,

    #[error("invalid column number {column} (must be in interval [0, {}))", COLS)]
    ColumnOutOfRange { column: isize },

    #[error("invalid grid: {0}")]
    Grid(#[from] GridViolation),
}

/// Errors raised by the grid and game state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error("invalid state after drop, move rolled back: {0}")]
    InvalidState(GridViolation),

    #[error("game is over, reset before dropping another disc")]
    GameOver,
}

impl GameError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GameError::InvalidArgument(_))
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, GameError::InvalidState(_))
    }
}

impl From<GridViolation> for GameError {
    fn from(violation: GridViolation) -> Self {
        GameError::InvalidArgument(ArgumentError::Grid(violation))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
