//! # Connect Four
//!
//! Rules engine for Connect Four: a 6x7 grid with gravity, four-in-a-row
//! detection and turn management, plus two thin front-ends that drive it.
//!
//! ## Modules
//!
//! - [`game`]: Core rules: cell values, the validated grid, game state machine
//! - [`console`]: Line-oriented command loop
//! - [`ui`]: Terminal UI built with Ratatui
//! - [`config`]: TOML configuration loading and validation
//! - [`telemetry`]: Tracing subscriber setup
//! - [`error`]: Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod telemetry;
pub mod ui;
