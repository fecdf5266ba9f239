//! Terminal UI: an interactive Connect Four board built on ratatui.

mod app;
mod game_view;

pub use app::App;
