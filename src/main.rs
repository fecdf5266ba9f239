use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use connect_four::config::{AppConfig, ConfigSource, GameConfig};
use connect_four::console::Console;
use connect_four::game::Cell;
use connect_four::telemetry::{self, LogTarget};
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Use the line-oriented console instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Override the starting player (red or yellow)
    #[arg(long)]
    starting_player: Option<Cell>,

    /// Forward drops made after the game is over instead of refusing them
    #[arg(long)]
    permissive: bool,

    /// Print a configuration file with all default values and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let (mut app_config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(player) = cli.starting_player {
        app_config.game.starting_player = player;
    }
    if cli.permissive {
        app_config.game.strict = false;
    }
    app_config.validate().context("validating configuration")?;

    let target = if cli.plain {
        LogTarget::Stderr
    } else {
        LogTarget::FileOnly
    };
    telemetry::init(&app_config.log, target).context("initializing logging")?;
    if source == ConfigSource::Defaults {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }
    info!(
        starting_player = %app_config.game.starting_player,
        strict = app_config.game.strict,
        plain = cli.plain,
        "starting connect four"
    );

    if cli.plain {
        run_console(app_config.game)
    } else {
        run_tui(app_config.game)
    }
}

fn run_console(config: GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(config, stdin.lock(), io::stdout())?;
    let exit = console.run().context("console I/O failed")?;
    info!(?exit, "console session finished");
    Ok(())
}

fn run_tui(config: GameConfig) -> Result<()> {
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}
