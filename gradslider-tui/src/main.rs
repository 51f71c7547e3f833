//! gradslider TUI — drive the gradient slider with mouse and keyboard.
//!
//! Panels:
//! 1. Slider — track, gradient fill, center mark and thumb
//! 2. Readout — value, thumb color, tracking state, continuous flag
//! 3. Events — the last notifications the slider emitted
//!
//! The slider state is restored from `<config_dir>/gradslider/state.json` on
//! start and saved there on exit.

mod app;
mod canvas;
mod input;
mod persistence;
mod theme;
mod ui;

use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gradslider_core::SliderConfig;

use crate::app::AppState;

#[derive(Parser)]
#[command(name = "gradslider-tui", about = "Interactive gradient slider in the terminal")]
struct Cli {
    /// Slider configuration (TOML). Defaults apply for missing keys.
    #[arg(long)]
    config: Option<PathBuf>,

    /// State file; defaults to <config_dir>/gradslider/state.json
    #[arg(long)]
    state: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let app_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gradslider");
    init_logging(&app_dir)?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, DisableFocusChange, LeaveAlternateScreen);
        default_hook(info);
    }));

    let base = match &cli.config {
        Some(path) => SliderConfig::load(path)
            .with_context(|| format!("loading slider config {}", path.display()))?,
        None => SliderConfig::default(),
    };
    let state_path = cli.state.unwrap_or_else(|| app_dir.join("state.json"));

    // Load persisted state
    let persisted = persistence::load(&state_path);
    let mut app = AppState::new(base, persisted.slider.as_ref())?;
    if let Some(continuous) = persisted.is_continuous {
        app.slider.set_continuous(continuous);
    }
    info!(value = app.slider.value(), "slider restored");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    if let Err(e) = persistence::save(&state_path, &persistence::extract(&app)) {
        error!(error = %e, path = %state_path.display(), "failed to save slider state");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        DisableFocusChange,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Layout: keep the slider bounds in step with the terminal size
        let size = terminal.size()?;
        app.resize(ui::slider_area(Rect::new(0, 0, size.width, size.height)));

        // 2. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            input::handle_event(app, event::read()?);
        }

        // 4. Animation frame
        app.tick();

        // 5. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Log to `<dir>/gradslider.log`; the terminal belongs to the UI.
fn init_logging(dir: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let file = File::create(dir.join("gradslider.log"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
