//! Cafe Progress - Entry Point
//!
//! Initializes the terminal, loads config and preferences, and runs the
//! demo loop.

use std::fs::OpenOptions;
use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use cafe_progress::storage::FileStore;
use cafe_progress::ui::App;
use cafe_progress::AppConfig;

/// Target frames per second for the UI loop
const TARGET_FPS: u64 = 30;
const FRAME_TIME: Duration = Duration::from_millis(1000 / TARGET_FPS);

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting Cafe Progress v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    let store = match &config.preferences_path {
        Some(path) => FileStore::open(path),
        None => FileStore::open_default(),
    };
    let mut app = App::new(config, store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Cafe Progress shut down cleanly");
    result
}

/// Log to a file so output does not interfere with the TUI
fn init_logging() {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("cafe-progress.log")
    {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    builder.init();
}

/// Main UI loop
fn run_loop<S: cafe_progress::ThemeStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        if event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not releases
                if key.kind == KeyEventKind::Press && app.handle_input(key)? {
                    break;
                }
            }
        }

        terminal.draw(|frame| app.render(frame))?;

        let frame_time = frame_start.elapsed();
        if frame_time < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - frame_time);
        }
    }

    Ok(())
}
