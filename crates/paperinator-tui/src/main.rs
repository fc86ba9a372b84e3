use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;

use paperinator_core::ThemeMode;

mod action;
mod app;
mod config_file;
mod input;
mod logging;
mod model;
mod theme;
mod tui_event;
mod view;

use app::App;
use model::config::ConfigState;

/// Paperinator: browse summarized academic papers in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with one paper or an array of papers
    file: Option<PathBuf>,

    /// Color theme: light or dark (overrides config and PAPERINATOR_THEME)
    #[arg(long)]
    theme: Option<String>,

    /// Directory for log files (default: platform cache dir)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

/// Theme from CLI flag, then environment. `None` keeps the configured one.
fn resolve_theme(cli: Option<&str>, env: Option<&str>) -> anyhow::Result<Option<ThemeMode>> {
    match cli.or(env) {
        Some(name) => Ok(Some(name.parse()?)),
        None => Ok(None),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Some(path) = &args.file
        && !path.exists()
    {
        anyhow::bail!("File not found: {}", path.display());
    }

    let _log_guard = logging::init(args.log_dir.clone());

    // Config file, then env, then CLI
    let mut config_state = ConfigState::default();
    config_file::apply_to_config_state(&config_file::load_config(), &mut config_state);
    let env_theme = std::env::var("PAPERINATOR_THEME").ok();
    if let Some(mode) = resolve_theme(args.theme.as_deref(), env_theme.as_deref())? {
        config_state.theme = mode;
    }
    tracing::info!(theme = config_state.theme.name(), "starting");

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(config_state);
    let (load_tx, mut load_rx) = mpsc::unbounded_channel();
    app.load_tx = Some(load_tx);

    if let Some(path) = args.file {
        app.start_load(path);
    }

    // SIGINT from outside the terminal (raw mode turns Ctrl+C into a key)
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            maybe_event = load_rx.recv() => {
                if let Some(load_event) = maybe_event {
                    app.handle_load_event(load_event);
                    while let Ok(evt) = load_rx.try_recv() {
                        app.handle_load_event(evt);
                    }
                }
            }
            _ = &mut ctrl_c => {
                tracing::info!("interrupted");
                app.should_quit = true;
            }
            _ = async {
                if event::poll(tick_rate).unwrap_or(false)
                    && let Ok(evt) = event::read()
                {
                    app.update(input::map_event(&evt));
                }
            } => {}
        }

        app.update(action::Action::Tick);

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    tracing::info!("exiting");
    Ok(())
}
