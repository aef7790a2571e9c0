use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{execute, terminal};
use insight_core::{update, AppState, Msg};
use insight_engine::{LoaderEvent, LoaderHandle};
use insight_logging::insight_info;

use super::{config, effects, logging, ui};

/// Input-poll timeout; doubles as the render/animation tick.
const TICK_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut settings = config::load_settings(&cwd);
    // A single positional argument overrides the configured item source.
    if let Some(path) = std::env::args().nth(1) {
        settings.items_path = PathBuf::from(path);
    }
    insight_info!("starting dashboard, item source {:?}", settings.items_path);

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    // The loader runs its first pass immediately; its DataReady message is
    // the readiness signal for the initial render.
    let loader = LoaderHandle::new(settings.items_path.clone());
    let mut state = AppState::new();
    let mut needs_draw = true;

    loop {
        if needs_draw {
            let view = state.view();
            terminal.draw(|frame| ui::render::render(frame, &view))?;
            needs_draw = false;
        }

        // Drain loader events first so a finished pass lands this frame.
        while let Some(LoaderEvent::DataReady(result)) = loader.try_recv() {
            let msg = Msg::DataReady(effects::map_outcome(result));
            state = dispatch(state, msg, &loader, &mut needs_draw);
        }

        if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char('r') => {
                        state = dispatch(state, Msg::RebuildClicked, &loader, &mut needs_draw);
                    }
                    _ => {}
                },
                Event::Resize(_, _) => needs_draw = true,
                _ => {}
            }
        } else {
            state = dispatch(state, Msg::Tick, &loader, &mut needs_draw);
        }
    }

    terminal::disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Runs a message through the pure core, executes any effects, and folds the
/// dirty flag into the redraw decision.
fn dispatch(state: AppState, msg: Msg, loader: &LoaderHandle, needs_draw: &mut bool) -> AppState {
    let (mut state, effects) = update(state, msg);
    effects::run_effects(loader, effects);
    if state.consume_dirty() {
        *needs_draw = true;
    }
    state
}
